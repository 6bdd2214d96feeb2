//! Animatable path properties
//!
//! Every property a [`RichPath`](crate::RichPath) exposes for animation, with
//! the camelCase names callers use to address them.

use std::fmt;
use std::str::FromStr;

use crate::color::Argb;
use crate::error::PathError;

/// Kind of value a property holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    /// A scalar interpolated linearly
    Float,
    /// A packed ARGB color interpolated per channel
    Color,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Float => f.write_str("float"),
            PropertyKind::Color => f.write_str("color"),
        }
    }
}

/// A property value read from or written to a path
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    Float(f32),
    Color(Argb),
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Float(_) => PropertyKind::Float,
            PropertyValue::Color(_) => PropertyKind::Color,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            PropertyValue::Float(v) => Some(*v),
            PropertyValue::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<Argb> {
        match self {
            PropertyValue::Color(c) => Some(*c),
            PropertyValue::Float(_) => None,
        }
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<Argb> for PropertyValue {
    fn from(value: Argb) -> Self {
        PropertyValue::Color(value)
    }
}

/// Animatable path property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathProperty {
    FillColor,
    StrokeColor,
    FillAlpha,
    StrokeAlpha,
    StrokeWidth,
    Width,
    Height,
    Rotation,
    TranslationX,
    TranslationY,
    TrimPathStart,
    TrimPathEnd,
    TrimPathOffset,
}

impl PathProperty {
    pub const ALL: [PathProperty; 13] = [
        PathProperty::FillColor,
        PathProperty::StrokeColor,
        PathProperty::FillAlpha,
        PathProperty::StrokeAlpha,
        PathProperty::StrokeWidth,
        PathProperty::Width,
        PathProperty::Height,
        PathProperty::Rotation,
        PathProperty::TranslationX,
        PathProperty::TranslationY,
        PathProperty::TrimPathStart,
        PathProperty::TrimPathEnd,
        PathProperty::TrimPathOffset,
    ];

    /// The name callers use to address this property
    pub const fn name(self) -> &'static str {
        match self {
            PathProperty::FillColor => "fillColor",
            PathProperty::StrokeColor => "strokeColor",
            PathProperty::FillAlpha => "fillAlpha",
            PathProperty::StrokeAlpha => "strokeAlpha",
            PathProperty::StrokeWidth => "strokeWidth",
            PathProperty::Width => "width",
            PathProperty::Height => "height",
            PathProperty::Rotation => "rotation",
            PathProperty::TranslationX => "translationX",
            PathProperty::TranslationY => "translationY",
            PathProperty::TrimPathStart => "trimPathStart",
            PathProperty::TrimPathEnd => "trimPathEnd",
            PathProperty::TrimPathOffset => "trimPathOffset",
        }
    }

    pub const fn kind(self) -> PropertyKind {
        match self {
            PathProperty::FillColor | PathProperty::StrokeColor => PropertyKind::Color,
            _ => PropertyKind::Float,
        }
    }
}

impl fmt::Display for PathProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PathProperty {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathProperty::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| PathError::UnknownProperty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_name() {
        for property in PathProperty::ALL {
            assert_eq!(property.name().parse::<PathProperty>().unwrap(), property);
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "opacity".parse::<PathProperty>().unwrap_err();
        assert!(matches!(err, PathError::UnknownProperty(name) if name == "opacity"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("FillColor".parse::<PathProperty>().is_err());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(PathProperty::FillColor.kind(), PropertyKind::Color);
        assert_eq!(PathProperty::StrokeColor.kind(), PropertyKind::Color);
        assert_eq!(PathProperty::TrimPathEnd.kind(), PropertyKind::Float);
        assert_eq!(PropertyValue::from(Argb::RED).kind(), PropertyKind::Color);
    }
}
