//! Animatable vector path
//!
//! A [`RichPath`] is the target of every animation: a named path with styling
//! and transform properties that animators read and write by
//! [`PathProperty`]. Geometry is not stored; width and height are the path's
//! current rendered size and `original_width`/`original_height` the size it
//! was loaded with.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::color::Argb;
use crate::error::PathError;
use crate::property::{PathProperty, PropertyValue};

/// Callback notified after a path property changed during animation
pub type PathUpdatedListener = Arc<dyn Fn() + Send + Sync>;

/// A path shared between the caller and the animators driving it
pub type SharedPath = Arc<Mutex<RichPath>>;

/// An animatable vector path
#[derive(Clone)]
pub struct RichPath {
    name: String,
    fill_color: Argb,
    stroke_color: Argb,
    fill_alpha: f32,
    stroke_alpha: f32,
    stroke_width: f32,
    width: f32,
    height: f32,
    original_width: f32,
    original_height: f32,
    rotation: f32,
    translation_x: f32,
    translation_y: f32,
    trim_path_start: f32,
    trim_path_end: f32,
    trim_path_offset: f32,
    on_path_updated: Option<PathUpdatedListener>,
}

impl RichPath {
    /// Create a path whose current and original size are `width` x `height`
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            fill_color: Argb::TRANSPARENT,
            stroke_color: Argb::TRANSPARENT,
            fill_alpha: 1.0,
            stroke_alpha: 1.0,
            stroke_width: 0.0,
            width,
            height,
            original_width: width,
            original_height: height,
            rotation: 0.0,
            translation_x: 0.0,
            translation_y: 0.0,
            trim_path_start: 0.0,
            trim_path_end: 1.0,
            trim_path_offset: 0.0,
            on_path_updated: None,
        }
    }

    /// Wrap the path for sharing with animators
    pub fn shared(self) -> SharedPath {
        Arc::new(Mutex::new(self))
    }

    pub fn with_fill_color(mut self, color: Argb) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_stroke_color(mut self, color: Argb) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = alpha;
        self
    }

    pub fn with_stroke_alpha(mut self, alpha: f32) -> Self {
        self.stroke_alpha = alpha;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fill_color(&self) -> Argb {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Argb) {
        self.fill_color = color;
    }

    pub fn stroke_color(&self) -> Argb {
        self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Argb) {
        self.stroke_color = color;
    }

    pub fn fill_alpha(&self) -> f32 {
        self.fill_alpha
    }

    pub fn set_fill_alpha(&mut self, alpha: f32) {
        self.fill_alpha = alpha;
    }

    pub fn stroke_alpha(&self) -> f32 {
        self.stroke_alpha
    }

    pub fn set_stroke_alpha(&mut self, alpha: f32) {
        self.stroke_alpha = alpha;
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    /// Width the path was created or loaded with
    pub fn original_width(&self) -> f32 {
        self.original_width
    }

    /// Height the path was created or loaded with
    pub fn original_height(&self) -> f32 {
        self.original_height
    }

    /// Current horizontal scale relative to the original width
    pub fn scale_x(&self) -> f32 {
        if self.original_width == 0.0 {
            return 1.0;
        }
        self.width / self.original_width
    }

    /// Current vertical scale relative to the original height
    pub fn scale_y(&self) -> f32 {
        if self.original_height == 0.0 {
            return 1.0;
        }
        self.height / self.original_height
    }

    /// Rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn translation_x(&self) -> f32 {
        self.translation_x
    }

    pub fn set_translation_x(&mut self, x: f32) {
        self.translation_x = x;
    }

    pub fn translation_y(&self) -> f32 {
        self.translation_y
    }

    pub fn set_translation_y(&mut self, y: f32) {
        self.translation_y = y;
    }

    pub fn trim_path_start(&self) -> f32 {
        self.trim_path_start
    }

    pub fn set_trim_path_start(&mut self, start: f32) {
        self.trim_path_start = start;
    }

    pub fn trim_path_end(&self) -> f32 {
        self.trim_path_end
    }

    pub fn set_trim_path_end(&mut self, end: f32) {
        self.trim_path_end = end;
    }

    pub fn trim_path_offset(&self) -> f32 {
        self.trim_path_offset
    }

    pub fn set_trim_path_offset(&mut self, offset: f32) {
        self.trim_path_offset = offset;
    }

    /// Read a property by key
    pub fn get(&self, property: PathProperty) -> PropertyValue {
        match property {
            PathProperty::FillColor => PropertyValue::Color(self.fill_color),
            PathProperty::StrokeColor => PropertyValue::Color(self.stroke_color),
            PathProperty::FillAlpha => PropertyValue::Float(self.fill_alpha),
            PathProperty::StrokeAlpha => PropertyValue::Float(self.stroke_alpha),
            PathProperty::StrokeWidth => PropertyValue::Float(self.stroke_width),
            PathProperty::Width => PropertyValue::Float(self.width),
            PathProperty::Height => PropertyValue::Float(self.height),
            PathProperty::Rotation => PropertyValue::Float(self.rotation),
            PathProperty::TranslationX => PropertyValue::Float(self.translation_x),
            PathProperty::TranslationY => PropertyValue::Float(self.translation_y),
            PathProperty::TrimPathStart => PropertyValue::Float(self.trim_path_start),
            PathProperty::TrimPathEnd => PropertyValue::Float(self.trim_path_end),
            PathProperty::TrimPathOffset => PropertyValue::Float(self.trim_path_offset),
        }
    }

    /// Write a property by key
    ///
    /// Fails if the value kind does not match the property's kind.
    pub fn set(&mut self, property: PathProperty, value: PropertyValue) -> Result<(), PathError> {
        match (property, value) {
            (PathProperty::FillColor, PropertyValue::Color(c)) => self.fill_color = c,
            (PathProperty::StrokeColor, PropertyValue::Color(c)) => self.stroke_color = c,
            (PathProperty::FillAlpha, PropertyValue::Float(v)) => self.fill_alpha = v,
            (PathProperty::StrokeAlpha, PropertyValue::Float(v)) => self.stroke_alpha = v,
            (PathProperty::StrokeWidth, PropertyValue::Float(v)) => self.stroke_width = v,
            (PathProperty::Width, PropertyValue::Float(v)) => self.width = v,
            (PathProperty::Height, PropertyValue::Float(v)) => self.height = v,
            (PathProperty::Rotation, PropertyValue::Float(v)) => self.rotation = v,
            (PathProperty::TranslationX, PropertyValue::Float(v)) => self.translation_x = v,
            (PathProperty::TranslationY, PropertyValue::Float(v)) => self.translation_y = v,
            (PathProperty::TrimPathStart, PropertyValue::Float(v)) => self.trim_path_start = v,
            (PathProperty::TrimPathEnd, PropertyValue::Float(v)) => self.trim_path_end = v,
            (PathProperty::TrimPathOffset, PropertyValue::Float(v)) => self.trim_path_offset = v,
            (property, _) => {
                return Err(PathError::TypeMismatch {
                    property,
                    expected: property.kind(),
                })
            }
        }
        Ok(())
    }

    /// Register the callback notified after animated changes
    pub fn set_on_path_updated<F>(&mut self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_path_updated = Some(Arc::new(listener));
    }

    pub fn clear_on_path_updated(&mut self) {
        self.on_path_updated = None;
    }

    /// The registered update callback, cloned so it can run without the path locked
    pub fn on_path_updated(&self) -> Option<PathUpdatedListener> {
        self.on_path_updated.clone()
    }
}

impl fmt::Debug for RichPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichPath")
            .field("name", &self.name)
            .field("fill_color", &self.fill_color)
            .field("stroke_color", &self.stroke_color)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("original_width", &self.original_width)
            .field("original_height", &self.original_height)
            .field("rotation", &self.rotation)
            .field("has_listener", &self.on_path_updated.is_some())
            .finish_non_exhaustive()
    }
}
