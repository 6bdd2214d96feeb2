//! Animatable value types
//!
//! Scalars interpolate linearly; colors interpolate per ARGB channel.
//! [`Keyframes`] spaces its values evenly over the animation's progress.

use richpath_core::{Argb, PropertyValue};
use smallvec::SmallVec;

/// Trait for values that can be interpolated between keyframes
pub trait Interpolate: Copy {
    /// Interpolate between self and other by factor t (0.0 to 1.0, may overshoot)
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

// ============================================================================
// Argb Implementation
// ============================================================================

impl Interpolate for Argb {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Argb::lerp(*self, *other, t)
    }
}

/// Sample evenly spaced values at progress `fraction`
fn sample_evenly<T: Interpolate>(values: &[T], fraction: f32) -> Option<T> {
    match values {
        [] => None,
        [only] => Some(*only),
        _ => {
            let segments = (values.len() - 1) as f32;
            let scaled = fraction * segments;
            // Overshooting easings extrapolate from the first or last segment
            let index = (scaled.floor().max(0.0) as usize).min(values.len() - 2);
            let local = scaled - index as f32;
            Some(values[index].lerp(&values[index + 1], local))
        }
    }
}

/// Keyframe values for one animated property
#[derive(Clone, Debug, PartialEq)]
pub enum Keyframes {
    Float(SmallVec<[f32; 4]>),
    Color(SmallVec<[Argb; 4]>),
}

impl Keyframes {
    pub fn floats(values: &[f32]) -> Self {
        Keyframes::Float(SmallVec::from_slice(values))
    }

    pub fn colors(values: &[Argb]) -> Self {
        Keyframes::Color(SmallVec::from_slice(values))
    }

    pub fn len(&self) -> usize {
        match self {
            Keyframes::Float(v) => v.len(),
            Keyframes::Color(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Prepend a start value when only an end value was given
    ///
    /// A single keyframe animates from the target's current value, which is
    /// only known once the animation starts. Values of the wrong kind are
    /// ignored.
    pub fn with_start(&self, start: PropertyValue) -> Self {
        match (self, start) {
            (Keyframes::Float(v), PropertyValue::Float(s)) if v.len() == 1 => {
                Keyframes::Float(SmallVec::from_slice(&[s, v[0]]))
            }
            (Keyframes::Color(v), PropertyValue::Color(s)) if v.len() == 1 => {
                Keyframes::Color(SmallVec::from_slice(&[s, v[0]]))
            }
            _ => self.clone(),
        }
    }

    /// Value at eased progress `fraction`
    pub fn sample(&self, fraction: f32) -> Option<PropertyValue> {
        match self {
            Keyframes::Float(v) => sample_evenly(v, fraction).map(PropertyValue::Float),
            Keyframes::Color(v) => sample_evenly(v, fraction).map(PropertyValue::Color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_color_interpolation_is_per_channel() {
        let mid = Interpolate::lerp(&Argb::RED, &Argb::GREEN, 0.5);
        assert_eq!(mid, Argb::from_channels(0xFF, 128, 128, 0));
    }

    #[test]
    fn test_sample_multiple_keyframes() {
        let frames = Keyframes::floats(&[0.0, 100.0, 50.0]);
        assert_eq!(frames.sample(0.0), Some(PropertyValue::Float(0.0)));
        assert_eq!(frames.sample(0.25), Some(PropertyValue::Float(50.0)));
        assert_eq!(frames.sample(0.5), Some(PropertyValue::Float(100.0)));
        assert_eq!(frames.sample(0.75), Some(PropertyValue::Float(75.0)));
        assert_eq!(frames.sample(1.0), Some(PropertyValue::Float(50.0)));
    }

    #[test]
    fn test_sample_overshoot_extrapolates() {
        let frames = Keyframes::floats(&[0.0, 10.0]);
        let v = frames.sample(1.1).unwrap().as_float().unwrap();
        assert!((v - 11.0).abs() < 1e-4);
        let v = frames.sample(-0.1).unwrap().as_float().unwrap();
        assert!((v + 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_single_keyframe_takes_start_value() {
        let frames = Keyframes::floats(&[200.0]).with_start(PropertyValue::Float(100.0));
        assert_eq!(frames, Keyframes::floats(&[100.0, 200.0]));

        let frames = Keyframes::floats(&[1.0, 2.0]).with_start(PropertyValue::Float(9.0));
        assert_eq!(frames, Keyframes::floats(&[1.0, 2.0]));
    }

    #[test]
    fn test_empty_keyframes() {
        let frames = Keyframes::floats(&[]);
        assert!(frames.is_empty());
        assert_eq!(frames.sample(0.5), None);
    }
}
