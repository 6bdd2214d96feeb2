//! Easing curves
//!
//! Interpolators that map linear time progress to eased progress. Curves may
//! leave the 0..1 range (anticipate, overshoot) but always start at 0 and end
//! at 1.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// An interpolation curve applied to animation progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant rate of change
    Linear,
    /// Starts and ends slowly, faster through the middle (the default)
    #[default]
    AccelerateDecelerate,
    /// Starts slowly and speeds up; the factor sharpens the curve
    Accelerate(f32),
    /// Starts quickly and slows down; the factor sharpens the curve
    Decelerate(f32),
    /// Pulls back before moving forward, by the given tension
    Anticipate(f32),
    /// Flings past the end and settles back, by the given tension
    Overshoot(f32),
    /// Anticipate at the start, overshoot at the end
    AnticipateOvershoot(f32),
    /// Bounces at the end
    Bounce,
    /// CSS-style cubic bezier with control points (x1, y1) and (x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub const fn accelerate() -> Self {
        Easing::Accelerate(1.0)
    }

    pub const fn decelerate() -> Self {
        Easing::Decelerate(1.0)
    }

    pub const fn anticipate() -> Self {
        Easing::Anticipate(2.0)
    }

    pub const fn overshoot() -> Self {
        Easing::Overshoot(2.0)
    }

    pub const fn anticipate_overshoot() -> Self {
        Easing::AnticipateOvershoot(2.0)
    }

    /// Material "fast out, slow in" curve
    pub const fn fast_out_slow_in() -> Self {
        Easing::CubicBezier(0.4, 0.0, 0.2, 1.0)
    }

    /// Map linear progress `t` (0.0 to 1.0) to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => (((t + 1.0) * PI).cos() / 2.0) + 0.5,
            Easing::Accelerate(factor) => {
                if factor == 1.0 {
                    t * t
                } else {
                    t.powf(2.0 * factor)
                }
            }
            Easing::Decelerate(factor) => {
                if factor == 1.0 {
                    1.0 - (1.0 - t) * (1.0 - t)
                } else {
                    1.0 - (1.0 - t).powf(2.0 * factor)
                }
            }
            Easing::Anticipate(tension) => anticipate(t, tension),
            Easing::Overshoot(tension) => overshoot(t - 1.0, tension) + 1.0,
            Easing::AnticipateOvershoot(tension) => {
                let tension = tension * 1.5;
                if t < 0.5 {
                    0.5 * anticipate(t * 2.0, tension)
                } else {
                    0.5 * (overshoot(t * 2.0 - 2.0, tension) + 2.0)
                }
            }
            Easing::Bounce => bounce_out(t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

fn anticipate(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t - tension)
}

fn overshoot(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t + tension)
}

fn bounce(t: f32) -> f32 {
    t * t * 8.0
}

fn bounce_out(t: f32) -> f32 {
    let t = t * 1.1226;
    if t < 0.3535 {
        bounce(t)
    } else if t < 0.7408 {
        bounce(t - 0.54719) + 0.7
    } else if t < 0.9644 {
        bounce(t - 0.8526) + 0.9
    } else {
        bounce(t - 1.0435) + 0.95
    }
}

fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    let sample = |a1: f32, a2: f32, s: f32| -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    };
    let slope = |a1: f32, a2: f32, s: f32| -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    };

    // Newton-Raphson on x(s) = t, falling back to bisection on flat slopes
    let mut s = t;
    for _ in 0..8 {
        let x = sample(x1, x2, s) - t;
        if x.abs() < 1e-6 {
            return sample(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= x / d;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = t;
    for _ in 0..32 {
        let x = sample(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    sample(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::AccelerateDecelerate,
        Easing::Accelerate(1.0),
        Easing::Decelerate(2.0),
        Easing::Anticipate(2.0),
        Easing::Overshoot(2.0),
        Easing::AnticipateOvershoot(2.0),
        Easing::Bounce,
        Easing::CubicBezier(0.4, 0.0, 0.2, 1.0),
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-3, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-2, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_linear_and_default_midpoint() {
        assert!((Easing::Linear.apply(0.25) - 0.25).abs() < 1e-6);
        assert!((Easing::default().apply(0.5) - 0.5).abs() < 1e-5);
        assert!(Easing::default().apply(0.25) < 0.25);
    }

    #[test]
    fn test_accelerate_and_decelerate() {
        assert!((Easing::accelerate().apply(0.5) - 0.25).abs() < 1e-6);
        assert!((Easing::decelerate().apply(0.5) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_anticipate_dips_below_zero() {
        assert!(Easing::anticipate().apply(0.2) < 0.0);
    }

    #[test]
    fn test_overshoot_exceeds_one() {
        assert!(Easing::overshoot().apply(0.8) > 1.0);
    }

    #[test]
    fn test_cubic_bezier_linear_control_points() {
        let easing = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for t in [0.1, 0.3, 0.5, 0.9] {
            assert!((easing.apply(t) - t).abs() < 1e-3);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
