//! Fluent property animations for RichPath vector paths
//!
//! Build animations for one or more [`RichPath`]s with an
//! [`AnimationBuilder`], chain builders that play together or one after
//! another, and drive the resulting [`PathAnimator`] from your frame loop.
//!
//! # Example
//!
//! ```ignore
//! use richpath_animator::{animate, Easing, RichPath, INFINITE, RepeatMode};
//!
//! let heart = RichPath::new("heart", 100.0, 90.0).shared();
//!
//! let animator = animate([heart.clone()])
//!     .scale(&[1.0, 1.15, 1.0])
//!     .fill_color(&[0xFFE53935, 0xFFFF8A80])
//!     .duration(800)
//!     .interpolator(Easing::Linear)
//!     .repeat_mode(RepeatMode::Reverse)
//!     .repeat_count(INFINITE)
//!     .start()?;
//!
//! loop {
//!     animator.tick(16.0);
//! }
//! ```
//!
//! # Modules
//!
//! - [`easing`]: easing curves
//! - [`values`]: keyframe storage and interpolation
//! - [`animator`]: single-property animators
//! - [`builder`]: the fluent builder
//! - [`path_animator`]: the sequencer playing chained builders
//! - [`config`]: timing defaults, loadable from TOML

pub mod animator;
pub mod builder;
pub mod config;
pub mod easing;
pub mod error;
pub mod listener;
pub mod path_animator;
pub mod values;

pub use animator::{AnimationRequest, AnimationTarget, AnimatorState, PropertyAnimator, TickOutcome};
pub use builder::AnimationBuilder;
pub use config::{AnimationConfig, RepeatMode, DEFAULT_DURATION_MS, DEFAULT_START_DELAY_MS, INFINITE};
pub use easing::Easing;
pub use error::AnimationError;
pub use listener::{
    AnimationListener, AnimationUpdateListener, CallbackListener, SharedAnimationListener,
    SharedUpdateListener,
};
pub use path_animator::{animate, BuilderId, PathAnimator, SetOverrides};
pub use values::{Interpolate, Keyframes};

pub use richpath_core::{Argb, PathDocument, PathProperty, PropertyValue, RichPath, SharedPath};
