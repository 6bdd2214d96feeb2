//! Animation callbacks
//!
//! [`AnimationListener`] receives aggregate lifecycle events from a
//! [`PathAnimator`](crate::PathAnimator). [`AnimationUpdateListener`] receives
//! each frame value of a custom animation.

use std::sync::Arc;

use richpath_core::RichPath;

/// Lifecycle events for a whole sequence of animations
///
/// All methods default to doing nothing. Listeners run without the
/// sequencer locked and may call back into it.
pub trait AnimationListener: Send + Sync {
    /// Playback started
    fn on_start(&self) {}

    /// The last group finished, or playback was cancelled or ended early
    fn on_end(&self) {}

    /// Playback was cancelled before finishing
    fn on_cancel(&self) {}

    /// At least one running animation began a new iteration this frame
    fn on_repeat(&self) {}
}

/// Shared listener handle
pub type SharedAnimationListener = Arc<dyn AnimationListener>;

/// Receives each interpolated value of a custom animation
///
/// Called with the target path locked. Apply the value to the path here; the
/// path's updated listener is notified afterwards.
pub trait AnimationUpdateListener: Send + Sync {
    fn update(&self, path: &mut RichPath, value: f32);
}

impl<F> AnimationUpdateListener for F
where
    F: Fn(&mut RichPath, f32) + Send + Sync,
{
    fn update(&self, path: &mut RichPath, value: f32) {
        self(path, value)
    }
}

/// Shared update listener handle
pub type SharedUpdateListener = Arc<dyn AnimationUpdateListener>;

/// Adapts start/end closures into an [`AnimationListener`]
#[derive(Default)]
pub struct CallbackListener {
    on_start: Option<Box<dyn Fn() + Send + Sync>>,
    on_end: Option<Box<dyn Fn() + Send + Sync>>,
    on_cancel: Option<Box<dyn Fn() + Send + Sync>>,
    on_repeat: Option<Box<dyn Fn() + Send + Sync>>,
}

impl CallbackListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start<F: Fn() + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn on_end<F: Fn() + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    pub fn on_cancel<F: Fn() + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    pub fn on_repeat<F: Fn() + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.on_repeat = Some(Box::new(f));
        self
    }
}

impl AnimationListener for CallbackListener {
    fn on_start(&self) {
        if let Some(ref f) = self.on_start {
            f();
        }
    }

    fn on_end(&self) {
        if let Some(ref f) = self.on_end {
            f();
        }
    }

    fn on_cancel(&self) {
        if let Some(ref f) = self.on_cancel {
            f();
        }
    }

    fn on_repeat(&self) {
        if let Some(ref f) = self.on_repeat {
            f();
        }
    }
}
