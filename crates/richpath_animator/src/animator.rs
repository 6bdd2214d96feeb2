//! Property animators
//!
//! A [`PropertyAnimator`] drives one property of one path through its
//! keyframes. It owns its timing (duration, start delay, easing, repeats) and
//! is advanced by [`PropertyAnimator::tick`] with elapsed milliseconds.

use std::fmt;

use richpath_core::{PathProperty, PropertyValue, SharedPath};

use crate::config::{AnimationConfig, RepeatMode};
use crate::easing::Easing;
use crate::listener::SharedUpdateListener;
use crate::values::Keyframes;

/// What an animator writes each frame
#[derive(Clone)]
pub enum AnimationTarget {
    /// A path property, written directly
    Property(PathProperty),
    /// A caller-supplied callback receiving the frame value
    Custom(SharedUpdateListener),
}

impl AnimationTarget {
    pub fn property(&self) -> Option<PathProperty> {
        match self {
            AnimationTarget::Property(p) => Some(*p),
            AnimationTarget::Custom(_) => None,
        }
    }
}

impl fmt::Debug for AnimationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationTarget::Property(p) => f.debug_tuple("Property").field(p).finish(),
            AnimationTarget::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Playback state of a single animator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    /// Not started
    Idle,
    /// Started, waiting for the start delay
    Delayed,
    /// Writing frame values
    Running,
    /// Reached its final value
    Finished,
    /// Stopped before finishing
    Cancelled,
}

/// Result of advancing an animator by one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Iterations begun during this frame
    pub repeats: u32,
    /// The animator reached its final value during this frame
    pub finished: bool,
}

/// Read-only snapshot of an animator's configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRequest {
    /// Name of the target path
    pub path_name: String,
    /// Animated property; `None` for custom animations
    pub property: Option<PathProperty>,
    pub keyframes: Keyframes,
    pub duration_ms: u32,
    pub start_delay_ms: u32,
    pub easing: Easing,
    pub repeat_mode: RepeatMode,
    pub repeat_count: i32,
}

/// Animates one target property through a list of keyframes
#[derive(Clone)]
pub struct PropertyAnimator {
    path: SharedPath,
    target: AnimationTarget,
    keyframes: Keyframes,
    /// Keyframes with the start value filled in, set once the delay elapsed
    resolved: Option<Keyframes>,
    duration_ms: u32,
    start_delay_ms: u32,
    easing: Easing,
    repeat_mode: RepeatMode,
    repeat_count: i32,
    state: AnimatorState,
    /// Time since start; f64 so long infinite runs keep sub-millisecond steps
    elapsed_ms: f64,
    iteration: u32,
}

impl PropertyAnimator {
    /// Animate a path property
    pub fn property(
        path: SharedPath,
        property: PathProperty,
        keyframes: Keyframes,
        config: &AnimationConfig,
    ) -> Self {
        Self::new(path, AnimationTarget::Property(property), keyframes, config)
    }

    /// Animate a scalar delivered to a callback
    pub fn custom(
        path: SharedPath,
        listener: SharedUpdateListener,
        keyframes: Keyframes,
        config: &AnimationConfig,
    ) -> Self {
        Self::new(path, AnimationTarget::Custom(listener), keyframes, config)
    }

    fn new(
        path: SharedPath,
        target: AnimationTarget,
        keyframes: Keyframes,
        config: &AnimationConfig,
    ) -> Self {
        let mut animator = Self {
            path,
            target,
            keyframes,
            resolved: None,
            duration_ms: 0,
            start_delay_ms: 0,
            easing: Easing::default(),
            repeat_mode: RepeatMode::Restart,
            repeat_count: 0,
            state: AnimatorState::Idle,
            elapsed_ms: 0.0,
            iteration: 0,
        };
        animator.apply_config(config);
        animator
    }

    /// Overwrite every timing field from `config`
    pub fn apply_config(&mut self, config: &AnimationConfig) {
        self.duration_ms = config.duration_ms;
        self.start_delay_ms = config.start_delay_ms;
        self.easing = config.resolved_easing();
        self.repeat_mode = config.repeat_mode;
        self.repeat_count = config.repeat_count;
    }

    // =========================================================================
    // Timing
    // =========================================================================

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn set_duration(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    pub fn start_delay_ms(&self) -> u32 {
        self.start_delay_ms
    }

    pub fn set_start_delay(&mut self, start_delay_ms: u32) {
        self.start_delay_ms = start_delay_ms;
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    pub fn set_repeat_mode(&mut self, repeat_mode: RepeatMode) {
        self.repeat_mode = repeat_mode;
    }

    pub fn repeat_count(&self) -> i32 {
        self.repeat_count
    }

    pub fn set_repeat_count(&mut self, repeat_count: i32) {
        self.repeat_count = repeat_count;
    }

    /// Total number of iterations, `None` when repeating forever
    fn iterations(&self) -> Option<u32> {
        u32::try_from(self.repeat_count)
            .ok()
            .map(|count| count.saturating_add(1))
    }

    /// Start delay plus every iteration, `None` when it never finishes
    pub fn total_duration_ms(&self) -> Option<f64> {
        let delay = f64::from(self.start_delay_ms);
        if self.duration_ms == 0 {
            return Some(delay);
        }
        self.iterations()
            .map(|n| delay + f64::from(self.duration_ms) * f64::from(n))
    }

    // =========================================================================
    // Playback
    // =========================================================================

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Started and not yet finished or cancelled
    pub fn is_active(&self) -> bool {
        matches!(self.state, AnimatorState::Delayed | AnimatorState::Running)
    }

    pub fn is_finished(&self) -> bool {
        self.state == AnimatorState::Finished
    }

    /// Current iteration, counting from zero
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Start (or restart) from the beginning
    ///
    /// Nothing is written until the first tick that passes the start delay.
    pub fn start(&mut self) {
        self.state = AnimatorState::Delayed;
        self.elapsed_ms = 0.0;
        self.iteration = 0;
        self.resolved = None;
    }

    /// Stop at the current value
    pub fn cancel(&mut self) {
        if self.is_active() {
            self.state = AnimatorState::Cancelled;
        }
    }

    /// Jump to the final value and finish
    pub fn end(&mut self) {
        if !self.is_active() {
            return;
        }
        if self.resolved.is_none() {
            self.resolve_start();
        }
        let fraction = match self.iterations() {
            Some(total) => {
                self.iteration = total - 1;
                self.final_fraction(total)
            }
            None => 1.0,
        };
        self.write_fraction(fraction);
        self.state = AnimatorState::Finished;
    }

    /// Advance by `dt_ms` milliseconds and write the new frame value
    pub fn tick(&mut self, dt_ms: f32) -> TickOutcome {
        if !self.is_active() {
            return TickOutcome::default();
        }

        self.elapsed_ms += f64::from(dt_ms.max(0.0));
        let delay = f64::from(self.start_delay_ms);
        if self.elapsed_ms < delay {
            return TickOutcome::default();
        }

        if self.state == AnimatorState::Delayed {
            self.state = AnimatorState::Running;
            self.resolve_start();
        }

        let (fraction, iteration, finished) = self.progress_at(self.elapsed_ms - delay);
        let repeats = iteration.saturating_sub(self.iteration);
        self.iteration = iteration;
        self.write_fraction(fraction);

        if finished {
            self.state = AnimatorState::Finished;
        }

        TickOutcome { repeats, finished }
    }

    /// Linear fraction, iteration and completion at `play_ms` past the delay
    fn progress_at(&self, play_ms: f64) -> (f32, u32, bool) {
        if self.duration_ms == 0 {
            return (1.0, 0, true);
        }

        let duration = f64::from(self.duration_ms);
        let whole = (play_ms / duration).floor();
        let iteration = whole as u32;

        if let Some(total) = self.iterations() {
            if iteration >= total {
                return (self.final_fraction(total), total - 1, true);
            }
        }

        let fraction = ((play_ms - whole * duration) / duration) as f32;
        (self.directed(fraction, iteration), iteration, false)
    }

    fn final_fraction(&self, total: u32) -> f32 {
        self.directed(1.0, total - 1)
    }

    fn directed(&self, fraction: f32, iteration: u32) -> f32 {
        if self.repeat_mode == RepeatMode::Reverse && iteration % 2 == 1 {
            1.0 - fraction
        } else {
            fraction
        }
    }

    /// Fill in the start value of a single-keyframe animation
    fn resolve_start(&mut self) {
        if self.keyframes.len() != 1 {
            self.resolved = Some(self.keyframes.clone());
            return;
        }
        let start = match self.target {
            AnimationTarget::Property(property) => self.path.lock().unwrap().get(property),
            AnimationTarget::Custom(_) => PropertyValue::Float(0.0),
        };
        self.resolved = Some(self.keyframes.with_start(start));
    }

    fn write_fraction(&self, fraction: f32) {
        let eased = self.easing.apply(fraction);
        let keyframes = self.resolved.as_ref().unwrap_or(&self.keyframes);
        let Some(value) = keyframes.sample(eased) else {
            return;
        };

        let updated = {
            let mut path = self.path.lock().unwrap();
            match &self.target {
                AnimationTarget::Property(property) => {
                    if let Err(e) = path.set(*property, value) {
                        tracing::warn!("PropertyAnimator: {}", e);
                        return;
                    }
                }
                AnimationTarget::Custom(listener) => {
                    if let Some(v) = value.as_float() {
                        listener.update(&mut path, v);
                    }
                }
            }
            path.on_path_updated()
        };

        if let Some(listener) = updated {
            listener();
        }
    }

    /// Snapshot of this animator's target and timing
    pub fn request(&self) -> AnimationRequest {
        AnimationRequest {
            path_name: self.path.lock().unwrap().name().to_string(),
            property: self.target.property(),
            keyframes: self.keyframes.clone(),
            duration_ms: self.duration_ms,
            start_delay_ms: self.start_delay_ms,
            easing: self.easing,
            repeat_mode: self.repeat_mode,
            repeat_count: self.repeat_count,
        }
    }
}

impl fmt::Debug for PropertyAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyAnimator")
            .field("target", &self.target)
            .field("keyframes", &self.keyframes)
            .field("duration_ms", &self.duration_ms)
            .field("start_delay_ms", &self.start_delay_ms)
            .field("repeat_count", &self.repeat_count)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
