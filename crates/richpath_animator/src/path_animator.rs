//! Animation sequencer
//!
//! A [`PathAnimator`] owns every builder session of a chain and plays them in
//! groups: sessions opened with `and_animate` join the current group and run
//! together, `then_animate` opens a new group that starts once every animator
//! of the previous group has finished.
//!
//! Playback is driven by the caller, one frame at a time:
//!
//! ```ignore
//! let animator = richpath_animator::animate([heart.clone()])
//!     .fill_color(&[0xFFFF0000, 0xFF00FF00])
//!     .duration(500)
//!     .start()?;
//!
//! while animator.tick(16.0) {
//!     render(&heart);
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Instant;

use richpath_core::SharedPath;
use slotmap::{new_key_type, SlotMap};

use crate::animator::{AnimationRequest, PropertyAnimator};
use crate::builder::{AnimationBuilder, Session};
use crate::config::AnimationConfig;
use crate::easing::Easing;
use crate::error::AnimationError;
use crate::listener::{AnimationListener, SharedAnimationListener};

new_key_type! {
    /// Handle to a builder session owned by a sequencer
    pub struct BuilderId;
}

/// Open a new sequencer and its first builder session
pub fn animate<I>(paths: I) -> AnimationBuilder
where
    I: IntoIterator,
    I::Item: Into<Option<SharedPath>>,
{
    PathAnimator::new().animate(paths)
}

/// Set-level timing overriding every animator of one group
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SetOverrides {
    /// Replaces each animator's duration when the group starts
    pub duration_ms: Option<u32>,
    /// Delay before any animator of the group starts
    pub start_delay_ms: Option<u32>,
    /// Replaces each animator's easing when the group starts
    pub easing: Option<Easing>,
}

impl SetOverrides {
    fn apply(&self, animator: &mut PropertyAnimator) {
        if let Some(duration) = self.duration_ms {
            animator.set_duration(duration);
        }
        if let Some(easing) = self.easing {
            animator.set_easing(easing);
        }
    }
}

/// Where a new session is placed
pub(crate) enum Placement {
    /// The group of an existing session
    With(BuilderId),
    /// A new group after the last one
    After,
    /// The last group, creating the first group if needed
    Last,
}

/// Sessions that play simultaneously
#[derive(Default)]
struct Group {
    sessions: Vec<BuilderId>,
    overrides: SetOverrides,
    elapsed_ms: f64,
    started: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlaybackState {
    Idle,
    Running,
    Finished,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LifecycleEvent {
    Start,
    Repeat,
    Cancel,
    End,
}

/// Outcome of advancing one group
struct GroupTick {
    finished: bool,
    repeated: bool,
    /// Time left over after the group finished
    overflow_ms: f32,
}

struct PathAnimatorInner {
    sessions: SlotMap<BuilderId, Session>,
    groups: Vec<Group>,
    defaults: AnimationConfig,
    listener: Option<SharedAnimationListener>,
    state: PlaybackState,
    current: usize,
    last_frame: Instant,
}

impl PathAnimatorInner {
    fn group_of(&self, id: BuilderId) -> Option<usize> {
        self.sessions.get(id).map(|s| s.group)
    }

    fn add_session(&mut self, paths: Vec<Option<SharedPath>>, placement: Placement) -> BuilderId {
        let group = match placement {
            Placement::With(id) => self.group_of(id),
            Placement::After => None,
            Placement::Last => self.groups.len().checked_sub(1),
        };
        let group = match group {
            Some(index) => index,
            None => {
                self.groups.push(Group::default());
                self.groups.len() - 1
            }
        };

        let id = self.sessions.insert(Session::new(paths, self.defaults, group));
        self.groups[group].sessions.push(id);
        tracing::trace!("PathAnimator: session {:?} joins group {}", id, group);
        id
    }

    /// The first recorded configuration error, in chain order
    ///
    /// Errors stay recorded, so every later start fails the same way.
    fn first_error(&self) -> Option<AnimationError> {
        self.groups
            .iter()
            .flat_map(|g| g.sessions.iter())
            .find_map(|id| self.sessions.get(*id).and_then(|s| s.error.clone()))
    }

    fn reset(&mut self) {
        for group in &mut self.groups {
            group.elapsed_ms = 0.0;
            group.started = false;
        }
        for (_, session) in self.sessions.iter_mut() {
            for animator in &mut session.animators {
                animator.cancel();
            }
        }
        self.current = 0;
        self.last_frame = Instant::now();
    }

    fn start_group_animators(&mut self, index: usize) {
        let PathAnimatorInner {
            groups, sessions, ..
        } = self;
        let Some(group) = groups.get_mut(index) else {
            return;
        };
        group.started = true;
        for id in &group.sessions {
            if let Some(session) = sessions.get_mut(*id) {
                for animator in &mut session.animators {
                    group.overrides.apply(animator);
                    animator.start();
                }
            }
        }
        tracing::debug!("PathAnimator: group {} started", index);
    }

    fn tick_group(&mut self, index: usize, dt_ms: f32) -> GroupTick {
        let delay = f64::from(self.groups[index].overrides.start_delay_ms.unwrap_or(0));
        self.groups[index].elapsed_ms += f64::from(dt_ms);
        let elapsed = self.groups[index].elapsed_ms;

        let step = if self.groups[index].started {
            dt_ms
        } else if elapsed >= delay {
            self.start_group_animators(index);
            (elapsed - delay) as f32
        } else {
            return GroupTick {
                finished: false,
                repeated: false,
                overflow_ms: 0.0,
            };
        };

        let PathAnimatorInner {
            groups, sessions, ..
        } = self;
        let group = &groups[index];

        let mut repeated = false;
        let mut finished = true;
        let mut span: f64 = 0.0;
        for id in &group.sessions {
            let Some(session) = sessions.get_mut(*id) else {
                continue;
            };
            for animator in &mut session.animators {
                let outcome = animator.tick(step);
                repeated |= outcome.repeats > 0;
                finished &= !animator.is_active();
                if let Some(total) = animator.total_duration_ms() {
                    span = span.max(total);
                }
            }
        }

        let overflow_ms = if finished {
            (elapsed - delay - span).max(0.0) as f32
        } else {
            0.0
        };

        GroupTick {
            finished,
            repeated,
            overflow_ms,
        }
    }

    fn advance(&mut self, dt_ms: f32, events: &mut Vec<LifecycleEvent>) {
        if self.state != PlaybackState::Running {
            return;
        }

        let mut remaining = dt_ms.max(0.0);
        let mut repeated = false;
        loop {
            if self.current >= self.groups.len() {
                self.state = PlaybackState::Finished;
                tracing::debug!("PathAnimator: finished");
                break;
            }

            let tick = self.tick_group(self.current, remaining);
            repeated |= tick.repeated;
            if !tick.finished {
                break;
            }

            tracing::debug!("PathAnimator: group {} finished", self.current);
            self.current += 1;
            remaining = tick.overflow_ms;
        }

        if repeated {
            events.push(LifecycleEvent::Repeat);
        }
        if self.state == PlaybackState::Finished {
            events.push(LifecycleEvent::End);
        }
    }
}

/// Sequencer for chained builder sessions
///
/// Cloning yields another handle to the same sequencer.
#[derive(Clone)]
pub struct PathAnimator {
    inner: Arc<Mutex<PathAnimatorInner>>,
}

impl PathAnimator {
    pub fn new() -> Self {
        Self::with_config(AnimationConfig::default())
    }

    /// Sequencer whose sessions start from `defaults`
    pub fn with_config(defaults: AnimationConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PathAnimatorInner {
                sessions: SlotMap::with_key(),
                groups: Vec::new(),
                defaults,
                listener: None,
                state: PlaybackState::Idle,
                current: 0,
                last_frame: Instant::now(),
            })),
        }
    }

    /// Open a builder session for `paths` in the last group
    ///
    /// `None` entries are accepted and skipped by every property call.
    pub fn animate<I>(&self, paths: I) -> AnimationBuilder
    where
        I: IntoIterator,
        I::Item: Into<Option<SharedPath>>,
    {
        self.add_builder(paths, Placement::Last)
    }

    pub(crate) fn add_builder<I>(&self, paths: I, placement: Placement) -> AnimationBuilder
    where
        I: IntoIterator,
        I::Item: Into<Option<SharedPath>>,
    {
        let paths: Vec<Option<SharedPath>> = paths.into_iter().map(Into::into).collect();
        let id = self.inner.lock().unwrap().add_session(paths, placement);
        AnimationBuilder::new(self.clone(), id)
    }

    /// Run `f` on a session with the sequencer locked
    pub(crate) fn with_session<R>(
        &self,
        id: BuilderId,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Option<R> {
        self.inner.lock().unwrap().sessions.get_mut(id).map(f)
    }

    /// Update the set-level overrides of the group `id` plays in
    pub(crate) fn update_overrides(&self, id: BuilderId, f: impl FnOnce(&mut SetOverrides)) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(index) = inner.group_of(id) {
            f(&mut inner.groups[index].overrides);
        }
    }

    /// Set-level overrides of a group
    pub fn group_overrides(&self, group: usize) -> Option<SetOverrides> {
        self.inner
            .lock()
            .unwrap()
            .groups
            .get(group)
            .map(|g| g.overrides)
    }

    /// Register the aggregate lifecycle listener, replacing any previous one
    pub fn animation_listener<L>(&self, listener: L)
    where
        L: AnimationListener + 'static,
    {
        self.inner.lock().unwrap().listener = Some(Arc::new(listener));
    }

    /// Start playback from the first group
    ///
    /// Fails with the first configuration error recorded by any builder of
    /// the chain; nothing plays in that case, on this or any later call.
    /// Starting while running restarts from the beginning.
    pub fn start(&self) -> Result<(), AnimationError> {
        let listener = {
            let mut inner = self.inner.lock().unwrap();
            if let Some(err) = inner.first_error() {
                tracing::warn!("PathAnimator: not started: {}", err);
                return Err(err);
            }
            if inner.state == PlaybackState::Running {
                tracing::debug!("PathAnimator: restarting");
            }
            inner.reset();
            inner.state = PlaybackState::Running;
            tracing::debug!(
                "PathAnimator: starting {} groups, {} sessions",
                inner.groups.len(),
                inner.sessions.len()
            );
            inner.listener.clone()
        };

        dispatch(listener.as_ref(), &[LifecycleEvent::Start]);
        Ok(())
    }

    /// Advance playback by `dt_ms` milliseconds
    ///
    /// Returns true while playback is still running.
    pub fn tick(&self, dt_ms: f32) -> bool {
        let mut events = Vec::new();
        let (listener, running) = {
            let mut inner = self.inner.lock().unwrap();
            inner.last_frame = Instant::now();
            inner.advance(dt_ms, &mut events);
            (inner.listener.clone(), inner.state == PlaybackState::Running)
        };
        dispatch(listener.as_ref(), &events);
        running
    }

    /// Advance playback by the wall-clock time since the previous frame
    pub fn advance(&self) -> bool {
        let dt_ms = {
            let inner = self.inner.lock().unwrap();
            inner.last_frame.elapsed().as_secs_f32() * 1000.0
        };
        self.tick(dt_ms)
    }

    /// Stop every running animator at its current value
    pub fn cancel(&self) {
        let listener = {
            let mut inner = self.inner.lock().unwrap();
            if inner.state != PlaybackState::Running {
                return;
            }
            for (_, session) in inner.sessions.iter_mut() {
                for animator in &mut session.animators {
                    animator.cancel();
                }
            }
            inner.state = PlaybackState::Cancelled;
            tracing::debug!("PathAnimator: cancelled");
            inner.listener.clone()
        };
        dispatch(
            listener.as_ref(),
            &[LifecycleEvent::Cancel, LifecycleEvent::End],
        );
    }

    /// Jump every remaining animator to its final value
    pub fn end(&self) {
        let listener = {
            let mut inner = self.inner.lock().unwrap();
            if inner.state != PlaybackState::Running {
                return;
            }
            for index in inner.current..inner.groups.len() {
                if !inner.groups[index].started {
                    inner.start_group_animators(index);
                }
                let PathAnimatorInner {
                    groups, sessions, ..
                } = &mut *inner;
                for id in &groups[index].sessions {
                    if let Some(session) = sessions.get_mut(*id) {
                        for animator in &mut session.animators {
                            animator.end();
                        }
                    }
                }
            }
            inner.current = inner.groups.len();
            inner.state = PlaybackState::Finished;
            tracing::debug!("PathAnimator: ended");
            inner.listener.clone()
        };
        dispatch(listener.as_ref(), &[LifecycleEvent::End]);
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().unwrap().state == PlaybackState::Running
    }

    /// Number of sequential groups
    pub fn group_count(&self) -> usize {
        self.inner.lock().unwrap().groups.len()
    }

    /// Number of builder sessions across all groups
    pub fn builder_count(&self) -> usize {
        self.inner.lock().unwrap().sessions.len()
    }

    /// Index of the group currently playing
    pub fn current_group(&self) -> usize {
        self.inner.lock().unwrap().current
    }

    /// Snapshots of every animator of one group, in session order
    pub fn group_requests(&self, group: usize) -> Vec<AnimationRequest> {
        let inner = self.inner.lock().unwrap();
        let Some(group) = inner.groups.get(group) else {
            return Vec::new();
        };
        group
            .sessions
            .iter()
            .filter_map(|id| inner.sessions.get(*id))
            .flat_map(|s| s.animators.iter().map(PropertyAnimator::request))
            .collect()
    }
}

impl Default for PathAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PathAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock().unwrap();
        f.debug_struct("PathAnimator")
            .field("state", &inner.state)
            .field("groups", &inner.groups.len())
            .field("sessions", &inner.sessions.len())
            .field("current", &inner.current)
            .finish()
    }
}

fn dispatch(listener: Option<&SharedAnimationListener>, events: &[LifecycleEvent]) {
    let Some(listener) = listener else {
        return;
    };
    for event in events {
        match event {
            LifecycleEvent::Start => listener.on_start(),
            LifecycleEvent::Repeat => listener.on_repeat(),
            LifecycleEvent::Cancel => listener.on_cancel(),
            LifecycleEvent::End => listener.on_end(),
        }
    }
}
