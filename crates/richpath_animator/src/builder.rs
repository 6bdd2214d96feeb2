//! Fluent animation builder
//!
//! An [`AnimationBuilder`] collects property animations for a fixed set of
//! paths. Every animation is created with the builder's timing as it is at
//! that moment, and every timing setter re-applies to all animations the
//! builder already holds. Animations of other builders in the same chain are
//! never touched.
//!
//! ```ignore
//! use richpath_animator::{animate, Easing};
//!
//! animate([heart.clone()])
//!     .scale(&[1.0, 1.2, 1.0])
//!     .fill_color(&[0xFFFF0000, 0xFFFF8080])
//!     .duration(600)
//!     .interpolator(Easing::Linear)
//!     .then_animate([stem.clone()])
//!     .trim_path_end(&[0.0, 1.0])
//!     .start()?;
//! ```
//!
//! Configuration mistakes (an unknown property name, an empty value list, a
//! color call on a scalar property) do not break the chain: the first one is
//! recorded and returned by [`AnimationBuilder::start`], and nothing plays.

use std::sync::Arc;

use richpath_core::{Argb, PathProperty, PropertyKind, SharedPath};

use crate::animator::{AnimationRequest, PropertyAnimator};
use crate::config::{AnimationConfig, RepeatMode};
use crate::easing::Easing;
use crate::error::AnimationError;
use crate::listener::{AnimationListener, AnimationUpdateListener, SharedUpdateListener};
use crate::path_animator::{BuilderId, PathAnimator, Placement};
use crate::values::Keyframes;

// ============================================================================
// Session State
// ============================================================================

/// State of one builder session, owned by its sequencer
pub(crate) struct Session {
    paths: Vec<Option<SharedPath>>,
    config: AnimationConfig,
    pub(crate) animators: Vec<PropertyAnimator>,
    pub(crate) error: Option<AnimationError>,
    /// Index of the group this session plays in
    pub(crate) group: usize,
}

impl Session {
    pub(crate) fn new(paths: Vec<Option<SharedPath>>, config: AnimationConfig, group: usize) -> Self {
        Self {
            paths,
            config,
            animators: Vec::new(),
            error: None,
            group,
        }
    }

    fn record(&mut self, err: AnimationError) {
        tracing::warn!("AnimationBuilder: {}", err);
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    /// Resolve a property name, checking it holds values of `kind`
    fn lookup(&mut self, name: &str, kind: PropertyKind) -> Option<PathProperty> {
        match name.parse::<PathProperty>() {
            Ok(property) if property.kind() == kind => Some(property),
            Ok(_) => {
                self.record(AnimationError::PropertyKind {
                    property: name.to_string(),
                    expected: kind,
                });
                None
            }
            Err(e) => {
                self.record(AnimationError::from_lookup(e));
                None
            }
        }
    }

    fn check_values(&mut self, property: &str, empty: bool) -> bool {
        if empty {
            self.record(AnimationError::EmptyValues {
                property: property.to_string(),
            });
        }
        !empty
    }

    /// Present targets; absent entries are skipped
    fn targets(&self) -> impl Iterator<Item = &SharedPath> + '_ {
        let skipped = self.paths.iter().filter(|p| p.is_none()).count();
        if skipped > 0 {
            tracing::trace!("AnimationBuilder: skipping {} absent paths", skipped);
        }
        self.paths.iter().flatten()
    }

    fn push_all(&mut self, animators: Vec<PropertyAnimator>) {
        tracing::trace!("AnimationBuilder: {} animators added", animators.len());
        self.animators.extend(animators);
    }

    pub(crate) fn float_property(&mut self, name: &str, values: &[f32]) {
        if let Some(property) = self.lookup(name, PropertyKind::Float) {
            self.float_values(property, values);
        }
    }

    pub(crate) fn float_values(&mut self, property: PathProperty, values: &[f32]) {
        if !self.check_values(property.name(), values.is_empty()) {
            return;
        }
        let config = self.config;
        let animators = self
            .targets()
            .map(|path| {
                PropertyAnimator::property(
                    Arc::clone(path),
                    property,
                    Keyframes::floats(values),
                    &config,
                )
            })
            .collect();
        self.push_all(animators);
    }

    pub(crate) fn color_property(&mut self, name: &str, colors: &[Argb]) {
        let Some(property) = self.lookup(name, PropertyKind::Color) else {
            return;
        };
        if !self.check_values(property.name(), colors.is_empty()) {
            return;
        }
        let config = self.config;
        let animators = self
            .targets()
            .map(|path| {
                PropertyAnimator::property(
                    Arc::clone(path),
                    property,
                    Keyframes::colors(colors),
                    &config,
                )
            })
            .collect();
        self.push_all(animators);
    }

    /// Scale factors against each target's original width or height
    pub(crate) fn scaled(&mut self, name: &str, factors: &[f32]) {
        let Some(property) = self.lookup(name, PropertyKind::Float) else {
            return;
        };
        if !matches!(property, PathProperty::Width | PathProperty::Height) {
            self.record(AnimationError::NotScalable(name.to_string()));
            return;
        }
        if !self.check_values(property.name(), factors.is_empty()) {
            return;
        }

        let config = self.config;
        let animators = self
            .targets()
            .map(|path| {
                let dimension = {
                    let p = path.lock().unwrap();
                    match property {
                        PathProperty::Height => p.original_height(),
                        _ => p.original_width(),
                    }
                };
                let values: Vec<f32> = factors.iter().map(|f| f * dimension).collect();
                PropertyAnimator::property(
                    Arc::clone(path),
                    property,
                    Keyframes::floats(&values),
                    &config,
                )
            })
            .collect();
        self.push_all(animators);
    }

    pub(crate) fn custom(&mut self, listener: SharedUpdateListener, values: &[f32]) {
        if !self.check_values("custom", values.is_empty()) {
            return;
        }
        let config = self.config;
        let animators = self
            .targets()
            .map(|path| {
                PropertyAnimator::custom(
                    Arc::clone(path),
                    Arc::clone(&listener),
                    Keyframes::floats(values),
                    &config,
                )
            })
            .collect();
        self.push_all(animators);
    }

    pub(crate) fn set_duration(&mut self, duration_ms: u32) {
        self.config.duration_ms = duration_ms;
        for animator in &mut self.animators {
            animator.set_duration(duration_ms);
        }
    }

    pub(crate) fn set_start_delay(&mut self, start_delay_ms: u32) {
        self.config.start_delay_ms = start_delay_ms;
        for animator in &mut self.animators {
            animator.set_start_delay(start_delay_ms);
        }
    }

    pub(crate) fn set_easing(&mut self, easing: Easing) {
        self.config.easing = Some(easing);
        for animator in &mut self.animators {
            animator.set_easing(easing);
        }
    }

    pub(crate) fn set_repeat_mode(&mut self, repeat_mode: RepeatMode) {
        self.config.repeat_mode = repeat_mode;
        for animator in &mut self.animators {
            animator.set_repeat_mode(repeat_mode);
        }
    }

    pub(crate) fn set_repeat_count(&mut self, repeat_count: i32) {
        self.config.repeat_count = repeat_count;
        for animator in &mut self.animators {
            animator.set_repeat_count(repeat_count);
        }
    }
}

// ============================================================================
// Builder Handle
// ============================================================================

/// Fluent builder for one set of target paths
///
/// Created by [`PathAnimator::animate`], [`crate::animate`],
/// [`and_animate`](Self::and_animate) or [`then_animate`](Self::then_animate).
/// The builder is a handle: its animations live in the sequencer.
#[derive(Clone, Debug)]
pub struct AnimationBuilder {
    animator: PathAnimator,
    id: BuilderId,
}

impl AnimationBuilder {
    pub(crate) fn new(animator: PathAnimator, id: BuilderId) -> Self {
        Self { animator, id }
    }

    fn session(self, f: impl FnOnce(&mut Session)) -> Self {
        self.animator.with_session(self.id, f);
        self
    }

    /// The sequencer this builder belongs to
    pub fn path_animator(&self) -> &PathAnimator {
        &self.animator
    }

    /// Snapshots of the animations this builder created, in creation order
    pub fn requests(&self) -> Vec<AnimationRequest> {
        self.animator
            .with_session(self.id, |s| {
                s.animators.iter().map(PropertyAnimator::request).collect()
            })
            .unwrap_or_default()
    }

    // =========================================================================
    // Generic Properties
    // =========================================================================

    /// Animate a scalar property by name through `values`
    ///
    /// A single value animates from the path's current value.
    pub fn property(self, name: &str, values: &[f32]) -> Self {
        self.session(|s| s.float_property(name, values))
    }

    /// Animate a color property by name through packed ARGB `colors`
    pub fn color(self, name: &str, colors: &[u32]) -> Self {
        let colors: Vec<Argb> = colors.iter().copied().map(Argb).collect();
        self.session(|s| s.color_property(name, &colors))
    }

    /// Animate `width` or `height` to `factors` times the original size
    pub fn scale_property(self, name: &str, factors: &[f32]) -> Self {
        self.session(|s| s.scaled(name, factors))
    }

    /// Animate a scalar delivered to `listener` for each frame
    ///
    /// The listener runs with the path locked and the sequencer busy; it must
    /// not call back into the sequencer.
    pub fn custom<L>(self, listener: L, values: &[f32]) -> Self
    where
        L: AnimationUpdateListener + 'static,
    {
        let listener: SharedUpdateListener = Arc::new(listener);
        self.session(|s| s.custom(listener, values))
    }

    // =========================================================================
    // Named Properties
    // =========================================================================

    pub fn fill_color(self, colors: &[u32]) -> Self {
        self.color(PathProperty::FillColor.name(), colors)
    }

    pub fn stroke_color(self, colors: &[u32]) -> Self {
        self.color(PathProperty::StrokeColor.name(), colors)
    }

    pub fn fill_alpha(self, alpha: &[f32]) -> Self {
        self.session(|s| s.float_values(PathProperty::FillAlpha, alpha))
    }

    pub fn stroke_alpha(self, alpha: &[f32]) -> Self {
        self.session(|s| s.float_values(PathProperty::StrokeAlpha, alpha))
    }

    pub fn stroke_width(self, values: &[f32]) -> Self {
        self.session(|s| s.float_values(PathProperty::StrokeWidth, values))
    }

    /// Animate to an absolute size
    pub fn size(self, width: f32, height: f32) -> Self {
        self.session(|s| {
            s.float_values(PathProperty::Width, &[width]);
            s.float_values(PathProperty::Height, &[height]);
        })
    }

    pub fn width(self, values: &[f32]) -> Self {
        self.session(|s| s.float_values(PathProperty::Width, values))
    }

    pub fn height(self, values: &[f32]) -> Self {
        self.session(|s| s.float_values(PathProperty::Height, values))
    }

    /// Scale the width relative to the original width
    pub fn scale_x(self, factors: &[f32]) -> Self {
        self.scale_property(PathProperty::Width.name(), factors)
    }

    /// Scale the height relative to the original height
    pub fn scale_y(self, factors: &[f32]) -> Self {
        self.scale_property(PathProperty::Height.name(), factors)
    }

    /// Scale both axes relative to the original size
    pub fn scale(self, factors: &[f32]) -> Self {
        self.scale_x(factors).scale_y(factors)
    }

    /// Rotate through absolute angles in degrees
    pub fn rotation(self, values: &[f32]) -> Self {
        self.session(|s| s.float_values(PathProperty::Rotation, values))
    }

    pub fn translation_x(self, values: &[f32]) -> Self {
        self.session(|s| s.float_values(PathProperty::TranslationX, values))
    }

    pub fn translation_y(self, values: &[f32]) -> Self {
        self.session(|s| s.float_values(PathProperty::TranslationY, values))
    }

    pub fn trim_path_start(self, values: &[f32]) -> Self {
        self.session(|s| s.float_values(PathProperty::TrimPathStart, values))
    }

    pub fn trim_path_end(self, values: &[f32]) -> Self {
        self.session(|s| s.float_values(PathProperty::TrimPathEnd, values))
    }

    pub fn trim_path_offset(self, values: &[f32]) -> Self {
        self.session(|s| s.float_values(PathProperty::TrimPathOffset, values))
    }

    // =========================================================================
    // Timing
    // =========================================================================

    pub fn duration(self, duration_ms: u32) -> Self {
        self.session(|s| s.set_duration(duration_ms))
    }

    pub fn start_delay(self, start_delay_ms: u32) -> Self {
        self.session(|s| s.set_start_delay(start_delay_ms))
    }

    pub fn interpolator(self, easing: Easing) -> Self {
        self.session(|s| s.set_easing(easing))
    }

    pub fn repeat_mode(self, repeat_mode: RepeatMode) -> Self {
        self.session(|s| s.set_repeat_mode(repeat_mode))
    }

    /// Extra iterations after the first; [`crate::INFINITE`] repeats forever
    pub fn repeat_count(self, repeat_count: i32) -> Self {
        self.session(|s| s.set_repeat_count(repeat_count))
    }

    /// Override the duration of every animation in this builder's group
    pub fn duration_set(self, duration_ms: u32) -> Self {
        self.animator
            .update_overrides(self.id, |o| o.duration_ms = Some(duration_ms));
        self
    }

    /// Delay this builder's group before any of its animations start
    pub fn start_delay_set(self, start_delay_ms: u32) -> Self {
        self.animator
            .update_overrides(self.id, |o| o.start_delay_ms = Some(start_delay_ms));
        self
    }

    /// Override the easing of every animation in this builder's group
    pub fn interpolator_set(self, easing: Easing) -> Self {
        self.animator
            .update_overrides(self.id, |o| o.easing = Some(easing));
        self
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Animate more paths together with this builder's group
    pub fn and_animate<I>(self, paths: I) -> AnimationBuilder
    where
        I: IntoIterator,
        I::Item: Into<Option<SharedPath>>,
    {
        self.animator.add_builder(paths, Placement::With(self.id))
    }

    /// Animate paths after the last group has finished
    pub fn then_animate<I>(self, paths: I) -> AnimationBuilder
    where
        I: IntoIterator,
        I::Item: Into<Option<SharedPath>>,
    {
        self.animator.add_builder(paths, Placement::After)
    }

    /// Register the sequencer's lifecycle listener
    pub fn animation_listener<L>(self, listener: L) -> Self
    where
        L: AnimationListener + 'static,
    {
        self.animator.animation_listener(listener);
        self
    }

    /// Start the whole chain and return its sequencer
    pub fn start(self) -> Result<PathAnimator, AnimationError> {
        self.animator.start()?;
        Ok(self.animator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animate;
    use richpath_core::{PropertyValue, RichPath};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn path(name: &str, width: f32, height: f32) -> SharedPath {
        RichPath::new(name, width, height).shared()
    }

    #[test]
    fn test_scale_x_uses_original_width() {
        let a = path("a", 100.0, 50.0);
        a.lock().unwrap().set_width(150.0);

        let builder = animate([a.clone()]).scale_x(&[2.0]);
        let requests = builder.requests();

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].property, Some(PathProperty::Width));
        assert_eq!(requests[0].keyframes, Keyframes::floats(&[200.0]));
    }

    #[test]
    fn test_scale_x_animates_from_current_width() {
        let a = path("a", 100.0, 50.0);
        let animator = animate([a.clone()])
            .scale_x(&[2.0])
            .interpolator(Easing::Linear)
            .start()
            .unwrap();

        animator.tick(0.0);
        assert!((a.lock().unwrap().width() - 100.0).abs() < 1e-4);
        animator.tick(300.0);
        assert!((a.lock().unwrap().width() - 200.0).abs() < 1e-4);
    }

    #[test]
    fn test_repeated_scaling_does_not_compound() {
        let a = path("a", 100.0, 40.0);
        let animator = animate([a.clone()]).scale(&[2.0]).start().unwrap();
        animator.tick(300.0);
        animator.start().unwrap();
        animator.tick(300.0);

        let a = a.lock().unwrap();
        assert!((a.width() - 200.0).abs() < 1e-4);
        assert!((a.height() - 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_scale_factors_for_each_target() {
        let a = path("a", 10.0, 20.0);
        let b = path("b", 30.0, 40.0);
        let requests = animate([a, b]).scale_y(&[0.5, 1.0]).requests();

        assert_eq!(requests[0].keyframes, Keyframes::floats(&[10.0, 20.0]));
        assert_eq!(requests[1].keyframes, Keyframes::floats(&[20.0, 40.0]));
    }

    #[test]
    fn test_fill_color_blends_per_channel() {
        let a = path("a", 1.0, 1.0);
        let builder = animate([a.clone()]).color("fillColor", &[0xFFFF0000, 0xFF00FF00]);

        let requests = builder.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].property, Some(PathProperty::FillColor));
        assert_eq!(
            requests[0].keyframes,
            Keyframes::colors(&[Argb::RED, Argb::GREEN])
        );

        let animator = builder.interpolator(Easing::Linear).start().unwrap();
        animator.tick(150.0);
        assert_eq!(
            a.lock().unwrap().get(PathProperty::FillColor),
            PropertyValue::Color(Argb::from_channels(0xFF, 128, 128, 0))
        );
    }

    #[test]
    fn test_duration_applies_retroactively() {
        let a = path("a", 1.0, 1.0);
        let builder = animate([a])
            .width(&[2.0])
            .rotation(&[90.0])
            .duration(500);

        let requests = builder.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.duration_ms == 500));
    }

    #[test]
    fn test_every_setter_applies_retroactively() {
        let a = path("a", 1.0, 1.0);
        let builder = animate([a])
            .fill_alpha(&[0.0])
            .stroke_alpha(&[0.0])
            .translation_x(&[5.0])
            .start_delay(40)
            .interpolator(Easing::Bounce)
            .repeat_mode(RepeatMode::Reverse)
            .repeat_count(3);

        for request in builder.requests() {
            assert_eq!(request.start_delay_ms, 40);
            assert_eq!(request.easing, Easing::Bounce);
            assert_eq!(request.repeat_mode, RepeatMode::Reverse);
            assert_eq!(request.repeat_count, 3);
        }
    }

    #[test]
    fn test_new_requests_capture_current_config() {
        let a = path("a", 1.0, 1.0);
        let requests = animate([a])
            .duration(100)
            .height(&[3.0])
            .requests();
        assert_eq!(requests[0].duration_ms, 100);
    }

    #[test]
    fn test_setters_do_not_touch_other_builders() {
        let a = path("a", 1.0, 1.0);
        let b = path("b", 1.0, 1.0);

        let first = animate([a]).width(&[5.0]);
        let second = first.clone().and_animate([b]).width(&[5.0]).duration(900);

        assert_eq!(first.requests()[0].duration_ms, 300);
        assert_eq!(second.requests()[0].duration_ms, 900);
    }

    #[test]
    fn test_absent_targets_are_skipped() {
        let a = path("a", 10.0, 10.0);
        let b = path("b", 20.0, 20.0);
        let builder = animate(vec![Some(a), None, Some(b)])
            .width(&[1.0])
            .scale_y(&[2.0])
            .custom(|_: &mut RichPath, _: f32| {}, &[0.0, 1.0]);

        let requests = builder.requests();
        assert_eq!(requests.len(), 6);
        let names: Vec<&str> = requests.iter().map(|r| r.path_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "a", "b", "a", "b"]);
        assert_eq!(requests[3].keyframes, Keyframes::floats(&[40.0]));
    }

    #[test]
    fn test_size_sets_absolute_targets() {
        let a = path("a", 10.0, 10.0);
        let requests = animate([a]).size(64.0, 32.0).requests();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].property, Some(PathProperty::Width));
        assert_eq!(requests[0].keyframes, Keyframes::floats(&[64.0]));
        assert_eq!(requests[1].property, Some(PathProperty::Height));
        assert_eq!(requests[1].keyframes, Keyframes::floats(&[32.0]));
    }

    #[test]
    fn test_rotation_is_absolute() {
        let a = path("a", 10.0, 10.0);
        a.lock().unwrap().set_rotation(30.0);

        let animator = animate([a.clone()])
            .rotation(&[90.0])
            .interpolator(Easing::Linear)
            .start()
            .unwrap();
        animator.tick(300.0);
        assert!((a.lock().unwrap().rotation() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_trim_and_stroke_helpers() {
        let a = path("a", 10.0, 10.0);
        let requests = animate([a])
            .trim_path_start(&[0.0, 0.5])
            .trim_path_end(&[1.0, 0.5])
            .trim_path_offset(&[0.0, 0.25])
            .stroke_width(&[1.0, 3.0])
            .stroke_color(&[0xFF000000])
            .translation_y(&[4.0])
            .requests();

        let properties: Vec<_> = requests.iter().filter_map(|r| r.property).collect();
        assert_eq!(
            properties,
            vec![
                PathProperty::TrimPathStart,
                PathProperty::TrimPathEnd,
                PathProperty::TrimPathOffset,
                PathProperty::StrokeWidth,
                PathProperty::StrokeColor,
                PathProperty::TranslationY,
            ]
        );
    }

    #[test]
    fn test_custom_updates_and_notifies() {
        let updates = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let mut p = RichPath::new("a", 10.0, 10.0);
        let updates_clone = updates.clone();
        p.set_on_path_updated(move || {
            updates_clone.fetch_add(1, Ordering::SeqCst);
        });
        let a = p.shared();

        let seen_clone = seen.clone();
        let animator = animate([a.clone()])
            .custom(
                move |path: &mut RichPath, value: f32| {
                    path.set_fill_alpha(value);
                    seen_clone.lock().unwrap().push(value);
                },
                &[0.0, 1.0],
            )
            .duration(100)
            .interpolator(Easing::Linear)
            .start()
            .unwrap();

        animator.tick(50.0);
        animator.tick(50.0);

        assert_eq!(*seen.lock().unwrap(), vec![0.5, 1.0]);
        assert_eq!(updates.load(Ordering::SeqCst), 2);
        assert!((a.lock().unwrap().fill_alpha() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_unknown_property_fails_start() {
        let a = path("a", 1.0, 1.0);
        let err = animate([a.clone()])
            .property("opacity", &[0.0])
            .width(&[3.0])
            .start()
            .unwrap_err();

        assert!(matches!(err, AnimationError::UnknownProperty(ref name) if name == "opacity"));
        assert!((a.lock().unwrap().width() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_values_fail_start() {
        let a = path("a", 1.0, 1.0);
        let builder = animate([a]).rotation(&[]);
        assert!(builder.requests().is_empty());

        let err = builder.start().unwrap_err();
        assert!(matches!(err, AnimationError::EmptyValues { ref property } if property == "rotation"));
    }

    #[test]
    fn test_error_persists_across_starts() {
        let a = path("a", 1.0, 1.0);
        let builder = animate([a.clone()])
            .property("opacity", &[0.0])
            .width(&[3.0])
            .duration(100);
        let animator = builder.path_animator().clone();

        assert!(builder.start().is_err());
        let err = animator.start().unwrap_err();
        assert!(matches!(err, AnimationError::UnknownProperty(ref name) if name == "opacity"));
        assert!(!animator.is_running());

        assert!(!animator.tick(100.0));
        assert!((a.lock().unwrap().width() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_colors_fail_start() {
        let a = path("a", 1.0, 1.0);
        let builder = animate([a]).fill_color(&[]);
        assert!(builder.requests().is_empty());

        let err = builder.start().unwrap_err();
        assert!(matches!(err, AnimationError::EmptyValues { ref property } if property == "fillColor"));
    }

    #[test]
    fn test_empty_scale_factors_fail_start() {
        let a = path("a", 1.0, 1.0);
        let builder = animate([a]).scale_x(&[]);
        assert!(builder.requests().is_empty());

        let err = builder.start().unwrap_err();
        assert!(matches!(err, AnimationError::EmptyValues { ref property } if property == "width"));
    }

    #[test]
    fn test_empty_custom_values_fail_start() {
        let a = path("a", 1.0, 1.0);
        let builder = animate([a]).custom(|_: &mut RichPath, _: f32| {}, &[]);
        assert!(builder.requests().is_empty());

        let err = builder.start().unwrap_err();
        assert!(matches!(err, AnimationError::EmptyValues { ref property } if property == "custom"));
    }

    #[test]
    fn test_property_kind_mismatch() {
        let a = path("a", 1.0, 1.0);
        let err = animate([a.clone()])
            .color("width", &[0xFF000000])
            .start()
            .unwrap_err();
        assert!(matches!(
            err,
            AnimationError::PropertyKind {
                expected: PropertyKind::Color,
                ..
            }
        ));

        let err = animate([a])
            .property("fillColor", &[1.0])
            .start()
            .unwrap_err();
        assert!(matches!(
            err,
            AnimationError::PropertyKind {
                expected: PropertyKind::Float,
                ..
            }
        ));
    }

    #[test]
    fn test_scale_property_rejects_other_properties() {
        let a = path("a", 1.0, 1.0);
        let err = animate([a])
            .scale_property("rotation", &[2.0])
            .start()
            .unwrap_err();
        assert!(matches!(err, AnimationError::NotScalable(ref name) if name == "rotation"));
    }

    #[test]
    fn test_error_in_later_builder_blocks_whole_chain() {
        let a = path("a", 1.0, 1.0);
        let b = path("b", 1.0, 1.0);
        let builder = animate([a])
            .width(&[2.0])
            .then_animate([b])
            .trim_path_end(&[]);

        assert!(builder.path_animator().start().is_err());
        assert!(!builder.path_animator().is_running());
    }

    #[test]
    fn test_chain_grouping() {
        let a = path("a", 1.0, 1.0);
        let b = path("b", 1.0, 1.0);
        let c = path("c", 1.0, 1.0);

        let builder = animate([a])
            .width(&[2.0])
            .and_animate([b])
            .height(&[2.0])
            .then_animate([c])
            .rotation(&[45.0]);

        let animator = builder.path_animator();
        assert_eq!(animator.group_count(), 2);
        assert_eq!(animator.builder_count(), 3);
        assert_eq!(animator.group_requests(0).len(), 2);
        assert_eq!(animator.group_requests(1).len(), 1);
    }

    #[test]
    fn test_sequencer_defaults_seed_new_builders() {
        let a = path("a", 1.0, 1.0);
        let animator = PathAnimator::with_config(
            AnimationConfig::default()
                .with_duration(120)
                .with_easing(Easing::Linear),
        );
        let requests = animator.animate([a]).width(&[2.0]).requests();
        assert_eq!(requests[0].duration_ms, 120);
        assert_eq!(requests[0].easing, Easing::Linear);
    }
}
