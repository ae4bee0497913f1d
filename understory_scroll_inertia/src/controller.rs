// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inertial scroll controller.

use kurbo::Vec2;
use smallvec::SmallVec;
use understory_scroll_chain::{
    EventDisposition, did_child_scroll, horizontal_navigation_disposition,
    parent_scroll_disposition,
};

use crate::ConfigError;
use crate::animation::{AnimationId, AnimationIds, Axis};
use crate::config::{InertiaConfig, ScrollDirection, SmoothingOverlap};
use crate::input::{Modifiers, ScrollInputEvent, TouchEvent, WheelEvent};
use crate::momentum::Momentum;
use crate::smoothing::WheelSmoothing;
use crate::target::ScrollTarget;
use crate::touch::TouchTracker;
use crate::wheel::normalize_wheel;

/// Turns wheel and touch input into scroll offsets on a [`ScrollTarget`].
///
/// The controller never schedules anything itself. Input handlers update
/// state and may write offsets immediately; animations (smoothed wheel ticks
/// and touch momentum) advance one step per [`on_frame`](Self::on_frame)
/// call, which the host makes once per display frame while
/// [`is_animating`](Self::is_animating) is `true`.
///
/// Handlers return an [`EventDisposition`] telling the host whether to
/// suppress the platform default or stop propagation.
///
/// Every handler is a no-op when no scroll container is set.
#[derive(Debug)]
pub struct ScrollInertia<T> {
    config: InertiaConfig,
    container: Option<T>,
    tracker: TouchTracker,
    momentum: Option<Momentum>,
    smoothing: SmallVec<[WheelSmoothing; 2]>,
    /// Running destination shared by all animations.
    next: Vec2,
    ids: AnimationIds,
}

impl<T: ScrollTarget> ScrollInertia<T> {
    /// Creates a controller without a scroll container.
    ///
    /// The configuration is used as given; see [`try_new`](Self::try_new)
    /// for a validating constructor.
    #[must_use]
    pub fn new(config: InertiaConfig) -> Self {
        Self {
            config,
            container: None,
            tracker: TouchTracker::new(),
            momentum: None,
            smoothing: SmallVec::new(),
            next: Vec2::ZERO,
            ids: AnimationIds::default(),
        }
    }

    /// Creates a controller after validating `config`.
    pub fn try_new(config: InertiaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Builder form of [`set_scroll_container`](Self::set_scroll_container).
    #[must_use]
    pub fn with_scroll_container(mut self, container: T) -> Self {
        self.container = Some(container);
        self
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &InertiaConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    ///
    /// Changes apply to gestures and animations started afterwards.
    pub fn config_mut(&mut self) -> &mut InertiaConfig {
        &mut self.config
    }

    /// The scroll container, if set.
    #[must_use]
    pub fn scroll_container(&self) -> Option<&T> {
        self.container.as_ref()
    }

    /// Mutable access to the scroll container, if set.
    pub fn scroll_container_mut(&mut self) -> Option<&mut T> {
        self.container.as_mut()
    }

    /// Sets the scroll container, returning the previous one.
    pub fn set_scroll_container(&mut self, container: T) -> Option<T> {
        self.container.replace(container)
    }

    /// Removes the scroll container and cancels every animation.
    pub fn take_scroll_container(&mut self) -> Option<T> {
        self.cancel_animations();
        self.container.take()
    }

    /// Returns `true` while any animation still needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.momentum.is_some() || !self.smoothing.is_empty()
    }

    /// Returns `true` while a touch gesture is being tracked.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Id of the running momentum animation, if any.
    #[must_use]
    pub fn momentum_id(&self) -> Option<AnimationId> {
        self.momentum.as_ref().map(Momentum::id)
    }

    /// Ids of the running smoothed wheel sequences, oldest first.
    pub fn smoothing_ids(&self) -> impl Iterator<Item = AnimationId> + '_ {
        self.smoothing.iter().map(WheelSmoothing::id)
    }

    /// Stops every running animation without moving the container.
    pub fn cancel_animations(&mut self) {
        if let Some(momentum) = self.momentum.take() {
            log::debug!("cancelled momentum {:?}", momentum.id());
        }
        if !self.smoothing.is_empty() {
            log::debug!("cancelled {} smoothed wheel sequence(s)", self.smoothing.len());
            self.smoothing.clear();
        }
    }

    /// Routes an event to the matching handler.
    pub fn handle_event(&mut self, event: &ScrollInputEvent) -> EventDisposition {
        match event {
            ScrollInputEvent::Wheel(wheel) => self.on_wheel(wheel),
            ScrollInputEvent::TouchStart(touch) => self.on_touch_start(touch),
            ScrollInputEvent::TouchMove(touch) => self.on_touch_move(touch),
            ScrollInputEvent::TouchEnd(touch) => self.on_touch_end(touch),
        }
    }

    /// Handles a wheel or trackpad scroll.
    ///
    /// - Ctrl-wheel (zoom) is ignored.
    /// - When the event's path shows a nested region that can still scroll in
    ///   the wheel's direction, the event is left to it.
    /// - Horizontal controllers scroll on the horizontal delta, or on the
    ///   vertical delta while shift is held. Vertical controllers scroll on the
    ///   vertical delta unless shift is held.
    /// - With smoothing enabled the scroll is spread over the following
    ///   frames; otherwise the offset is written immediately as
    ///   `start + delta * wheel_step`.
    pub fn on_wheel(&mut self, event: &WheelEvent) -> EventDisposition {
        let Some(container) = self.container.as_ref() else {
            return EventDisposition::empty();
        };
        let Some(delta) = normalize_wheel(event, self.config.wheel_step) else {
            log::trace!("ignoring ctrl+wheel");
            return EventDisposition::empty();
        };
        let start = container.scroll_offset();
        let metrics = container.metrics();

        if let Some(path) = &event.composed_path {
            if did_child_scroll(path, delta.x, delta.y) {
                return EventDisposition::empty();
            }
        }

        let step = self.config.wheel_step;
        let shift = event.modifiers.contains(Modifiers::SHIFT);
        let delta_x = delta.x.filter(|d| *d != 0.0);
        let delta_y = delta.y.filter(|d| *d != 0.0);

        match self.config.direction {
            ScrollDirection::Horizontal => {
                if let Some(delta_x) = delta_x {
                    let next_left = start.x + delta_x * step;
                    self.wheel_scroll(Axis::X, next_left, delta_x);
                    return metrics.content.map_or(EventDisposition::empty(), |content| {
                        horizontal_navigation_disposition(next_left, content.width)
                    });
                }
                if let Some(delta_y) = delta_y.filter(|_| shift) {
                    self.wheel_scroll(Axis::X, start.x + delta_y * step, delta_y);
                }
                EventDisposition::empty()
            }
            ScrollDirection::Vertical => match delta_y.filter(|_| !shift) {
                Some(delta_y) => {
                    let next_top = start.y + delta_y * step;
                    self.wheel_scroll(Axis::Y, next_top, delta_y);
                    self.parent_guard(Some(next_top), true)
                }
                None => EventDisposition::empty(),
            },
        }
    }

    /// Handles a finger touching down.
    ///
    /// Cancels running momentum and starts tracking from the container's
    /// current offset.
    pub fn on_touch_start(&mut self, event: &TouchEvent) -> EventDisposition {
        let Some(container) = self.container.as_ref() else {
            return EventDisposition::empty();
        };
        let offset = container.scroll_offset();
        if let Some(momentum) = self.momentum.take() {
            log::debug!("touch start cancelled momentum {:?}", momentum.id());
        }
        self.tracker.begin(offset, event);
        self.touch_guard(false)
    }

    /// Handles a finger moving: the content follows the finger, subject to the
    /// horizontal swipe tolerance.
    pub fn on_touch_move(&mut self, event: &TouchEvent) -> EventDisposition {
        let Some(container) = self.container.as_mut() else {
            return EventDisposition::empty();
        };
        let Some(destination) = self.tracker.track(event, &self.config) else {
            return EventDisposition::empty();
        };
        container.scroll_to(destination);
        self.touch_guard(true)
    }

    /// Handles a finger lifting; a fast enough release starts momentum.
    pub fn on_touch_end(&mut self, _event: &TouchEvent) -> EventDisposition {
        let Some(container) = self.container.as_ref() else {
            return EventDisposition::empty();
        };
        if let Some(velocity) = self.tracker.release() {
            self.next = container.scroll_offset();
            let momentum = Momentum::new(self.ids.next_id(), velocity, &self.config);
            log::debug!("momentum {:?} from velocity {velocity:?}", momentum.id());
            self.momentum = Some(momentum);
        }
        self.touch_guard(false)
    }

    /// Advances every running animation by one frame.
    ///
    /// Smoothed wheel sequences advance in the order they started, then
    /// momentum. Returns [`is_animating`](Self::is_animating).
    pub fn on_frame(&mut self) -> bool {
        let Some(container) = self.container.as_mut() else {
            return false;
        };

        let next = &mut self.next;
        self.smoothing.retain(|smoothing| match smoothing.step(next) {
            Some(Axis::X) => {
                container.set_scroll_x(next.x);
                true
            }
            Some(Axis::Y) => {
                container.set_scroll_y(next.y);
                true
            }
            None => false,
        });

        if let Some(momentum) = self.momentum.as_mut() {
            if momentum.step(&mut self.next) {
                container.scroll_to(self.next);
            } else {
                log::debug!("momentum {:?} finished", momentum.id());
                self.momentum = None;
            }
        }

        self.is_animating()
    }

    /// Writes a wheel scroll directly, or starts smoothing it.
    fn wheel_scroll(&mut self, axis: Axis, destination: f64, delta: f64) {
        let Some(container) = self.container.as_mut() else {
            return;
        };
        if !self.config.smoothing_enabled() {
            match axis {
                Axis::X => container.set_scroll_x(destination),
                Axis::Y => container.set_scroll_y(destination),
            }
            return;
        }

        if self.config.smoothing_overlap == SmoothingOverlap::Replace {
            let before = self.smoothing.len();
            self.smoothing.retain(|smoothing| smoothing.axis() != axis);
            if self.smoothing.len() != before {
                log::debug!(
                    "wheel tick replaced {} smoothing sequence(s)",
                    before - self.smoothing.len()
                );
            }
        }
        self.next = container.scroll_offset();
        let smoothing = WheelSmoothing::new(self.ids.next_id(), axis, delta, &self.config);
        self.smoothing.push(smoothing);
    }

    /// Parent-scroll guard for touch input on vertical controllers.
    fn touch_guard(&self, prevent_default: bool) -> EventDisposition {
        if self.config.is_vertical() {
            self.parent_guard(None, prevent_default)
        } else {
            EventDisposition::empty()
        }
    }

    /// Keeps ancestors from scrolling while the container still has room.
    ///
    /// `position` is the expected next scroll-top; `None` uses the current one.
    fn parent_guard(&self, position: Option<f64>, prevent_default: bool) -> EventDisposition {
        let Some(container) = self.container.as_ref() else {
            return EventDisposition::empty();
        };
        let Some(max) = container.metrics().max_scroll_top() else {
            return EventDisposition::empty();
        };
        let position = position.unwrap_or_else(|| container.scroll_offset().y);
        parent_scroll_disposition(position, max, prevent_default)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Size;
    use understory_scroll_chain::{Overflow, ScrollChain, ScrollRegion};

    use super::*;
    use crate::input::DeltaMode;
    use crate::target::{ScrollBox, ScrollMetrics};

    fn tall_box() -> ScrollBox {
        ScrollBox::new(Size::new(400.0, 300.0), Size::new(2000.0, 10_000.0))
    }

    fn controller(config: InertiaConfig) -> ScrollInertia<ScrollBox> {
        ScrollInertia::new(config).with_scroll_container(tall_box())
    }

    fn direct(direction: ScrollDirection) -> ScrollInertia<ScrollBox> {
        controller(InertiaConfig::new(direction).with_smoothing_duration(0.0))
    }

    fn offset(inertia: &ScrollInertia<ScrollBox>) -> Vec2 {
        inertia.scroll_container().unwrap().offset()
    }

    fn settle(inertia: &mut ScrollInertia<ScrollBox>) -> usize {
        let mut frames = 0;
        while inertia.on_frame() {
            frames += 1;
            assert!(frames < 10_000, "animations must terminate");
        }
        frames
    }

    fn flick(inertia: &mut ScrollInertia<ScrollBox>) {
        inertia.on_touch_start(&TouchEvent::new(0.0, 0.0, 0));
        inertia.on_touch_move(&TouchEvent::new(0.0, -100.0, 10));
        inertia.on_touch_end(&TouchEvent::new(0.0, -100.0, 10));
    }

    #[test]
    fn high_resolution_wheel_scrolls_two_steps() {
        let mut inertia = direct(ScrollDirection::Vertical);
        inertia.on_wheel(&WheelEvent::wheel_delta(0.0, -240.0));
        assert_eq!(offset(&inertia).y, 100.0);
        assert!(!inertia.is_animating());
    }

    #[test]
    fn standard_wheel_scrolls_one_step() {
        let mut inertia = direct(ScrollDirection::Vertical);
        inertia.on_wheel(&WheelEvent::delta(0.0, 1.0, DeltaMode::Line));
        assert_eq!(offset(&inertia).y, 50.0);
    }

    #[test]
    fn shift_wheel_scrolls_horizontal_controller_sideways() {
        let mut inertia = direct(ScrollDirection::Horizontal);
        let event = WheelEvent::wheel_delta(0.0, -240.0).with_modifiers(Modifiers::SHIFT);
        inertia.on_wheel(&event);
        assert_eq!(offset(&inertia), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn shift_wheel_does_not_scroll_vertical_controller() {
        let mut inertia = direct(ScrollDirection::Vertical);
        let event = WheelEvent::wheel_delta(0.0, -240.0).with_modifiers(Modifiers::SHIFT);
        inertia.on_wheel(&event);
        assert_eq!(offset(&inertia), Vec2::ZERO);
    }

    #[test]
    fn horizontal_wheel_scrolls_horizontal_controller() {
        let mut inertia = direct(ScrollDirection::Horizontal);
        let disposition = inertia.on_wheel(&WheelEvent::wheel_delta(-120.0, 0.0));
        assert_eq!(offset(&inertia), Vec2::new(50.0, 0.0));
        // 50 is strictly inside the content width.
        assert_eq!(disposition, EventDisposition::PREVENT_DEFAULT);
    }

    #[test]
    fn horizontal_wheel_is_ignored_by_vertical_controller() {
        let mut inertia = direct(ScrollDirection::Vertical);
        inertia.on_wheel(&WheelEvent::wheel_delta(-120.0, 0.0));
        assert_eq!(offset(&inertia), Vec2::ZERO);
    }

    #[test]
    fn ctrl_wheel_is_ignored() {
        let mut inertia = direct(ScrollDirection::Vertical);
        let event = WheelEvent::wheel_delta(0.0, -240.0).with_modifiers(Modifiers::CTRL);
        assert!(inertia.on_wheel(&event).is_empty());
        assert_eq!(offset(&inertia), Vec2::ZERO);
    }

    #[test]
    fn vertical_wheel_guards_parent_while_inside_range() {
        let mut inertia = direct(ScrollDirection::Vertical);
        let disposition = inertia.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0));
        assert_eq!(
            disposition,
            EventDisposition::PREVENT_DEFAULT | EventDisposition::STOP_PROPAGATION
        );

        // Scrolling up from the top lets the page take over.
        let mut inertia = direct(ScrollDirection::Vertical);
        let disposition = inertia.on_wheel(&WheelEvent::wheel_delta(0.0, 120.0));
        assert!(disposition.is_empty());
    }

    #[test]
    fn nested_scrollable_region_keeps_the_wheel() {
        let mut inertia = direct(ScrollDirection::Vertical);
        let dropdown = ScrollRegion::new(Size::new(100.0, 400.0), Size::new(100.0, 100.0))
            .with_overflow(Overflow::Hidden, Overflow::Auto);
        let path = ScrollChain::new()
            .with(dropdown)
            .with(ScrollRegion::boundary());
        let event = WheelEvent::wheel_delta(0.0, -120.0).with_composed_path(path);
        assert!(inertia.on_wheel(&event).is_empty());
        assert_eq!(offset(&inertia), Vec2::ZERO);
    }

    #[test]
    fn exhausted_nested_region_passes_the_wheel_on() {
        let mut inertia = direct(ScrollDirection::Vertical);
        let dropdown = ScrollRegion::new(Size::new(100.0, 400.0), Size::new(100.0, 100.0))
            .with_overflow(Overflow::Hidden, Overflow::Auto)
            .with_offset(Vec2::new(0.0, 300.0));
        let path = ScrollChain::new()
            .with(dropdown)
            .with(ScrollRegion::boundary());
        inertia.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0).with_composed_path(path));
        assert_eq!(offset(&inertia).y, 50.0);
    }

    #[test]
    fn smoothed_wheel_moves_over_frames() {
        let mut inertia = controller(InertiaConfig::default());
        inertia.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0));
        // Nothing moves until the first frame.
        assert_eq!(offset(&inertia), Vec2::ZERO);
        assert!(inertia.is_animating());

        assert!(inertia.on_frame());
        let first = offset(&inertia).y;
        assert!(inertia.on_frame());
        assert!(offset(&inertia).y > first);

        settle(&mut inertia);
        assert!(offset(&inertia).y > 0.0);
        assert_eq!(inertia.smoothing_ids().count(), 0);
    }

    #[test]
    fn overlapping_smoothing_is_additive_by_default() {
        let mut single = controller(InertiaConfig::default());
        single.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0));
        settle(&mut single);

        let mut double = controller(InertiaConfig::default());
        double.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0));
        double.on_frame();
        double.on_frame();
        double.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0));
        assert_eq!(double.smoothing_ids().count(), 2);
        settle(&mut double);

        assert!(offset(&double).y > offset(&single).y);
    }

    #[test]
    fn replace_policy_keeps_one_sequence_per_axis() {
        let config = InertiaConfig::default().with_smoothing_overlap(SmoothingOverlap::Replace);
        let mut inertia = controller(config);
        inertia.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0));
        let first: Vec<_> = inertia.smoothing_ids().collect();
        inertia.on_frame();
        inertia.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0));
        let second: Vec<_> = inertia.smoothing_ids().collect();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_ne!(first, second);
    }

    #[test]
    fn small_horizontal_swipe_only_scrolls_vertically() {
        let mut inertia = controller(InertiaConfig::default());
        inertia.on_touch_start(&TouchEvent::new(50.0, 50.0, 0));
        inertia.on_touch_move(&TouchEvent::new(40.0, 20.0, 16));
        assert_eq!(offset(&inertia), Vec2::new(0.0, 30.0));
    }

    #[test]
    fn wide_horizontal_swipe_scrolls_without_jump() {
        let mut inertia = controller(InertiaConfig::default());
        inertia.on_touch_start(&TouchEvent::new(100.0, 50.0, 0));
        inertia.on_touch_move(&TouchEvent::new(70.0, 50.0, 16));
        // 30px of travel minus the 20px tolerance.
        assert_eq!(offset(&inertia), Vec2::new(10.0, 0.0));
        inertia.on_touch_move(&TouchEvent::new(60.0, 50.0, 32));
        assert_eq!(offset(&inertia), Vec2::new(20.0, 0.0));
    }

    #[test]
    fn fast_swipe_turns_into_momentum() {
        let mut inertia = controller(InertiaConfig::default());
        flick(&mut inertia);
        assert_eq!(offset(&inertia).y, 100.0);
        assert!(inertia.momentum_id().is_some());

        let frames = settle(&mut inertia);
        // At least 300ms worth of 60Hz frames.
        assert!(frames >= 18, "{frames} frames");
        assert!(offset(&inertia).y > 3000.0, "{:?}", offset(&inertia));
        assert_eq!(offset(&inertia).x, 0.0);
        assert_eq!(inertia.momentum_id(), None);
    }

    #[test]
    fn new_touch_cancels_momentum() {
        let mut undisturbed = controller(InertiaConfig::default());
        flick(&mut undisturbed);
        settle(&mut undisturbed);

        let mut interrupted = controller(InertiaConfig::default());
        flick(&mut interrupted);
        for _ in 0..5 {
            interrupted.on_frame();
        }
        interrupted.on_touch_start(&TouchEvent::new(0.0, 0.0, 200));
        assert!(!interrupted.is_animating());
        interrupted.on_touch_end(&TouchEvent::new(0.0, 0.0, 210));
        settle(&mut interrupted);

        assert!(offset(&interrupted).y < offset(&undisturbed).y);
    }

    #[test]
    fn each_momentum_run_gets_a_new_id() {
        let mut inertia = controller(InertiaConfig::default());
        flick(&mut inertia);
        let first = inertia.momentum_id().unwrap();
        flick(&mut inertia);
        let second = inertia.momentum_id().unwrap();
        assert!(second > first);
    }

    #[test]
    fn slow_release_has_no_momentum() {
        let mut inertia = controller(InertiaConfig::default());
        inertia.on_touch_start(&TouchEvent::new(0.0, 0.0, 0));
        inertia.on_touch_move(&TouchEvent::new(0.0, -5.0, 90));
        inertia.on_touch_end(&TouchEvent::new(0.0, -5.0, 95));
        assert!(!inertia.is_animating());
        assert_eq!(offset(&inertia).y, 5.0);
    }

    #[test]
    fn touch_guard_applies_to_vertical_controllers() {
        let mut inertia = controller(InertiaConfig::default());
        inertia.scroll_container_mut().unwrap().set_scroll_y(500.0);
        assert_eq!(
            inertia.on_touch_start(&TouchEvent::new(0.0, 0.0, 0)),
            EventDisposition::STOP_PROPAGATION
        );
        assert_eq!(
            inertia.on_touch_move(&TouchEvent::new(0.0, -10.0, 16)),
            EventDisposition::PREVENT_DEFAULT | EventDisposition::STOP_PROPAGATION
        );

        let mut inertia = controller(InertiaConfig::new(ScrollDirection::Horizontal));
        inertia.scroll_container_mut().unwrap().set_scroll_y(500.0);
        assert!(inertia.on_touch_start(&TouchEvent::new(0.0, 0.0, 0)).is_empty());
    }

    #[test]
    fn missing_container_is_a_no_op() {
        let mut inertia: ScrollInertia<ScrollBox> = ScrollInertia::new(InertiaConfig::default());
        let events = [
            ScrollInputEvent::Wheel(WheelEvent::wheel_delta(0.0, -240.0)),
            ScrollInputEvent::Wheel(WheelEvent::delta(3.0, 1.0, DeltaMode::Pixel)),
            ScrollInputEvent::TouchStart(TouchEvent::new(0.0, 0.0, 0)),
            ScrollInputEvent::TouchMove(TouchEvent::new(0.0, -100.0, 10)),
            ScrollInputEvent::TouchEnd(TouchEvent::new(0.0, -100.0, 10)),
        ];
        for event in &events {
            assert!(inertia.handle_event(event).is_empty());
        }
        assert!(!inertia.on_frame());
        assert!(!inertia.is_animating());
    }

    #[test]
    fn missing_content_disables_guards() {
        struct Bare(Vec2);

        impl ScrollTarget for Bare {
            fn scroll_offset(&self) -> Vec2 {
                self.0
            }
            fn set_scroll_x(&mut self, x: f64) {
                self.0.x = x;
            }
            fn set_scroll_y(&mut self, y: f64) {
                self.0.y = y;
            }
            fn metrics(&self) -> ScrollMetrics {
                ScrollMetrics::default()
            }
        }

        let config = InertiaConfig::default().with_smoothing_duration(0.0);
        let mut inertia = ScrollInertia::new(config).with_scroll_container(Bare(Vec2::ZERO));
        assert!(inertia.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0)).is_empty());
        // Offsets are written unclamped.
        assert_eq!(inertia.scroll_container().unwrap().0, Vec2::new(0.0, 50.0));
    }

    #[test]
    fn taking_the_container_cancels_animations() {
        let mut inertia = controller(InertiaConfig::default());
        flick(&mut inertia);
        assert!(inertia.is_animating());
        let container = inertia.take_scroll_container();
        assert!(container.is_some());
        assert!(!inertia.is_animating());
        assert!(!inertia.on_frame());
    }

    #[test]
    fn try_new_validates() {
        let config = InertiaConfig::default().with_wheel_step(0.0);
        assert!(ScrollInertia::<ScrollBox>::try_new(config).is_err());
        assert!(ScrollInertia::<ScrollBox>::try_new(InertiaConfig::default()).is_ok());
    }

    #[test]
    fn direct_writes_are_idempotent() {
        let mut inertia = direct(ScrollDirection::Vertical);
        inertia.scroll_container_mut().unwrap().set_scroll_y(75.0);
        let once = offset(&inertia);
        inertia.scroll_container_mut().unwrap().set_scroll_y(75.0);
        assert_eq!(offset(&inertia), once);
    }
}
