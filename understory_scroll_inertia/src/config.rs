// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for wheel smoothing, touch tracking and momentum.

use crate::ConfigError;

/// Axis the controller scrolls with the wheel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Wheel input scrolls the container's top offset.
    #[default]
    Vertical,
    /// Wheel input scrolls the container's left offset; shift+wheel is
    /// re-routed to this axis.
    Horizontal,
}

/// What happens when a wheel tick arrives while an earlier tick is still
/// being smoothed on the same axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmoothingOverlap {
    /// Every tick keeps running; their per-frame deltas add up.
    #[default]
    Additive,
    /// A new tick cancels the sequences already driving its axis.
    Replace,
}

/// Configuration for [`ScrollInertia`](crate::ScrollInertia).
///
/// All distances are in the scroll container's units (typically CSS pixels)
/// and all durations are in seconds. The defaults match what users of the
/// grid components are tuned to.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InertiaConfig {
    /// Axis driven by the wheel.
    pub direction: ScrollDirection,
    /// Distance scrolled per normalized wheel unit.
    pub wheel_step: f64,
    /// Multiplier applied to release velocity during momentum. Its sign also
    /// decides whether finger travel scrolls with or against the finger.
    pub inertia_step: f64,
    /// Multiplier applied to each smoothed wheel frame.
    pub smoothing_step: f64,
    /// How long a wheel tick is spread over. `0` writes wheel input directly.
    pub smoothing_duration: f64,
    /// Horizontal finger travel tolerated before a swipe may scroll sideways.
    pub swipe_tolerance_x: f64,
    /// Momentum moves horizontally only while `|vy| <= |vx| * inertia_delta_y`.
    pub inertia_delta_y: f64,
    /// Momentum moves vertically only while `|vy| >= |vx| * inertia_delta_x`.
    pub inertia_delta_x: f64,
    /// Time scale of the momentum animation.
    pub inertia_duration: f64,
    /// Policy for overlapping smoothed wheel ticks.
    pub smoothing_overlap: SmoothingOverlap,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            direction: ScrollDirection::Vertical,
            wheel_step: 50.0,
            inertia_step: 1.5,
            smoothing_step: 1.5,
            smoothing_duration: 0.5,
            swipe_tolerance_x: 20.0,
            inertia_delta_y: 3.0,
            inertia_delta_x: 2.0,
            inertia_duration: 0.5,
            smoothing_overlap: SmoothingOverlap::Additive,
        }
    }
}

impl InertiaConfig {
    /// Creates the default configuration for the given wheel axis.
    #[must_use]
    pub fn new(direction: ScrollDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Sets the wheel axis.
    #[must_use]
    pub const fn with_direction(mut self, direction: ScrollDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the distance per normalized wheel unit.
    #[must_use]
    pub const fn with_wheel_step(mut self, wheel_step: f64) -> Self {
        self.wheel_step = wheel_step;
        self
    }

    /// Sets the momentum velocity multiplier.
    #[must_use]
    pub const fn with_inertia_step(mut self, inertia_step: f64) -> Self {
        self.inertia_step = inertia_step;
        self
    }

    /// Sets the smoothed wheel frame multiplier.
    #[must_use]
    pub const fn with_smoothing_step(mut self, smoothing_step: f64) -> Self {
        self.smoothing_step = smoothing_step;
        self
    }

    /// Sets the smoothing duration; `0` disables smoothing.
    #[must_use]
    pub const fn with_smoothing_duration(mut self, smoothing_duration: f64) -> Self {
        self.smoothing_duration = smoothing_duration;
        self
    }

    /// Sets the horizontal swipe tolerance.
    #[must_use]
    pub const fn with_swipe_tolerance_x(mut self, swipe_tolerance_x: f64) -> Self {
        self.swipe_tolerance_x = swipe_tolerance_x;
        self
    }

    /// Sets both axis-dominance thresholds used by momentum.
    #[must_use]
    pub const fn with_inertia_deltas(mut self, inertia_delta_x: f64, inertia_delta_y: f64) -> Self {
        self.inertia_delta_x = inertia_delta_x;
        self.inertia_delta_y = inertia_delta_y;
        self
    }

    /// Sets the momentum time scale.
    #[must_use]
    pub const fn with_inertia_duration(mut self, inertia_duration: f64) -> Self {
        self.inertia_duration = inertia_duration;
        self
    }

    /// Sets the policy for overlapping smoothed wheel ticks.
    #[must_use]
    pub const fn with_smoothing_overlap(mut self, smoothing_overlap: SmoothingOverlap) -> Self {
        self.smoothing_overlap = smoothing_overlap;
        self
    }

    /// Returns `true` if wheel ticks are spread over several frames.
    #[must_use]
    pub fn smoothing_enabled(&self) -> bool {
        self.smoothing_duration != 0.0
    }

    /// Returns `true` for a vertical controller.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.direction == ScrollDirection::Vertical
    }

    /// Checks that the configuration describes a usable controller.
    ///
    /// Every numeric field must be finite, `wheel_step` must be non-zero,
    /// durations must not be negative, and `inertia_duration` must be
    /// positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("wheel_step", self.wheel_step),
            ("inertia_step", self.inertia_step),
            ("smoothing_step", self.smoothing_step),
            ("smoothing_duration", self.smoothing_duration),
            ("swipe_tolerance_x", self.swipe_tolerance_x),
            ("inertia_delta_y", self.inertia_delta_y),
            ("inertia_delta_x", self.inertia_delta_x),
            ("inertia_duration", self.inertia_duration),
        ];
        if let Some((field, value)) = fields.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }
        if self.wheel_step == 0.0 {
            return Err(ConfigError::ZeroWheelStep);
        }
        if self.smoothing_duration < 0.0 {
            return Err(ConfigError::NegativeDuration {
                field: "smoothing_duration",
                value: self.smoothing_duration,
            });
        }
        if self.inertia_duration <= 0.0 {
            return Err(ConfigError::NonPositiveInertiaDuration(self.inertia_duration));
        }
        Ok(())
    }
}
