// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smoothed wheel scrolling.
//!
//! A single wheel tick is spread over several frames. Progress `x` starts at
//! `-1` and advances by `0.08 / smoothing_duration` per frame; each frame
//! scrolls by `(-3x² + 3) * delta * 2 * smoothing_step`. The sequence ends on
//! the first frame that finds `x > 1`.

use kurbo::Vec2;

use crate::InertiaConfig;
use crate::animation::{AnimationId, Axis};

/// Progress added per frame, before dividing by the smoothing duration.
pub const WHEEL_ANIMATION_STEP: f64 = 0.08;

const START_PROGRESS: f64 = -1.0;
const END_PROGRESS: f64 = 1.0;
const CURVE_COEFFICIENT: f64 = -3.0;
const CURVE_OFFSET: f64 = 3.0;
const DELTA_MULTIPLIER: f64 = 2.0;

/// One smoothed wheel tick in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelSmoothing {
    id: AnimationId,
    axis: Axis,
    delta: f64,
    smoothing_step: f64,
    increment: f64,
    progress: f64,
}

impl WheelSmoothing {
    /// Starts smoothing a normalized wheel `delta` along `axis`.
    #[must_use]
    pub fn new(id: AnimationId, axis: Axis, delta: f64, config: &InertiaConfig) -> Self {
        Self {
            id,
            axis,
            delta,
            smoothing_step: config.smoothing_step,
            increment: WHEEL_ANIMATION_STEP / config.smoothing_duration,
            progress: START_PROGRESS,
        }
    }

    /// The sequence's id.
    #[must_use]
    pub const fn id(&self) -> AnimationId {
        self.id
    }

    /// The axis this sequence drives.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Current progress.
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Scroll distance for one frame at `progress`.
    #[must_use]
    pub fn frame_delta(progress: f64, delta: f64, smoothing_step: f64) -> f64 {
        (CURVE_COEFFICIENT * progress * progress + CURVE_OFFSET)
            * delta
            * DELTA_MULTIPLIER
            * smoothing_step
    }

    /// Advances one frame, adding this frame's distance to `next` on the
    /// sequence's axis.
    ///
    /// Returns the axis to write, or `None` once the sequence has finished;
    /// a finished sequence leaves `next` untouched.
    pub fn step(&mut self, next: &mut Vec2) -> Option<Axis> {
        if self.progress > END_PROGRESS {
            return None;
        }
        let distance = Self::frame_delta(self.progress, self.delta, self.smoothing_step);
        match self.axis {
            Axis::X => next.x += distance,
            Axis::Y => next.y += distance,
        }
        self.progress += self.increment;
        Some(self.axis)
    }
}
