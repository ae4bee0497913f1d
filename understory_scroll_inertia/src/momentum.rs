// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Momentum after a touch release.
//!
//! Progress `x` starts at `0`. Each frame first checks `x > 6` (the run is
//! over), then adds `0.05 / inertia_duration` and moves by
//! `speed * 15 * inertia_step`, scaled by `|2 / (x + 0.55) - 0.3|` once
//! `x > 1`. The axis gates are fixed at release: the horizontal axis only
//! moves while the swipe was mostly horizontal (`|vy| <= |vx| * inertia_delta_y`),
//! the vertical axis only while it was vertical enough
//! (`|vy| >= |vx| * inertia_delta_x`). Between the two thresholds both axes
//! move and the swipe glides diagonally.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::InertiaConfig;
use crate::animation::AnimationId;

/// Progress added per frame, before dividing by the inertia duration.
pub const TIME_STEP_INCREMENT: f64 = 0.05;

/// Progress past which the run stops.
pub const INERTIA_CANCEL_THRESHOLD: f64 = 6.0;

/// Progress up to which speed is held constant.
pub const INERTIA_BREAKPOINT: f64 = 1.0;

/// Release speed (per millisecond) to per-frame distance.
pub const INERTIA_MULTIPLIER: f64 = 15.0;

const FALLOFF_NUMERATOR: f64 = 2.0;
const FALLOFF_OFFSET: f64 = 0.55;
const FALLOFF_SUBTRACTION: f64 = 0.3;

/// A momentum run in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct Momentum {
    id: AnimationId,
    velocity: Vec2,
    step_modifier: f64,
    increment: f64,
    advance_x: bool,
    advance_y: bool,
    progress: f64,
}

impl Momentum {
    /// Starts a run with the release `velocity` (distance per millisecond).
    #[must_use]
    pub fn new(id: AnimationId, velocity: Vec2, config: &InertiaConfig) -> Self {
        let abs_x = velocity.x.abs();
        let abs_y = velocity.y.abs();
        Self {
            id,
            velocity,
            step_modifier: config.inertia_step,
            increment: TIME_STEP_INCREMENT / config.inertia_duration,
            advance_x: abs_y <= abs_x * config.inertia_delta_y,
            advance_y: abs_y >= abs_x * config.inertia_delta_x,
            progress: 0.0,
        }
    }

    /// The run's id.
    #[must_use]
    pub const fn id(&self) -> AnimationId {
        self.id
    }

    /// Release velocity.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current progress.
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether the horizontal and vertical axes move during this run.
    #[must_use]
    pub const fn advancing_axes(&self) -> (bool, bool) {
        (self.advance_x, self.advance_y)
    }

    /// Speed scale at `progress`: `1` up to the breakpoint, then
    /// `|2 / (x + 0.55) - 0.3|`.
    #[must_use]
    pub fn falloff(progress: f64) -> f64 {
        if progress <= INERTIA_BREAKPOINT {
            1.0
        } else {
            (FALLOFF_NUMERATOR / (progress + FALLOFF_OFFSET) - FALLOFF_SUBTRACTION).abs()
        }
    }

    /// Advances one frame, adding this frame's distance to `next`.
    ///
    /// Returns `false` once the run is over; a finished run leaves `next`
    /// untouched. While it returns `true` both axes of `next` should be
    /// written to the container.
    pub fn step(&mut self, next: &mut Vec2) -> bool {
        if self.progress > INERTIA_CANCEL_THRESHOLD {
            return false;
        }
        self.progress += self.increment;

        let distance =
            self.velocity * (Self::falloff(self.progress) * INERTIA_MULTIPLIER * self.step_modifier);
        if self.advance_x {
            next.x += distance.x;
        }
        if self.advance_y {
            next.y += distance.y;
        }
        true
    }
}
