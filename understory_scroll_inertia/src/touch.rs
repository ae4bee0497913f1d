// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch gesture tracking: scroll-follows-finger, swipe axis lock, and
//! release velocity.
//!
//! ## Axis lock
//!
//! Vertical swipes are rarely perfectly vertical. Until the finger has moved
//! `swipe_tolerance_x` horizontally, the gesture only scrolls vertically.
//! The first time the tolerance is crossed, the direction of the crossing is
//! recorded for the rest of the gesture and the horizontal offset is shifted
//! back by exactly the tolerance in that direction, so content starts moving
//! sideways from where it was instead of jumping.
//!
//! ## Release velocity
//!
//! Each move that arrives less than [`TOUCH_TIME_THRESHOLD`] ms after the
//! previous one records a speed sample per axis in a [`SpeedRing`]. On
//! release the samples are averaged. Momentum starts only when the average
//! is fast enough ([`SPEED_THRESHOLD`]) and the finger was still moving in
//! its last step ([`MOVEMENT_THRESHOLD`]); a finger that stops before lifting
//! produces no momentum.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::InertiaConfig;
use crate::input::TouchEvent;

/// Number of speed samples kept per axis.
pub const SAVED_SPEEDS_CAPACITY: usize = 5;

/// Moves further apart than this (in milliseconds) do not produce a speed
/// sample.
pub const TOUCH_TIME_THRESHOLD: u64 = 100;

/// Minimum average speed (distance per millisecond) for momentum.
pub const SPEED_THRESHOLD: f64 = 0.1;

/// Minimum distance of the last move step for momentum.
pub const MOVEMENT_THRESHOLD: f64 = 2.0;

/// Fixed-capacity FIFO of the most recent speed samples.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpeedRing {
    samples: [Option<f64>; SAVED_SPEEDS_CAPACITY],
    next: usize,
}

impl SpeedRing {
    /// Records a sample, overwriting the oldest once full.
    pub fn push(&mut self, speed: f64) {
        self.samples[self.next] = Some(speed);
        self.next = (self.next + 1) % SAVED_SPEEDS_CAPACITY;
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.iter().flatten().count()
    }

    /// Returns `true` if no sample has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mean of the retained samples, or `0` when empty.
    #[must_use]
    pub fn average(&self) -> f64 {
        let (sum, count) = self
            .samples
            .iter()
            .flatten()
            .fold((0.0, 0_u32), |(sum, count), speed| (sum + speed, count + 1));
        if count == 0 {
            0.0
        } else {
            sum / f64::from(count)
        }
    }

    /// Drops all samples.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// State of one touch gesture between touch start and touch end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchTracker {
    active: bool,
    start_offset: Vec2,
    touch_start: Point,
    last_touch: Point,
    last_time: u64,
    last_moved: Vec2,
    total_moved_x: f64,
    lock_direction: Option<f64>,
    speeds_x: SpeedRing,
    speeds_y: SpeedRing,
}

impl TouchTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` between [`begin`](Self::begin) and
    /// [`release`](Self::release).
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.active
    }

    /// Direction recorded when the swipe first left the horizontal tolerance:
    /// `1.0`, `-1.0`, or `0.0`. `None` while the gesture is still locked to
    /// the vertical axis.
    #[must_use]
    pub const fn lock_direction(&self) -> Option<f64> {
        self.lock_direction
    }

    /// Horizontal finger travel accumulated so far.
    #[must_use]
    pub const fn total_moved_x(&self) -> f64 {
        self.total_moved_x
    }

    /// Speed samples recorded so far, per axis.
    #[must_use]
    pub const fn speeds(&self) -> (&SpeedRing, &SpeedRing) {
        (&self.speeds_x, &self.speeds_y)
    }

    /// Starts a gesture at `event` with the container at `offset`.
    ///
    /// Any state from a previous gesture is discarded.
    pub fn begin(&mut self, offset: Vec2, event: &TouchEvent) {
        *self = Self {
            active: true,
            start_offset: offset,
            touch_start: event.position,
            last_touch: event.position,
            last_time: event.timestamp,
            ..Self::default()
        };
    }

    /// Records a move and returns the offset the container should scroll to.
    ///
    /// Returns `None` when no gesture is being tracked.
    pub fn track(&mut self, event: &TouchEvent, config: &InertiaConfig) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        let position = event.position;
        let direction = sign(config.inertia_step);
        let destination = self.start_offset + (self.touch_start - position) * direction;

        let elapsed = event.timestamp.saturating_sub(self.last_time);
        if elapsed != 0 && elapsed < TOUCH_TIME_THRESHOLD {
            let speed = (self.last_touch - position) / elapsed as f64;
            self.speeds_x.push(speed.x);
            self.speeds_y.push(speed.y);
        }
        self.last_time = event.timestamp;
        self.last_moved = self.last_touch - position;
        self.last_touch = position;
        self.total_moved_x += self.last_moved.x;

        let tolerance = config.swipe_tolerance_x;
        if self.total_moved_x.abs() < tolerance && self.lock_direction.is_none() {
            return Some(Vec2::new(self.start_offset.x, destination.y));
        }
        let start_x = self.start_offset.x;
        let lock = *self
            .lock_direction
            .get_or_insert_with(|| sign(destination.x - start_x));
        Some(Vec2::new(destination.x - lock * tolerance, destination.y))
    }

    /// Ends the gesture and returns the release velocity when it is fast
    /// enough to start momentum.
    pub fn release(&mut self) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        self.active = false;
        let speed = Vec2::new(self.speeds_x.average(), self.speeds_y.average());
        let fast = speed.x.abs() > SPEED_THRESHOLD || speed.y.abs() > SPEED_THRESHOLD;
        let moving = self.last_moved.x.abs() > MOVEMENT_THRESHOLD
            || self.last_moved.y.abs() > MOVEMENT_THRESHOLD;
        (fast && moving).then_some(speed)
    }
}

/// Sign of `value` as `1.0`, `-1.0`, or `0.0` for zero and NaN.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
