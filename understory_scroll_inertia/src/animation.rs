// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven animation bookkeeping.

use core::num::NonZeroU64;

/// Identifier of one frame-driven animation sequence.
///
/// Each smoothed wheel tick and each momentum run gets a fresh id when it
/// starts. Ids are never reused by a controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(NonZeroU64);

impl AnimationId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// Allocates [`AnimationId`]s in increasing order.
#[derive(Clone, Debug, Default)]
pub(crate) struct AnimationIds {
    last: u64,
}

impl AnimationIds {
    pub(crate) fn next_id(&mut self) -> AnimationId {
        self.last = self.last.saturating_add(1);
        AnimationId(NonZeroU64::MIN.saturating_add(self.last - 1))
    }
}

/// A scroll axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal (scroll-left).
    X,
    /// Vertical (scroll-top).
    Y,
}
