// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollable region descriptors and the ordered chain that links them.

use core::ops::Deref;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Size, Vec2};
use smallvec::SmallVec;

/// Overflow behavior of a region along one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Content is not clipped and the region does not scroll.
    #[default]
    Visible,
    /// Content is clipped; the region can only be scrolled programmatically.
    Hidden,
    /// Content is clipped and scrolling is forbidden.
    Clip,
    /// The region scrolls when its content overflows.
    Auto,
    /// The region always scrolls.
    Scroll,
}

impl Overflow {
    /// Returns `true` if user input may scroll a region with this overflow.
    #[must_use]
    pub const fn is_scrollable(self) -> bool {
        matches!(self, Self::Auto | Self::Scroll)
    }
}

/// Snapshot of one scrollable region along an event's path.
///
/// Offsets, scroll sizes and client sizes are in the same logical units
/// (typically CSS pixels).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollRegion {
    /// Current scroll offset (`x` is scroll-left, `y` is scroll-top).
    pub offset: Vec2,
    /// Total scrollable extent of the region's content.
    pub scroll_size: Size,
    /// Visible extent of the region.
    pub client_size: Size,
    /// Horizontal overflow behavior.
    pub overflow_x: Overflow,
    /// Vertical overflow behavior.
    pub overflow_y: Overflow,
    /// Marks the display container that owns the inertia controller.
    ///
    /// Scans over a [`ScrollChain`] stop at the first boundary region without
    /// inspecting it.
    pub boundary: bool,
}

impl ScrollRegion {
    /// Creates a region with the given sizes and no overflow on either axis.
    #[must_use]
    pub fn new(scroll_size: Size, client_size: Size) -> Self {
        Self {
            scroll_size,
            client_size,
            ..Self::default()
        }
    }

    /// Creates the boundary region that terminates a scan.
    #[must_use]
    pub fn boundary() -> Self {
        Self {
            boundary: true,
            ..Self::default()
        }
    }

    /// Sets the scroll offset.
    #[must_use]
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the overflow behavior for both axes.
    #[must_use]
    pub fn with_overflow(mut self, overflow_x: Overflow, overflow_y: Overflow) -> Self {
        self.overflow_x = overflow_x;
        self.overflow_y = overflow_y;
        self
    }

    /// Returns `true` if the content is taller than the region.
    #[must_use]
    pub fn has_vertical_overflow(&self) -> bool {
        self.scroll_size.height > self.client_size.height
    }

    /// Returns `true` if the content is wider than the region.
    #[must_use]
    pub fn has_horizontal_overflow(&self) -> bool {
        self.scroll_size.width > self.client_size.width
    }

    /// Returns `true` if the region still has room to scroll vertically in
    /// the direction of `delta`.
    ///
    /// A positive delta asks about room towards the end; anything else
    /// (zero, negative, or an axis with no delta) asks about room towards the
    /// start.
    #[must_use]
    pub fn can_scroll_vertically(&self, delta: Option<f64>) -> bool {
        if !self.overflow_y.is_scrollable() {
            return false;
        }
        if delta.is_some_and(|d| d > 0.0) {
            self.scroll_size.height - self.offset.y.round().abs() != self.client_size.height
        } else {
            self.offset.y != 0.0
        }
    }

    /// Returns `true` if the region still has room to scroll horizontally in
    /// the direction of `delta`.
    ///
    /// See [`ScrollRegion::can_scroll_vertically`] for how `delta` is read.
    #[must_use]
    pub fn can_scroll_horizontally(&self, delta: Option<f64>) -> bool {
        if !self.overflow_x.is_scrollable() {
            return false;
        }
        if delta.is_some_and(|d| d > 0.0) {
            self.scroll_size.width - self.offset.x.round().abs() != self.client_size.width
        } else {
            self.offset.x != 0.0
        }
    }
}

/// Ordered list of regions from the event target outward.
///
/// This is the explicit form of a composed event path: index `0` is the
/// innermost region, and a [`ScrollRegion::boundary`] entry marks where the
/// owner of the scroll controller sits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollChain {
    regions: SmallVec<[ScrollRegion; 8]>,
}

impl ScrollChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next region outward.
    pub fn push(&mut self, region: ScrollRegion) {
        self.regions.push(region);
    }

    /// Builder form of [`ScrollChain::push`].
    #[must_use]
    pub fn with(mut self, region: ScrollRegion) -> Self {
        self.push(region);
        self
    }

    /// Regions that precede the first boundary.
    pub fn inner_regions(&self) -> impl Iterator<Item = &ScrollRegion> {
        self.regions.iter().take_while(|region| !region.boundary)
    }
}

impl Deref for ScrollChain {
    type Target = [ScrollRegion];

    fn deref(&self) -> &Self::Target {
        &self.regions
    }
}

impl FromIterator<ScrollRegion> for ScrollChain {
    fn from_iter<I: IntoIterator<Item = ScrollRegion>>(iter: I) -> Self {
        Self {
            regions: iter.into_iter().collect(),
        }
    }
}
