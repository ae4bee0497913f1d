// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scrollable container driven by the controller.

use kurbo::{Size, Vec2};

/// Geometry the parent-scroll guard needs from a container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Outer size of the container (its offset width/height).
    pub viewport: Size,
    /// Size of the container's content, or `None` when it has none yet.
    ///
    /// Without content the guards never claim the event.
    pub content: Option<Size>,
}

impl ScrollMetrics {
    /// Largest reachable vertical offset, if the container has content.
    #[must_use]
    pub fn max_scroll_top(&self) -> Option<f64> {
        self.content
            .map(|content| content.height - self.viewport.height)
    }
}

/// A container whose scroll offsets the controller writes.
///
/// Offsets are written exactly as computed; clamping to the scrollable range
/// is the container's business, the same way a browser clamps
/// `scrollTop`. Writing the same value twice must leave the container
/// unchanged the second time.
pub trait ScrollTarget {
    /// Current offset (`x` is scroll-left, `y` is scroll-top).
    fn scroll_offset(&self) -> Vec2;

    /// Writes the horizontal offset.
    fn set_scroll_x(&mut self, x: f64);

    /// Writes the vertical offset.
    fn set_scroll_y(&mut self, y: f64);

    /// Current geometry.
    fn metrics(&self) -> ScrollMetrics;

    /// Writes both offsets, horizontal first.
    fn scroll_to(&mut self, offset: Vec2) {
        self.set_scroll_x(offset.x);
        self.set_scroll_y(offset.y);
    }
}

impl<T: ScrollTarget + ?Sized> ScrollTarget for &mut T {
    fn scroll_offset(&self) -> Vec2 {
        (**self).scroll_offset()
    }

    fn set_scroll_x(&mut self, x: f64) {
        (**self).set_scroll_x(x);
    }

    fn set_scroll_y(&mut self, y: f64) {
        (**self).set_scroll_y(y);
    }

    fn metrics(&self) -> ScrollMetrics {
        (**self).metrics()
    }
}

/// An in-memory scroll container that clamps like a browser element.
///
/// Offsets are kept within `0..=content - viewport` on each axis. Useful for
/// hosts that keep scroll state themselves, and for tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollBox {
    offset: Vec2,
    viewport: Size,
    content: Size,
}

impl ScrollBox {
    /// Creates a container scrolled to the origin.
    #[must_use]
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport,
            content,
        }
    }

    /// Current offset.
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Outer size.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Content size.
    #[must_use]
    pub const fn content(&self) -> Size {
        self.content
    }

    /// Replaces the content size and re-clamps the offset.
    pub fn set_content(&mut self, content: Size) {
        self.content = content;
        let offset = self.offset;
        self.scroll_to(offset);
    }

    /// Largest reachable offset on each axis.
    #[must_use]
    pub fn max_offset(&self) -> Vec2 {
        Vec2::new(
            (self.content.width - self.viewport.width).max(0.0),
            (self.content.height - self.viewport.height).max(0.0),
        )
    }
}

impl ScrollTarget for ScrollBox {
    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn set_scroll_x(&mut self, x: f64) {
        self.offset.x = x.clamp(0.0, self.max_offset().x);
    }

    fn set_scroll_y(&mut self, y: f64) {
        self.offset.y = y.clamp(0.0, self.max_offset().y);
    }

    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            viewport: self.viewport,
            content: Some(self.content),
        }
    }
}
