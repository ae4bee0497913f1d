// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Propagation decisions for scroll input.
//!
//! Two questions are answered here:
//!
//! - Should this event be left to a nested region that can still scroll?
//!   See [`did_child_scroll`].
//! - Should ancestors be kept from scrolling because the local container
//!   still has room? See [`parent_scroll_disposition`] and
//!   [`horizontal_navigation_disposition`].
//!
//! The answers are returned as data ([`EventDisposition`]); applying them to a
//! platform event is the host's job.

use crate::region::ScrollRegion;

bitflags::bitflags! {
    /// What the host should do with the platform event after handling it.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventDisposition: u8 {
        /// Suppress the platform's default action (page scroll, history swipe).
        const PREVENT_DEFAULT  = 0b0000_0001;
        /// Do not deliver the event to ancestor handlers.
        const STOP_PROPAGATION = 0b0000_0010;
    }
}

/// Returns `true` if a region between the event target and the boundary can
/// still consume a scroll in the given direction.
///
/// Regions are visited innermost first. The scan stops at the first
/// [`ScrollRegion::boundary`] without inspecting it. Regions that do not
/// overflow on either axis are skipped. An axis is only tested when its delta
/// is not exactly zero; an absent delta is tested as a move towards the start.
#[must_use]
pub fn did_child_scroll(
    path: &[ScrollRegion],
    delta_x: Option<f64>,
    delta_y: Option<f64>,
) -> bool {
    for region in path {
        if region.boundary {
            break;
        }

        let vertical = region.has_vertical_overflow();
        let horizontal = region.has_horizontal_overflow();
        if !vertical && !horizontal {
            continue;
        }

        if vertical && delta_y != Some(0.0) && region.can_scroll_vertically(delta_y) {
            log::trace!("nested region consumes vertical scroll: {region:?}");
            return true;
        }
        if horizontal && delta_x != Some(0.0) && region.can_scroll_horizontally(delta_x) {
            log::trace!("nested region consumes horizontal scroll: {region:?}");
            return true;
        }
    }
    false
}

/// Keeps ancestors from scrolling while `position` is strictly inside
/// `(0, max)`.
///
/// `position` is the current or the expected next scroll offset; `max` is the
/// largest reachable offset. Inside the range the event always stops
/// propagating, and [`EventDisposition::PREVENT_DEFAULT`] is added when
/// `prevent_default` is set. At either edge the event is left alone so the
/// page can take over.
#[must_use]
pub fn parent_scroll_disposition(position: f64, max: f64, prevent_default: bool) -> EventDisposition {
    if 0.0 < position && position < max {
        if prevent_default {
            EventDisposition::PREVENT_DEFAULT | EventDisposition::STOP_PROPAGATION
        } else {
            EventDisposition::STOP_PROPAGATION
        }
    } else {
        EventDisposition::empty()
    }
}

/// Suppresses the default action for horizontal wheel input that lands
/// strictly inside `(0, max_left)`.
///
/// Trackpads map horizontal swipes to history navigation; while the content
/// can still move the swipe must not leave the page.
#[must_use]
pub fn horizontal_navigation_disposition(next_left: f64, max_left: f64) -> EventDisposition {
    if 0.0 < next_left && next_left < max_left {
        EventDisposition::PREVENT_DEFAULT
    } else {
        EventDisposition::empty()
    }
}
