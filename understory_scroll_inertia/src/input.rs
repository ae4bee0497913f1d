// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events consumed by the controller.
//!
//! These mirror the fields of platform wheel and touch events that the
//! controller reads. Hosts translate their native events into these types
//! at the boundary.

use kurbo::Point;
use understory_scroll_chain::ScrollChain;

bitflags::bitflags! {
    /// Keyboard modifiers held during a wheel event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control: the wheel is zooming the page, not scrolling.
        const CTRL  = 0b0000_0001;
        /// Shift: vertical wheel input scrolls horizontally.
        const SHIFT = 0b0000_0010;
    }
}

/// Unit of a wheel event's `delta_x`/`delta_y` fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeltaMode {
    /// Deltas are in pixels.
    Pixel,
    /// Deltas are in lines.
    Line,
    /// Deltas are in pages.
    Page,
}

/// A wheel or trackpad scroll event.
///
/// Browsers report wheel motion in one of two dialects. The high-resolution
/// `wheel_delta_*` fields use a baseline of 120 per notch and point the
/// opposite way to scrolling. The standard `delta_*` fields point the same way
/// as scrolling and are measured in [`DeltaMode`] units. An axis with neither
/// field set (or set to zero) does not scroll.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WheelEvent {
    /// High-resolution horizontal delta.
    pub wheel_delta_x: Option<f64>,
    /// High-resolution vertical delta.
    pub wheel_delta_y: Option<f64>,
    /// Standard horizontal delta.
    pub delta_x: Option<f64>,
    /// Standard vertical delta.
    pub delta_y: Option<f64>,
    /// Unit of `delta_x`/`delta_y`; absent means "not pixels".
    pub delta_mode: Option<DeltaMode>,
    /// Modifiers held during the event.
    pub modifiers: Modifiers,
    /// Scrollable regions from the event target outward, when the host can
    /// provide them.
    pub composed_path: Option<ScrollChain>,
}

impl WheelEvent {
    /// Creates an event in the high-resolution dialect.
    #[must_use]
    pub fn wheel_delta(wheel_delta_x: f64, wheel_delta_y: f64) -> Self {
        Self {
            wheel_delta_x: Some(wheel_delta_x),
            wheel_delta_y: Some(wheel_delta_y),
            ..Self::default()
        }
    }

    /// Creates an event in the standard dialect.
    #[must_use]
    pub fn delta(delta_x: f64, delta_y: f64, mode: DeltaMode) -> Self {
        Self {
            delta_x: Some(delta_x),
            delta_y: Some(delta_y),
            delta_mode: Some(mode),
            ..Self::default()
        }
    }

    /// Sets the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Attaches the event's path of scrollable regions.
    #[must_use]
    pub fn with_composed_path(mut self, path: ScrollChain) -> Self {
        self.composed_path = Some(path);
        self
    }
}

/// A touch event for the first active touch point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Page position of the touch.
    pub position: Point,
    /// Event time in milliseconds.
    pub timestamp: u64,
}

impl TouchEvent {
    /// Creates a touch event at (`x`, `y`) at `timestamp` milliseconds.
    #[must_use]
    pub const fn new(x: f64, y: f64, timestamp: u64) -> Self {
        Self {
            position: Point::new(x, y),
            timestamp,
        }
    }
}

/// Any event the controller listens to.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollInputEvent {
    /// A wheel or trackpad scroll.
    Wheel(WheelEvent),
    /// A finger touched down.
    TouchStart(TouchEvent),
    /// A finger moved.
    TouchMove(TouchEvent),
    /// A finger lifted.
    TouchEnd(TouchEvent),
}
