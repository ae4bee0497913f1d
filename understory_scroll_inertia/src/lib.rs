// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_inertia --heading-base-level=0

//! Understory Scroll Inertia: physical-feeling scrolling for wheel and touch.
//!
//! ## Overview
//!
//! [`ScrollInertia`] is a small state machine that turns raw wheel and touch
//! input into scroll offsets on a [`ScrollTarget`]:
//!
//! - **Wheel** input is normalized across the two browser dialects (see
//!   [`wheel::normalize_wheel`]) and either written immediately or spread over
//!   several frames with an ease-out curve ([`WheelSmoothing`]).
//! - **Touch** input makes the content follow the finger, with a horizontal
//!   tolerance that keeps vertical swipes from drifting sideways
//!   ([`TouchTracker`]).
//! - On **release**, a fast swipe keeps scrolling with decaying speed
//!   ([`Momentum`]). The next touch stops it.
//! - Handlers report whether the platform event should be kept from
//!   scrolling ancestors, as an [`EventDisposition`] computed by
//!   [`understory_scroll_chain`].
//!
//! ## Driving the controller
//!
//! The controller does not own a clock or an event loop. The host:
//!
//! 1. translates platform events into [`WheelEvent`] and [`TouchEvent`]
//!    (with millisecond timestamps) and calls the matching handler, or
//!    [`ScrollInertia::handle_event`];
//! 2. applies the returned [`EventDisposition`] to the platform event;
//! 3. calls [`ScrollInertia::on_frame`] once per display frame while
//!    [`ScrollInertia::is_animating`] is `true`.
//!
//! ```
//! use kurbo::Size;
//! use understory_scroll_inertia::{InertiaConfig, ScrollBox, ScrollInertia, TouchEvent};
//!
//! let container = ScrollBox::new(Size::new(400.0, 300.0), Size::new(400.0, 10_000.0));
//! let mut inertia = ScrollInertia::new(InertiaConfig::default()).with_scroll_container(container);
//!
//! // A quick upward flick: 100px in 10ms.
//! inertia.on_touch_start(&TouchEvent::new(200.0, 250.0, 0));
//! inertia.on_touch_move(&TouchEvent::new(200.0, 150.0, 10));
//! inertia.on_touch_end(&TouchEvent::new(200.0, 150.0, 10));
//!
//! // The content followed the finger...
//! assert_eq!(inertia.scroll_container().unwrap().offset().y, 100.0);
//!
//! // ...and keeps going once frames are delivered.
//! while inertia.on_frame() {}
//! assert!(inertia.scroll_container().unwrap().offset().y > 3000.0);
//! ```
//!
//! ## Configuration
//!
//! [`InertiaConfig`] holds the tunables (wheel step, smoothing and momentum
//! multipliers and durations, swipe tolerance, axis-dominance thresholds).
//! [`ScrollInertia::try_new`] validates them and reports a [`ConfigError`].
//!
//! ## Logging
//!
//! Gesture-level transitions (momentum start, finish, cancellation) are logged
//! at `debug` and per-event decisions at `trace` through the [`log`] facade.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for the configuration types.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod animation;
mod config;
mod controller;
mod error;
mod input;
pub mod momentum;
pub mod smoothing;
mod target;
pub mod touch;
pub mod wheel;

pub use animation::{AnimationId, Axis};
pub use config::{InertiaConfig, ScrollDirection, SmoothingOverlap};
pub use controller::ScrollInertia;
pub use error::ConfigError;
pub use input::{DeltaMode, Modifiers, ScrollInputEvent, TouchEvent, WheelEvent};
pub use momentum::Momentum;
pub use smoothing::WheelSmoothing;
pub use target::{ScrollBox, ScrollMetrics, ScrollTarget};
pub use touch::{SpeedRing, TouchTracker};
pub use understory_scroll_chain::{EventDisposition, Overflow, ScrollChain, ScrollRegion};
pub use wheel::WheelDelta;
