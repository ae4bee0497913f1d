// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_chain --heading-base-level=0

//! Understory Scroll Chain: decide who gets to scroll.
//!
//! ## Overview
//!
//! When scroll input lands inside nested scrollable regions, two decisions
//! have to be made before anything moves:
//!
//! 1. Does a region between the event target and the controller's own
//!    container still have room to scroll? If so, the controller should leave
//!    the event alone. See [`did_child_scroll`].
//! 2. After the controller has scrolled, should ancestors (and the page) be
//!    kept from scrolling too? See [`parent_scroll_disposition`] and
//!    [`horizontal_navigation_disposition`].
//!
//! This crate does not walk a live tree. The host flattens the event path into
//! a [`ScrollChain`]: an ordered list of [`ScrollRegion`] snapshots from the
//! target outward, with a [`ScrollRegion::boundary`] entry marking the
//! controller's container.
//!
//! ```
//! use kurbo::Size;
//! use understory_scroll_chain::{Overflow, ScrollChain, ScrollRegion, did_child_scroll};
//!
//! // A 100px tall dropdown with 400px of options, scrolled to the top.
//! let dropdown = ScrollRegion::new(Size::new(120.0, 400.0), Size::new(120.0, 100.0))
//!     .with_overflow(Overflow::Hidden, Overflow::Auto);
//! let chain = ScrollChain::new()
//!     .with(dropdown)
//!     .with(ScrollRegion::boundary());
//!
//! // Scrolling down: the dropdown takes it.
//! assert!(did_child_scroll(&chain, None, Some(1.0)));
//!
//! // Scrolling up: the dropdown is already at the top, so the grid scrolls.
//! assert!(!did_child_scroll(&chain, None, Some(-1.0)));
//! ```
//!
//! Decisions come back as [`EventDisposition`] flags; translating them into
//! `preventDefault`/`stopPropagation` (or the toolkit's equivalent) is up to
//! the host.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

mod guard;
mod region;

pub use guard::{
    EventDisposition, did_child_scroll, horizontal_navigation_disposition,
    parent_scroll_disposition,
};
pub use region::{Overflow, ScrollChain, ScrollRegion};
