// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel input: direct vs smoothed scrolling, and nested scroll regions.
//!
//! This example shows how to combine:
//! - `understory_scroll_inertia` for wheel normalization and smoothing,
//! - `understory_scroll_chain` for describing the nested regions an event
//!   passed through, so an inner dropdown keeps the wheel while it can scroll.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_scroll_demos --example wheel_smoothing`

use kurbo::{Size, Vec2};
use understory_scroll_chain::{Overflow, ScrollChain, ScrollRegion};
use understory_scroll_inertia::{
    DeltaMode, InertiaConfig, ScrollBox, ScrollInertia, SmoothingOverlap, WheelEvent,
};

fn grid() -> ScrollBox {
    ScrollBox::new(Size::new(800.0, 600.0), Size::new(800.0, 50_000.0))
}

fn top(inertia: &ScrollInertia<ScrollBox>) -> f64 {
    inertia
        .scroll_container()
        .map_or(0.0, |container| container.offset().y)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    // Smoothing off: each notch lands immediately.
    let config = InertiaConfig::default().with_smoothing_duration(0.0);
    let mut direct = ScrollInertia::new(config).with_scroll_container(grid());
    for _ in 0..3 {
        let disposition = direct.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0));
        println!("direct: top {} ({disposition:?})", top(&direct));
    }
    // A Firefox-style line delta scrolls the same distance.
    direct.on_wheel(&WheelEvent::delta(0.0, 3.0, DeltaMode::Line));
    println!("direct after line delta: top {}", top(&direct));

    // Smoothing on: two notches in quick succession, under both policies.
    for overlap in [SmoothingOverlap::Additive, SmoothingOverlap::Replace] {
        let config = InertiaConfig::default().with_smoothing_overlap(overlap);
        let mut smooth = ScrollInertia::new(config).with_scroll_container(grid());
        smooth.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0));
        let mut frames = 0;
        while smooth.on_frame() {
            frames += 1;
            if frames == 3 {
                smooth.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0));
            }
            println!("{overlap:?} frame {frames:>2}: top {:.1}", top(&smooth));
        }
    }

    // A scrollable dropdown inside the grid keeps the wheel until it is
    // exhausted.
    let mut nested = ScrollInertia::new(InertiaConfig::default().with_smoothing_duration(0.0))
        .with_scroll_container(grid());
    for dropdown_top in [0.0, 150.0, 300.0] {
        let dropdown = ScrollRegion::new(Size::new(200.0, 400.0), Size::new(200.0, 100.0))
            .with_overflow(Overflow::Hidden, Overflow::Auto)
            .with_offset(Vec2::new(0.0, dropdown_top));
        let path = ScrollChain::new()
            .with(dropdown)
            .with(ScrollRegion::boundary());
        nested.on_wheel(&WheelEvent::wheel_delta(0.0, -120.0).with_composed_path(path));
        println!("dropdown at {dropdown_top}: grid top {}", top(&nested));
    }
}
