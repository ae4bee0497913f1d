// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch swipe with momentum: `understory_scroll_inertia` driving a `ScrollBox`.
//!
//! This example replays a quick upward flick on a tall list, then delivers
//! frames until the momentum run settles, printing the offset as it goes.
//! A second flick is interrupted by a new touch to show cancellation.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_scroll_demos --example swipe_inertia`

use kurbo::Size;
use understory_scroll_inertia::{
    InertiaConfig, ScrollBox, ScrollInertia, ScrollInputEvent, TouchEvent,
};

/// One frame at 60Hz, in milliseconds.
const FRAME_MS: u64 = 16;

fn flick(inertia: &mut ScrollInertia<ScrollBox>, start_ms: u64) {
    // Finger moves up 20px per frame for five frames, then lifts.
    let mut events = vec![ScrollInputEvent::TouchStart(TouchEvent::new(200.0, 500.0, start_ms))];
    let mut y = 500.0;
    let mut t = start_ms;
    for _ in 0..5 {
        y -= 20.0;
        t += FRAME_MS;
        events.push(ScrollInputEvent::TouchMove(TouchEvent::new(200.0, y, t)));
    }
    events.push(ScrollInputEvent::TouchEnd(TouchEvent::new(200.0, y, t)));

    for event in &events {
        let disposition = inertia.handle_event(event);
        log::debug!("{event:?} -> {disposition:?}");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let list = ScrollBox::new(Size::new(320.0, 480.0), Size::new(320.0, 20_000.0));
    let mut inertia = ScrollInertia::new(InertiaConfig::default()).with_scroll_container(list);

    flick(&mut inertia, 0);
    let released_at = inertia.scroll_container().map(ScrollBox::offset);
    println!("released at {released_at:?}");

    let mut frames = 0;
    while inertia.on_frame() {
        frames += 1;
        if frames % 10 == 0 {
            let offset = inertia.scroll_container().map(ScrollBox::offset);
            println!("frame {frames:>3}: {offset:?}");
        }
    }
    let settled = inertia.scroll_container().map(ScrollBox::offset);
    println!("settled after {frames} frames at {settled:?}");

    // Flick again and catch the list after a few frames.
    flick(&mut inertia, 10_000);
    for _ in 0..8 {
        inertia.on_frame();
    }
    inertia.on_touch_start(&TouchEvent::new(200.0, 300.0, 10_300));
    let caught = inertia.scroll_container().map(ScrollBox::offset);
    println!(
        "caught at {caught:?}, still animating: {}",
        inertia.is_animating()
    );
}
