// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted touch log through the recognizer and the
//! pull-to-refresh controller, printing every resolved gesture.
//!
//! Run with: `cargo run -p lightwall_demos --example gesture_feed`

use kurbo::Point;
use lightwall_demos::FrameClock;
use lightwall_gesture::{Gesture, GestureRecognizer, Update};
use lightwall_refresh::{RefreshController, RefreshState, Release};

fn report(label: &str, update: &Update) {
    for gesture in &update.gestures {
        match gesture {
            Gesture::Tap { position } => println!("{label}: tap at {position:?}"),
            Gesture::DoubleTap { position } => println!("{label}: double-tap at {position:?}"),
            Gesture::LongPress { position } => println!("{label}: long-press at {position:?}"),
            Gesture::Swipe {
                direction,
                distance,
                velocity,
            } => println!("{label}: swipe {direction:?} {distance:.0}px @ {velocity:.2}px/ms"),
            Gesture::Pinch { scale, center } => {
                println!("{label}: pinch scale {scale:.2} around {center:?}");
            }
        }
    }
}

fn main() {
    let mut rec = GestureRecognizer::default();
    let mut clock = FrameClock::new(16);

    // Tap, then a second tap inside the double-tap window.
    let _ = rec.on_down(1, Point::new(100.0, 100.0), clock.now());
    report("tap", &rec.on_up(1, Point::new(100.0, 100.0), clock.advance(90)));
    let _ = rec.on_down(1, Point::new(104.0, 98.0), clock.advance(140));
    report("tap", &rec.on_up(1, Point::new(104.0, 98.0), clock.advance(80)));

    // Long-press: the host polls at the recognizer's deadline.
    let _ = rec.on_down(1, Point::new(300.0, 200.0), clock.advance(500));
    if let Some(deadline) = rec.deadline() {
        let _ = clock.advance(deadline - clock.now());
        if let Some(gesture) = rec.poll(clock.now()) {
            println!("hold: {gesture:?}");
        }
    }
    let _ = rec.on_up(1, Point::new(300.0, 200.0), clock.advance(50));

    // Horizontal swipe.
    let _ = rec.on_down(1, Point::new(600.0, 400.0), clock.advance(400));
    for step in 1..=8 {
        let x = 600.0 - f64::from(step) * 22.0;
        let _ = rec.on_move(1, Point::new(x, 400.0), clock.tick());
    }
    report("flick", &rec.on_up(1, Point::new(424.0, 400.0), clock.tick()));

    // Pinch out to 2x.
    let _ = rec.on_down(1, Point::new(500.0, 300.0), clock.advance(400));
    let _ = rec.on_down(2, Point::new(600.0, 300.0), clock.tick());
    for step in 1..=5 {
        let spread = f64::from(step) * 20.0;
        let update = rec.on_move(2, Point::new(600.0 + spread, 300.0), clock.tick());
        assert!(update.consume, "pinch moves suppress native zoom");
        report("zoom", &update);
    }
    let _ = rec.on_up(2, Point::new(700.0, 300.0), clock.tick());
    let _ = rec.on_up(1, Point::new(500.0, 300.0), clock.tick());

    // Pull-to-refresh at the top edge; the "network call" fails, and the
    // controller still comes back to idle through the settle path.
    let mut refresh = RefreshController::default();
    assert!(refresh.begin(true));
    for _ in 0..12 {
        let progress = refresh.pull(16.0);
        println!("pull: progress {progress:.2}");
    }
    match refresh.release() {
        Release::StartRefresh => {
            println!("refresh: started");
            let failed: Result<(), &str> = Err("backend unavailable");
            if let Err(message) = failed {
                println!("refresh: failed ({message})");
            }
            refresh.settle();
        }
        Release::SnapBack => println!("refresh: snap back"),
    }
    assert_eq!(refresh.state(), RefreshState::Idle);
    println!("refresh: settled back to idle");
}
