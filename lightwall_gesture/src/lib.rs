// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightwall_gesture --heading-base-level=0

//! Lightwall Gesture: multi-touch disambiguation over raw touch streams.
//!
//! Touch UIs receive an undifferentiated stream of down/move/up events and
//! must resolve it into exactly one of several mutually exclusive intents:
//! tap, double-tap, long-press, swipe, or pinch. This crate does that
//! resolution as an explicit state machine with strict ordering and
//! cancellation guarantees: no hidden timers, no platform event loop.
//!
//! The core concepts are:
//!
//! - [`GestureRecognizer`]: one per touch surface. Hosts feed it raw events
//!   via [`GestureRecognizer::on_down`], [`on_move`](GestureRecognizer::on_move),
//!   [`on_up`](GestureRecognizer::on_up), and
//!   [`on_cancel`](GestureRecognizer::on_cancel), each carrying the host
//!   clock's timestamp in milliseconds.
//! - [`Gesture`]: the immutable semantic events emitted once a touch session
//!   resolves; at most one final classification per session, plus a
//!   continuous [`Gesture::Pinch`] stream while two fingers are down.
//! - [`Update`]: what each call returns, zero or more gestures plus a
//!   `consume` flag that tells the host to suppress the platform's default
//!   handling (native zoom/scroll) for the underlying event.
//! - [`GestureConfig`] and [`GestureKinds`]: every empirically tuned
//!   threshold is an explicit, documented field, and hosts enable only the
//!   recognizers they consume.
//!
//! ## Timing without timers
//!
//! The recognizer never owns a clock. Long-press is a *deadline*: while a
//! finger rests, [`GestureRecognizer::deadline`] exposes the instant the
//! press matures and the host schedules a single wake-up to call
//! [`GestureRecognizer::poll`] then. Independently, every event settles an
//! already-elapsed deadline before it is processed, so classifications come
//! out in strict timestamp order even if the host never polls. Disqualifying
//! input (movement past the swipe threshold, a second finger, a lift, a
//! cancel) clears the deadline the instant it arrives.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use lightwall_gesture::{Gesture, GestureRecognizer};
//!
//! let mut recognizer = GestureRecognizer::default();
//!
//! // A short, stationary touch is a tap.
//! recognizer.on_down(1, Point::new(40.0, 40.0), 1_000);
//! let update = recognizer.on_up(1, Point::new(40.0, 40.0), 1_100);
//! assert_eq!(update.gestures.as_slice(), [Gesture::Tap {
//!     position: Point::new(40.0, 40.0),
//! }]);
//! ```
//!
//! This crate is `no_std`; enable the `libm` feature for builds without
//! `std` floating-point intrinsics.

#![no_std]

mod config;
mod event;
mod recognizer;

pub use config::{GestureConfig, GestureKinds};
pub use event::{Gesture, SwipeDirection, TouchId, Update};
pub use recognizer::GestureRecognizer;
