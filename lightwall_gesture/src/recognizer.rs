// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-surface touch session state machine.

use core::mem;

use kurbo::Point;
use smallvec::{SmallVec, smallvec};

use crate::{Gesture, GestureConfig, GestureKinds, SwipeDirection, TouchId, Update};

/// The tracked contact of a single-finger session.
#[derive(Debug, Clone, Copy)]
struct SingleTouch {
    id: TouchId,
    start: Point,
    start_time: u64,
    last: Point,
}

#[derive(Debug, Clone, Copy)]
struct PinchFinger {
    id: TouchId,
    position: Point,
}

/// Classification state of the current touch session.
///
/// `Settling` absorbs the tail of a session whose classification is already
/// decided (a finger of a pinch lifted, or a second finger arrived with
/// pinch disabled): remaining contacts are tracked only so the session ends
/// on the *last* lift, without emitting anything further.
#[derive(Debug, Clone)]
enum SessionState {
    Idle,
    Touching {
        touch: SingleTouch,
        deadline: Option<u64>,
    },
    Swiping {
        touch: SingleTouch,
    },
    Pinching {
        first: PinchFinger,
        second: PinchFinger,
        initial_distance: f64,
    },
    LongPressFired {
        id: TouchId,
    },
    Settling {
        remaining: SmallVec<[TouchId; 2]>,
    },
}

#[derive(Debug, Clone, Copy)]
struct TapMemory {
    position: Point,
    time: u64,
}

/// Resolves a raw touch stream into semantic gestures.
///
/// One recognizer serves one touch surface. Events must arrive in timestamp
/// order within a session; each session's final classification is emitted
/// exactly once. All timestamps are milliseconds on the host clock; the
/// recognizer owns no clock and sets no timers (see the crate docs for the
/// long-press deadline protocol).
#[derive(Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    state: SessionState,
    last_tap: Option<TapMemory>,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureRecognizer {
    /// Creates a recognizer with the given configuration.
    #[must_use]
    pub const fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: SessionState::Idle,
            last_tap: None,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns `true` when no touch session is active.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }

    /// The instant the pending long-press matures, if one is armed.
    ///
    /// Hosts schedule a single wake-up for this instant and call
    /// [`GestureRecognizer::poll`]. The deadline disappears the moment
    /// disqualifying input arrives.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        match &self.state {
            SessionState::Touching { deadline, .. } => *deadline,
            _ => None,
        }
    }

    /// Fires the long-press deadline if `now` has reached it.
    ///
    /// Returns the emitted [`Gesture::LongPress`], if any. Safe to call
    /// early or repeatedly; a deadline fires at most once.
    pub fn poll(&mut self, now: u64) -> Option<Gesture> {
        let mut out = SmallVec::new();
        self.settle_deadline(now, &mut out);
        out.into_iter().next()
    }

    /// Processes a touch-start.
    ///
    /// The first finger opens a session; a second reclassifies it as a pinch
    /// (or voids it when pinch is disabled); a third is ignored.
    pub fn on_down(&mut self, id: TouchId, position: Point, timestamp: u64) -> Update {
        let mut gestures = SmallVec::new();
        self.settle_deadline(timestamp, &mut gestures);

        match mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Idle => {
                let deadline = self
                    .config
                    .kinds
                    .contains(GestureKinds::LONG_PRESS)
                    .then(|| timestamp.saturating_add(self.config.long_press_delay_ms));
                self.state = SessionState::Touching {
                    touch: SingleTouch {
                        id,
                        start: position,
                        start_time: timestamp,
                        last: position,
                    },
                    deadline,
                };
            }
            SessionState::Touching { touch, deadline } if touch.id == id => {
                // Duplicate down for the tracked contact; keep the session.
                self.state = SessionState::Touching { touch, deadline };
            }
            SessionState::Swiping { touch } if touch.id == id => {
                self.state = SessionState::Swiping { touch };
            }
            SessionState::Touching { touch, .. } | SessionState::Swiping { touch } => {
                if self.config.kinds.contains(GestureKinds::PINCH) {
                    let first = PinchFinger {
                        id: touch.id,
                        position: touch.last,
                    };
                    let second = PinchFinger { id, position };
                    self.state = SessionState::Pinching {
                        first,
                        second,
                        initial_distance: first.position.distance(second.position),
                    };
                } else {
                    self.state = SessionState::Settling {
                        remaining: smallvec![touch.id, id],
                    };
                }
            }
            other @ (SessionState::Pinching { .. } | SessionState::LongPressFired { .. }) => {
                // Third finger, or a press landing after long-press: ignored.
                self.state = other;
            }
            SessionState::Settling { mut remaining } => {
                if !remaining.contains(&id) {
                    remaining.push(id);
                }
                self.state = SessionState::Settling { remaining };
            }
        }
        Update {
            gestures,
            consume: false,
        }
    }

    /// Processes a touch-move.
    ///
    /// Movement past the swipe threshold voids tap/long-press and marks the
    /// session a swipe candidate (classified at release). Pinch moves emit a
    /// continuous [`Gesture::Pinch`] sample and ask the host to consume the
    /// underlying event.
    pub fn on_move(&mut self, id: TouchId, position: Point, timestamp: u64) -> Update {
        let mut gestures = SmallVec::new();
        self.settle_deadline(timestamp, &mut gestures);

        let mut consume = false;
        match &mut self.state {
            SessionState::Touching { touch, .. } if touch.id == id => {
                touch.last = position;
                if touch.start.distance(position) > self.config.swipe_threshold {
                    // Dropping `Touching` clears the long-press deadline.
                    let touch = *touch;
                    self.state = SessionState::Swiping { touch };
                }
            }
            SessionState::Swiping { touch } if touch.id == id => {
                touch.last = position;
            }
            SessionState::Pinching {
                first,
                second,
                initial_distance,
            } => {
                if first.id == id {
                    first.position = position;
                } else if second.id == id {
                    second.position = position;
                } else {
                    // Untracked third finger.
                    return Update {
                        gestures,
                        consume: false,
                    };
                }
                let current = first.position.distance(second.position);
                let scale = if *initial_distance > 0.0 {
                    current / *initial_distance
                } else {
                    1.0
                };
                gestures.push(Gesture::Pinch {
                    scale,
                    center: first.position.midpoint(second.position),
                });
                consume = true;
            }
            _ => {}
        }
        Update { gestures, consume }
    }

    /// Processes a touch-end.
    ///
    /// A single-finger session resolves here: tap, double-tap, swipe, or
    /// (for a slow stationary release) nothing. Lifting one pinch finger
    /// settles the session; it ends when the last tracked contact lifts.
    pub fn on_up(&mut self, id: TouchId, position: Point, timestamp: u64) -> Update {
        let mut gestures = SmallVec::new();
        self.settle_deadline(timestamp, &mut gestures);

        match mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Idle => {}
            SessionState::Touching { touch, deadline } => {
                if touch.id == id {
                    self.resolve_single(&touch, position, timestamp, &mut gestures);
                } else {
                    self.state = SessionState::Touching { touch, deadline };
                }
            }
            SessionState::Swiping { touch } => {
                if touch.id == id {
                    self.emit_swipe(touch.start, touch.start_time, position, timestamp, &mut gestures);
                } else {
                    self.state = SessionState::Swiping { touch };
                }
            }
            SessionState::Pinching {
                first,
                second,
                initial_distance,
            } => {
                if first.id == id {
                    self.state = SessionState::Settling {
                        remaining: smallvec![second.id],
                    };
                } else if second.id == id {
                    self.state = SessionState::Settling {
                        remaining: smallvec![first.id],
                    };
                } else {
                    self.state = SessionState::Pinching {
                        first,
                        second,
                        initial_distance,
                    };
                }
            }
            SessionState::LongPressFired { id: pressed } => {
                if pressed != id {
                    self.state = SessionState::LongPressFired { id: pressed };
                }
            }
            SessionState::Settling { mut remaining } => {
                remaining.retain(|tracked| *tracked != id);
                if !remaining.is_empty() {
                    self.state = SessionState::Settling { remaining };
                }
            }
        }
        Update {
            gestures,
            consume: false,
        }
    }

    /// Processes a touch-cancel (OS interruption).
    ///
    /// Resolves the session to idle without emitting anything, identical to
    /// a stationary release that qualifies for no gesture. The long-press
    /// deadline, if armed, is cleared. Double-tap memory from a previously
    /// *completed* tap survives.
    pub fn on_cancel(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Full teardown: clears the session and the double-tap memory.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.last_tap = None;
    }

    /// Emits long-press if the armed deadline has elapsed by `now`.
    fn settle_deadline(&mut self, now: u64, out: &mut SmallVec<[Gesture; 2]>) {
        let fired = match &self.state {
            SessionState::Touching {
                touch,
                deadline: Some(deadline),
            } if now >= *deadline => Some((touch.id, touch.start)),
            _ => None,
        };
        if let Some((id, position)) = fired {
            self.state = SessionState::LongPressFired { id };
            out.push(Gesture::LongPress { position });
        }
    }

    /// Resolves a still-`Touching` release: swipe, double-tap, tap, or nothing.
    fn resolve_single(
        &mut self,
        touch: &SingleTouch,
        position: Point,
        timestamp: u64,
        out: &mut SmallVec<[Gesture; 2]>,
    ) {
        if touch.start.distance(position) > self.config.swipe_threshold {
            // The release itself crossed the threshold.
            self.emit_swipe(touch.start, touch.start_time, position, timestamp, out);
            return;
        }
        let duration = timestamp.saturating_sub(touch.start_time);
        if duration > self.config.tap_max_duration_ms {
            // Slow stationary release below the long-press deadline: nothing.
            return;
        }

        let kinds = self.config.kinds;
        if kinds.contains(GestureKinds::DOUBLE_TAP) {
            if let Some(memory) = self.last_tap {
                let in_window = timestamp.saturating_sub(memory.time)
                    <= self.config.double_tap_window_ms;
                let in_radius = memory.position.distance(position) <= self.config.double_tap_radius;
                if in_window && in_radius {
                    out.push(Gesture::DoubleTap { position });
                    self.last_tap = None;
                    return;
                }
            }
            self.last_tap = Some(TapMemory {
                position,
                time: timestamp,
            });
        }
        if kinds.contains(GestureKinds::TAP) {
            out.push(Gesture::Tap { position });
        }
    }

    fn emit_swipe(
        &self,
        start: Point,
        start_time: u64,
        end: Point,
        end_time: u64,
        out: &mut SmallVec<[Gesture; 2]>,
    ) {
        if !self.config.kinds.contains(GestureKinds::SWIPE) {
            return;
        }
        let distance = start.distance(end);
        // A same-timestamp release still needs a finite velocity.
        let duration = end_time.saturating_sub(start_time).max(1);
        out.push(Gesture::Swipe {
            direction: SwipeDirection::from_delta(end - start),
            distance,
            velocity: distance / duration as f64,
        });
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::GestureRecognizer;
    use crate::{Gesture, GestureConfig, GestureKinds, SwipeDirection};

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn short_stationary_touch_is_exactly_one_tap() {
        let mut rec = GestureRecognizer::default();
        let down = rec.on_down(1, pt(0.0, 0.0), 0);
        assert!(down.is_none());

        let up = rec.on_up(1, pt(0.0, 0.0), 100);
        assert_eq!(up.gestures.as_slice(), [Gesture::Tap { position: pt(0.0, 0.0) }]);
        assert!(!up.consume);
        assert!(rec.is_idle());
    }

    #[test]
    fn small_jitter_below_threshold_still_taps() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);
        assert!(rec.on_move(1, pt(5.0, 5.0), 50).is_none());
        let up = rec.on_up(1, pt(8.0, 3.0), 120);
        assert_eq!(up.gestures.as_slice(), [Gesture::Tap { position: pt(8.0, 3.0) }]);
    }

    #[test]
    fn slow_stationary_release_emits_nothing() {
        // Released after the tap cutoff but before the long-press deadline.
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);
        let up = rec.on_up(1, pt(0.0, 0.0), 400);
        assert!(up.gestures.is_empty());
        assert!(rec.is_idle());
    }

    #[test]
    fn second_tap_in_window_is_one_double_tap() {
        let mut rec = GestureRecognizer::default();

        // First tap: start(0,0), end(0,0) after 100ms.
        rec.on_down(1, pt(0.0, 0.0), 0);
        let first = rec.on_up(1, pt(0.0, 0.0), 100);
        assert_eq!(first.gestures.as_slice(), [Gesture::Tap { position: pt(0.0, 0.0) }]);

        // Second identical sequence 150ms later at (5,5).
        rec.on_down(2, pt(5.0, 5.0), 250);
        let second = rec.on_up(2, pt(5.0, 5.0), 350);
        assert_eq!(
            second.gestures.as_slice(),
            [Gesture::DoubleTap { position: pt(5.0, 5.0) }]
        );
    }

    #[test]
    fn double_tap_memory_clears_after_firing() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);
        rec.on_up(1, pt(0.0, 0.0), 50);
        rec.on_down(1, pt(0.0, 0.0), 150);
        rec.on_up(1, pt(0.0, 0.0), 200);

        // A third tap right after a double-tap starts a fresh pair.
        rec.on_down(1, pt(0.0, 0.0), 300);
        let third = rec.on_up(1, pt(0.0, 0.0), 350);
        assert_eq!(third.gestures.as_slice(), [Gesture::Tap { position: pt(0.0, 0.0) }]);
    }

    #[test]
    fn taps_outside_window_or_radius_stay_single() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);
        rec.on_up(1, pt(0.0, 0.0), 100);

        // Too late.
        rec.on_down(1, pt(0.0, 0.0), 600);
        let late = rec.on_up(1, pt(0.0, 0.0), 650);
        assert_eq!(late.gestures.as_slice(), [Gesture::Tap { position: pt(0.0, 0.0) }]);

        // Too far (but in time).
        rec.on_down(1, pt(200.0, 0.0), 800);
        let far = rec.on_up(1, pt(200.0, 0.0), 850);
        assert_eq!(
            far.gestures.as_slice(),
            [Gesture::Tap { position: pt(200.0, 0.0) }]
        );
    }

    #[test]
    fn movement_past_threshold_resolves_to_swipe_at_release() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);

        // Crossing the threshold reclassifies but does not emit yet.
        let mid = rec.on_move(1, pt(60.0, 0.0), 80);
        assert!(mid.is_none());

        let up = rec.on_up(1, pt(120.0, 10.0), 200);
        match up.gestures.as_slice() {
            [Gesture::Swipe {
                direction,
                distance,
                velocity,
            }] => {
                assert_eq!(*direction, SwipeDirection::Right);
                let expected = (120.0_f64 * 120.0 + 10.0 * 10.0).sqrt();
                assert!((distance - expected).abs() < 1e-9);
                assert!((velocity - expected / 200.0).abs() < 1e-9);
            }
            other => panic!("expected one swipe, got {other:?}"),
        }
        assert!(rec.is_idle());
    }

    #[test]
    fn release_past_threshold_swipes_even_without_moves() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);
        let up = rec.on_up(1, pt(0.0, 90.0), 150);
        match up.gestures.as_slice() {
            [Gesture::Swipe { direction, .. }] => assert_eq!(*direction, SwipeDirection::Down),
            other => panic!("expected one swipe, got {other:?}"),
        }
    }

    #[test]
    fn long_press_fires_via_poll_and_suppresses_the_tap() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(10.0, 20.0), 1_000);
        assert_eq!(rec.deadline(), Some(1_550));

        assert_eq!(rec.poll(1_400), None);
        assert_eq!(
            rec.poll(1_550),
            Some(Gesture::LongPress { position: pt(10.0, 20.0) })
        );
        // Fires at most once.
        assert_eq!(rec.poll(1_600), None);
        assert_eq!(rec.deadline(), None);

        // The release after a fired long-press emits nothing.
        let up = rec.on_up(1, pt(10.0, 20.0), 1_700);
        assert!(up.gestures.is_empty());
        assert!(rec.is_idle());
    }

    #[test]
    fn long_press_settles_on_a_late_event_without_polling() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);

        // The host never polled; the release itself is past the deadline.
        let up = rec.on_up(1, pt(0.0, 0.0), 800);
        assert_eq!(
            up.gestures.as_slice(),
            [Gesture::LongPress { position: pt(0.0, 0.0) }]
        );
        assert!(rec.is_idle());
    }

    #[test]
    fn movement_before_deadline_guarantees_no_long_press() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);
        rec.on_move(1, pt(100.0, 0.0), 100);

        assert_eq!(rec.deadline(), None);
        assert_eq!(rec.poll(1_000), None);

        // The session still resolves as a swipe.
        let up = rec.on_up(1, pt(100.0, 0.0), 1_000);
        assert!(matches!(up.gestures.as_slice(), [Gesture::Swipe { .. }]));
    }

    #[test]
    fn second_finger_cancels_long_press_and_starts_pinch() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);
        rec.on_down(2, pt(100.0, 0.0), 100);

        assert_eq!(rec.deadline(), None);
        assert_eq!(rec.poll(1_000), None);

        // Fingers spread to 2x the initial distance.
        let update = rec.on_move(2, pt(200.0, 0.0), 150);
        assert!(update.consume);
        match update.gestures.as_slice() {
            [Gesture::Pinch { scale, center }] => {
                assert!((scale - 2.0).abs() < 1e-9);
                assert_eq!(*center, pt(100.0, 0.0));
            }
            other => panic!("expected one pinch sample, got {other:?}"),
        }
    }

    #[test]
    fn pinch_scale_is_monotone_with_finger_distance() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);
        rec.on_down(2, pt(50.0, 0.0), 10);

        let mut last_scale = 0.0;
        for step in 1_u32..20 {
            let x = 50.0 + f64::from(step) * 12.5;
            let update = rec.on_move(2, pt(x, 0.0), 10 + u64::from(step) * 16);
            match update.gestures.as_slice() {
                [Gesture::Pinch { scale, .. }] => {
                    assert!(*scale >= last_scale, "scale regressed while fingers spread");
                    last_scale = *scale;
                }
                other => panic!("expected one pinch sample, got {other:?}"),
            }
        }
        assert!(last_scale > 1.0);
    }

    #[test]
    fn lifting_one_pinch_finger_settles_the_session() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);
        rec.on_down(2, pt(100.0, 0.0), 10);
        let _ = rec.on_move(2, pt(150.0, 0.0), 20);

        let up = rec.on_up(2, pt(150.0, 0.0), 30);
        assert!(up.gestures.is_empty());
        assert!(!rec.is_idle());

        // The remaining finger's movement emits nothing further.
        assert!(rec.on_move(1, pt(40.0, 0.0), 40).is_none());

        // Last lift closes the session without a spurious tap or swipe.
        let last = rec.on_up(1, pt(40.0, 0.0), 50);
        assert!(last.gestures.is_empty());
        assert!(rec.is_idle());

        // And the next session starts clean.
        rec.on_down(3, pt(0.0, 0.0), 100);
        let tap = rec.on_up(3, pt(0.0, 0.0), 150);
        assert!(matches!(tap.gestures.as_slice(), [Gesture::Tap { .. }]));
    }

    #[test]
    fn third_finger_is_ignored() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);
        rec.on_down(2, pt(100.0, 0.0), 10);

        // Third contact: no state change, no samples from its stream.
        assert!(rec.on_down(3, pt(500.0, 500.0), 20).is_none());
        assert!(rec.on_move(3, pt(600.0, 600.0), 30).is_none());
        assert!(rec.on_up(3, pt(600.0, 600.0), 40).is_none());

        // The pinch pair still works.
        let update = rec.on_move(2, pt(200.0, 0.0), 50);
        assert!(matches!(update.gestures.as_slice(), [Gesture::Pinch { .. }]));
    }

    #[test]
    fn cancel_resolves_silently_like_an_uneventful_release() {
        let mut rec = GestureRecognizer::default();
        rec.on_down(1, pt(0.0, 0.0), 0);
        rec.on_cancel();
        assert!(rec.is_idle());

        // No long-press after cancellation, even past the deadline.
        assert_eq!(rec.poll(10_000), None);

        // A stray up for the cancelled contact is ignored.
        assert!(rec.on_up(1, pt(0.0, 0.0), 10_000).is_none());

        // The next session is unaffected.
        rec.on_down(1, pt(0.0, 0.0), 11_000);
        let up = rec.on_up(1, pt(0.0, 0.0), 11_100);
        assert!(matches!(up.gestures.as_slice(), [Gesture::Tap { .. }]));
    }

    #[test]
    fn disabled_tap_still_feeds_double_tap() {
        let config = GestureConfig {
            kinds: GestureKinds::all() & !GestureKinds::TAP,
            ..GestureConfig::default()
        };
        let mut rec = GestureRecognizer::new(config);

        rec.on_down(1, pt(0.0, 0.0), 0);
        let first = rec.on_up(1, pt(0.0, 0.0), 50);
        assert!(first.gestures.is_empty());

        rec.on_down(1, pt(0.0, 0.0), 150);
        let second = rec.on_up(1, pt(0.0, 0.0), 200);
        assert_eq!(
            second.gestures.as_slice(),
            [Gesture::DoubleTap { position: pt(0.0, 0.0) }]
        );
    }

    #[test]
    fn disabled_long_press_never_arms_a_deadline() {
        let config = GestureConfig {
            kinds: GestureKinds::all() & !GestureKinds::LONG_PRESS,
            ..GestureConfig::default()
        };
        let mut rec = GestureRecognizer::new(config);
        rec.on_down(1, pt(0.0, 0.0), 0);
        assert_eq!(rec.deadline(), None);
        assert_eq!(rec.poll(10_000), None);

        // A slow stationary release still resolves to nothing.
        let up = rec.on_up(1, pt(0.0, 0.0), 10_000);
        assert!(up.gestures.is_empty());
    }

    #[test]
    fn disabled_pinch_voids_two_finger_sessions() {
        let config = GestureConfig {
            kinds: GestureKinds::all() & !GestureKinds::PINCH,
            ..GestureConfig::default()
        };
        let mut rec = GestureRecognizer::new(config);
        rec.on_down(1, pt(0.0, 0.0), 0);
        rec.on_down(2, pt(100.0, 0.0), 10);

        let update = rec.on_move(2, pt(200.0, 0.0), 20);
        assert!(update.is_none());

        // Neither release produces a gesture.
        assert!(rec.on_up(1, pt(0.0, 0.0), 30).is_none());
        assert!(rec.on_up(2, pt(200.0, 0.0), 40).is_none());
        assert!(rec.is_idle());
    }

    #[test]
    fn one_session_one_final_classification() {
        let mut rec = GestureRecognizer::default();
        let mut emitted = 0;

        rec.on_down(1, pt(0.0, 0.0), 0);
        emitted += rec.on_move(1, pt(10.0, 0.0), 20).gestures.len();
        emitted += rec.on_move(1, pt(80.0, 0.0), 40).gestures.len();
        emitted += rec.on_move(1, pt(160.0, 0.0), 60).gestures.len();
        emitted += rec.on_up(1, pt(160.0, 0.0), 80).gestures.len();

        assert_eq!(emitted, 1);
    }

    #[test]
    fn degenerate_pinch_distance_reports_unit_scale() {
        let mut rec = GestureRecognizer::default();
        // Both fingers land on the same point.
        rec.on_down(1, pt(50.0, 50.0), 0);
        rec.on_down(2, pt(50.0, 50.0), 10);

        let update = rec.on_move(2, pt(80.0, 50.0), 20);
        match update.gestures.as_slice() {
            [Gesture::Pinch { scale, .. }] => assert_eq!(*scale, 1.0),
            other => panic!("expected one pinch sample, got {other:?}"),
        }
    }
}
