// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emitted gesture values and per-event results.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Host-assigned identifier for one touch contact.
pub type TouchId = u64;

/// Cardinal swipe direction, chosen by the dominant movement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Dominant movement toward negative x.
    Left,
    /// Dominant movement toward positive x.
    Right,
    /// Dominant movement toward negative y.
    Up,
    /// Dominant movement toward positive y.
    Down,
}

impl SwipeDirection {
    /// Classifies a start→end delta. Axis ties break toward horizontal.
    #[must_use]
    pub fn from_delta(delta: Vec2) -> Self {
        if delta.x.abs() >= delta.y.abs() {
            if delta.x >= 0.0 { Self::Right } else { Self::Left }
        } else if delta.y >= 0.0 {
            Self::Down
        } else {
            Self::Up
        }
    }
}

/// A resolved semantic gesture.
///
/// Emitted once per session for the final classification; [`Gesture::Pinch`]
/// is the exception and streams continuously while two fingers move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Short stationary touch.
    Tap {
        /// Release position.
        position: Point,
    },
    /// Second tap within the double-tap window and radius of the first.
    DoubleTap {
        /// Release position of the second tap.
        position: Point,
    },
    /// Stationary touch held past the long-press delay.
    LongPress {
        /// Position where the press started.
        position: Point,
    },
    /// Movement past the swipe threshold, classified at release.
    Swipe {
        /// Dominant-axis direction of the start→end delta.
        direction: SwipeDirection,
        /// Euclidean distance between start and end point, in logical pixels.
        distance: f64,
        /// `distance / duration` in px/ms.
        velocity: f64,
    },
    /// Continuous two-finger tracking sample.
    Pinch {
        /// Current inter-finger distance over the initial distance.
        ///
        /// Emitted unclamped; clamping into a `[min, max]` zoom range is
        /// host policy at application time.
        scale: f64,
        /// Midpoint between the two fingers.
        center: Point,
    },
}

/// Result of feeding one raw event to the recognizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Gestures resolved by this event, in emission order.
    pub gestures: SmallVec<[Gesture; 2]>,
    /// `true` when the host must suppress the platform's default handling
    /// of the underlying event (pinch moves, to keep native zoom/scroll
    /// from fighting the gesture).
    pub consume: bool,
}

impl Update {
    /// An update with nothing to report.
    #[must_use]
    pub fn none() -> Self {
        Self {
            gestures: SmallVec::new(),
            consume: false,
        }
    }

    /// Returns `true` if no gestures were emitted and nothing is consumed.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.gestures.is_empty() && !self.consume
    }
}
