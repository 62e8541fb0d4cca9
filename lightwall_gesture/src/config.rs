// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer configuration: thresholds, delays, and the gesture mask.

bitflags::bitflags! {
    /// Which gestures a recognizer resolves.
    ///
    /// Disabled kinds never emit and never arm their side effects (a
    /// recognizer without [`GestureKinds::LONG_PRESS`] never exposes a
    /// deadline). A second finger with [`GestureKinds::PINCH`] disabled
    /// still voids the single-touch classification; the session then
    /// resolves silently.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GestureKinds: u8 {
        /// Short stationary touch.
        const TAP        = 0b0000_0001;
        /// Two taps close together in time and space.
        const DOUBLE_TAP = 0b0000_0010;
        /// Stationary touch held past the long-press delay.
        const LONG_PRESS = 0b0000_0100;
        /// Movement past the swipe threshold before release.
        const SWIPE      = 0b0000_1000;
        /// Two-finger distance-ratio tracking.
        const PINCH      = 0b0001_0000;
    }
}

impl Default for GestureKinds {
    fn default() -> Self {
        Self::all()
    }
}

/// Tunable constants for gesture disambiguation.
///
/// Every value here is an empirically tuned default, not a derived truth;
/// hosts adjust them per product. Distances are logical pixels, durations
/// are milliseconds on the host clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Movement past this distance from the start point voids tap/long-press
    /// and classifies the session as a swipe candidate.
    pub swipe_threshold: f64,
    /// Maximum press duration for a stationary release to count as a tap.
    pub tap_max_duration_ms: u64,
    /// Maximum time between two taps for the second to become a double-tap.
    pub double_tap_window_ms: u64,
    /// Maximum distance between two taps for the second to become a
    /// double-tap.
    pub double_tap_radius: f64,
    /// How long a stationary press must be held before long-press fires.
    pub long_press_delay_ms: u64,
    /// The gestures this recognizer resolves.
    pub kinds: GestureKinds,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 40.0,
            tap_max_duration_ms: 300,
            double_tap_window_ms: 300,
            double_tap_radius: 50.0,
            long_press_delay_ms: 550,
            kinds: GestureKinds::all(),
        }
    }
}
