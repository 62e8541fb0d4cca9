// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proximity watchers over vertical item spans.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use lightwall_layout::DeviceClass;

/// Default proximity margin for desktop, in logical pixels.
///
/// Desktop margins are generous: memory is plentiful and prefetching several
/// rows ahead hides network latency entirely.
pub const DEFAULT_DESKTOP_MARGIN: f64 = 600.0;

/// Default proximity margin for tablets, in logical pixels.
pub const DEFAULT_TABLET_MARGIN: f64 = 400.0;

/// Default proximity margin for mobile, in logical pixels.
///
/// Tighter than desktop: prefetch competes with scroll rendering for a
/// constrained frame budget.
pub const DEFAULT_MOBILE_MARGIN: f64 = 250.0;

/// How long a watcher stays registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchMode {
    /// Fire [`VisibilityEvent::Enter`] once, then unregister.
    OneShot,
    /// Report every enter/leave transition until explicitly unwatched.
    Continuous,
}

/// The vertical span of an item in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSpan {
    /// Top edge in content coordinates.
    pub top: f64,
    /// Bottom edge in content coordinates.
    pub bottom: f64,
}

impl ItemSpan {
    /// Creates a span, swapping the edges if they arrive inverted.
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        if bottom < top {
            Self {
                top: bottom,
                bottom: top,
            }
        } else {
            Self { top, bottom }
        }
    }

    /// Returns `true` if this span intersects `[lo, hi]`.
    #[must_use]
    fn intersects(&self, lo: f64, hi: f64) -> bool {
        self.bottom > lo && self.top < hi
    }
}

/// A visibility transition for a watched item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent<K> {
    /// The item came within the proximity margin of the viewport.
    Enter(K),
    /// The item left the proximity margin (continuous watchers only).
    Leave(K),
}

#[derive(Debug, Clone, Copy)]
struct Watcher {
    span: ItemSpan,
    mode: WatchMode,
    visible: bool,
}

/// Tracks which watched items are near the viewport.
///
/// Hosts feed it the latest scroll offset and viewport height via
/// [`ProximityTracker::update`] and react to the returned transitions. The
/// tracker holds no reference to items themselves, only spans keyed by the
/// host's stable ids.
///
/// Event order within one `update` call is unspecified; hosts must not rely
/// on it.
#[derive(Debug)]
pub struct ProximityTracker<K> {
    watchers: HashMap<K, Watcher>,
    margin: f64,
    degraded: bool,
}

impl<K: Eq + Hash + Clone> ProximityTracker<K> {
    /// Creates a tracker with an explicit proximity margin in logical pixels.
    #[must_use]
    pub fn new(margin: f64) -> Self {
        Self {
            watchers: HashMap::new(),
            margin: margin.max(0.0),
            degraded: false,
        }
    }

    /// Creates a tracker with the default margin for a device class.
    #[must_use]
    pub fn for_device_class(device_class: DeviceClass) -> Self {
        let margin = match device_class {
            DeviceClass::Mobile => DEFAULT_MOBILE_MARGIN,
            DeviceClass::Tablet => DEFAULT_TABLET_MARGIN,
            DeviceClass::Desktop => DEFAULT_DESKTOP_MARGIN,
        };
        Self::new(margin)
    }

    /// Creates a degraded tracker for hosts without a visibility primitive.
    ///
    /// Every watcher fires [`VisibilityEvent::Enter`] on the next
    /// [`ProximityTracker::update`], regardless of position. Fail open:
    /// eager loading is a performance regression, never loading is a bug.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            watchers: HashMap::new(),
            margin: 0.0,
            degraded: true,
        }
    }

    /// Returns the proximity margin in logical pixels.
    #[must_use]
    pub const fn margin(&self) -> f64 {
        self.margin
    }

    /// Returns `true` if this tracker was constructed degraded.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Number of live watchers.
    ///
    /// Hosts keep this bounded by the materialized window: watch rows as
    /// they materialize, unwatch them as they leave the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.watchers.len()
    }

    /// Returns `true` if no watchers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watchers.is_empty()
    }

    /// Registers (or replaces) a watcher for `key` over `span`.
    pub fn watch(&mut self, key: K, span: ItemSpan, mode: WatchMode) {
        self.watchers.insert(
            key,
            Watcher {
                span,
                mode,
                visible: false,
            },
        );
    }

    /// Removes the watcher for `key`, returning `true` if one existed.
    pub fn unwatch(&mut self, key: &K) -> bool {
        self.watchers.remove(key).is_some()
    }

    /// Updates the span of an existing watcher (relayout), returning `true`
    /// if the key was registered.
    ///
    /// The watcher's visibility state is preserved; the next
    /// [`ProximityTracker::update`] reports any transition the move caused.
    pub fn set_span(&mut self, key: &K, span: ItemSpan) -> bool {
        match self.watchers.get_mut(key) {
            Some(watcher) => {
                watcher.span = span;
                true
            }
            None => false,
        }
    }

    /// Removes every watcher.
    pub fn clear(&mut self) {
        self.watchers.clear();
    }

    /// Processes the latest viewport sample and returns the transitions.
    ///
    /// The viewport is inflated by the proximity margin on both sides before
    /// intersection testing. One-shot watchers that fire are unregistered
    /// before this returns.
    #[must_use]
    pub fn update(&mut self, scroll_offset: f64, viewport_height: f64) -> Vec<VisibilityEvent<K>> {
        let mut events = Vec::new();

        if self.degraded {
            self.watchers.retain(|key, watcher| {
                if !watcher.visible {
                    events.push(VisibilityEvent::Enter(key.clone()));
                    watcher.visible = true;
                }
                watcher.mode == WatchMode::Continuous
            });
            return events;
        }

        let scroll_offset = if scroll_offset.is_finite() {
            scroll_offset
        } else {
            0.0
        };
        let viewport_height = viewport_height.max(0.0);
        let lo = scroll_offset - self.margin;
        let hi = scroll_offset + viewport_height + self.margin;

        self.watchers.retain(|key, watcher| {
            let near = watcher.span.intersects(lo, hi);
            if near == watcher.visible {
                return true;
            }
            watcher.visible = near;
            if near {
                events.push(VisibilityEvent::Enter(key.clone()));
                watcher.mode == WatchMode::Continuous
            } else {
                if watcher.mode == WatchMode::Continuous {
                    events.push(VisibilityEvent::Leave(key.clone()));
                }
                true
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{ItemSpan, ProximityTracker, VisibilityEvent, WatchMode};
    use lightwall_layout::DeviceClass;

    #[test]
    fn one_shot_fires_once_and_unregisters() {
        let mut tracker = ProximityTracker::new(100.0);
        tracker.watch(1_u32, ItemSpan::new(1000.0, 1200.0), WatchMode::OneShot);

        assert!(tracker.update(0.0, 500.0).is_empty());
        assert_eq!(tracker.len(), 1);

        // Margin of 100 over a 500px viewport reaches down to 1100.
        let events = tracker.update(500.0, 500.0);
        assert_eq!(events, [VisibilityEvent::Enter(1)]);
        assert!(tracker.is_empty());

        // Subsequent updates stay silent.
        assert!(tracker.update(500.0, 500.0).is_empty());
    }

    #[test]
    fn continuous_watcher_reports_both_transitions() {
        let mut tracker = ProximityTracker::new(0.0);
        tracker.watch(9_u32, ItemSpan::new(1000.0, 1200.0), WatchMode::Continuous);

        assert!(tracker.update(0.0, 500.0).is_empty());

        let events = tracker.update(900.0, 500.0);
        assert_eq!(events, [VisibilityEvent::Enter(9)]);

        // No transition while it stays visible.
        assert!(tracker.update(950.0, 500.0).is_empty());

        let events = tracker.update(2000.0, 500.0);
        assert_eq!(events, [VisibilityEvent::Leave(9)]);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn margin_scales_with_device_class() {
        let desktop = ProximityTracker::<u32>::for_device_class(DeviceClass::Desktop);
        let tablet = ProximityTracker::<u32>::for_device_class(DeviceClass::Tablet);
        let mobile = ProximityTracker::<u32>::for_device_class(DeviceClass::Mobile);
        assert!(desktop.margin() > tablet.margin());
        assert!(tablet.margin() > mobile.margin());
    }

    #[test]
    fn degraded_tracker_reports_everything_visible() {
        let mut tracker = ProximityTracker::degraded();
        tracker.watch(1_u32, ItemSpan::new(1.0e6, 1.0e6 + 100.0), WatchMode::OneShot);
        tracker.watch(2_u32, ItemSpan::new(2.0e6, 2.0e6 + 100.0), WatchMode::Continuous);

        let mut events = tracker.update(0.0, 500.0);
        events.sort_by_key(|e| match e {
            VisibilityEvent::Enter(k) | VisibilityEvent::Leave(k) => *k,
        });
        assert_eq!(
            events,
            [VisibilityEvent::Enter(1), VisibilityEvent::Enter(2)]
        );

        // One-shot retired, continuous kept but never re-fires.
        assert_eq!(tracker.len(), 1);
        assert!(tracker.update(0.0, 500.0).is_empty());
    }

    #[test]
    fn relayout_moves_a_watcher_and_reports_the_transition() {
        let mut tracker = ProximityTracker::new(0.0);
        tracker.watch(4_u32, ItemSpan::new(0.0, 100.0), WatchMode::Continuous);

        let events = tracker.update(0.0, 500.0);
        assert_eq!(events, [VisibilityEvent::Enter(4)]);

        // The grid reflows and the item moves far below the fold.
        assert!(tracker.set_span(&4, ItemSpan::new(5000.0, 5100.0)));
        let events = tracker.update(0.0, 500.0);
        assert_eq!(events, [VisibilityEvent::Leave(4)]);

        assert!(!tracker.set_span(&99, ItemSpan::new(0.0, 1.0)));
    }

    #[test]
    fn unwatch_is_symmetric_with_watch() {
        let mut tracker = ProximityTracker::new(0.0);
        tracker.watch(1_u32, ItemSpan::new(0.0, 100.0), WatchMode::Continuous);
        assert!(tracker.unwatch(&1));
        assert!(!tracker.unwatch(&1));
        assert!(tracker.is_empty());
        assert!(tracker.update(0.0, 500.0).is_empty());
    }

    #[test]
    fn inverted_span_edges_are_normalized() {
        let span = ItemSpan::new(200.0, 100.0);
        assert_eq!(span.top, 100.0);
        assert_eq!(span.bottom, 200.0);
    }

    #[test]
    fn watcher_count_stays_bounded_by_the_window() {
        // Simulate a 10-row window sliding over a 1000-row collection.
        let mut tracker = ProximityTracker::new(50.0);
        let row_extent = 100.0;
        let mut fired: Vec<u32> = Vec::new();

        for window_start in 0..100_u32 {
            // Watch the rows of the current window, retire the one that left.
            for row in window_start..window_start + 10 {
                let top = f64::from(row) * row_extent;
                tracker.watch(row, ItemSpan::new(top, top + row_extent), WatchMode::OneShot);
            }
            if window_start > 0 {
                let _ = tracker.unwatch(&(window_start - 1));
            }
            assert!(tracker.len() <= 11);

            for event in tracker.update(f64::from(window_start) * row_extent, 500.0) {
                if let VisibilityEvent::Enter(key) = event {
                    fired.push(key);
                }
            }
        }
        assert!(!fired.is_empty());
    }
}
