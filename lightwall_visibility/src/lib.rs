// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightwall_visibility --heading-base-level=0

//! Lightwall Visibility: lazy visibility tracking for windowed photo grids.
//!
//! Decoding and uploading image data for off-screen items wastes memory and
//! bandwidth; doing it the instant an item scrolls into view causes visible
//! pop-in. This crate sits between the two: a [`ProximityTracker`] reports
//! when a watched item comes within a proximity margin of the viewport, so
//! the host can start the fetch early enough to hide network latency.
//!
//! The core concepts are:
//!
//! - [`ProximityTracker`]: a registry of per-item watchers over vertical
//!   spans. Hosts register rows as they materialize and retire them as they
//!   leave the window, so the number of live watchers is bounded by the
//!   window size, never the collection size.
//! - [`WatchMode`]: one-shot watchers unregister themselves the moment they
//!   fire (the common "load once" case); continuous watchers report both
//!   [`VisibilityEvent::Enter`] and [`VisibilityEvent::Leave`] transitions.
//! - [`LoadLedger`]: per-item media load phases
//!   (pending/loading/loaded/failed) so a failed fetch can render a distinct
//!   placeholder instead of an infinite spinner.
//!
//! ## Degraded mode
//!
//! When the host environment has no usable visibility primitive, construct
//! the tracker with [`ProximityTracker::degraded`]: every watcher fires on
//! the next [`ProximityTracker::update`]. Missing lazy loading is a
//! performance regression; images that never load would be a correctness
//! bug. The tracker fails open.
//!
//! ## Minimal example
//!
//! ```rust
//! use lightwall_layout::DeviceClass;
//! use lightwall_visibility::{ItemSpan, ProximityTracker, VisibilityEvent, WatchMode};
//!
//! let mut tracker = ProximityTracker::for_device_class(DeviceClass::Desktop);
//! tracker.watch(7_u32, ItemSpan::new(3000.0, 3300.0), WatchMode::OneShot);
//!
//! // Far away: nothing fires.
//! assert!(tracker.update(0.0, 800.0).is_empty());
//!
//! // Scrolled near enough that the desktop margin covers the item.
//! let events = tracker.update(2600.0, 800.0);
//! assert_eq!(events, [VisibilityEvent::Enter(7)]);
//!
//! // One-shot watchers retire themselves.
//! assert!(tracker.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod load;
mod tracker;

pub use load::{LoadLedger, LoadPhase};
pub use tracker::{
    DEFAULT_DESKTOP_MARGIN, DEFAULT_MOBILE_MARGIN, DEFAULT_TABLET_MARGIN, ItemSpan,
    ProximityTracker, VisibilityEvent, WatchMode,
};
