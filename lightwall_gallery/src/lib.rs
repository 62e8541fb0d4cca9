// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightwall_gallery --heading-base-level=0

//! Lightwall Gallery: one instance tying the rendering core together.
//!
//! The leaf crates are deliberately independent; this crate assembles them
//! into the shape a host actually integrates:
//!
//! - [`GalleryCore`]: owns the layout configuration, the
//!   [`WindowState`](lightwall_window::WindowState), and the
//!   [`ProximityTracker`](lightwall_visibility::ProximityTracker) for one
//!   photo wall. The host feeds it viewport samples, scroll samples, and
//!   item-count changes; each sample re-derives geometry → window →
//!   visibility in one synchronous pass, so the latest sample always wins
//!   and a stale window can never be applied over a newer one.
//! - [`Subscriptions`]: the single explicit subscription table per instance.
//!   [`Subscriptions::attach`] returns a disposer id and
//!   [`Subscriptions::detach`] is the symmetric teardown, so "no leaked
//!   listeners" is mechanically checkable via [`Subscriptions::active`].
//! - [`GalleryEvent`]: everything the instance reports: geometry changes,
//!   window changes, per-item visibility transitions.
//!
//! Gesture recognition and pull-to-refresh consume the raw touch stream
//! independently (see `lightwall_gesture` and `lightwall_refresh`); they are
//! not routed through this assembly.
//!
//! ## Minimal example
//!
//! ```rust
//! use lightwall_gallery::{GalleryCore, GalleryEvent};
//! use lightwall_layout::{DeviceClass, Viewport};
//!
//! let mut gallery: GalleryCore<u64> = GalleryCore::new(DeviceClass::Desktop);
//! gallery.set_item_count(240);
//! gallery.set_viewport(Viewport::new(1280.0, 800.0));
//!
//! let window = gallery.window();
//! assert_eq!(window.first_row, 0);
//! assert!(window.item_range(gallery.geometry().columns, 240).end <= 24);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod gallery;
mod subscription;

pub use gallery::{GalleryCore, GalleryEvent};
pub use subscription::{SubscriptionId, Subscriptions};
