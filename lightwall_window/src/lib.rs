// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightwall_window --heading-base-level=0

//! Lightwall Window: viewport windowing over a photo grid.
//!
//! Given a total item count, a [`GridGeometry`](lightwall_layout::GridGeometry),
//! a scroll offset, and a container height, this crate computes the minimal
//! contiguous row range that must be materialized, plus the spacer metrics the
//! host needs to keep native scrollbar proportions correct. Materialized cost
//! is `O(visible rows + 2 × lookahead)` regardless of collection size.
//!
//! The core concepts are:
//!
//! - [`compute_window`]: the stateless pure function, recomputed per scroll
//!   sample so no stale window can outlive a newer one.
//! - [`WindowRange`]: the materialized half-open row range plus `offset_y`
//!   (translation of the materialized block) and `total_height` (scroll
//!   spacer size).
//! - [`WindowState`]: a small controller that owns the latest samples, caches
//!   the most recent range behind a dirty flag, and adds index-aligned
//!   scrolling via [`ScrollAlign`] and per-row visibility queries.
//! - [`VirtualizationPolicy`]: the size trigger; collections below a
//!   threshold skip windowing entirely and render in full, because small
//!   lists are cheaper without the indirection.
//!
//! This crate deliberately does **not** know about items, images, or any
//! particular UI framework. Hosts are responsible for:
//!
//! - Diffing consecutive [`WindowRange`]s to create/destroy children.
//! - Placing the materialized block at `offset_y` and sizing the scroll
//!   spacer to `total_height`.
//! - Registering materialized rows with the visibility tracker.
//!
//! ## Minimal example
//!
//! ```rust
//! use lightwall_layout::GridGeometry;
//! use lightwall_window::compute_window;
//!
//! // 240 photos in a 4-column grid of 300px rows with 24px gaps.
//! let geometry = GridGeometry::new(4, 300.0, 24.0);
//! let window = compute_window(240, &geometry, 0.0, 800.0, 1);
//!
//! // A handful of rows, not 60.
//! assert_eq!(window.first_row, 0);
//! assert!(window.row_count() <= 6);
//! assert_eq!(window.total_height, 60.0 * 324.0);
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

mod policy;
mod state;
mod window;

pub use policy::VirtualizationPolicy;
pub use state::{DEFAULT_LOOKAHEAD_ROWS, ScrollAlign, WindowState};
pub use window::{WindowRange, compute_window};
