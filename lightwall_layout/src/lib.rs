// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightwall_layout --heading-base-level=0

//! Lightwall Layout: responsive grid geometry for photo walls.
//!
//! This crate derives a [`GridGeometry`] (column count, row height, gap) from a
//! [`Viewport`] and a [`DeviceClass`]. It is a pure calculator: no caching, no
//! side effects, no knowledge of items or rendering. Hosts call
//! [`compute`] (or [`LayoutConfig::compute`] with a custom breakpoint table)
//! whenever the viewport or device class changes, and feed the result into the
//! windowing engine.
//!
//! The calculator is deterministic and idempotent: identical inputs yield
//! bit-identical output, so hosts are free to memoize on the inputs.
//!
//! ## Breakpoints
//!
//! A [`Breakpoint`] maps a minimum viewport width to a column count, a target
//! row height, and a gap. [`DEFAULT_BREAKPOINTS`] covers phone through wide
//! desktop; hosts with different density requirements supply their own table
//! via [`LayoutConfig`]. On [`DeviceClass::Mobile`] the row height is biased
//! downward (further in landscape, where viewport height is scarce) to keep
//! per-frame raster work inside the scroll frame budget.
//!
//! ## Failure mode
//!
//! Invalid viewports (non-finite or non-positive dimensions, as seen
//! transiently during host teardown or before first measure) never raise:
//! they fall back to [`GridGeometry::MIN_SAFE`], a single 200px column with an
//! 8px gap.
//!
//! ## Minimal example
//!
//! ```rust
//! use lightwall_layout::{compute, DeviceClass, Viewport};
//!
//! let geometry = compute(Viewport::new(1280.0, 800.0), DeviceClass::Desktop);
//! assert_eq!(geometry.columns, 4);
//! assert_eq!(geometry.row_height, 300.0);
//! assert_eq!(geometry.gap, 24.0);
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

mod config;
mod geometry;
mod viewport;

pub use config::{Breakpoint, DEFAULT_BREAKPOINTS, LayoutConfig, compute};
pub use geometry::GridGeometry;
pub use viewport::{DeviceClass, Orientation, Viewport};
