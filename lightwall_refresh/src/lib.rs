// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightwall_refresh --heading-base-level=0

//! Lightwall Refresh: an overscroll-triggered pull-to-refresh controller.
//!
//! A pull-to-refresh session consumes the same raw touch stream as the
//! gesture recognizer, but only while the scroll container sits at its top
//! edge. The [`RefreshController`] tracks the vertical pull with a damping
//! factor so perceived distance grows sub-linearly, exposes a
//! `progress ∈ [0, 1]` against an activation threshold for the host's
//! indicator, and on release either asks the host to run its refresh
//! callback or snaps back.
//!
//! ## The settle path
//!
//! The refresh callback is asynchronous and owned by the host; this
//! controller only observes its completion. [`RefreshController::settle`] is
//! the finally-equivalent exit: the host calls it when the callback resolves
//! **or** rejects, and the controller returns to [`RefreshState::Idle`] with
//! the pull distance reset either way. A failed refresh can never leave the
//! controller stuck in [`RefreshState::Refreshing`]. [`RefreshController::abort`]
//! covers host teardown from any state; there are no internal timers or
//! observers to leak.
//!
//! ## Minimal example
//!
//! ```rust
//! use lightwall_refresh::{Release, RefreshController, RefreshState};
//!
//! let mut refresh = RefreshController::default();
//!
//! // Finger down while the container is at its top edge.
//! assert!(refresh.begin(true));
//! refresh.pull(200.0);
//! assert_eq!(refresh.progress(), 1.0);
//!
//! // Released past the threshold: host runs its async refresh callback.
//! assert_eq!(refresh.release(), Release::StartRefresh);
//! assert_eq!(refresh.state(), RefreshState::Refreshing);
//!
//! // ...callback settles (success or failure) and the controller resets.
//! refresh.settle();
//! assert_eq!(refresh.state(), RefreshState::Idle);
//! assert_eq!(refresh.pull_distance(), 0.0);
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

mod controller;

pub use controller::{RefreshConfig, RefreshController, RefreshState, Release};
