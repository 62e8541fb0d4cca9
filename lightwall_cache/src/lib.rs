// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightwall_cache --heading-base-level=0

//! Lightwall Cache: a host-owned, bounded media cache.
//!
//! Decoded images are the dominant memory cost of a photo wall. This crate
//! provides [`MediaCache`], an explicitly constructed cache the host owns
//! and passes into the core (never a module-level singleton), so its
//! lifetime, capacity, and eviction are unit-testable in isolation.
//!
//! The cache is a recency-ordered map with a hard capacity: inserting into a
//! full cache evicts the least recently used entry and hands it back to the
//! host (which may need to release GPU textures or object URLs).
//! [`MediaCache::get`] counts as a use; [`MediaCache::peek`] does not.
//!
//! Eviction scans for the oldest recency stamp, which keeps entries free of
//! list plumbing; the intended capacities are the tens-to-hundreds of
//! decoded images a viewport's neighborhood can hold.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use lightwall_cache::MediaCache;
//!
//! let mut cache = MediaCache::new(NonZeroUsize::new(2).unwrap());
//! assert!(cache.insert("a", 1).is_none());
//! assert!(cache.insert("b", 2).is_none());
//!
//! // Touch "a", then overflow: "b" is now the LRU entry and gets evicted.
//! assert_eq!(cache.get(&"a"), Some(&1));
//! assert_eq!(cache.insert("c", 3), Some(("b", 2)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;

pub use cache::MediaCache;
