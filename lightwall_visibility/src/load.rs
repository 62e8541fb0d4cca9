// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item media load bookkeeping.

use core::hash::Hash;

use hashbrown::HashMap;

/// Load phase of one item's media.
///
/// Hosts use this to pick a placeholder: pending/loading items show a
/// neutral placeholder, failed items show a distinct error placeholder
/// rather than an infinite spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No fetch has started.
    #[default]
    Pending,
    /// A fetch is in flight.
    Loading,
    /// Media is decoded and ready.
    Loaded,
    /// The fetch failed; the host shows a failure placeholder.
    Failed,
}

/// Tracks the load phase of watched items.
///
/// Items the ledger has never seen are [`LoadPhase::Pending`]. Hosts mark
/// transitions as their fetches progress and [`LoadLedger::reset`] an item
/// to retry a failure or reclaim bookkeeping for evicted entries.
#[derive(Debug, Default)]
pub struct LoadLedger<K> {
    phases: HashMap<K, LoadPhase>,
}

impl<K: Eq + Hash> LoadLedger<K> {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phases: HashMap::new(),
        }
    }

    /// The phase of `key`; [`LoadPhase::Pending`] if never marked.
    #[must_use]
    pub fn phase(&self, key: &K) -> LoadPhase {
        self.phases.get(key).copied().unwrap_or_default()
    }

    /// Marks a fetch as started.
    pub fn mark_loading(&mut self, key: K) {
        self.phases.insert(key, LoadPhase::Loading);
    }

    /// Marks a fetch as completed.
    pub fn mark_loaded(&mut self, key: K) {
        self.phases.insert(key, LoadPhase::Loaded);
    }

    /// Marks a fetch as failed.
    pub fn mark_failed(&mut self, key: K) {
        self.phases.insert(key, LoadPhase::Failed);
    }

    /// Forgets `key`, returning it to [`LoadPhase::Pending`].
    ///
    /// Returns `true` if the key had a recorded phase.
    pub fn reset(&mut self, key: &K) -> bool {
        self.phases.remove(key).is_some()
    }

    /// Number of items with a recorded phase.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Returns `true` if no phases are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Forgets every recorded phase.
    pub fn clear(&mut self) {
        self.phases.clear();
    }
}
