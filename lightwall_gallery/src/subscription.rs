// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-instance subscription table.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::fmt;

/// Disposer for one attached handler.
///
/// Returned by [`Subscriptions::attach`]; pass it back to
/// [`Subscriptions::detach`] to tear the handler down. Ids are never reused
/// within one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// An explicit table of event handlers with symmetric teardown.
///
/// Handlers fire in attach order. Every attach has exactly one matching
/// detach; [`Subscriptions::active`] exposes the live handler count so
/// lifecycle tests can assert nothing leaked.
pub struct Subscriptions<E> {
    handlers: BTreeMap<u64, Box<dyn FnMut(&E)>>,
    next_id: u64,
}

impl<E> fmt::Debug for Subscriptions<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriptions")
            .field("active", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl<E> Default for Subscriptions<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Subscriptions<E> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Attaches a handler and returns its disposer.
    pub fn attach(&mut self, handler: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.insert(id, Box::new(handler));
        SubscriptionId(id)
    }

    /// Detaches a handler, returning `true` if it was attached.
    pub fn detach(&mut self, id: SubscriptionId) -> bool {
        self.handlers.remove(&id.0).is_some()
    }

    /// Number of live handlers.
    #[must_use]
    pub fn active(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handlers are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Delivers `event` to every handler, in attach order.
    pub fn emit(&mut self, event: &E) {
        for handler in self.handlers.values_mut() {
            handler(event);
        }
    }

    /// Detaches every handler.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}
