// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered callback registry with stable subscription handles.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

/// Inline capacity for subscriber entries.
///
/// A picker typically has one external observer plus at most one internal
/// one, so this avoids heap allocation in the common case.
const INLINE_SUBSCRIBERS: usize = 2;

/// Stable handle to a subscription in a [`Subscribers`] registry.
///
/// Ids are never reused within one registry, so a stale handle held after
/// unsubscribing simply no-ops.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubscriptionId").field(&self.0).finish()
    }
}

type Callback<T> = Box<dyn FnMut(&T)>;

/// An ordered registry of callbacks, notified by explicit [`emit`](Self::emit)
/// calls.
///
/// Callbacks run in subscription order. The registry is single-threaded and
/// imposes no `Send` bound, so callbacks can capture `Rc`/`RefCell` host
/// state. `emit` takes `&mut self`, which statically prevents a callback
/// from mutating the registry that is invoking it.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use vernier_observe::Subscribers;
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let mut subscribers = Subscribers::new();
///
/// let sink = log.clone();
/// let id = subscribers.subscribe(move |v: &i32| sink.borrow_mut().push(*v));
///
/// subscribers.emit(&1);
/// subscribers.emit(&2);
/// assert!(subscribers.unsubscribe(id));
/// subscribers.emit(&3);
///
/// assert_eq!(*log.borrow(), vec![1, 2]);
/// ```
pub struct Subscribers<T> {
    entries: SmallVec<[(SubscriptionId, Callback<T>); INLINE_SUBSCRIBERS]>,
    next_id: u64,
}

impl<T> Subscribers<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Registers a callback, returning its handle.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns `false` if the handle was already
    /// removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invokes every callback with `value`, in subscription order.
    pub fn emit(&mut self, value: &T) {
        for (_, callback) in &mut self.entries {
            callback(value);
        }
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every subscription.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug impl since callbacks aren't Debug.
impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
