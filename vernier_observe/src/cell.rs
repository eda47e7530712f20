// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value cell with change-only publication.

use core::fmt;

use crate::subscribers::{SubscriptionId, Subscribers};

/// A value cell that publishes to its subscribers only when the value
/// actually changes.
///
/// [`set`](Self::set) compares against the stored value first; setting an
/// equal value is a silent no-op and reports `false`. This is the single
/// place duplicate-notification suppression lives — everything downstream
/// can assume one notification per distinct value.
///
/// State is committed *before* subscribers run, so an observer that panics
/// cannot leave the cell holding a stale value.
pub struct ObservableCell<T> {
    value: T,
    subscribers: Subscribers<T>,
}

impl<T: Clone + PartialEq> ObservableCell<T> {
    /// Creates a cell holding `initial`, with no subscribers.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            subscribers: Subscribers::new(),
        }
    }

    /// Returns the current value.
    #[must_use]
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Stores `value` and publishes it, unless it equals the current value.
    ///
    /// Returns `true` if the value changed (and was published).
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        let current = self.value.clone();
        self.subscribers.emit(&current);
        true
    }

    /// Registers a change callback, returning its handle.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Removes a change subscription. Returns `false` if the handle was
    /// already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

// Manual Debug impl since callbacks aren't Debug.
impl<T: fmt::Debug> fmt::Debug for ObservableCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableCell")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ObservableCell;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn set_publishes_only_on_change() {
        let log: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));
        let mut cell = ObservableCell::new(80.0);

        let sink = log.clone();
        cell.subscribe(move |v| sink.borrow_mut().push(*v));

        assert!(cell.set(81.0));
        assert!(!cell.set(81.0));
        assert!(cell.set(82.0));

        assert_eq!(*log.borrow(), [81.0, 82.0]);
        assert_eq!(*cell.get(), 82.0);
    }

    #[test]
    fn unsubscribe_silences_a_subscriber() {
        let count = Rc::new(RefCell::new(0));
        let mut cell = ObservableCell::new(0_u32);

        let sink = count.clone();
        let id = cell.subscribe(move |_| *sink.borrow_mut() += 1);

        cell.set(1);
        assert!(cell.unsubscribe(id));
        cell.set(2);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn value_is_committed_before_publication() {
        let seen = Rc::new(RefCell::new(None));
        let mut cell = ObservableCell::new(0_u32);

        let sink = seen.clone();
        cell.subscribe(move |v| *sink.borrow_mut() = Some(*v));

        cell.set(7);
        // The subscriber observed the committed value, not the old one.
        assert_eq!(*seen.borrow(), Some(7));
        assert_eq!(*cell.get(), 7);
    }
}
