// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot timer queue with stable handles.

use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use smallvec::SmallVec;

/// Inline capacity for pending timers.
///
/// A controller rarely has more than a debounce deadline and a retry tick
/// pending at once, so this avoids heap allocation in the common case.
const INLINE_TIMERS: usize = 4;

/// Stable handle to a pending timer in a [`TimerQueue`].
///
/// Ids are never reused within one queue, so a stale handle held after its
/// timer fired (or was canceled) simply no-ops on [`TimerQueue::cancel`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl fmt::Debug for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TimerId").field(&self.0).finish()
    }
}

#[derive(Copy, Clone, Debug)]
struct TimerEntry {
    id: TimerId,
    deadline: Duration,
}

/// A set of pending one-shot deadlines, pumped by the host.
///
/// The queue never looks at a clock: deadlines are compared against the
/// `now` the host passes to [`poll`](Self::poll). `now` must be
/// monotonically non-decreasing across calls; the unit is "time since any
/// fixed epoch the host chooses".
///
/// # Example
///
/// ```rust
/// use core::time::Duration;
/// use vernier_timing::TimerQueue;
///
/// let mut queue = TimerQueue::new();
/// let early = queue.schedule(Duration::from_millis(10));
/// let late = queue.schedule(Duration::from_millis(20));
///
/// assert_eq!(queue.poll(Duration::from_millis(5)), vec![]);
/// // Expired timers drain in deadline order.
/// assert_eq!(queue.poll(Duration::from_millis(25)), vec![early, late]);
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    entries: SmallVec<[TimerEntry; INLINE_TIMERS]>,
    next_id: u64,
}

impl TimerQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Schedules a one-shot timer for the given absolute deadline.
    ///
    /// A deadline at or before the current `now` is legal and fires on the
    /// next [`poll`](Self::poll).
    pub fn schedule(&mut self, deadline: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry { id, deadline });
        id
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was
    /// canceled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Returns `true` if the timer has neither fired nor been canceled.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Drains every timer whose deadline is at or before `now`, in deadline
    /// order (ties resolve in scheduling order).
    pub fn poll(&mut self, now: Duration) -> Vec<TimerId> {
        let mut expired: Vec<TimerEntry> = Vec::new();
        self.entries.retain(|entry| {
            if entry.deadline <= now {
                expired.push(*entry);
                false
            } else {
                true
            }
        });
        expired.sort_by_key(|entry| (entry.deadline, entry.id.0));
        expired.into_iter().map(|entry| entry.id).collect()
    }

    /// Removes every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts integrating with a real event loop can use this to sleep until
    /// the next interesting moment instead of polling on a fixed cadence.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }
}

#[cfg(test)]
mod tests {
    use super::TimerQueue;
    use alloc::vec;
    use core::time::Duration;

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn fires_in_deadline_order_regardless_of_scheduling_order() {
        let mut queue = TimerQueue::new();
        let late = queue.schedule(ms(30));
        let early = queue.schedule(ms(10));
        assert_eq!(queue.poll(ms(40)), vec![early, late]);
    }

    #[test]
    fn unexpired_timers_stay_pending() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(ms(100));
        assert!(queue.poll(ms(99)).is_empty());
        assert!(queue.is_pending(id));
        assert_eq!(queue.poll(ms(100)), vec![id]);
        assert!(!queue.is_pending(id));
    }

    #[test]
    fn cancel_removes_exactly_one_timer() {
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(ms(10));
        let drop = queue.schedule(ms(10));
        assert!(queue.cancel(drop));
        assert!(!queue.cancel(drop));
        assert_eq!(queue.poll(ms(10)), vec![keep]);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut queue = TimerQueue::new();
        let first = queue.schedule(ms(1));
        let _ = queue.poll(ms(1));
        let second = queue.schedule(ms(2));
        assert_ne!(first, second);
    }

    #[test]
    fn next_deadline_tracks_the_minimum() {
        let mut queue = TimerQueue::new();
        assert_eq!(queue.next_deadline(), None);
        queue.schedule(ms(50));
        queue.schedule(ms(20));
        assert_eq!(queue.next_deadline(), Some(ms(20)));
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(5));
        queue.schedule(ms(6));
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.poll(ms(10)).is_empty());
    }
}
