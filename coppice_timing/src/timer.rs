// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot timer queue.

use alloc::vec::Vec;
use core::time::Duration;

/// A queue of one-shot deadlines, keyed by caller-chosen identifiers.
///
/// This is the headless stand-in for a dispatcher timer: the zoom engine
/// uses it to declare "fire the completion notification after the animation
/// duration has elapsed" without owning a clock. Scheduling a key that is
/// already pending replaces its deadline.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    timers: Vec<(K, Duration)>,
    now: Duration,
}

impl<K: Clone + PartialEq> TimerQueue<K> {
    /// Creates an empty queue at clock zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            now: Duration::ZERO,
        }
    }

    /// Schedules `key` to fire at the absolute time `fire_at`.
    ///
    /// A deadline at or before the current clock fires on the next
    /// [`TimerQueue::advance`].
    pub fn schedule(&mut self, key: K, fire_at: Duration) {
        self.timers.retain(|(k, _)| *k != key);
        self.timers.push((key, fire_at));
    }

    /// Schedules `key` to fire `delay` after the current clock value.
    pub fn schedule_after(&mut self, key: K, delay: Duration) {
        let fire_at = self.now + delay;
        self.schedule(key, fire_at);
    }

    /// Removes a pending timer. Unknown keys are ignored.
    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.timers.len();
        self.timers.retain(|(k, _)| k != key);
        self.timers.len() != before
    }

    /// Returns `true` if `key` has a pending deadline.
    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.timers.iter().any(|(k, _)| k == key)
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// Moves the clock to `now` and returns the keys that fired.
    ///
    /// Fired keys are reported exactly once, in schedule order. The clock
    /// never moves backwards.
    pub fn advance(&mut self, now: Duration) -> Vec<K> {
        if now > self.now {
            self.now = now;
        }
        let now = self.now;
        let mut fired = Vec::new();
        self.timers.retain(|(k, fire_at)| {
            if *fire_at <= now {
                fired.push(k.clone());
                false
            } else {
                true
            }
        });
        fired
    }

    /// Returns the queue's current clock value.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }
}

impl<K: Clone + PartialEq> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::TimerQueue;

    #[test]
    fn fires_once_at_deadline() {
        let mut q = TimerQueue::new();
        q.schedule("done", Duration::from_millis(500));

        assert!(q.advance(Duration::from_millis(499)).is_empty());
        assert_eq!(q.advance(Duration::from_millis(500)), ["done"]);
        assert!(q.advance(Duration::from_secs(1)).is_empty());
        assert!(q.is_idle());
    }

    #[test]
    fn schedule_after_is_relative_to_current_clock() {
        let mut q = TimerQueue::new();
        q.advance(Duration::from_secs(2));
        q.schedule_after(0_u32, Duration::from_secs(1));

        assert!(q.advance(Duration::from_millis(2500)).is_empty());
        assert_eq!(q.advance(Duration::from_secs(3)), [0]);
    }

    #[test]
    fn rescheduling_replaces_the_deadline() {
        let mut q = TimerQueue::new();
        q.schedule("t", Duration::from_millis(100));
        q.schedule("t", Duration::from_millis(900));

        assert!(q.advance(Duration::from_millis(500)).is_empty());
        assert_eq!(q.advance(Duration::from_secs(1)), ["t"]);
    }

    #[test]
    fn cancel_discards_pending_timers() {
        let mut q = TimerQueue::new();
        q.schedule("t", Duration::from_millis(100));

        assert!(q.cancel(&"t"));
        assert!(!q.cancel(&"t"));
        assert!(q.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn past_deadline_fires_on_next_advance() {
        let mut q = TimerQueue::new();
        q.advance(Duration::from_secs(5));
        q.schedule("late", Duration::from_secs(1));

        assert_eq!(q.advance(Duration::from_secs(5)), ["late"]);
    }

    #[test]
    fn fired_keys_come_out_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(0_u8, Duration::from_millis(300));
        q.schedule(1_u8, Duration::from_millis(100));
        q.schedule(2_u8, Duration::from_millis(200));

        assert_eq!(q.advance(Duration::from_secs(1)), [0, 1, 2]);
    }
}
