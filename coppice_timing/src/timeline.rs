// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed scalar tweens with last-writer-wins replacement.

use alloc::vec::Vec;
use core::time::Duration;

use crate::easing::Easing;

/// Description of one scalar interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Starting value.
    pub from: f64,
    /// Target value.
    pub to: f64,
    /// Time to wait after [`Timeline::begin`] before interpolation starts.
    ///
    /// While waiting, the sampled value holds at `from`.
    pub delay: Duration,
    /// Interpolation length. A zero duration completes on the next
    /// [`Timeline::advance`], even if the clock has not moved.
    pub duration: Duration,
    /// Curve applied to normalized progress.
    pub easing: Easing,
}

#[derive(Clone, Debug)]
struct Entry<K> {
    key: K,
    from: f64,
    to: f64,
    start: Duration,
    duration: Duration,
    easing: Easing,
}

impl<K> Entry<K> {
    fn sample(&self, now: Duration) -> f64 {
        if now < self.start {
            return self.from;
        }
        if self.duration.is_zero() || now >= self.start + self.duration {
            return self.to;
        }
        let frac = (now - self.start).div_duration_f64(self.duration);
        self.from + (self.to - self.from) * self.easing.eval(frac)
    }

    fn finished(&self, now: Duration) -> bool {
        now >= self.start + self.duration
    }
}

/// A set of in-flight scalar tweens, keyed by caller-chosen identifiers.
///
/// Keys are typically element indices or animation channels. Beginning a
/// tween for a key that already has one replaces the old tween outright;
/// the old tween never reports completion. This mirrors how retargeting a
/// running property animation behaves in retained-mode UI stacks.
/// [`Timeline::cancel`] drops a key's tween the same way, without
/// completion.
///
/// The host drives the timeline with [`Timeline::advance`] and a monotonic
/// clock; completed keys are reported exactly once, in the order their
/// tweens were (most recently) begun.
#[derive(Clone, Debug)]
pub struct Timeline<K> {
    entries: Vec<Entry<K>>,
    now: Duration,
}

impl<K: Clone + PartialEq> Timeline<K> {
    /// Creates an empty timeline at clock zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            now: Duration::ZERO,
        }
    }

    /// Starts (or retargets) the tween for `key`.
    ///
    /// The tween's clock starts at the current time plus `tween.delay`.
    pub fn begin(&mut self, key: K, tween: Tween) {
        self.entries.retain(|e| e.key != key);
        self.entries.push(Entry {
            key,
            from: tween.from,
            to: tween.to,
            start: self.now + tween.delay,
            duration: tween.duration,
            easing: tween.easing,
        });
    }

    /// Drops the tween for `key` without reporting completion.
    ///
    /// Returns `true` if a tween was removed; unknown keys are ignored.
    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != *key);
        self.entries.len() != before
    }

    /// Moves the clock to `now` and returns the keys whose tweens finished.
    ///
    /// Finished tweens are removed; their final sampled value is exactly
    /// their `to` value. The clock never moves backwards: an earlier `now`
    /// is treated as the current time.
    pub fn advance(&mut self, now: Duration) -> Vec<K> {
        if now > self.now {
            self.now = now;
        }
        let now = self.now;
        let mut finished = Vec::new();
        self.entries.retain(|e| {
            if e.finished(now) {
                finished.push(e.key.clone());
                false
            } else {
                true
            }
        });
        finished
    }

    /// Samples the current value of the tween for `key`.
    ///
    /// Returns `None` once the tween has finished (or was never begun).
    #[must_use]
    pub fn value(&self, key: &K) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.key == *key)
            .map(|e| e.sample(self.now))
    }

    /// Returns `true` if a tween for `key` is in flight.
    #[must_use]
    pub fn is_active(&self, key: &K) -> bool {
        self.entries.iter().any(|e| e.key == *key)
    }

    /// Returns `true` if no tweens are in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of in-flight tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the timeline holds no tweens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every in-flight tween without reporting completion.
    ///
    /// The clock is kept; controllers use this when a layout pass rebuilds
    /// their animation state wholesale.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the timeline's current clock value.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Snapshot of the timeline state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TimelineDebugInfo {
        TimelineDebugInfo {
            in_flight: self.entries.len(),
            now: self.now,
        }
    }
}

impl<K: Clone + PartialEq> Default for Timeline<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`Timeline`].
#[derive(Clone, Copy, Debug)]
pub struct TimelineDebugInfo {
    /// Number of in-flight tweens.
    pub in_flight: usize,
    /// Current clock value.
    pub now: Duration,
}
