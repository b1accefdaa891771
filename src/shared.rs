//! Tracker shared between threads
//!
//! [`SharedTracker`] is the single serialization point in front of a
//! [`FrequencyTracker`]: every read and every write takes the same lock, so a
//! caller never sees a half-applied observation.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::frequency::FrequencyTracker;
use crate::snapshot::StatsSnapshot;

/// Separator between words in a batch body
pub const BATCH_SEPARATOR: char = ',';

/// Mutex-guarded [`FrequencyTracker`]
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use wordstats::SharedTracker;
///
/// let shared = Arc::new(SharedTracker::new());
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || shared.observe_batch("apple,banana, apple"))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// let snapshot = shared.snapshot();
/// assert_eq!(snapshot.top_five["apple"], 8);
/// assert_eq!(snapshot.lowest, 4);
/// ```
#[derive(Debug, Default)]
pub struct SharedTracker {
    inner: Mutex<FrequencyTracker>,
}

impl SharedTracker {
    /// Create a shared handle around an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared handle around an existing tracker
    pub fn from_tracker(tracker: FrequencyTracker) -> Self {
        Self {
            inner: Mutex::new(tracker),
        }
    }

    /// Record one occurrence of `word`
    pub fn observe(&self, word: &str) {
        self.lock().observe(word);
    }

    /// Record every comma-separated word of `body` under one lock
    ///
    /// Tokens are trimmed and blank tokens skipped. Returns how many tokens
    /// were counted.
    pub fn observe_batch(&self, body: &str) -> usize {
        let mut tracker = self.lock();
        let before = tracker.total_observations();

        let mut tokens = 0usize;
        for token in body.split(BATCH_SEPARATOR) {
            tracker.observe(token);
            tokens += 1;
        }

        let counted = (tracker.total_observations() - before) as usize;
        log::debug!(
            "batch of {} tokens: {} counted, {} distinct words tracked",
            tokens,
            counted,
            tracker.distinct_words()
        );
        counted
    }

    /// Top words, lowest and median frequency read under one lock
    pub fn snapshot(&self) -> StatsSnapshot {
        self.lock().snapshot()
    }

    /// Run a read-only closure against the tracker under the lock
    pub fn with_tracker<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&FrequencyTracker) -> R,
    {
        f(&self.lock())
    }

    /// Take the tracker back out
    pub fn into_inner(self) -> FrequencyTracker {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquire the lock, recovering from poisoning
    ///
    /// Observation never panics part way through an update, so the tracker
    /// behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, FrequencyTracker> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("tracker lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl From<FrequencyTracker> for SharedTracker {
    fn from(tracker: FrequencyTracker) -> Self {
        Self::from_tracker(tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_batch_skips_blank_tokens() {
        let shared = SharedTracker::new();

        let counted = shared.observe_batch("ball, eggs,, ,ball,");

        assert_eq!(counted, 3);
        shared.with_tracker(|tracker| {
            assert_eq!(tracker.frequency("ball"), 2);
            assert_eq!(tracker.frequency("eggs"), 1);
            assert_eq!(tracker.distinct_words(), 2);
        });
    }

    #[test]
    fn test_empty_body() {
        let shared = SharedTracker::new();
        assert_eq!(shared.observe_batch(""), 0);
        assert!(shared.snapshot().is_empty());
    }

    #[test]
    fn test_snapshot() {
        let shared = SharedTracker::new();
        shared.observe_batch("a,b,b,c,c,c");

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.lowest, 1);
        assert_eq!(snapshot.median, 2);
        assert_eq!(snapshot.most_frequent(), Some(("c", 3)));
    }

    #[test]
    fn test_from_tracker_keeps_state() {
        let mut tracker = FrequencyTracker::new();
        tracker.observe("kept");

        let shared = SharedTracker::from(tracker);
        shared.observe("kept");

        assert_eq!(shared.into_inner().frequency("kept"), 2);
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let shared = Arc::new(SharedTracker::new());
        shared.observe("before");

        let poisoner = Arc::clone(&shared);
        let result = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(result.is_err());

        shared.observe("after");
        let snapshot = shared.snapshot();
        assert_eq!(snapshot.top_five.len(), 2);
    }
}
