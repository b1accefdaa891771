//! Exact word frequency tracker
//!
//! Tracks the count of every distinct word plus enough ordered structure to
//! answer lowest, median and top-slot queries without rescanning the words.

use super::{FastMap, FrequencyLadder, Levels, TopSlots};
use crate::snapshot::StatsSnapshot;
use crate::traits::{FrequencyDistribution, FrequencySketch, HeavyHitters, Sketch};

#[cfg(feature = "std")]
use std::{borrow::ToOwned, collections::BTreeMap, string::String, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{borrow::ToOwned, collections::BTreeMap, string::String, vec::Vec};

/// Default number of top slots
pub const TOP_SLOTS: usize = 5;

/// Exact streaming word frequency tracker
///
/// Each observation raises one word's count by exactly one. The tracker keeps:
///
/// - a histogram of word → count,
/// - a [`FrequencyLadder`] of the distinct counts in ascending order with the
///   number of words at each count,
/// - [`TopSlots`] holding up to `N` of the most frequent words.
///
/// `observe` is O(1) amortized; `lowest_frequency` and `top_five` do not
/// depend on the number of words; `median_frequency` walks the distinct counts
/// below the median.
///
/// The tracker has no internal locking. Wrap it in
/// [`SharedTracker`](crate::SharedTracker) (or confine it to one thread) when
/// several callers need it.
///
/// # Example
///
/// ```
/// use wordstats::frequency::FrequencyTracker;
///
/// let mut tracker = FrequencyTracker::new();
///
/// for word in ["ball", "eggs", "ball", "  ball ", "", "dart"] {
///     tracker.observe(word);
/// }
///
/// assert_eq!(tracker.frequency("ball"), 3);
/// assert_eq!(tracker.lowest_frequency(), 1);
/// assert_eq!(tracker.median_frequency(), 1);
/// assert_eq!(tracker.top_five().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct FrequencyTracker<const N: usize = TOP_SLOTS> {
    /// Word → current count
    histogram: FastMap<String, u64>,
    /// Distinct counts with batch sizes
    ladder: FrequencyLadder,
    /// Most frequent words under the admission policy
    top: TopSlots<N>,
    /// Total accepted observations
    observations: u64,
}

impl FrequencyTracker {
    /// Create an empty tracker with [`TOP_SLOTS`] top slots
    pub fn new() -> Self {
        Self::with_slots()
    }
}

impl Default for FrequencyTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrequencyTracker<N> {
    /// Create an empty tracker with `N` top slots
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero
    pub fn with_slots() -> Self {
        Self {
            histogram: FastMap::default(),
            ladder: FrequencyLadder::new(),
            top: TopSlots::new(),
            observations: 0,
        }
    }

    /// Record one occurrence of `word`
    ///
    /// Leading and trailing whitespace is trimmed; a blank word is ignored.
    pub fn observe(&mut self, word: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }

        let frequency = match self.histogram.get_mut(word) {
            Some(count) => {
                *count += 1;
                *count
            }
            None => {
                self.histogram.insert(word.to_owned(), 1);
                1
            }
        };
        self.observations += 1;

        self.ladder.promote(frequency);

        let histogram = &self.histogram;
        let admitted = self.top.offer(word, frequency, |occupant| {
            histogram.get(occupant).copied().unwrap_or(0)
        });
        if admitted {
            log::trace!("'{}' admitted to top slots at frequency {}", word, frequency);
        }
    }

    /// Record every word of an iterator
    pub fn observe_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.observe(word.as_ref());
        }
    }

    /// Current count of `word` (trimmed), 0 if never observed
    pub fn frequency(&self, word: &str) -> u64 {
        self.count_of(word.trim())
    }

    fn count_of(&self, word: &str) -> u64 {
        self.histogram.get(word).copied().unwrap_or(0)
    }

    /// Top slot occupants with their current counts
    ///
    /// Holds at most `N` entries (five by default).
    pub fn top_five(&self) -> BTreeMap<String, u64> {
        self.top
            .iter()
            .filter_map(|word| {
                let count = self.count_of(word);
                (count > 0).then(|| (word.to_owned(), count))
            })
            .collect()
    }

    /// Smallest count held by any word, 0 when empty
    pub fn lowest_frequency(&self) -> u64 {
        self.ladder.lowest()
    }

    /// Largest count held by any word, 0 when empty
    pub fn highest_frequency(&self) -> u64 {
        self.ladder.highest()
    }

    /// Lower median of the per-word counts, 0 when empty
    ///
    /// With `n` distinct words sorted by count, this is the count at index
    /// `n / 2`.
    pub fn median_frequency(&self) -> u64 {
        self.ladder.lower_median()
    }

    /// Number of distinct words observed
    pub fn distinct_words(&self) -> usize {
        self.histogram.len()
    }

    /// Number of distinct counts currently held
    pub fn distinct_frequencies(&self) -> usize {
        self.ladder.len()
    }

    /// Total accepted observations
    pub fn total_observations(&self) -> u64 {
        self.observations
    }

    /// `(count, words at that count)` pairs in ascending count order
    pub fn levels(&self) -> Levels<'_> {
        self.ladder.iter()
    }

    /// Top slot occupants, in slot order
    pub fn top_slots(&self) -> &TopSlots<N> {
        &self.top
    }

    /// Lowest, median and top-slot results from the current state
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            top_five: self.top_five(),
            lowest: self.lowest_frequency(),
            median: self.median_frequency(),
        }
    }

    /// Sort `(word, count)` pairs most frequent first, ties by word
    fn ranked(&self) -> Vec<(String, u64)> {
        let mut ranked: Vec<_> = self.top_five().into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}

impl<const N: usize> Sketch for FrequencyTracker<N> {
    type Item = str;

    fn update(&mut self, item: &str) {
        self.observe(item);
    }

    fn clear(&mut self) {
        self.histogram.clear();
        self.ladder.clear();
        self.top.clear();
        self.observations = 0;
    }

    fn size_bytes(&self) -> usize {
        let words: usize = self.histogram.keys().map(String::capacity).sum();
        core::mem::size_of::<Self>()
            + words
            + self.histogram.len() * (core::mem::size_of::<String>() + core::mem::size_of::<u64>())
            + self.ladder.size_bytes()
    }

    fn count(&self) -> u64 {
        self.observations
    }
}

impl<const N: usize> FrequencySketch for FrequencyTracker<N> {
    fn estimate_frequency(&self, item: &str) -> u64 {
        self.frequency(item)
    }
}

impl<const N: usize> HeavyHitters for FrequencyTracker<N> {
    fn heavy_hitters(&self, threshold: f64) -> Vec<(String, u64)> {
        let min_count = (threshold * self.observations as f64) as u64;

        self.ranked()
            .into_iter()
            .filter(|(_, count)| *count >= min_count)
            .collect()
    }

    fn top_k(&self, k: usize) -> Vec<(String, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }
}

impl<const N: usize> FrequencyDistribution for FrequencyTracker<N> {
    fn lowest_frequency(&self) -> u64 {
        self.ladder.lowest()
    }

    fn highest_frequency(&self) -> u64 {
        self.ladder.highest()
    }

    fn median_frequency(&self) -> u64 {
        self.ladder.lower_median()
    }

    fn distinct_items(&self) -> usize {
        self.distinct_words()
    }
}
