//! Core traits for streaming frequency structures
//!
//! Every tracker implements the base [`Sketch`] trait, with specialized traits
//! for point frequency queries, heavy hitters and the shape of the per-item
//! frequency distribution.

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::{borrow::ToOwned, vec::Vec};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{borrow::ToOwned, vec::Vec};

/// Core trait for all streaming structures
pub trait Sketch: Clone + Debug {
    /// The type of item this structure processes
    type Item: ?Sized;

    /// Record one occurrence of an item
    fn update(&mut self, item: &Self::Item);

    /// Reset to empty state
    fn clear(&mut self);

    /// Approximate memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if nothing has been recorded
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Frequency estimation
pub trait FrequencySketch: Sketch {
    /// Frequency of an item (exact for exact trackers)
    fn estimate_frequency(&self, item: &Self::Item) -> u64;

    /// Check if frequency reaches threshold
    fn exceeds_threshold(&self, item: &Self::Item, threshold: u64) -> bool {
        self.estimate_frequency(item) >= threshold
    }
}

/// Heavy hitters / Top-K capability
pub trait HeavyHitters: FrequencySketch
where
    Self::Item: ToOwned,
{
    /// Get tracked items whose frequency is at least `threshold` of the total
    ///
    /// Threshold is a fraction of total count (0.0 to 1.0)
    fn heavy_hitters(&self, threshold: f64) -> Vec<(<Self::Item as ToOwned>::Owned, u64)>;

    /// Get top-k tracked items, most frequent first
    fn top_k(&self, k: usize) -> Vec<(<Self::Item as ToOwned>::Owned, u64)>;
}

/// Summary of the distribution formed by listing every distinct item's
/// frequency once
pub trait FrequencyDistribution: Sketch {
    /// Smallest frequency held by any item, 0 when empty
    fn lowest_frequency(&self) -> u64;

    /// Largest frequency held by any item, 0 when empty
    fn highest_frequency(&self) -> u64;

    /// Lower median of the per-item frequencies, 0 when empty
    ///
    /// For `n` items sorted by frequency this is the element at index `n / 2`.
    fn median_frequency(&self) -> u64;

    /// Number of distinct items seen
    fn distinct_items(&self) -> usize;

    /// Frequency range as `(lowest, highest)`, `None` when empty
    fn frequency_range(&self) -> Option<(u64, u64)> {
        if self.distinct_items() == 0 {
            None
        } else {
            Some((self.lowest_frequency(), self.highest_frequency()))
        }
    }
}
