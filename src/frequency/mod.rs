//! Exact frequency tracking
//!
//! This module provides the structures behind exact, incrementally maintained
//! word frequency statistics.
//!
//! # Structures
//!
//! - [`FrequencyTracker`]: per-word counts plus lowest, median and top-slot queries
//! - [`FrequencyLadder`]: ascending index of populated frequencies with batch counts
//! - [`TopSlots`]: fixed-capacity top slot container with incumbent-wins admission
//!
//! # Example
//!
//! ```
//! use wordstats::frequency::FrequencyTracker;
//!
//! let mut tracker = FrequencyTracker::new();
//!
//! for word in "to be or not to be".split(' ') {
//!     tracker.observe(word);
//! }
//!
//! assert_eq!(tracker.frequency("be"), 2);
//! assert_eq!(tracker.lowest_frequency(), 1);
//! assert_eq!(tracker.median_frequency(), 2);
//! ```

mod ladder;
mod top_slots;
mod tracker;

pub use ladder::{FrequencyLadder, Levels};
pub use top_slots::TopSlots;
pub use tracker::{FrequencyTracker, TOP_SLOTS};

#[cfg(feature = "std")]
pub(crate) type FastMap<K, V> =
    std::collections::HashMap<K, V, xxhash_rust::xxh3::Xxh3Builder>;

#[cfg(not(feature = "std"))]
pub(crate) type FastMap<K, V> = alloc::collections::BTreeMap<K, V>;
