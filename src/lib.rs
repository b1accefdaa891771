//! # Wordstats
//!
//! Exact streaming word frequency statistics for Rust.
//!
//! Wordstats counts word observations as they arrive and keeps the statistics
//! ready to read at any moment, without rescanning the words on each query.
//!
//! ## Features
//!
//! - **Exact counts**: the current frequency of every distinct word
//! - **Top words**: up to five of the most frequent words, maintained incrementally
//! - **Lowest frequency**: O(1) from an ordered index of populated frequencies
//! - **Median frequency**: lower median of the per-word counts
//! - **Shared access**: a mutex-serialized handle with comma-separated batch ingestion
//!
//! ## Quick Start
//!
//! ```rust
//! use wordstats::prelude::*;
//!
//! let mut tracker = FrequencyTracker::new();
//! for word in "ball,eggs,pool,dart,ball,ball,table,eggs,pool,mouse,ball,eggs,table,mouse".split(',') {
//!     tracker.observe(word);
//! }
//!
//! assert_eq!(tracker.lowest_frequency(), 1);
//! assert_eq!(tracker.median_frequency(), 2);
//! assert_eq!(tracker.top_five()["ball"], 4);
//! assert!(!tracker.top_five().contains_key("dart"));
//! ```
//!
//! ## Concurrency
//!
//! [`FrequencyTracker`] has no internal locking: `observe` takes `&mut self`
//! and queries take `&self`. Concurrent callers go through one serialization
//! point, either a thread that owns the tracker or [`SharedTracker`]:
//!
//! ```rust
//! use wordstats::SharedTracker;
//!
//! let shared = SharedTracker::new();
//! shared.observe_batch("hello, world,hello");
//!
//! let snapshot = shared.snapshot();
//! assert_eq!(snapshot.top_five["hello"], 2);
//! assert_eq!(snapshot.median, 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library support, xxh3-hashed maps, [`SharedTracker`]
//! - `serde`: serialization of [`StatsSnapshot`]

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod frequency;
pub mod snapshot;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod shared;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::frequency::FrequencyTracker;
    pub use crate::snapshot::StatsSnapshot;

    #[cfg(feature = "std")]
    pub use crate::shared::SharedTracker;
}

pub use frequency::FrequencyTracker;
pub use snapshot::StatsSnapshot;

#[cfg(feature = "std")]
pub use shared::SharedTracker;
