//! Point-in-time statistics
//!
//! [`StatsSnapshot`] bundles the three query results so they can be handed to
//! a caller (or serialized as a response payload) from one consistent state.

#[cfg(feature = "std")]
use std::{collections::BTreeMap, string::String};

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, string::String};

/// Top words, lowest frequency and median frequency taken together
///
/// With the `serde` feature the fields serialize as `Top5`, `Least` and
/// `Median`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    /// Top slot occupants with their counts
    #[cfg_attr(feature = "serde", serde(rename = "Top5"))]
    pub top_five: BTreeMap<String, u64>,
    /// Smallest per-word count
    #[cfg_attr(feature = "serde", serde(rename = "Least"))]
    pub lowest: u64,
    /// Lower median of the per-word counts
    #[cfg_attr(feature = "serde", serde(rename = "Median"))]
    pub median: u64,
}

impl StatsSnapshot {
    /// Check if the snapshot was taken before any word was observed
    pub fn is_empty(&self) -> bool {
        self.top_five.is_empty()
    }

    /// Most frequent top word, ties broken by the smaller word
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.top_five
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(word, &count)| (word.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let snapshot = StatsSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.most_frequent(), None);
        assert_eq!(snapshot.lowest, 0);
        assert_eq!(snapshot.median, 0);
    }

    #[test]
    fn test_most_frequent_breaks_ties_by_word() {
        let snapshot = StatsSnapshot {
            top_five: [("pear", 3), ("apple", 3), ("fig", 1)]
                .into_iter()
                .map(|(w, c)| (String::from(w), c))
                .collect(),
            lowest: 1,
            median: 3,
        };

        assert_eq!(snapshot.most_frequent(), Some(("apple", 3)));
        assert!(!snapshot.is_empty());
    }
}
