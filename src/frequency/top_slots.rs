//! Fixed-capacity slots for the most frequent words
//!
//! Slots hold word identities only; frequencies are read live from the owning
//! histogram, so an occupant's reported count stays current without touching
//! the slots again.

use core::array;

#[cfg(feature = "std")]
use std::{borrow::ToOwned, string::String};

#[cfg(not(feature = "std"))]
use alloc::{borrow::ToOwned, string::String};

/// Top slot container with incumbent-wins admission
///
/// A word that is not already in a slot replaces the occupant with the
/// smallest current frequency, but only when its own frequency is strictly
/// greater. Empty slots count as frequency 0. Among equally small occupants
/// the first slot in scan order is the one replaced.
///
/// This is an incremental policy, not an exact top-k: on ties the incumbent
/// stays, and an occupant is never re-examined against words outside the
/// slots.
#[derive(Clone, Debug)]
pub struct TopSlots<const N: usize> {
    slots: [Option<String>; N],
}

impl<const N: usize> TopSlots<N> {
    /// Create empty slots
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero
    pub fn new() -> Self {
        assert!(N > 0, "slot count must be positive");

        Self {
            slots: array::from_fn(|_| None),
        }
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Check if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Check if `word` occupies a slot
    pub fn contains(&self, word: &str) -> bool {
        self.slots.iter().flatten().any(|occupant| occupant == word)
    }

    /// Iterate occupants in slot order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().flatten().map(String::as_str)
    }

    /// Offer `word`, now at `frequency`, for a slot
    ///
    /// `frequency_of` reads an occupant's current frequency. Returns `true` if
    /// the word was admitted.
    pub fn offer<F>(&mut self, word: &str, frequency: u64, frequency_of: F) -> bool
    where
        F: Fn(&str) -> u64,
    {
        let mut target = 0;
        let mut target_frequency = u64::MAX;

        for (index, slot) in self.slots.iter().enumerate() {
            let slot_frequency = match slot {
                Some(occupant) if occupant == word => return false,
                Some(occupant) => frequency_of(occupant),
                None => 0,
            };
            if slot_frequency < target_frequency {
                target = index;
                target_frequency = slot_frequency;
            }
        }

        if frequency > target_frequency {
            self.slots[target] = Some(word.to_owned());
            true
        } else {
            false
        }
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}

impl<const N: usize> Default for TopSlots<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::{collections::BTreeMap, vec::Vec};
    #[cfg(feature = "std")]
    use std::collections::BTreeMap;

    struct Counts(BTreeMap<&'static str, u64>);

    impl Counts {
        fn new() -> Self {
            Self(BTreeMap::new())
        }

        /// Bump a word and offer it, the way the tracker does
        fn observe<const N: usize>(&mut self, slots: &mut TopSlots<N>, word: &'static str) -> bool {
            let frequency = {
                let count = self.0.entry(word).or_insert(0);
                *count += 1;
                *count
            };
            let counts = &self.0;
            slots.offer(word, frequency, |w| counts.get(w).copied().unwrap_or(0))
        }
    }

    #[test]
    fn test_empty() {
        let slots = TopSlots::<5>::new();
        assert!(slots.is_empty());
        assert_eq!(slots.len(), 0);
        assert_eq!(slots.capacity(), 5);
        assert_eq!(slots.iter().count(), 0);
    }

    #[test]
    #[should_panic(expected = "slot count must be positive")]
    fn test_zero_slots_panics() {
        let _ = TopSlots::<0>::new();
    }

    #[test]
    fn test_fills_empty_slots_in_order() {
        let mut slots = TopSlots::<3>::new();
        let mut counts = Counts::new();

        assert!(counts.observe(&mut slots, "a"));
        assert!(counts.observe(&mut slots, "b"));
        assert!(counts.observe(&mut slots, "c"));

        assert_eq!(slots.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_occupant_is_not_readmitted() {
        let mut slots = TopSlots::<3>::new();
        let mut counts = Counts::new();

        counts.observe(&mut slots, "a");
        assert!(!counts.observe(&mut slots, "a"));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_tie_keeps_incumbent() {
        let mut slots = TopSlots::<2>::new();
        let mut counts = Counts::new();

        counts.observe(&mut slots, "a");
        counts.observe(&mut slots, "b");
        assert!(!counts.observe(&mut slots, "c"));

        assert!(!slots.contains("c"));
    }

    #[test]
    fn test_replaces_first_smallest_slot() {
        let mut slots = TopSlots::<3>::new();
        let mut counts = Counts::new();

        counts.observe(&mut slots, "a");
        counts.observe(&mut slots, "b");
        counts.observe(&mut slots, "c");
        counts.observe(&mut slots, "d");
        assert!(counts.observe(&mut slots, "d"));

        // a, b and c all sit at 1; a is first in scan order
        assert_eq!(slots.iter().collect::<Vec<_>>(), vec!["d", "b", "c"]);
    }

    #[test]
    fn test_clear() {
        let mut slots = TopSlots::<2>::new();
        let mut counts = Counts::new();
        counts.observe(&mut slots, "a");

        slots.clear();

        assert!(slots.is_empty());
        assert!(!slots.contains("a"));
    }
}
