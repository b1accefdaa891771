//! Ordered index of populated frequency levels
//!
//! A [`FrequencyLadder`] keeps every frequency value currently held by at least
//! one item in ascending order, together with the number of items sitting at
//! that value (the level's batch). Items only ever climb one rung at a time, so
//! a new level always lands directly after the level the item just left and
//! every update is O(1).

use super::FastMap;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// One populated frequency value, linked to its neighbours by arena index
#[derive(Clone, Debug)]
struct Level {
    /// The frequency value
    frequency: u64,
    /// Number of items currently at exactly this frequency
    batch: u64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ascending sequence of distinct frequencies with per-level batch counts
///
/// Levels live in an arena (`Vec`) and link to each other by index; a map from
/// frequency value to arena index gives O(1) access to any level. Arena slots
/// vacated by retired levels are reused before the arena grows.
///
/// # Example
///
/// ```
/// use wordstats::frequency::FrequencyLadder;
///
/// let mut ladder = FrequencyLadder::new();
///
/// // Two items seen once, then one of them seen again
/// ladder.promote(1);
/// ladder.promote(1);
/// ladder.promote(2);
///
/// assert_eq!(ladder.lowest(), 1);
/// assert_eq!(ladder.iter().collect::<Vec<_>>(), vec![(1, 1), (2, 1)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FrequencyLadder {
    /// Level arena
    levels: Vec<Level>,
    /// Arena slots free for reuse
    vacant: Vec<usize>,
    /// Map from frequency value to its arena slot
    positions: FastMap<u64, usize>,
    /// Lowest populated level
    head: Option<usize>,
    /// Highest populated level
    tail: Option<usize>,
    /// Sum of all batches, i.e. the number of items on the ladder
    population: u64,
}

impl FrequencyLadder {
    /// Create an empty ladder
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct populated frequencies
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if no frequency is populated
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of items on the ladder (sum of all batches)
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Number of items at exactly `frequency`
    pub fn batch(&self, frequency: u64) -> u64 {
        self.positions
            .get(&frequency)
            .map(|&slot| self.levels[slot].batch)
            .unwrap_or(0)
    }

    /// Move one item from `frequency - 1` up to `frequency`
    ///
    /// `frequency == 1` records a newly seen item. The caller guarantees that an
    /// item sits at `frequency - 1` whenever `frequency > 1`.
    pub fn promote(&mut self, frequency: u64) {
        if frequency == 0 {
            return;
        }
        self.enter(frequency);
        if frequency > 1 {
            self.leave(frequency - 1);
        }
    }

    /// Add one item at `frequency`, creating the level if needed
    fn enter(&mut self, frequency: u64) {
        self.population += 1;

        if let Some(&slot) = self.positions.get(&frequency) {
            self.levels[slot].batch += 1;
            return;
        }

        let after = if frequency == 1 {
            None
        } else {
            match self.positions.get(&(frequency - 1)) {
                Some(&anchor) => Some(anchor),
                // Item did not come from the level below; place by walking
                None => self.last_below(frequency),
            }
        };

        let slot = self.allocate(frequency);
        self.link_after(slot, after);
        self.positions.insert(frequency, slot);
    }

    /// Remove one item from `frequency`, retiring the level when it empties
    fn leave(&mut self, frequency: u64) {
        let Some(&slot) = self.positions.get(&frequency) else {
            return;
        };

        self.population -= 1;
        let level = &mut self.levels[slot];
        level.batch -= 1;
        if level.batch > 0 {
            return;
        }

        self.unlink(slot);
        self.positions.remove(&frequency);
        self.vacant.push(slot);
    }

    /// Smallest populated frequency, 0 when empty
    pub fn lowest(&self) -> u64 {
        self.head.map(|slot| self.levels[slot].frequency).unwrap_or(0)
    }

    /// Largest populated frequency, 0 when empty
    pub fn highest(&self) -> u64 {
        self.tail.map(|slot| self.levels[slot].frequency).unwrap_or(0)
    }

    /// Lower median of the item frequencies, 0 when empty
    ///
    /// Walks up from the lowest level accumulating batches until the running
    /// total passes index `population / 2`. Cost is linear in the number of
    /// levels below the median.
    pub fn lower_median(&self) -> u64 {
        let median_index = self.population / 2;
        let mut seen = 0u64;
        for (frequency, batch) in self.iter() {
            seen += batch;
            if seen > median_index {
                return frequency;
            }
        }
        0
    }

    /// Iterate `(frequency, batch)` pairs in ascending frequency order
    pub fn iter(&self) -> Levels<'_> {
        Levels {
            ladder: self,
            cursor: self.head,
        }
    }

    /// Reset to empty
    pub fn clear(&mut self) {
        self.levels.clear();
        self.vacant.clear();
        self.positions.clear();
        self.head = None;
        self.tail = None;
        self.population = 0;
    }

    /// Approximate memory usage in bytes
    pub fn size_bytes(&self) -> usize {
        self.levels.capacity() * core::mem::size_of::<Level>()
            + self.vacant.capacity() * core::mem::size_of::<usize>()
            + self.positions.len() * (core::mem::size_of::<u64>() + core::mem::size_of::<usize>())
    }

    /// Arena slot of the highest level strictly below `frequency`
    fn last_below(&self, frequency: u64) -> Option<usize> {
        let mut found = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            if self.levels[slot].frequency >= frequency {
                break;
            }
            found = Some(slot);
            cursor = self.levels[slot].next;
        }
        found
    }

    fn allocate(&mut self, frequency: u64) -> usize {
        let level = Level {
            frequency,
            batch: 1,
            prev: None,
            next: None,
        };
        match self.vacant.pop() {
            Some(slot) => {
                self.levels[slot] = level;
                slot
            }
            None => {
                self.levels.push(level);
                self.levels.len() - 1
            }
        }
    }

    /// Link `slot` directly after `after`, or at the front when `None`
    fn link_after(&mut self, slot: usize, after: Option<usize>) {
        let next = match after {
            Some(prev) => self.levels[prev].next.replace(slot),
            None => self.head.replace(slot),
        };
        self.levels[slot].prev = after;
        self.levels[slot].next = next;

        match next {
            Some(next) => self.levels[next].prev = Some(slot),
            None => self.tail = Some(slot),
        }
    }

    fn unlink(&mut self, slot: usize) {
        let prev = self.levels[slot].prev.take();
        let next = self.levels[slot].next.take();

        match prev {
            Some(prev) => self.levels[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.levels[next].prev = prev,
            None => self.tail = prev,
        }
    }
}

/// Iterator over populated levels, see [`FrequencyLadder::iter`]
#[derive(Clone, Debug)]
pub struct Levels<'a> {
    ladder: &'a FrequencyLadder,
    cursor: Option<usize>,
}

impl Iterator for Levels<'_> {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let level = &self.ladder.levels[self.cursor?];
        self.cursor = level.next;
        Some((level.frequency, level.batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(ladder: &FrequencyLadder) -> Vec<(u64, u64)> {
        ladder.iter().collect()
    }

    #[test]
    fn test_empty() {
        let ladder = FrequencyLadder::new();
        assert!(ladder.is_empty());
        assert_eq!(ladder.len(), 0);
        assert_eq!(ladder.lowest(), 0);
        assert_eq!(ladder.highest(), 0);
        assert_eq!(ladder.lower_median(), 0);
        assert_eq!(ladder.iter().next(), None);
    }

    #[test]
    fn test_new_items_share_first_level() {
        let mut ladder = FrequencyLadder::new();
        for _ in 0..4 {
            ladder.promote(1);
        }

        assert_eq!(levels(&ladder), vec![(1, 4)]);
        assert_eq!(ladder.population(), 4);
    }

    #[test]
    fn test_promotion_retires_empty_level() {
        let mut ladder = FrequencyLadder::new();
        ladder.promote(1);
        ladder.promote(2);
        ladder.promote(3);

        assert_eq!(levels(&ladder), vec![(3, 1)]);
        assert_eq!(ladder.lowest(), 3);
        assert_eq!(ladder.highest(), 3);
        assert_eq!(ladder.population(), 1);
    }

    #[test]
    fn test_new_level_lands_after_previous() {
        let mut ladder = FrequencyLadder::new();
        // a, b, c seen once; a climbs to 3, b to 2
        ladder.promote(1);
        ladder.promote(1);
        ladder.promote(1);
        ladder.promote(2);
        ladder.promote(3);
        ladder.promote(2);

        assert_eq!(levels(&ladder), vec![(1, 1), (2, 1), (3, 1)]);
        assert_eq!(ladder.batch(2), 1);
        assert_eq!(ladder.batch(4), 0);
    }

    #[test]
    fn test_front_insert_before_higher_levels() {
        let mut ladder = FrequencyLadder::new();
        ladder.promote(1);
        ladder.promote(2);
        ladder.promote(1);

        assert_eq!(levels(&ladder), vec![(1, 1), (2, 1)]);
        assert_eq!(ladder.lowest(), 1);
    }

    #[test]
    fn test_vacant_slots_reused() {
        let mut ladder = FrequencyLadder::new();
        for frequency in 1..=50 {
            ladder.promote(frequency);
        }

        // One level alive at a time, so the arena never needs more than two slots
        assert_eq!(levels(&ladder), vec![(50, 1)]);
        assert!(ladder.levels.len() <= 2);
    }

    #[test]
    fn test_lower_median() {
        let mut ladder = FrequencyLadder::new();
        // frequencies 1, 2, 2, 4
        for _ in 0..4 {
            ladder.promote(1);
        }
        ladder.promote(2);
        ladder.promote(2);
        ladder.promote(2);
        ladder.promote(3);
        ladder.promote(4);

        assert_eq!(levels(&ladder), vec![(1, 1), (2, 2), (4, 1)]);
        assert_eq!(ladder.lower_median(), 2);
    }

    #[test]
    fn test_lower_median_even_population_picks_upper_index() {
        let mut ladder = FrequencyLadder::new();
        // frequencies 1, 2 -> index 1 -> 2
        ladder.promote(1);
        ladder.promote(1);
        ladder.promote(2);

        assert_eq!(ladder.lower_median(), 2);
    }

    #[test]
    fn test_unanchored_level_keeps_order() {
        let mut ladder = FrequencyLadder::new();
        ladder.promote(1);
        ladder.promote(1);
        ladder.promote(2);
        ladder.promote(3);
        // 5 arrives without an item at 4
        ladder.enter(5);
        ladder.enter(4);

        assert_eq!(levels(&ladder), vec![(1, 1), (3, 1), (4, 1), (5, 1)]);
        assert_eq!(ladder.highest(), 5);
    }

    #[test]
    fn test_clear() {
        let mut ladder = FrequencyLadder::new();
        ladder.promote(1);
        ladder.promote(2);

        ladder.clear();

        assert!(ladder.is_empty());
        assert_eq!(ladder.population(), 0);
        assert_eq!(ladder.lower_median(), 0);
    }
}
