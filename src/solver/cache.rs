//! Per-sweep memo of partition counts
//!
//! Keyed by (guess index, clue). Every hypothetical answer that earns the same
//! clue from a guess lands in the same partition, so the count is computed once
//! per distinct clue instead of once per answer.

use crate::core::{CLUE_SPACE, Clue};
use std::ops::Range;

const MISS: usize = usize::MAX;

/// Dense `rows × CLUE_SPACE` table of remaining-candidate counts
///
/// Covers a contiguous range of dictionary indices so each sweep worker can own
/// the rows for its own slice. Entries are only valid for the candidate set of
/// the sweep that wrote them; [`ClueCache::clear`] must run before every sweep.
#[derive(Debug, Clone)]
pub struct ClueCache {
    rows: Range<usize>,
    slots: Vec<usize>,
}

impl ClueCache {
    /// Create an empty cache for guess indices in `rows`
    #[must_use]
    pub fn new(rows: Range<usize>) -> Self {
        let slots = vec![MISS; rows.len() * CLUE_SPACE];
        Self { rows, slots }
    }

    /// Guess indices covered by this cache
    #[must_use]
    pub fn rows(&self) -> Range<usize> {
        self.rows.clone()
    }

    /// Cached count, or `None` on a miss
    ///
    /// # Panics
    /// Panics if `guess_index` is outside [`ClueCache::rows`]
    #[inline]
    #[must_use]
    pub fn get(&self, guess_index: usize, clue: &Clue) -> Option<usize> {
        let value = self.slots[self.slot(guess_index, clue)];
        (value != MISS).then_some(value)
    }

    /// Store a count
    ///
    /// # Panics
    /// Panics if `guess_index` is outside [`ClueCache::rows`]
    #[inline]
    pub fn put(&mut self, guess_index: usize, clue: &Clue, count: usize) {
        debug_assert_ne!(count, MISS, "count collides with miss sentinel");
        let slot = self.slot(guess_index, clue);
        self.slots[slot] = count;
    }

    /// Forget every entry
    pub fn clear(&mut self) {
        self.slots.fill(MISS);
    }

    #[inline]
    fn slot(&self, guess_index: usize, clue: &Clue) -> usize {
        assert!(
            self.rows.contains(&guess_index),
            "guess index {guess_index} outside cache rows {:?}",
            self.rows
        );
        (guess_index - self.rows.start) * CLUE_SPACE + clue.index()
    }
}
