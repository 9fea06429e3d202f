//! Minimax partition-count scoring
//!
//! For every hypothetical answer, count how many other candidates would still
//! be left after seeing the clue the guess earns against it. The sum over all
//! answers ranks guesses: lower means the candidate set is cut into smaller,
//! more even groups.

use crate::core::{CLUE_SPACE, Probe, Word, generate_result};
use crate::solver::cache::ClueCache;
use crate::solver::filter::count_filtered;

/// Sum over `candidates` of the candidates remaining besides the answer
///
/// Equal to Σ |P|·(|P| − 1) over the clue partitions P of `candidates`.
/// Counts are memoised in `cache` under (`guess_index`, clue); the cache must
/// have been cleared since the candidate set last changed.
///
/// # Panics
/// Panics if `guess_index` is outside the rows covered by `cache`
#[must_use]
pub fn partition_sum(
    guess_index: usize,
    guess: &Word,
    candidates: &[Word],
    cache: &mut ClueCache,
) -> usize {
    let mut total = 0;

    for actual in candidates {
        let clue = generate_result(guess, actual);
        let remaining = if let Some(count) = cache.get(guess_index, &clue) {
            count
        } else {
            let count = count_filtered(candidates, &[Probe::new(*guess, clue)], Some(actual));
            cache.put(guess_index, &clue, count);
            count
        };
        total += remaining;
    }

    total
}

/// Calculate the worst-case number of candidates left after `guess`
///
/// The size of the largest clue partition; 0 for an empty candidate set.
///
/// # Examples
/// ```
/// use wordle_sweep::core::Word;
/// use wordle_sweep::solver::scoring::max_remaining;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// assert!(max_remaining(&guess, &candidates) <= 2);
/// ```
#[must_use]
pub fn max_remaining(guess: &Word, candidates: &[Word]) -> usize {
    let mut buckets = [0usize; CLUE_SPACE];
    for actual in candidates {
        buckets[generate_result(guess, actual).index()] += 1;
    }
    buckets.iter().copied().max().unwrap_or(0)
}
