//! Guess selection from a finished score table

use super::scoring::{ScoreTable, ScoringPolicy};
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Pick the next guess from a score table
///
/// Among all words sharing the best score, the first one (in dictionary order)
/// that is itself still a candidate wins, since it might be the answer. If no
/// best-scoring word is a candidate, the first best-scoring word is returned.
///
/// Returns `None` only for an empty dictionary.
///
/// # Examples
/// ```
/// use wordle_sweep::core::Word;
/// use wordle_sweep::solver::{ScoreTable, ScoringPolicy, select};
///
/// let dictionary: Vec<Word> = ["zzzzz", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let table = ScoreTable::new(vec![0.0, 0.0, 2.0]);
///
/// // zzzzz and crate tie; crate could be the answer
/// let best = select(&table, &dictionary, &dictionary[1..], ScoringPolicy::Minimax);
/// assert_eq!(best, Some(dictionary[1]));
/// ```
#[must_use]
pub fn select(
    table: &ScoreTable,
    dictionary: &[Word],
    candidates: &[Word],
    policy: ScoringPolicy,
) -> Option<Word> {
    let ranked = table.ranked(policy);
    let &best_index = ranked.first()?;
    let best = table.scores()[best_index];

    let candidate_set: FxHashSet<Word> = candidates.iter().copied().collect();

    let chosen = ranked
        .iter()
        .take_while(|&&index| policy.ties(table.scores()[index], best))
        .find(|&&index| candidate_set.contains(&dictionary[index]))
        .copied()
        .unwrap_or(best_index);

    Some(dictionary[chosen])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn picks_best_score() {
        let dictionary = words(&["crane", "slate", "adieu"]);
        let table = ScoreTable::new(vec![4.0, 2.0, 6.0]);

        let best = select(&table, &dictionary, &[], ScoringPolicy::Minimax);
        assert_eq!(best, Some(dictionary[1]));

        let best = select(&table, &dictionary, &[], ScoringPolicy::Entropy);
        assert_eq!(best, Some(dictionary[2]));
    }

    #[test]
    fn tie_prefers_candidate() {
        let dictionary = words(&["crane", "slate", "adieu", "tares"]);
        let table = ScoreTable::new(vec![1.0, 1.0, 3.0, 1.0]);
        let candidates = words(&["adieu", "tares"]);

        let best = select(&table, &dictionary, &candidates, ScoringPolicy::Minimax);
        assert_eq!(best, Some(dictionary[3]));
    }

    #[test]
    fn tie_prefers_first_candidate_in_dictionary_order() {
        let dictionary = words(&["crane", "slate", "lares", "tares"]);
        let table = ScoreTable::new(vec![0.5, 1.0, 1.0, 1.0]);
        let candidates = words(&["tares", "lares"]);

        let best = select(&table, &dictionary, &candidates, ScoringPolicy::Entropy);
        assert_eq!(best, Some(dictionary[2]));
    }

    #[test]
    fn strictly_better_non_candidate_wins() {
        let dictionary = words(&["crane", "lares", "tares"]);
        let table = ScoreTable::new(vec![0.0, 2.0, 2.0]);
        let candidates = words(&["lares", "tares"]);

        let best = select(&table, &dictionary, &candidates, ScoringPolicy::Minimax);
        assert_eq!(best, Some(dictionary[0]));
    }

    #[test]
    fn no_candidate_among_best_falls_back_to_first_best() {
        let dictionary = words(&["crane", "slate", "tares"]);
        let table = ScoreTable::new(vec![3.0, 1.0, 1.0]);

        let best = select(&table, &dictionary, &[], ScoringPolicy::Minimax);
        assert_eq!(best, Some(dictionary[1]));
    }

    #[test]
    fn empty_dictionary() {
        let table = ScoreTable::new(vec![]);
        assert_eq!(select(&table, &[], &[], ScoringPolicy::Minimax), None);
    }
}
