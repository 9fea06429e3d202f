//! Candidate filtering by clue replay
//!
//! A word stays a candidate iff replaying every probe against it reproduces the
//! recorded clue. No per-letter bookkeeping is derived from the clues.

use crate::core::{Probe, Word};

/// Dictionary words consistent with every probe, in dictionary order
///
/// With no probes this is the whole dictionary.
///
/// # Examples
/// ```
/// use wordle_sweep::core::{Probe, Word};
/// use wordle_sweep::solver::filter;
///
/// let dictionary: Vec<Word> = ["crane", "slate", "lares", "tares"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let probe = Probe::against(dictionary[0], &dictionary[3]);
///
/// let candidates = filter(&dictionary, &[probe]);
/// assert_eq!(candidates, vec![dictionary[2], dictionary[3]]);
/// ```
#[must_use]
pub fn filter(dictionary: &[Word], probes: &[Probe]) -> Vec<Word> {
    dictionary
        .iter()
        .filter(|candidate| is_consistent(candidate, probes))
        .copied()
        .collect()
}

/// Count the words consistent with every probe, skipping `ignore`
///
/// The scoring engine passes the hypothetical answer as `ignore`, so the count
/// is "candidates still left besides the answer itself".
#[must_use]
pub fn count_filtered(words: &[Word], probes: &[Probe], ignore: Option<&Word>) -> usize {
    words
        .iter()
        .filter(|&candidate| Some(candidate) != ignore)
        .filter(|candidate| is_consistent(candidate, probes))
        .count()
}

#[inline]
fn is_consistent(candidate: &Word, probes: &[Probe]) -> bool {
    probes.iter().all(|probe| probe.admits(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Clue, generate_result};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn dictionary() -> Vec<Word> {
        words(&[
            "crane", "slate", "adieu", "lares", "tares", "irate", "crate", "grate", "trace",
            "stare", "glass", "sassy",
        ])
    }

    #[test]
    fn no_probes_keeps_whole_dictionary() {
        let dictionary = dictionary();
        assert_eq!(filter(&dictionary, &[]), dictionary);
    }

    #[test]
    fn filter_keeps_dictionary_order() {
        let dictionary = dictionary();
        let secret = Word::new("grate").unwrap();
        let probes = [Probe::against(Word::new("slate").unwrap(), &secret)];

        let candidates = filter(&dictionary, &probes);
        let positions: Vec<usize> = candidates
            .iter()
            .map(|c| dictionary.iter().position(|d| d == c).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(candidates.contains(&secret));
    }

    #[test]
    fn crane_against_tares_scenario() {
        let dictionary = words(&["crane", "slate", "adieu", "lares", "tares"]);
        let crane = dictionary[0];
        let tares = dictionary[4];
        let probes = [Probe::new(crane, generate_result(&crane, &tares))];

        let candidates = filter(&dictionary, &probes);
        assert_eq!(candidates, words(&["lares", "tares"]));
        assert!(!candidates.contains(&crane));
    }

    #[test]
    fn filter_is_monotone_under_more_probes() {
        let dictionary = dictionary();
        let secret = Word::new("crate").unwrap();
        let mut probes = Vec::new();
        let mut previous = filter(&dictionary, &probes);

        for guess in ["slate", "irate", "trace", "crate"] {
            probes.push(Probe::against(Word::new(guess).unwrap(), &secret));
            let current = filter(&dictionary, &probes);
            assert!(current.iter().all(|w| previous.contains(w)));
            previous = current;
        }
        assert_eq!(previous, vec![secret]);
    }

    #[test]
    fn secret_never_filtered_out() {
        let dictionary = dictionary();
        for secret in &dictionary {
            let probes: Vec<Probe> = dictionary
                .iter()
                .map(|guess| Probe::against(*guess, secret))
                .collect();
            for played in 0..=probes.len() {
                assert!(filter(&dictionary, &probes[..played]).contains(secret));
            }
        }
    }

    #[test]
    fn impossible_clue_leaves_nothing() {
        let dictionary = dictionary();
        let probes = [Probe::new(Word::new("zzzzz").unwrap(), Clue::PERFECT)];
        assert!(filter(&dictionary, &probes).is_empty());
    }

    #[test]
    fn count_filtered_matches_filter_len() {
        let dictionary = dictionary();
        let probes = [Probe::against(
            Word::new("stare").unwrap(),
            &Word::new("tares").unwrap(),
        )];
        assert_eq!(
            count_filtered(&dictionary, &probes, None),
            filter(&dictionary, &probes).len()
        );
    }

    #[test]
    fn count_filtered_skips_ignored_word() {
        let dictionary = dictionary();
        let tares = Word::new("tares").unwrap();
        let probes = [Probe::against(Word::new("crane").unwrap(), &tares)];

        assert_eq!(count_filtered(&dictionary, &probes, None), 2);
        assert_eq!(count_filtered(&dictionary, &probes, Some(&tares)), 1);
        // Ignoring a word that is not consistent changes nothing
        let slate = Word::new("slate").unwrap();
        assert_eq!(count_filtered(&dictionary, &probes, Some(&slate)), 2);
    }
}
