//! Shannon entropy calculation for Wordle clue distributions
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{CLUE_SPACE, Clue, Word, generate_result};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct clues the guess can earn
    pub partitions: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the fraction of candidates that earn clue x.
///
/// # Examples
/// ```
/// use wordle_sweep::core::Word;
/// use wordle_sweep::solver::scoring::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    let mut buckets = [0usize; CLUE_SPACE];
    for actual in candidates {
        buckets[generate_result(guess, actual).index()] += 1;
    }
    shannon_entropy(&buckets)
}

/// Calculate Shannon entropy from bucket occupancy counts
///
/// H = -Σ p * log₂(p), empty buckets contribute nothing.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one bucket holds everything)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n occupied buckets
///
/// # Examples
/// ```
/// use wordle_sweep::solver::scoring::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and partition sizes.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    let groups = group_by_clue(guess, candidates);
    let sizes: Vec<usize> = groups.values().copied().collect();
    let total = candidates.len() as f64;

    let expected_remaining: f64 = sizes
        .iter()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&sizes),
        expected_remaining,
        max_partition: sizes.iter().copied().max().unwrap_or(0),
        partitions: sizes.len(),
    }
}

/// Group candidates by the clue they produce with the guess
fn group_by_clue(guess: &Word, candidates: &[Word]) -> FxHashMap<Clue, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let clue = generate_result(guess, candidate);
        *counts.entry(clue).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let entropy = shannon_entropy(&[1, 1, 1, 1]);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let entropy = shannon_entropy(&[0, 10, 0]);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        // Skewed distribution has less entropy than uniform
        assert!(shannon_entropy(&[25, 25, 25, 25]) > shannon_entropy(&[97, 1, 1, 1]));
    }

    #[test]
    fn shannon_entropy_bounds() {
        let counts = [10, 20, 30];
        let entropy = shannon_entropy(&counts);
        assert!(entropy >= 0.0);
        assert!(entropy <= (counts.len() as f64).log2());
    }

    #[test]
    fn shannon_entropy_empty() {
        assert!((shannon_entropy(&[]) - 0.0).abs() < f64::EPSILON);
        assert!((shannon_entropy(&[0; CLUE_SPACE]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn calculate_entropy_all_same_pattern() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        assert!(calculate_entropy(&guess, &candidates).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);
        assert!((calculate_entropy(&guess, &candidates) - 1.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_real_words() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise"]);
        let entropy = calculate_entropy(&guess, &candidates);
        assert!(entropy > 1.0 && entropy <= 2.0);
    }

    #[test]
    fn metrics_agree_with_entropy() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "lares", "tares", "irate", "crate"]);

        let metrics = calculate_metrics(&guess, &candidates);

        assert!((metrics.entropy - calculate_entropy(&guess, &candidates)).abs() < 1e-9);
        assert_eq!(metrics.max_partition, 2); // lares and tares
        assert_eq!(metrics.partitions, 4);
        // (1 + 4 + 1 + 1) / 5
        assert!((metrics.expected_remaining - 7.0 / 5.0).abs() < 1e-9);
    }

    #[test]
    fn metrics_empty_candidates() {
        let metrics = calculate_metrics(&Word::new("crane").unwrap(), &[]);
        assert_eq!(metrics.max_partition, 0);
        assert_eq!(metrics.partitions, 0);
        assert!(metrics.entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn group_by_clue_works() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "crate"]);

        let groups = group_by_clue(&guess, &candidates);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.values().sum::<usize>(), 2);
    }
}
