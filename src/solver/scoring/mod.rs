//! Guess scoring
//!
//! Every dictionary word is scored as a hypothetical next guess against the
//! current candidate set. Two interchangeable policies exist; minimax is the
//! default.

mod entropy;
mod minimax;

pub use entropy::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use minimax::{max_remaining, partition_sum};

use super::cache::ClueCache;
use crate::core::Word;
use std::cmp::Ordering;

/// How a guess is scored against the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringPolicy {
    /// Sum of candidates left per hypothetical answer; lower is better
    #[default]
    Minimax,
    /// Shannon entropy of the clue distribution; higher is better
    Entropy,
}

impl ScoringPolicy {
    /// Create policy from name string
    ///
    /// Supported names: "minimax", "entropy"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "minimax" => Some(Self::Minimax),
            "entropy" => Some(Self::Entropy),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimax => "minimax",
            Self::Entropy => "entropy",
        }
    }

    /// Score one guess
    ///
    /// `cache` must cover `guess_index` and must have been cleared since the
    /// candidate set changed. Only the minimax policy touches it.
    #[must_use]
    pub fn score(
        self,
        guess_index: usize,
        guess: &Word,
        candidates: &[Word],
        cache: &mut ClueCache,
    ) -> f64 {
        match self {
            Self::Minimax => partition_sum(guess_index, guess, candidates, cache) as f64,
            Self::Entropy => calculate_entropy(guess, candidates),
        }
    }

    /// Order two scores best first
    #[must_use]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Self::Minimax => a.total_cmp(&b),
            Self::Entropy => b.total_cmp(&a),
        }
    }

    /// Whether two scores count as equally good
    ///
    /// Minimax sums are exact integers. Entropies of equal-shaped partitions can
    /// differ in the last bits depending on bucket order, so they get a small
    /// relative tolerance.
    #[must_use]
    #[allow(clippy::float_cmp)] // Minimax sums are integral
    pub fn ties(self, a: f64, b: f64) -> bool {
        match self {
            Self::Minimax => a == b,
            Self::Entropy => (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0),
        }
    }
}

/// Score of every dictionary word for the current turn, by dictionary index
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    scores: Vec<f64>,
}

impl ScoreTable {
    #[must_use]
    pub const fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Dictionary indices sorted best first; equal scores keep dictionary order
    #[must_use]
    pub fn ranked(&self, policy: ScoringPolicy) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| policy.compare(self.scores[a], self.scores[b]));
        order
    }
}
