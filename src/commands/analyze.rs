//! Word analysis command
//!
//! Scores one guess against the whole dictionary under both policies.

use crate::core::Word;
use crate::solver::scoring::{GuessMetrics, calculate_metrics, partition_sum};
use crate::solver::ClueCache;
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// Minimax score: candidates left besides the answer, summed over answers
    pub partition_sum: usize,
    pub total_candidates: usize,
}

/// Analyze `word` as an opening guess against `dictionary`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 lowercase letters)
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, dictionary: &[Word]) -> Result<AnalysisResult> {
    let guess = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;

    let Some(index) = dictionary.iter().position(|w| *w == guess) else {
        bail!("word '{word}' not in dictionary");
    };

    let mut cache = ClueCache::new(index..index + 1);
    let partition_sum = partition_sum(index, &guess, dictionary, &mut cache);

    Ok(AnalysisResult {
        word: guess,
        metrics: calculate_metrics(&guess, dictionary),
        partition_sum,
        total_candidates: dictionary.len(),
    })
}
