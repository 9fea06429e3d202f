//! Per-turn diagnostics sink
//!
//! The solver reports through a [`Reporter`] it is handed, so the same core
//! can print to a terminal or run silently under test and in the self-test.

use crate::core::Word;
use colored::Colorize;

/// Candidate lists are printed in full only below this size
pub const LIST_CANDIDATES_BELOW: usize = 100;

/// Receives diagnostics from the solver
pub trait Reporter: Send {
    /// Called once per turn with the current candidate set
    fn candidates(&self, candidates: &[Word]);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn candidates(&self, _candidates: &[Word]) {}
}

/// Prints candidate counts (and short candidate lists) to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn candidates(&self, candidates: &[Word]) {
        println!(
            "{} {}",
            "Possible words:".bright_black(),
            candidates.len().to_string().bright_cyan()
        );
        if candidates.len() < LIST_CANDIDATES_BELOW {
            println!("{}", candidate_line(candidates));
        }
    }
}

/// Space-separated candidate list
#[must_use]
pub fn candidate_line(candidates: &[Word]) -> String {
    candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_line_joins_words() {
        let words: Vec<Word> = ["lares", "tares"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        assert_eq!(candidate_line(&words), "lares tares");
        assert_eq!(candidate_line(&[]), "");
    }
}
