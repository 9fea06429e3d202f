//! A played move: the guess and the clue it earned

use super::{Clue, Word, generate_result};
use std::fmt;

/// One historical move
///
/// The ordered sequence of probes played so far is the solving session's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Probe {
    pub guess: Word,
    pub result: Clue,
}

impl Probe {
    #[must_use]
    pub const fn new(guess: Word, result: Clue) -> Self {
        Self { guess, result }
    }

    /// Play `guess` against a known hidden word
    #[must_use]
    pub fn against(guess: Word, actual: &Word) -> Self {
        Self::new(guess, generate_result(&guess, actual))
    }

    /// Whether `candidate` would have produced exactly this clue
    #[inline]
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        generate_result(&self.guess, candidate) == self.result
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.result)
    }
}
