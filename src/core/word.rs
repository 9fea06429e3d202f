//! Wordle word representation
//!
//! A Word stores exactly `WORD_LEN` lowercase ASCII letters inline, so it is
//! `Copy` and cheap to compare inside the scoring hot loop.

use super::WORD_LEN;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A 5-letter Wordle word
///
/// Immutable once constructed. Two words are equal iff every position matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only lowercase letters a-z, found {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Only lowercase `a`..`z` are accepted; nothing is normalized.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Any character is outside `a`..`z`
    ///
    /// # Examples
    /// ```
    /// use wordle_sweep::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("CRANE").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            // Length first when the string is clearly the wrong size
            if text.chars().count() != WORD_LEN {
                return Err(WordError::InvalidLength(text.chars().count()));
            }
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self(letters))
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Upper-cased copy for display
    #[must_use]
    pub fn to_uppercase(&self) -> String {
        self.to_string().to_ascii_uppercase()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            fmt::Write::write_char(f, char::from(letter))?;
        }
        Ok(())
    }
}
