//! Wordle feedback clue representation
//!
//! A clue is one [`Mark`] per letter position. For table lookups it is encoded
//! as a base-3 number, first position most significant:
//! - 0 = Absent (gray, letter not in word)
//! - 1 = Present (yellow, letter in word, wrong position)
//! - 2 = Correct (green, letter in correct position)
//!
//! so every clue maps to a unique index in `0..CLUE_SPACE` (0-242).

use super::{CLUE_SPACE, WORD_LEN};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Gray: the letter does not occur (or all occurrences are accounted for)
    Absent = 0,
    /// Yellow: the letter occurs elsewhere
    Present = 1,
    /// Green: the letter is in this exact position
    Correct = 2,
}

impl Mark {
    /// Base-3 digit of this mark
    #[inline]
    #[must_use]
    pub const fn digit(self) -> usize {
        self as usize
    }

    const fn from_digit(digit: usize) -> Self {
        match digit {
            0 => Self::Absent,
            1 => Self::Present,
            _ => Self::Correct,
        }
    }

    /// Symbol in the console protocol: `1` gray, `2` yellow, `3` green
    #[must_use]
    pub const fn protocol_symbol(self) -> char {
        match self {
            Self::Absent => '1',
            Self::Present => '2',
            Self::Correct => '3',
        }
    }

    /// Colored square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '1' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            '2' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '3' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            _ => None,
        }
    }
}

/// Error type for clue strings that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    #[error("Clue must have exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("Invalid clue symbol {0:?} (expected 1 - gray, 2 - yellow, 3 - green)")]
    InvalidSymbol(char),
}

/// Feedback clue for a Wordle guess
///
/// Normally produced by [`generate_result`](super::generate_result); only
/// external input that passed [`Clue::from_str`] is constructed any other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clue([Mark; WORD_LEN]);

impl Clue {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LEN]);

    /// All grays
    pub const NOTHING: Self = Self([Mark::Absent; WORD_LEN]);

    /// Build a clue from per-position marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Get the per-position marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Dense index of this clue in `0..CLUE_SPACE`
    ///
    /// # Examples
    /// ```
    /// use wordle_sweep::core::{Clue, CLUE_SPACE};
    ///
    /// assert_eq!(Clue::NOTHING.index(), 0);
    /// assert_eq!(Clue::PERFECT.index(), CLUE_SPACE - 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.0.iter().fold(0, |acc, mark| acc * 3 + mark.digit())
    }

    /// Inverse of [`Clue::index`]
    ///
    /// Returns `None` if `index >= CLUE_SPACE`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CLUE_SPACE {
            return None;
        }
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut rest = index;
        for mark in marks.iter_mut().rev() {
            *mark = Mark::from_digit(rest % 3);
            rest /= 3;
        }
        Some(Self(marks))
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert clue to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl FromStr for Clue {
    type Err = ClueError;

    /// Parse a clue from the digit protocol ("31132") or letters/emoji
    ///
    /// Accepts:
    /// - `3`, `G`/`g`, 🟩 for green
    /// - `2`, `Y`/`y`, 🟨 for yellow
    /// - `1`, `-`/`_`, ⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_sweep::core::Clue;
    ///
    /// let p1: Clue = "32133".parse().unwrap();
    /// let p2: Clue = "GY-GG".parse().unwrap();
    /// let p3: Clue = "🟩🟨⬜🟩🟩".parse().unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p2, p3);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != WORD_LEN {
            return Err(ClueError::InvalidLength(symbols.len()));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (mark, &symbol) in marks.iter_mut().zip(&symbols) {
            *mark = Mark::from_symbol(symbol).ok_or(ClueError::InvalidSymbol(symbol))?;
        }
        Ok(Self(marks))
    }
}

impl fmt::Display for Clue {
    /// Writes the digit protocol form, e.g. `11323`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            fmt::Write::write_char(f, mark.protocol_symbol())?;
        }
        Ok(())
    }
}
