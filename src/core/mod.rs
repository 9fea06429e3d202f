//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond error derivation. All types here are pure, `Copy`, and safe to share
//! between sweep workers without locking.

mod clue;
mod feedback;
mod probe;
mod word;

pub use clue::{Clue, ClueError, Mark};
pub use feedback::generate_result;
pub use probe::Probe;
pub use word::{Word, WordError};

/// Number of letters in every word and every clue
pub const WORD_LEN: usize = 5;

/// Size of the lowercase alphabet words are drawn from
pub const ALPHABET_LEN: usize = 26;

/// Number of distinct clues: 3^`WORD_LEN` (243)
pub const CLUE_SPACE: usize = 3usize.pow(WORD_LEN as u32);
