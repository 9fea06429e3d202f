//! Word lists for Wordle solving
//!
//! Provides the embedded default dictionary and loading from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
