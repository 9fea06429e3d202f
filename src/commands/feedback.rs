//! Standalone feedback command

use crate::core::{Clue, Word, generate_result};
use anyhow::{Context, Result};

/// Clue earned by `guess` when the answer is `secret`
///
/// # Errors
///
/// Returns an error if either word is not 5 lowercase letters.
pub fn feedback(secret: &str, guess: &str) -> Result<(Word, Word, Clue)> {
    let secret = Word::new(secret).with_context(|| format!("invalid secret '{secret}'"))?;
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    Ok((secret, guess, generate_result(&guess, &secret)))
}
