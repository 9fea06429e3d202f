//! Feedback generation: the clue a guess earns against a hidden word

use super::{ALPHABET_LEN, Clue, Mark, WORD_LEN, Word};

/// Calculate the clue when `guess` is played and `actual` is the hidden word
///
/// This implements Wordle's exact feedback rules, including proper handling
/// of duplicate letters. Total over all word pairs.
///
/// # Algorithm
/// 1. First pass: mark all exact matches Correct; those letters of `actual`
///    are consumed
/// 2. Second pass: for every other position, if the guessed letter is still
///    unconsumed somewhere in `actual`, mark it Present and consume one copy
///
/// # Examples
/// ```
/// use wordle_sweep::core::{Word, generate_result};
///
/// let guess = Word::new("crane").unwrap();
/// let actual = Word::new("slate").unwrap();
///
/// // C(gray) R(gray) A(green) N(gray) E(green)
/// assert_eq!(generate_result(&guess, &actual).to_string(), "11313");
/// ```
#[must_use]
// Allow: index needed to compare guess[i] with actual[i] and set marks[i]
#[allow(clippy::needless_range_loop)]
pub fn generate_result(guess: &Word, actual: &Word) -> Clue {
    let guess = guess.letters();
    let actual = actual.letters();

    let mut marks = [Mark::Absent; WORD_LEN];
    let mut unconsumed = [0u8; ALPHABET_LEN];

    for i in 0..WORD_LEN {
        if guess[i] == actual[i] {
            marks[i] = Mark::Correct;
        } else {
            unconsumed[letter_slot(actual[i])] += 1;
        }
    }

    for i in 0..WORD_LEN {
        if marks[i] == Mark::Correct {
            continue;
        }
        let remaining = &mut unconsumed[letter_slot(guess[i])];
        if *remaining > 0 {
            marks[i] = Mark::Present;
            *remaining -= 1;
        }
    }

    Clue::new(marks)
}

#[inline]
fn letter_slot(letter: u8) -> usize {
    usize::from(letter - b'a')
}
