//! Formatting utilities for terminal output

use crate::core::{Clue, Mark, Word};
use colored::{ColoredString, Colorize};

/// Color each letter of `guess` by the mark it earned
#[must_use]
pub fn colored_guess(guess: &Word, clue: &Clue) -> String {
    guess
        .to_uppercase()
        .chars()
        .zip(clue.marks())
        .map(|(letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Truncation is intended: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to `max_bits`
#[must_use]
pub fn entropy_bar(entropy: f64, max_bits: f64, width: usize) -> String {
    if max_bits <= 0.0 {
        return create_progress_bar(0.0, 1.0, width);
    }
    create_progress_bar(entropy, max_bits, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_overflow() {
        let bar = create_progress_bar(300.0, 100.0, 4);
        assert_eq!(bar, "████");
    }

    #[test]
    fn entropy_bar_without_range_is_empty() {
        assert_eq!(entropy_bar(1.0, 0.0, 3), "░░░");
    }
}
