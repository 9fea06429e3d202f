//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar};
use crate::commands::{AnalysisResult, SolveResult};
use crate::core::{Clue, Word};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.guess, &step.clue),
            step.clue
        );

        if verbose {
            println!(
                "  Candidates: {} → {} (worst case {})",
                step.candidates_before, step.candidates_after, step.worst_case
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let max_bits = (result.total_candidates as f64).log2();
    let bar = entropy_bar(metrics.entropy, max_bits, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:       [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!(
        "   Expected:      {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!(
        "   Worst case:    {} candidates remain",
        metrics.max_partition
    );
    println!("   Distinct clues: {}", metrics.partitions);
    println!("   Minimax score: {}", result.partition_sum);
}

/// Print the clue `guess` earns against `secret`
pub fn print_feedback(secret: &Word, guess: &Word, clue: &Clue) {
    println!("{}", format_feedback(secret, guess, clue));
}

/// Clue digits and squares, then the colored guess next to the secret
#[must_use]
pub fn format_feedback(secret: &Word, guess: &Word, clue: &Clue) -> String {
    format!(
        "{clue} {}\n{} {} {}",
        clue.to_emoji(),
        colored_guess(guess, clue),
        "vs".bright_black(),
        secret.to_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate_result;

    #[test]
    fn feedback_shows_digits_and_squares() {
        let secret = Word::new("tares").unwrap();
        let guess = Word::new("crane").unwrap();
        let clue = generate_result(&guess, &secret);

        let text = format_feedback(&secret, &guess, &clue);
        let first = text.lines().next().unwrap();

        assert_eq!(first, "12212 ⬜🟨🟨⬜🟨");
        assert!(text.contains("TARES"));
    }
}
