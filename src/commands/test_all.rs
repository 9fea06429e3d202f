//! Self-test harness
//!
//! Plays the solver against every dictionary word (or a subset) with a fresh
//! session each and collects statistics on how many probes it needed.

use crate::core::Word;
use crate::solver::{Outcome, Session, Solver};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone, Copy)]
pub struct WordTestResult {
    pub word: Word,
    pub outcome: Outcome,
    pub duration: Duration,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    /// Secrets not found within the probe budget
    pub failed: Vec<Word>,
    /// Guesses needed (winning guess included) → number of secrets
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(Word, usize)>,
}

impl TestAllStatistics {
    /// True when every tested secret was found
    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Pick the secrets to test
///
/// All of `dictionary` in order, the first `limit` words, or with `random`
/// a uniform sample of `limit` words (the whole dictionary, shuffled, without
/// a limit).
#[must_use]
pub fn select_secrets(dictionary: &[Word], limit: Option<usize>, random: bool) -> Vec<Word> {
    let count = limit.unwrap_or(dictionary.len()).min(dictionary.len());
    if random {
        dictionary
            .choose_multiple(&mut rand::rng(), count)
            .copied()
            .collect()
    } else {
        dictionary[..count].to_vec()
    }
}

/// Play the solver against every word in `secrets`
///
/// # Errors
///
/// Returns an error if the solver fails outright (no candidates, worker pool
/// failure). A secret not found within the budget is counted, not an error.
pub fn run_test_all(
    solver: &mut Solver,
    secrets: &[Word],
    show_progress: bool,
) -> Result<TestAllStatistics> {
    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let mut session = Session::new(solver.config().max_probes);
    let mut results = Vec::with_capacity(secrets.len());
    let total_start = Instant::now();

    for (idx, secret) in secrets.iter().enumerate() {
        let word_start = Instant::now();
        let outcome = session.play_against(solver, secret)?;

        results.push(WordTestResult {
            word: *secret,
            outcome,
            duration: word_start.elapsed(),
        });

        if idx % 10 == 0 {
            pb.set_message(format!("{secret}: {}", describe(outcome)));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, total_start.elapsed()))
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Solved(n) => format!("{n} guesses"),
        Outcome::Exhausted => "not found".to_string(),
    }
}

fn summarize(results: &[WordTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution = BTreeMap::new();
    let mut solved_counts = Vec::with_capacity(results.len());
    let mut failed = Vec::new();

    for result in results {
        match result.outcome {
            Outcome::Solved(n) => {
                *guess_distribution.entry(n).or_insert(0) += 1;
                solved_counts.push((result.word, n));
            }
            Outcome::Exhausted => failed.push(result.word),
        }
    }

    let total_guesses: usize = solved_counts.iter().map(|&(_, n)| n).sum();
    let average_guesses = if solved_counts.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved_counts.len() as f64
    };

    let mut worst_words = solved_counts.clone();
    worst_words.sort_by_key(|&(_, n)| Reverse(n));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved: solved_counts.len(),
        failed,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved_counts.iter().map(|&(_, n)| n).max().unwrap_or(0),
        min_guesses: solved_counts.iter().map(|&(_, n)| n).min().unwrap_or(0),
        worst_words,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if !stats.all_solved() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed.len(),
            format!("({:.1}%)", stats.failed.len() as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats
        .guess_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:3} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.all_solved() {
        println!("\n❌ {}", "Not Found".red().bold());
        for word in &stats.failed {
            println!("  {}", word.to_uppercase().red());
        }
    }
}
