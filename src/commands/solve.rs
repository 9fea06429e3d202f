//! Word solving command
//!
//! Solves a specific secret word and returns the solution path.

use crate::core::{Clue, Probe, Word};
use crate::solver::scoring::max_remaining;
use crate::solver::{SolveError, Solver};

/// Result of solving a word
pub struct SolveResult {
    pub secret: Word,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Word,
    pub clue: Clue,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Largest clue partition the guess could have left
    pub worst_case: usize,
}

/// Solve `secret`, recording every turn
///
/// Stops after the configured probe budget with `success` unset.
///
/// # Errors
///
/// Returns `SolveError` if the solver cannot provide a guess, e.g. because
/// `secret` is not in the dictionary and every candidate has been ruled out.
pub fn solve_word(solver: &mut Solver, secret: Word) -> Result<SolveResult, SolveError> {
    let max_probes = solver.config().max_probes;
    let mut probes: Vec<Probe> = Vec::new();
    let mut steps = Vec::new();

    while steps.len() < max_probes {
        let candidates = solver.candidates(&probes);
        let guess = solver.guess_word(&probes)?;
        let probe = Probe::against(guess, &secret);
        probes.push(probe);

        steps.push(GuessStep {
            guess,
            clue: probe.result,
            candidates_before: candidates.len(),
            candidates_after: solver.candidates(&probes).len(),
            worst_case: max_remaining(&guess, &candidates),
        });

        if probe.result.is_perfect() {
            return Ok(SolveResult {
                secret,
                success: true,
                steps,
            });
        }
    }

    Ok(SolveResult {
        secret,
        success: false,
        steps,
    })
}
