//! Probe history for one game

use super::engine::{SolveError, Solver};
use crate::core::{Probe, Word};

/// How a game against a known secret ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Found after this many guesses (the winning guess included)
    Solved(usize),
    /// The probe budget ran out first
    Exhausted,
}

/// Probes played so far, bounded by a budget
#[derive(Debug, Clone)]
pub struct Session {
    probes: Vec<Probe>,
    max_probes: usize,
}

impl Session {
    #[must_use]
    pub fn new(max_probes: usize) -> Self {
        Self {
            probes: Vec::new(),
            max_probes,
        }
    }

    #[must_use]
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    #[must_use]
    pub fn probes_count(&self) -> usize {
        self.probes.len()
    }

    #[must_use]
    pub const fn max_probes(&self) -> usize {
        self.max_probes
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.probes.len() >= self.max_probes
    }

    /// Record a probe
    ///
    /// # Errors
    /// Returns `SolveError::BudgetExhausted` if the budget is already used up;
    /// the probe is not recorded.
    pub fn save_probe(&mut self, probe: Probe) -> Result<(), SolveError> {
        if self.is_exhausted() {
            return Err(SolveError::BudgetExhausted(self.max_probes));
        }
        self.probes.push(probe);
        Ok(())
    }

    /// Forget the most recent probe
    pub fn undo(&mut self) -> Option<Probe> {
        self.probes.pop()
    }

    pub fn reset(&mut self) {
        self.probes.clear();
    }

    /// Play a fresh game against `secret`, generating every clue
    ///
    /// # Errors
    /// Propagates any `SolveError` from the solver.
    pub fn play_against(&mut self, solver: &mut Solver, secret: &Word) -> Result<Outcome, SolveError> {
        self.reset();
        while !self.is_exhausted() {
            let guess = solver.guess_word(&self.probes)?;
            if guess == *secret {
                return Ok(Outcome::Solved(self.probes.len() + 1));
            }
            self.save_probe(Probe::against(guess, secret))?;
        }
        Ok(Outcome::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Backend, SolverConfig};
    use crate::core::Clue;
    use crate::solver::ScoringPolicy;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn probe(guess: &str) -> Probe {
        Probe::new(Word::new(guess).unwrap(), Clue::NOTHING)
    }

    #[test]
    fn budget_is_enforced() {
        let mut session = Session::new(2);
        session.save_probe(probe("crane")).unwrap();
        session.save_probe(probe("slate")).unwrap();

        assert!(session.is_exhausted());
        assert!(matches!(
            session.save_probe(probe("adieu")),
            Err(SolveError::BudgetExhausted(2))
        ));
        assert_eq!(session.probes_count(), 2);
    }

    #[test]
    fn undo_and_reset() {
        let mut session = Session::new(8);
        session.save_probe(probe("crane")).unwrap();
        session.save_probe(probe("slate")).unwrap();

        assert_eq!(session.undo(), Some(probe("slate")));
        assert_eq!(session.probes(), &[probe("crane")]);

        session.reset();
        assert_eq!(session.probes_count(), 0);
        assert_eq!(session.undo(), None);
    }

    #[test]
    fn every_secret_is_found() {
        let dictionary = words(&[
            "crane", "slate", "adieu", "lares", "tares", "irate", "crate", "grate", "trace",
            "stare", "glass", "sassy", "speed", "erase", "robot", "floor", "ghost", "lemon",
            "melon", "hello", "spell", "hills",
        ]);

        for policy in [ScoringPolicy::Minimax, ScoringPolicy::Entropy] {
            for backend in [Backend::Pool, Backend::Rayon] {
                let config = SolverConfig::new(policy)
                    .with_workers(4)
                    .with_backend(backend);
                let mut solver = Solver::new(dictionary.clone(), config);
                let mut session = Session::new(dictionary.len());

                for secret in &dictionary {
                    let outcome = session.play_against(&mut solver, secret).unwrap();
                    assert!(
                        matches!(outcome, Outcome::Solved(n) if n <= dictionary.len()),
                        "{secret} not solved with {policy:?}/{backend:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn zero_budget_is_exhausted_immediately() {
        let mut solver = Solver::new(words(&["crane", "slate"]), SolverConfig::default());
        let mut session = Session::new(0);
        let outcome = session
            .play_against(&mut solver, &Word::new("slate").unwrap())
            .unwrap();
        assert_eq!(outcome, Outcome::Exhausted);
    }
}
