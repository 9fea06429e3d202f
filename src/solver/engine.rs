//! Main Wordle solver interface

use super::filter::filter;
use super::pool::PoolError;
use super::scoring::ScoreTable;
use super::selector::select;
use super::sweep::{Sweep, SweepBackend};
use crate::config::SolverConfig;
use crate::core::{Probe, Word};
use crate::output::{Reporter, SilentReporter};
use log::{debug, info, warn};
use std::sync::Arc;
use thiserror::Error;

/// Why the solver could not produce a guess
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("dictionary is empty")]
    EmptyDictionary,
    #[error("no dictionary word is consistent with the clues played")]
    NoCandidates,
    #[error("probe budget of {0} exhausted without finding the word")]
    BudgetExhausted(usize),
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Main Wordle solver
///
/// Owns the dictionary, the sweep backend and the diagnostics sink. The
/// backend (worker threads for the pool) is started lazily on the first sweep
/// and reused for every later turn and session.
pub struct Solver {
    dictionary: Arc<[Word]>,
    config: SolverConfig,
    backend: Option<SweepBackend>,
    reporter: Box<dyn Reporter>,
}

impl Solver {
    /// Create a new solver over `dictionary`
    ///
    /// A configured opening word that is not in the dictionary is dropped.
    #[must_use]
    pub fn new(dictionary: Vec<Word>, mut config: SolverConfig) -> Self {
        if let Some(opening) = config.opening {
            if !dictionary.contains(&opening) {
                warn!("opening word {opening} is not in the dictionary; computing it instead");
                config.opening = None;
            }
        }

        Self {
            dictionary: dictionary.into(),
            config,
            backend: None,
            reporter: Box::new(SilentReporter),
        }
    }

    /// Replace the diagnostics sink
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Dictionary words consistent with every probe
    #[must_use]
    pub fn candidates(&self, probes: &[Probe]) -> Vec<Word> {
        filter(&self.dictionary, probes)
    }

    /// Score every dictionary word against `candidates`
    ///
    /// # Errors
    /// Returns `SolveError::Pool` if the sweep backend fails.
    pub fn score_table(&mut self, candidates: &[Word]) -> Result<ScoreTable, SolveError> {
        let policy = self.config.policy;
        let backend = self.backend()?;
        Ok(backend.sweep(Arc::from(candidates), policy)?)
    }

    /// Get the next best guess given the probes played so far
    ///
    /// With no probes and a configured opening word, the opening word is
    /// returned without sweeping. With a single candidate left it is returned
    /// directly.
    ///
    /// # Errors
    /// - `SolveError::EmptyDictionary` if there is nothing to guess from
    /// - `SolveError::NoCandidates` if the probes contradict every word
    /// - `SolveError::Pool` if the sweep backend fails
    pub fn guess_word(&mut self, probes: &[Probe]) -> Result<Word, SolveError> {
        if self.dictionary.is_empty() {
            return Err(SolveError::EmptyDictionary);
        }

        if probes.is_empty() {
            if let Some(opening) = self.config.opening {
                self.reporter.candidates(&self.dictionary);
                return Ok(opening);
            }
        }

        let candidates = self.candidates(probes);
        self.reporter.candidates(&candidates);
        debug!(
            "{} candidates after {} probes",
            candidates.len(),
            probes.len()
        );

        match candidates.as_slice() {
            [] => return Err(SolveError::NoCandidates),
            [only] => return Ok(*only),
            _ => {}
        }

        let table = self.score_table(&candidates)?;
        select(&table, &self.dictionary, &candidates, self.config.policy)
            .ok_or(SolveError::EmptyDictionary)
    }

    fn backend(&mut self) -> Result<&mut SweepBackend, PoolError> {
        let backend = match self.backend.take() {
            Some(backend) => backend,
            None => {
                info!(
                    "starting {:?} sweep backend with {} workers over {} words",
                    self.config.backend,
                    self.config.workers,
                    self.dictionary.len()
                );
                SweepBackend::start(
                    self.config.backend,
                    Arc::clone(&self.dictionary),
                    self.config.workers,
                )?
            }
        };
        Ok(self.backend.insert(backend))
    }
}
