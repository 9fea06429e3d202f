//! Solver configuration

use crate::core::Word;
use crate::solver::ScoringPolicy;
use std::num::NonZeroUsize;
use std::thread;

/// Probe budget per session
pub const MAX_PROBES: usize = 128;

/// Opening word used by the CLI when none is given
pub const DEFAULT_OPENING: &str = "tares";

/// How scoring sweeps are parallelised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Persistent worker threads behind a two-phase barrier
    #[default]
    Pool,
    /// Rayon's global thread pool over the same static partition
    Rayon,
}

impl Backend {
    /// Supported names: "pool", "rayon"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pool" => Some(Self::Pool),
            "rayon" => Some(Self::Rayon),
            _ => None,
        }
    }
}

/// Configuration for a [`Solver`](crate::solver::Solver)
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub policy: ScoringPolicy,
    pub backend: Backend,
    /// Number of sweep workers (slices of the dictionary)
    pub workers: usize,
    /// Played with zero probes instead of sweeping, if it is in the dictionary
    pub opening: Option<Word>,
    pub max_probes: usize,
}

impl SolverConfig {
    #[must_use]
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_opening(mut self, opening: Option<Word>) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    #[must_use]
    pub const fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::default(),
            backend: Backend::default(),
            workers: thread::available_parallelism().map_or(1, NonZeroUsize::get),
            opening: None,
            max_probes: MAX_PROBES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.policy, ScoringPolicy::Minimax);
        assert_eq!(config.backend, Backend::Pool);
        assert!(config.workers >= 1);
        assert_eq!(config.opening, None);
        assert_eq!(config.max_probes, MAX_PROBES);
    }

    #[test]
    fn builders() {
        let opening = Word::new(DEFAULT_OPENING).unwrap();
        let config = SolverConfig::new(ScoringPolicy::Entropy)
            .with_opening(Some(opening))
            .with_workers(0)
            .with_backend(Backend::Rayon);

        assert_eq!(config.policy, ScoringPolicy::Entropy);
        assert_eq!(config.opening, Some(opening));
        assert_eq!(config.workers, 1);
        assert_eq!(config.backend, Backend::Rayon);
    }

    #[test]
    fn backend_names() {
        assert_eq!(Backend::from_name("pool"), Some(Backend::Pool));
        assert_eq!(Backend::from_name("rayon"), Some(Backend::Rayon));
        assert_eq!(Backend::from_name("threads"), None);
    }
}
