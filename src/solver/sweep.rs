//! One scoring sweep: every dictionary word scored against the candidate set
//!
//! The dictionary is split once into contiguous, disjoint slices. Each slice is
//! a [`Shard`] that owns the scores and cache rows for its guess indices, so
//! whoever sweeps a shard is its only writer. Two backends drive the shards:
//! the persistent [`WorkerPool`] and a rayon parallel iterator.

use super::cache::ClueCache;
use super::pool::{PoolError, WorkerPool};
use super::scoring::{ScoreTable, ScoringPolicy};
use crate::config::Backend;
use crate::core::Word;
use rayon::prelude::*;
use std::ops::Range;
use std::sync::Arc;

/// Split `len` indices into `parts` near-equal contiguous ranges
///
/// Every range gets `len / parts` indices; the remainder is appended to the
/// last range. `parts` of zero is treated as one.
///
/// # Examples
/// ```
/// use wordle_sweep::solver::partition_ranges;
///
/// assert_eq!(partition_ranges(10, 3), vec![0..3, 3..6, 6..10]);
/// ```
#[must_use]
pub fn partition_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let chunk = len / parts;
    (0..parts)
        .map(|i| {
            let from = chunk * i;
            let extra = if i == parts - 1 { len % parts } else { 0 };
            from..from + chunk + extra
        })
        .collect()
}

/// Scores and cache rows for one contiguous slice of the dictionary
#[derive(Debug)]
pub struct Shard {
    cache: ClueCache,
    scores: Vec<f64>,
}

impl Shard {
    #[must_use]
    pub fn new(range: Range<usize>) -> Self {
        Self {
            scores: vec![0.0; range.len()],
            cache: ClueCache::new(range),
        }
    }

    /// Dictionary indices this shard scores
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.cache.rows()
    }

    /// Scores from the last sweep, aligned with [`Shard::range`]
    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Invalidate the cache before the candidate set is swept again
    pub fn reset(&mut self) {
        self.cache.clear();
    }

    /// Score every guess in this shard's slice against `candidates`
    pub fn sweep(&mut self, dictionary: &[Word], candidates: &[Word], policy: ScoringPolicy) {
        let range = self.range();
        for (slot, guess_index) in self.scores.iter_mut().zip(range) {
            *slot = policy.score(
                guess_index,
                &dictionary[guess_index],
                candidates,
                &mut self.cache,
            );
        }
    }
}

/// Collect shard scores, in dictionary order, into one table
pub(crate) fn gather<'a>(shards: impl IntoIterator<Item = &'a Shard>) -> ScoreTable {
    let mut scores = Vec::new();
    for shard in shards {
        scores.extend_from_slice(shard.scores());
    }
    ScoreTable::new(scores)
}

/// A way of running a scoring sweep
pub trait Sweep {
    /// Score every dictionary word against `candidates`
    ///
    /// Starts from a cleared cache and returns only once every slice is done.
    ///
    /// # Errors
    /// Returns `PoolError` if the synchronisation layer fails.
    fn sweep(
        &mut self,
        candidates: Arc<[Word]>,
        policy: ScoringPolicy,
    ) -> Result<ScoreTable, PoolError>;
}

/// Static partition swept by rayon's global thread pool
pub struct RayonSweep {
    dictionary: Arc<[Word]>,
    shards: Vec<Shard>,
}

impl RayonSweep {
    #[must_use]
    pub fn new(dictionary: Arc<[Word]>, parts: usize) -> Self {
        let shards = partition_ranges(dictionary.len(), parts)
            .into_iter()
            .map(Shard::new)
            .collect();
        Self { dictionary, shards }
    }
}

impl Sweep for RayonSweep {
    fn sweep(
        &mut self,
        candidates: Arc<[Word]>,
        policy: ScoringPolicy,
    ) -> Result<ScoreTable, PoolError> {
        let dictionary = &self.dictionary;
        self.shards.par_iter_mut().for_each(|shard| {
            shard.reset();
            shard.sweep(dictionary, &candidates, policy);
        });
        Ok(gather(&self.shards))
    }
}

/// Enum wrapper for all sweep backends
///
/// Allows runtime selection of backend while maintaining static dispatch.
pub enum SweepBackend {
    /// Persistent workers behind a two-phase barrier
    Pool(WorkerPool),
    /// Rayon parallel iterator
    Rayon(RayonSweep),
}

impl SweepBackend {
    /// Start the selected backend over `dictionary`
    ///
    /// # Errors
    /// Returns `PoolError::Spawn` if a pool worker thread cannot be created.
    pub fn start(
        kind: Backend,
        dictionary: Arc<[Word]>,
        workers: usize,
    ) -> Result<Self, PoolError> {
        Ok(match kind {
            Backend::Pool => Self::Pool(WorkerPool::new(dictionary, workers)?),
            Backend::Rayon => Self::Rayon(RayonSweep::new(dictionary, workers)),
        })
    }
}

impl Sweep for SweepBackend {
    fn sweep(
        &mut self,
        candidates: Arc<[Word]>,
        policy: ScoringPolicy,
    ) -> Result<ScoreTable, PoolError> {
        match self {
            Self::Pool(pool) => pool.sweep(candidates, policy),
            Self::Rayon(rayon) => rayon.sweep(candidates, policy),
        }
    }
}
