//! Persistent sweep workers behind a two-phase barrier
//!
//! Workers are spawned once, each owning a fixed slice of the dictionary, and
//! then cycle forever: announce ready, wait for work, sweep the slice, repeat.
//! The coordinator dispatches a sweep by waiting for all workers to be ready,
//! resetting the ready count, bumping the generation and broadcasting; it then
//! waits for the ready count to reach the worker count again before reading
//! any score.
//!
//! Shared state is a single mutex-guarded [`BarrierState`] with two condition
//! variables. Each worker's output lives in its own [`Shard`] mutex, which the
//! worker holds only while sweeping; the coordinator touches shards only while
//! every worker is parked.

use super::scoring::{ScoreTable, ScoringPolicy};
use super::sweep::{Shard, Sweep, gather, partition_ranges};
use crate::core::Word;
use log::{debug, error, trace};
use std::io;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use thiserror::Error;

/// Failures of the synchronisation layer
///
/// None of these are recoverable: the pool is unusable afterwards.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("cannot create worker thread: {0}")]
    Spawn(#[source] io::Error),
    #[error("worker pool lock poisoned")]
    Poisoned,
    #[error("a sweep worker exited unexpectedly")]
    WorkerFailed,
}

impl<T> From<PoisonError<T>> for PoolError {
    fn from(_: PoisonError<T>) -> Self {
        Self::Poisoned
    }
}

struct Job {
    candidates: Arc<[Word]>,
    policy: ScoringPolicy,
}

#[derive(Default)]
struct BarrierState {
    /// Workers parked and waiting for the next generation
    ready: usize,
    /// Bumped once per dispatch; workers run each generation exactly once
    generation: u64,
    job: Option<Arc<Job>>,
    shutdown: bool,
    failed: bool,
}

struct Shared {
    dictionary: Arc<[Word]>,
    state: Mutex<BarrierState>,
    work_available: Condvar,
    worker_ready: Condvar,
    shards: Vec<Mutex<Shard>>,
}

/// Fixed set of persistent sweep workers
///
/// Dropping the pool stops and joins the workers.
pub struct WorkerPool {
    shared: Arc<Shared>,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `workers` threads over a static partition of `dictionary`
    ///
    /// Returns once every worker has announced ready. A worker count of zero is
    /// treated as one.
    ///
    /// # Errors
    /// Returns `PoolError::Spawn` if a thread cannot be created, or another
    /// `PoolError` if a worker fails before reaching the barrier.
    pub fn new(dictionary: Arc<[Word]>, workers: usize) -> Result<Self, PoolError> {
        let shards = partition_ranges(dictionary.len(), workers)
            .into_iter()
            .map(|range| Mutex::new(Shard::new(range)))
            .collect::<Vec<_>>();
        let count = shards.len();

        let shared = Arc::new(Shared {
            dictionary,
            state: Mutex::new(BarrierState::default()),
            work_available: Condvar::new(),
            worker_ready: Condvar::new(),
            shards,
        });

        let mut pool = Self {
            shared,
            handles: Vec::with_capacity(count),
        };

        for id in 0..count {
            let shared = Arc::clone(&pool.shared);
            let handle = thread::Builder::new()
                .name(format!("sweep-{id}"))
                .spawn(move || worker_loop(&shared, id))
                .map_err(PoolError::Spawn)?;
            pool.handles.push(handle);
        }

        let state = pool.shared.state.lock()?;
        drop(pool.wait_all_ready(state)?);
        debug!("worker pool started with {count} workers");

        Ok(pool)
    }

    /// Block until every worker is parked, or fail if one died
    fn wait_all_ready<'a>(
        &'a self,
        state: MutexGuard<'a, BarrierState>,
    ) -> Result<MutexGuard<'a, BarrierState>, PoolError> {
        let workers = self.handles.len();
        let state = self
            .shared
            .worker_ready
            .wait_while(state, |s| s.ready < workers && !s.failed)?;
        if state.failed {
            return Err(PoolError::WorkerFailed);
        }
        trace!("all {workers} workers ready");
        Ok(state)
    }
}

impl Sweep for WorkerPool {
    fn sweep(
        &mut self,
        candidates: Arc<[Word]>,
        policy: ScoringPolicy,
    ) -> Result<ScoreTable, PoolError> {
        let state = self.shared.state.lock()?;
        let mut state = self.wait_all_ready(state)?;

        // Every worker is parked, so no shard lock is held
        for shard in &self.shared.shards {
            shard.lock()?.reset();
        }

        state.ready = 0;
        state.generation += 1;
        state.job = Some(Arc::new(Job {
            candidates,
            policy,
        }));
        trace!("dispatching generation {}", state.generation);
        self.shared.work_available.notify_all();

        let mut state = self.wait_all_ready(state)?;
        state.job = None;
        drop(state);

        let shards = self
            .shared
            .shards
            .iter()
            .map(Mutex::lock)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(gather(shards.iter().map(|guard| &**guard)))
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        {
            let mut state = self
                .shared
                .state
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            state.shutdown = true;
        }
        self.shared.work_available.notify_all();

        for handle in self.handles.drain(..) {
            if handle.join().is_err() {
                error!("sweep worker panicked");
            }
        }
    }
}

/// Marks the pool failed if a worker leaves its loop for any reason other
/// than shutdown, so the coordinator is never left waiting.
struct ExitGuard<'a> {
    shared: &'a Shared,
    clean: bool,
}

impl Drop for ExitGuard<'_> {
    fn drop(&mut self) {
        if self.clean {
            return;
        }
        let mut state = self
            .shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        state.failed = true;
        drop(state);
        self.shared.worker_ready.notify_all();
    }
}

fn worker_loop(shared: &Shared, id: usize) {
    let mut guard = ExitGuard {
        shared,
        clean: false,
    };
    let mut seen = 0;

    loop {
        let Ok(mut state) = shared.state.lock() else {
            return;
        };
        state.ready += 1;
        trace!("worker {id} ready ({} ready)", state.ready);
        shared.worker_ready.notify_all();

        let Ok(state) = shared
            .work_available
            .wait_while(state, |s| s.generation == seen && !s.shutdown)
        else {
            return;
        };
        if state.shutdown {
            guard.clean = true;
            return;
        }
        seen = state.generation;
        let job = state.job.clone();
        drop(state);

        let Some(job) = job else {
            continue;
        };
        let Ok(mut shard) = shared.shards[id].lock() else {
            return;
        };
        shard.sweep(&shared.dictionary, &job.candidates, job.policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::sweep::RayonSweep;
    use std::time::{Duration, Instant};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn dictionary() -> Arc<[Word]> {
        words(&[
            "crane", "slate", "adieu", "lares", "tares", "irate", "crate", "grate", "trace",
            "stare", "glass", "sassy", "speed", "erase", "robot", "floor", "ghost",
        ])
        .into()
    }

    #[test]
    fn pool_starts_requested_workers() {
        let pool = WorkerPool::new(dictionary(), 4).unwrap();
        assert_eq!(pool.handles.len(), 4);
        assert_eq!(pool.shared.shards.len(), 4);
    }

    #[test]
    fn zero_workers_means_one() {
        let pool = WorkerPool::new(dictionary(), 0).unwrap();
        assert_eq!(pool.handles.len(), 1);
    }

    #[test]
    fn sweep_fills_whole_table() {
        let dictionary = dictionary();
        let mut pool = WorkerPool::new(Arc::clone(&dictionary), 3).unwrap();

        let table = pool
            .sweep(Arc::clone(&dictionary), ScoringPolicy::Minimax)
            .unwrap();

        assert_eq!(table.len(), dictionary.len());
    }

    #[test]
    fn pool_matches_rayon() {
        let dictionary = dictionary();
        let candidates: Arc<[Word]> = words(&["lares", "tares", "stare", "trace"]).into();
        let mut pool = WorkerPool::new(Arc::clone(&dictionary), 5).unwrap();
        let mut rayon = RayonSweep::new(Arc::clone(&dictionary), 2);

        for policy in [ScoringPolicy::Minimax, ScoringPolicy::Entropy] {
            let from_pool = pool.sweep(Arc::clone(&candidates), policy).unwrap();
            let from_rayon = rayon.sweep(Arc::clone(&candidates), policy).unwrap();
            assert_eq!(from_pool, from_rayon);
        }
    }

    #[test]
    fn repeated_sweeps_are_identical() {
        let dictionary = dictionary();
        let candidates: Arc<[Word]> = words(&["crate", "grate", "irate", "trace"]).into();
        let mut pool = WorkerPool::new(Arc::clone(&dictionary), 4).unwrap();

        let first = pool
            .sweep(Arc::clone(&candidates), ScoringPolicy::Minimax)
            .unwrap();
        for _ in 0..20 {
            let again = pool
                .sweep(Arc::clone(&candidates), ScoringPolicy::Minimax)
                .unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn shrinking_candidates_never_reads_stale_cache() {
        let dictionary = dictionary();
        let mut pool = WorkerPool::new(Arc::clone(&dictionary), 2).unwrap();
        let small: Arc<[Word]> = words(&["crate", "grate"]).into();

        // Warm the cache with a larger candidate set first
        pool.sweep(Arc::clone(&dictionary), ScoringPolicy::Minimax)
            .unwrap();
        let after_warm = pool
            .sweep(Arc::clone(&small), ScoringPolicy::Minimax)
            .unwrap();

        let mut fresh = WorkerPool::new(Arc::clone(&dictionary), 2).unwrap();
        let cold = fresh.sweep(small, ScoringPolicy::Minimax).unwrap();

        assert_eq!(after_warm, cold);
    }

    #[test]
    fn more_workers_than_words() {
        let dictionary: Arc<[Word]> = words(&["crane", "slate"]).into();
        let mut pool = WorkerPool::new(Arc::clone(&dictionary), 8).unwrap();

        let table = pool
            .sweep(Arc::clone(&dictionary), ScoringPolicy::Entropy)
            .unwrap();

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn poisoned_shard_fails_sweep() {
        let dictionary = dictionary();
        let mut pool = WorkerPool::new(Arc::clone(&dictionary), 3).unwrap();

        let shared = Arc::clone(&pool.shared);
        let poisoner = thread::spawn(move || {
            let _shard = shared.shards[1].lock().unwrap();
            panic!("shard holder died");
        });
        assert!(poisoner.join().is_err());

        assert!(matches!(
            pool.sweep(dictionary, ScoringPolicy::Minimax),
            Err(PoolError::Poisoned)
        ));
    }

    #[test]
    fn worker_exit_fails_sweep_promptly() {
        let dictionary = dictionary();
        let mut pool = WorkerPool::new(Arc::clone(&dictionary), 3).unwrap();

        // A worker unwinding out of its loop drops an unclean exit guard
        let shared = Arc::clone(&pool.shared);
        let worker = thread::spawn(move || {
            let _guard = ExitGuard {
                shared: &shared,
                clean: false,
            };
            panic!("worker died");
        });
        assert!(worker.join().is_err());

        let start = Instant::now();
        assert!(matches!(
            pool.sweep(Arc::clone(&dictionary), ScoringPolicy::Minimax),
            Err(PoolError::WorkerFailed)
        ));
        assert!(matches!(
            pool.sweep(dictionary, ScoringPolicy::Entropy),
            Err(PoolError::WorkerFailed)
        ));
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
