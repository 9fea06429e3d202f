//! Wordle solving
//!
//! Candidate filtering, scoring sweeps over the dictionary and guess selection.

mod cache;
mod engine;
mod filter;
mod pool;
pub mod scoring;
mod selector;
mod session;
mod sweep;

pub use cache::ClueCache;
pub use engine::{SolveError, Solver};
pub use filter::{count_filtered, filter};
pub use pool::{PoolError, WorkerPool};
pub use scoring::{GuessMetrics, ScoreTable, ScoringPolicy};
pub use selector::select;
pub use session::{Outcome, Session};
pub use sweep::{RayonSweep, Shard, Sweep, SweepBackend, partition_ranges};
