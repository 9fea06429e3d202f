//! Command implementations

pub mod analyze;
pub mod feedback;
pub mod play;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word};
pub use feedback::feedback;
pub use play::{PlayEnd, run_play};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all, select_secrets};
