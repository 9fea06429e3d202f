//! Terminal output formatting
//!
//! Display utilities for CLI results and the solver's diagnostics sink.

pub mod display;
pub mod formatters;
mod reporter;

pub use display::{format_feedback, print_analysis_result, print_feedback, print_solve_result};
pub use reporter::{ConsoleReporter, LIST_CANDIDATES_BELOW, Reporter, SilentReporter, candidate_line};
