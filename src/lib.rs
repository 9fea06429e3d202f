//! Wordle solver
//!
//! Picks guesses by sweeping every dictionary word against the remaining
//! candidates, scored by minimax partition counts or Shannon entropy, with the
//! sweep split across persistent worker threads.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_sweep::config::SolverConfig;
//! use wordle_sweep::core::{Probe, Word};
//! use wordle_sweep::solver::Solver;
//! use wordle_sweep::wordlists::{WORDS, loader::words_from_slice};
//!
//! let mut solver = Solver::new(words_from_slice(WORDS), SolverConfig::default());
//! let secret = Word::new("slate").unwrap();
//!
//! let guess = solver.guess_word(&[]).unwrap();
//! let probes = [Probe::against(guess, &secret)];
//! println!("next: {}", solver.guess_word(&probes).unwrap());
//! ```

// Core domain types
pub mod core;

// Solver configuration
pub mod config;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
