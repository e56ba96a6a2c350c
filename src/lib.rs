//! Wordle Sieve
//!
//! A Wordle solver that narrows a dictionary by re-simulating feedback. After
//! a fixed set of opening guesses it always plays the remaining candidate with
//! the most distinct letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sieve::core::{Dictionary, Word};
//! use wordle_sieve::solver::{NoopObserver, SessionOutcome, Solver, SolverConfig};
//!
//! let dictionary = Dictionary::from_strs(&["spore", "crane", "adieu", "rival"]).unwrap();
//! let solver = Solver::new(&dictionary, SolverConfig::with_openings(&["crane"]).unwrap());
//!
//! let report = solver.solve(&Word::new("rival").unwrap(), &mut NoopObserver).unwrap();
//! assert_eq!(report.outcome, SessionOutcome::Solved { attempts: 2 });
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
