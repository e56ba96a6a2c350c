//! Error types shared by the solver core

use crate::core::WordError;
use thiserror::Error;

/// Errors surfaced by the solving core
///
/// Running out of candidates is not an error; see
/// [`SessionOutcome::Exhausted`](crate::solver::SessionOutcome::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A dictionary entry, guess or target is not a 5-letter alphabetic word
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// An operation was invoked in a state that cannot support it
    #[error("invalid solver state: {0}")]
    InvalidState(&'static str),

    /// A dictionary needs at least one word
    #[error("dictionary is empty")]
    EmptyDictionary,
}
