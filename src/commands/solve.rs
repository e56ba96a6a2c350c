//! Word solving command
//!
//! Simulates one session against a specific target word.

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{GuessSelector, SessionObserver, SessionReport, Solver};
use tracing::warn;

/// Solve a specific word using the given solver
///
/// A target missing from the dictionary is still played; the session will
/// end exhausted unless an opening guess happens to hit it.
///
/// # Errors
///
/// Returns `SolverError::InvalidWord` if the target is not a 5-letter
/// alphabetic word.
pub fn solve_word<S: GuessSelector, O: SessionObserver + ?Sized>(
    target: &str,
    solver: &Solver<S>,
    observer: &mut O,
) -> Result<SessionReport, SolverError> {
    let target = Word::new(target)?;

    if !solver.dictionary().contains(&target) {
        warn!(target = %target, "target is not in the dictionary");
    }

    solver.solve(&target, observer)
}
