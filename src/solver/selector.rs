//! Guess selection
//!
//! Defines the `GuessSelector` trait and the distinct-letters heuristic.

use super::CandidateSet;
use crate::core::Word;
use crate::error::SolverError;
use std::cmp::Ordering;

/// A rule for choosing the next guess from the remaining candidates
pub trait GuessSelector {
    /// Pick the next guess
    ///
    /// # Errors
    /// Returns `SolverError::InvalidState` if `candidates` is empty.
    fn select(&self, candidates: &CandidateSet) -> Result<Word, SolverError>;
}

/// Prefers the candidate with the most distinct letters
///
/// Ties go to the lexicographically smallest word, so the choice depends only
/// on the contents of the set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistinctLetters;

impl GuessSelector for DistinctLetters {
    fn select(&self, candidates: &CandidateSet) -> Result<Word, SolverError> {
        candidates
            .iter()
            .max_by(|a, b| rank(a, b))
            .cloned()
            .ok_or(SolverError::InvalidState(
                "guess selection requires at least one candidate",
            ))
    }
}

// Greater distinct-letter count wins, then the smaller word
fn rank(a: &Word, b: &Word) -> Ordering {
    a.distinct_letters()
        .cmp(&b.distinct_letters())
        .then_with(|| b.cmp(a))
}

/// Select with the default [`DistinctLetters`] rule
///
/// # Errors
/// Returns `SolverError::InvalidState` if `candidates` is empty.
///
/// # Examples
/// ```
/// use wordle_sieve::core::Word;
/// use wordle_sieve::solver::{CandidateSet, select};
///
/// let candidates = CandidateSet::from_words(
///     ["fghij", "abcde"].map(|w| Word::new(w).unwrap()),
/// );
/// assert_eq!(select(&candidates).unwrap().text(), "abcde");
/// ```
pub fn select(candidates: &CandidateSet) -> Result<Word, SolverError> {
    DistinctLetters.select(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        CandidateSet::from_words(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    #[test]
    fn empty_set_is_invalid_state() {
        let err = select(&CandidateSet::default()).unwrap_err();
        assert!(matches!(err, SolverError::InvalidState(_)));
    }

    #[test]
    fn tie_goes_to_smallest_word() {
        assert_eq!(select(&set(&["abcde", "fghij"])).unwrap().text(), "abcde");
        assert_eq!(select(&set(&["fghij", "abcde"])).unwrap().text(), "abcde");
    }

    #[test]
    fn more_distinct_letters_wins() {
        // SPEED has 4 distinct letters, STAIR has 5
        let candidates = set(&["aaaaa", "speed", "stair", "llama"]);
        assert_eq!(select(&candidates).unwrap().text(), "stair");
    }

    #[test]
    fn distinct_count_beats_alphabetical_order() {
        let candidates = set(&["abbey", "zebra"]);
        assert_eq!(select(&candidates).unwrap().text(), "zebra");
    }

    #[test]
    fn single_candidate_is_returned() {
        assert_eq!(select(&set(&["rival"])).unwrap().text(), "rival");
    }

    #[test]
    fn selection_is_deterministic_under_reordering() {
        let forward = set(&["crate", "grate", "irate", "trace"]);
        let backward = set(&["trace", "irate", "grate", "crate"]);
        assert_eq!(select(&forward).unwrap(), select(&backward).unwrap());
        assert_eq!(select(&forward).unwrap().text(), "crate");
    }
}
