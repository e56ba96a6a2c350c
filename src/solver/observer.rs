//! Session events for reporting
//!
//! The solving loop performs no I/O itself. Anything that prints, collects
//! transcripts or counts statistics implements `SessionObserver`.

use super::{CandidateSet, SessionState};
use crate::core::{FeedbackCode, Word};
use std::fmt;

/// One evaluated guess
#[derive(Debug, Clone, Copy)]
pub struct GuessEvent<'a> {
    /// 1-based attempt number
    pub attempt: usize,
    pub guess: &'a Word,
    pub feedback: FeedbackCode,
    /// `Opening` or `Guessing`, the phase the guess was played in
    pub phase: SessionState,
    /// Candidates left after filtering; `None` when the guess solved the puzzle
    pub remaining: Option<&'a CandidateSet>,
}

/// Non-fatal conditions noticed while running a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionWarning {
    /// An opening guess is not in the dictionary; it is still played
    OpeningNotInDictionary(Word),
}

impl fmt::Display for SessionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpeningNotInDictionary(word) => {
                write!(f, "opening guess '{word}' is not in the dictionary; still using it")
            }
        }
    }
}

/// Receives session events as they happen
///
/// Every method has an empty default so observers only implement what they
/// care about.
pub trait SessionObserver {
    fn on_warning(&mut self, _warning: &SessionWarning) {}

    fn on_guess(&mut self, _event: &GuessEvent<'_>) {}

    fn on_solved(&mut self, _attempts: usize, _word: &Word) {}

    fn on_exhausted(&mut self, _attempts: usize) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
