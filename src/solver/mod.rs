//! Wordle solving engine
//!
//! Candidate filtering, guess selection and the session state machine that
//! ties them together.

mod engine;
mod filter;
mod observer;
mod record;
mod selector;

pub use engine::{
    DEFAULT_OPENINGS, Session, SessionOutcome, SessionReport, SessionState, Solver, SolverConfig,
};
pub use filter::{CandidateSet, filter};
pub use observer::{GuessEvent, NoopObserver, SessionObserver, SessionWarning};
pub use record::GuessRecord;
pub use selector::{DistinctLetters, GuessSelector, select};
