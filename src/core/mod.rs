//! Core domain types for Wordle
//!
//! Words, feedback and the shared dictionary. Everything here is pure and
//! free of I/O.

mod dictionary;
mod feedback;
mod word;

pub use dictionary::Dictionary;
pub use feedback::{Feedback, FeedbackCode, FeedbackParseError, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
