//! Wordle feedback calculation and representation
//!
//! Each guessed letter receives one of three marks:
//! - `g` = Correct (right letter, right position)
//! - `y` = Present (letter occurs elsewhere in the target)
//! - `-` = Absent (no unconsumed occurrence left in the target)

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Correct,
    Present,
    Absent,
}

impl Feedback {
    /// Canonical single-character symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => '-',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `g`/`G`/🟩, `y`/`Y`/🟨 and `-`/`_`/⬜/⬛.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'g' | 'G' | '🟩' => Some(Self::Correct),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback must have exactly {WORD_LENGTH} marks, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback mark {0:?} (use g, y or -)")]
    InvalidMark(char),
}

/// The five marks observed for one guess against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackCode([Feedback; WORD_LENGTH]);

impl FeedbackCode {
    /// All five letters correct
    pub const ALL_CORRECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    /// All five letters absent
    pub const ALL_ABSENT: Self = Self([Feedback::Absent; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Feedback; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// The per-position marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Whether every position is `Correct`
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Compute the feedback when `guess` is played against `target`
    ///
    /// Implements Wordle's exact rules for repeated letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove them from the
    ///    target's occurrence pool
    /// 2. Second pass, left to right: mark `Present` while the pool still holds
    ///    the letter (and take one occurrence), otherwise `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{FeedbackCode, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("alloy").unwrap();
    ///
    /// // The second L is exact, the first L takes alloy's other L, and only
    /// // one A is available for the two A's in the guess.
    /// assert_eq!(FeedbackCode::evaluate(&guess, &target).to_string(), "ygy--");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut marks = [Feedback::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();
        let guess_chars = guess.chars();
        let target_chars = target.chars();

        for (i, mark) in marks.iter_mut().enumerate() {
            if guess_chars[i] == target_chars[i] {
                *mark = Feedback::Correct;
                if let Some(count) = available.get_mut(&guess_chars[i]) {
                    *count -= 1;
                }
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Feedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess_chars[i]) {
                if *count > 0 {
                    *mark = Feedback::Present;
                    *count -= 1;
                }
            }
        }

        Self(marks)
    }

    /// Render as emoji tiles, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

/// Compute the feedback for `guess` against `target`
///
/// Free-function form of [`FeedbackCode::evaluate`].
#[inline]
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> FeedbackCode {
    FeedbackCode::evaluate(guess, target)
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for FeedbackCode {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(FeedbackParseError::InvalidLength(chars.len()));
        }

        let mut marks = [Feedback::Absent; WORD_LENGTH];
        for (mark, &ch) in marks.iter_mut().zip(&chars) {
            *mark = Feedback::from_symbol(ch).ok_or(FeedbackParseError::InvalidMark(ch))?;
        }

        Ok(Self(marks))
    }
}
