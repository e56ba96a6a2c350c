//! Guess history of a single session

use crate::core::{FeedbackCode, Word};

/// Ordered (guess, feedback) pairs, oldest first
///
/// Kept for reporting only; the candidate set is narrowed incrementally and
/// never rebuilt from this history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessRecord {
    entries: Vec<(Word, FeedbackCode)>,
}

impl GuessRecord {
    pub(crate) fn push(&mut self, guess: Word, feedback: FeedbackCode) {
        self.entries.push((guess, feedback));
    }

    pub(crate) fn pop(&mut self) -> Option<(Word, FeedbackCode)> {
        self.entries.pop()
    }

    #[must_use]
    pub fn entries(&self) -> &[(Word, FeedbackCode)] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Word, FeedbackCode)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&(Word, FeedbackCode)> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a GuessRecord {
    type Item = &'a (Word, FeedbackCode);
    type IntoIter = std::slice::Iter<'a, (Word, FeedbackCode)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
