//! Candidate filtering
//!
//! Narrowing re-simulates the feedback every remaining candidate would have
//! produced for the guess and keeps the exact matches. No letter-position
//! constraints are tracked, so repeated letters need no special handling.

use crate::core::{Dictionary, FeedbackCode, Word, evaluate};
use rustc_hash::FxHashSet;

/// Words still consistent with every feedback observed so far
///
/// Ordered and duplicate-free. Filtering only ever removes words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Seed a set with every word in the dictionary
    #[must_use]
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        Self {
            words: dictionary.words().to_vec(),
        }
    }

    /// Build a set from arbitrary words, dropping repeats
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        Self {
            words: words
                .into_iter()
                .filter(|word| seen.insert(word.clone()))
                .collect(),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Keep the candidates that would have produced `observed` for `guess`
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Dictionary, Word};
    /// use wordle_sieve::solver::CandidateSet;
    ///
    /// let dictionary = Dictionary::from_strs(&["spore", "crane", "adieu", "rival"]).unwrap();
    /// let candidates = CandidateSet::from_dictionary(&dictionary);
    /// let guess = Word::new("crane").unwrap();
    ///
    /// let remaining = candidates.filter(&guess, "-yy--".parse().unwrap());
    /// assert_eq!(remaining.len(), 1);
    /// assert_eq!(remaining.words()[0].text(), "rival");
    /// ```
    #[must_use]
    pub fn filter(&self, guess: &Word, observed: FeedbackCode) -> Self {
        Self {
            words: self
                .words
                .iter()
                .filter(|candidate| evaluate(guess, candidate) == observed)
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Free-function form of [`CandidateSet::filter`]
#[must_use]
pub fn filter(candidates: &CandidateSet, guess: &Word, observed: FeedbackCode) -> CandidateSet {
    candidates.filter(guess, observed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        CandidateSet::from_words(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    #[test]
    fn keeps_only_matching_candidates() {
        let candidates = set(&["spore", "crane", "adieu", "rival"]);
        let guess = Word::new("crane").unwrap();
        let target = Word::new("rival").unwrap();

        let remaining = filter(&candidates, &guess, evaluate(&guess, &target));

        assert_eq!(remaining, set(&["rival"]));
    }

    #[test]
    fn target_is_never_removed() {
        let candidates = set(&["irate", "crate", "grate", "slate", "crane"]);
        let guess = Word::new("trace").unwrap();

        for target in &candidates {
            let remaining = candidates.filter(&guess, evaluate(&guess, target));
            assert!(remaining.contains(target), "{target} was filtered out");
            assert!(remaining.len() <= candidates.len());
        }
    }

    #[test]
    fn preserves_relative_order() {
        let candidates = set(&["grate", "crate", "irate"]);
        let guess = Word::new("slate").unwrap();
        let remaining = candidates.filter(&guess, "--ggg".parse().unwrap());
        assert_eq!(remaining, set(&["grate", "crate", "irate"]));
    }

    #[test]
    fn impossible_feedback_empties_the_set() {
        let candidates = set(&["irate", "crate", "grate"]);
        let guess = Word::new("zzzzz").unwrap();

        let remaining = candidates.filter(&guess, FeedbackCode::ALL_CORRECT);

        assert!(remaining.is_empty());
    }

    #[test]
    fn duplicate_letters_filter_exactly() {
        // Only ALLOY yields ygy-- for LLAMA
        let candidates = set(&["alloy", "llama", "allay", "loyal"]);
        let guess = Word::new("llama").unwrap();
        let remaining = candidates.filter(&guess, "ygy--".parse().unwrap());
        assert_eq!(remaining, set(&["alloy"]));
    }

    #[test]
    fn from_words_drops_repeats() {
        let candidates = set(&["crane", "slate", "crane"]);
        assert_eq!(candidates.len(), 2);
    }
}
