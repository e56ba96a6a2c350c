//! The immutable word list shared by every solving session

use super::Word;
use crate::error::SolverError;
use rustc_hash::FxHashSet;

/// A non-empty, duplicate-free, ordered list of valid words
///
/// Built once at startup and passed by reference into each session.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    ///
    /// Later duplicates are dropped; the first occurrence keeps its position.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDictionary` if `words` is empty.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, SolverError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(SolverError::EmptyDictionary);
        }

        Ok(Self { words, index })
    }

    /// Build a dictionary from raw strings, failing on the first malformed entry
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` for any entry that is not a 5-letter
    /// alphabetic word, or `SolverError::EmptyDictionary` for an empty slice.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "slate"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(Dictionary::from_strs(&["crane", "cr4ne"]).is_err());
    /// ```
    pub fn from_strs(entries: &[&str]) -> Result<Self, SolverError> {
        let words = entries
            .iter()
            .map(|&entry| Word::new(entry))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty() {
        assert_eq!(
            Dictionary::new(Vec::new()).unwrap_err(),
            SolverError::EmptyDictionary
        );
    }

    #[test]
    fn new_drops_duplicates_keeping_order() {
        let dictionary = Dictionary::from_strs(&["slate", "crane", "slate", "adieu"]).unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "adieu"]);
    }

    #[test]
    fn from_strs_fails_fast_on_malformed_entry() {
        let err = Dictionary::from_strs(&["crane", "toolong"]).unwrap_err();
        assert!(matches!(err, SolverError::InvalidWord(_)));
    }

    #[test]
    fn lookup() {
        let dictionary = Dictionary::from_strs(&["crane", "slate"]).unwrap();
        assert!(dictionary.contains(&Word::new("crane").unwrap()));
        assert!(!dictionary.contains(&Word::new("rival").unwrap()));
        assert_eq!(dictionary.len(), 2);
        assert!(!dictionary.is_empty());
    }
}
