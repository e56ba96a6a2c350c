//! Word list loading utilities
//!
//! Malformed and repeated entries are dropped here, before anything reaches
//! the solver.

use super::WORDS;
use crate::core::{Dictionary, Word};
use crate::error::SolverError;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading a dictionary
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Parse word list text: one word per line
///
/// Blank lines and `#` comments are ignored. Entries that are not 5-letter
/// alphabetic words are skipped, as are repeats of earlier entries.
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!(entry = line, error = %e, "skipping malformed entry");
                skipped += 1;
                None
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect();

    if skipped > 0 {
        debug!(skipped, kept = words.len(), "dropped malformed entries");
    }
    words
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_sieve::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_words(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_sieve::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Build the dictionary from a file, or from the embedded list when `path` is
/// `None`
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::Solver(SolverError::EmptyDictionary)` if no valid word remains.
pub fn load_dictionary(path: Option<&Path>) -> Result<Dictionary, LoadError> {
    let words = match path {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(WORDS),
    };
    let dictionary = Dictionary::new(words)?;

    info!(
        source = %path.map_or_else(|| "embedded".to_string(), |p| p.display().to_string()),
        words = dictionary.len(),
        "dictionary loaded"
    );
    Ok(dictionary)
}
