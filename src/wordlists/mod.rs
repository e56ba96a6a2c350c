//! Word lists for Wordle solving
//!
//! Provides the embedded default dictionary and loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::WORDS;
pub use loader::{LoadError, load_dictionary};
