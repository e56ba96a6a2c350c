//! Terminal output formatting
//!
//! Display utilities for CLI results and the console session reporter.

pub mod display;
pub mod formatters;
mod reporter;

pub use display::{print_batch_statistics, print_session_summary};
pub use reporter::{ConsoleReporter, SHOW_REMAINING_AT};
