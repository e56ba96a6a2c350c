//! Command implementations

pub mod play;
pub mod solve;
pub mod test_all;

pub use play::run_play;
pub use solve::solve_word;
pub use test_all::{
    BatchStatistics, TargetSelection, WordTestResult, run_test_all, select_targets,
};
