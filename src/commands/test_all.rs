//! Test all targets - batch solver evaluation
//!
//! Runs one independent session per target word and aggregates the outcomes.

use crate::core::{Dictionary, Word};
use crate::error::SolverError;
use crate::solver::{GuessSelector, NoopObserver, SessionOutcome, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Hardest solved words kept in the statistics
const HARDEST_KEPT: usize = 10;

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: Word,
    pub outcome: SessionOutcome,
    pub guesses: Vec<Word>,
    pub duration: Duration,
}

/// Statistics from a batch of sessions
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Mean attempts over solved sessions only
    pub average_attempts: Option<f64>,
    pub min_attempts: Option<usize>,
    pub max_attempts: Option<usize>,
    /// Attempts → number of sessions solved in that many
    pub distribution: BTreeMap<usize, usize>,
    /// Solved words needing the most attempts, hardest first
    pub hardest: Vec<(Word, usize)>,
    pub failures: Vec<Word>,
    pub total_time: Duration,
}

impl BatchStatistics {
    /// Aggregate session results
    ///
    /// Solved sessions are separated out first; every attempt-based figure is
    /// computed from that subset.
    #[must_use]
    pub fn from_results(results: &[WordTestResult]) -> Self {
        let solved: Vec<(&Word, usize)> = results
            .iter()
            .filter_map(|r| r.outcome.attempts().map(|n| (&r.word, n)))
            .collect();

        let failures: Vec<Word> = results
            .iter()
            .filter(|r| !r.outcome.is_solved())
            .map(|r| r.word.clone())
            .collect();

        let average_attempts = (!solved.is_empty())
            .then(|| solved.iter().map(|&(_, n)| n).sum::<usize>() as f64 / solved.len() as f64);

        let mut distribution = BTreeMap::new();
        for &(_, n) in &solved {
            *distribution.entry(n).or_insert(0) += 1;
        }

        let mut hardest: Vec<(Word, usize)> =
            solved.iter().map(|&(w, n)| (w.clone(), n)).collect();
        hardest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        hardest.truncate(HARDEST_KEPT);

        Self {
            total_words: results.len(),
            solved: solved.len(),
            failed: failures.len(),
            average_attempts,
            min_attempts: solved.iter().map(|&(_, n)| n).min(),
            max_attempts: solved.iter().map(|&(_, n)| n).max(),
            distribution,
            hardest,
            failures,
            total_time: results.iter().map(|r| r.duration).sum(),
        }
    }

    /// Fraction of sessions solved (0.0 for an empty batch)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64
        }
    }
}

/// How to pick targets from the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetSelection {
    /// Every word, in dictionary order
    #[default]
    All,
    /// The first `n` words
    First(usize),
    /// `n` words drawn without replacement, reproducible from `seed`
    Sample { count: usize, seed: u64 },
}

/// Choose the target words for a batch run
#[must_use]
pub fn select_targets(dictionary: &Dictionary, selection: TargetSelection) -> Vec<Word> {
    let words = dictionary.words();
    match selection {
        TargetSelection::All => words.to_vec(),
        TargetSelection::First(n) => words.iter().take(n).cloned().collect(),
        TargetSelection::Sample { count, seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            words.choose_multiple(&mut rng, count).cloned().collect()
        }
    }
}

/// Run one session per target word, sequentially
///
/// Each session starts from a fresh copy of the dictionary.
///
/// # Errors
///
/// Propagates `SolverError` from the solver; exhausted sessions are results,
/// not errors.
pub fn run_test_all<S: GuessSelector>(
    solver: &Solver<S>,
    targets: &[Word],
    show_progress: bool,
) -> Result<Vec<WordTestResult>, SolverError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut results = Vec::with_capacity(targets.len());
    let mut solved_attempts = 0usize;
    let mut solved_count = 0usize;

    for target in targets {
        let start = Instant::now();
        let report = solver.solve(target, &mut NoopObserver)?;
        let duration = start.elapsed();

        if let Some(n) = report.outcome.attempts() {
            solved_attempts += n;
            solved_count += 1;
        }
        if solved_count > 0 {
            pb.set_message(format!(
                "Avg: {:.2}",
                solved_attempts as f64 / solved_count as f64
            ));
        }
        pb.inc(1);

        results.push(WordTestResult {
            word: target.clone(),
            outcome: report.outcome,
            guesses: report.record.iter().map(|(w, _)| w.clone()).collect(),
            duration,
        });
    }

    pb.finish_with_message("Complete!");
    info!(
        targets = targets.len(),
        solved = solved_count,
        "batch finished"
    );

    Ok(results)
}
