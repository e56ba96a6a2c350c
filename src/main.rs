//! Wordle Sieve - CLI
//!
//! Simulate games against a target, assist with a live game, or evaluate the
//! solver over a whole dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordle_sieve::{
    commands::{
        BatchStatistics, TargetSelection, run_play, run_test_all, select_targets, solve_word,
    },
    core::Dictionary,
    output::{ConsoleReporter, print_batch_statistics, print_session_summary},
    solver::{Solver, SolverConfig},
    wordlists::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_sieve",
    about = "Wordle solver: fixed openings, then the candidate with the most distinct letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Opening guesses, comma separated (default: aurei,shock)
    #[arg(short = 'o', long = "opening", global = true, value_delimiter = ',')]
    openings: Vec<String>,

    /// Skip opening guesses entirely
    #[arg(long, global = true, conflicts_with = "openings")]
    no_openings: bool,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default): suggests guesses, you enter feedback
    Play,

    /// Simulate a game against a specific target word
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Run the solver against every dictionary word and report statistics
    TestAll {
        /// Only test the first N words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Test N randomly chosen words instead
        #[arg(short, long, conflicts_with = "limit")]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn solver_config(cli: &Cli) -> Result<SolverConfig> {
    if cli.no_openings {
        return Ok(SolverConfig::without_openings());
    }
    if cli.openings.is_empty() {
        return Ok(SolverConfig::default());
    }
    SolverConfig::with_openings(cli.openings.as_slice()).context("invalid opening guess")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = load_dictionary(cli.wordlist.as_deref()).context("failed to load dictionary")?;
    let config = solver_config(&cli)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&dictionary, config),
        Commands::Solve { word } => run_solve_command(&dictionary, config, &word),
        Commands::TestAll {
            limit,
            sample,
            seed,
            no_progress,
        } => {
            let selection = match (limit, sample) {
                (_, Some(count)) => TargetSelection::Sample { count, seed },
                (Some(n), None) => TargetSelection::First(n),
                (None, None) => TargetSelection::All,
            };
            run_test_all_command(&dictionary, config, selection, !no_progress)
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: SolverConfig) -> Result<()> {
    let solver = Solver::new(dictionary, config);
    let stdin = io::stdin();
    run_play(&solver, &mut stdin.lock(), &mut io::stdout())
}

fn run_solve_command(dictionary: &Dictionary, config: SolverConfig, word: &str) -> Result<()> {
    let solver = Solver::new(dictionary, config);

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", word.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let mut reporter = ConsoleReporter::new();
    let report = solve_word(word, &solver, &mut reporter)
        .with_context(|| format!("cannot solve '{word}'"))?;
    reporter.finish().context("failed to write transcript")?;

    println!();
    print_session_summary(word, &report);
    Ok(())
}

fn run_test_all_command(
    dictionary: &Dictionary,
    config: SolverConfig,
    selection: TargetSelection,
    show_progress: bool,
) -> Result<()> {
    let openings: Vec<String> = config.openings.iter().map(ToString::to_string).collect();
    let solver = Solver::new(dictionary, config);
    let targets = select_targets(dictionary, selection);

    println!("\n{}", "═".repeat(60));
    println!(" Wordle Sieve Batch Test ");
    println!("{}", "═".repeat(60));
    println!("\nDictionary: {} words", dictionary.len());
    println!("Targets:    {}", targets.len());
    if openings.is_empty() {
        println!("Openings:   none");
    } else {
        println!("Openings:   {}", openings.join(", "));
    }
    println!();

    let results = run_test_all(&solver, &targets, show_progress)?;
    print_batch_statistics(&BatchStatistics::from_results(&results));
    Ok(())
}
