//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, feedback_to_emoji};
use crate::commands::BatchStatistics;
use crate::solver::{GuessRecord, SessionOutcome, SessionReport};
use colored::Colorize;

/// Build the victory banner with the guess history
#[must_use]
pub fn victory_banner(attempts: usize, record: &GuessRecord) -> String {
    let rule = "═".repeat(60).bright_cyan();

    let performance = match attempts {
        1 => "🏆 Perfect!",
        2 => "⭐ Excellent!",
        3 => "💫 Great!",
        4 => "✨ Good!",
        5 => "👍 Solved!",
        _ => "✓ Complete!",
    };

    let history: String = record
        .iter()
        .enumerate()
        .map(|(i, (word, feedback))| {
            format!(
                "    {}. {} {}\n",
                (i + 1).to_string().bright_black(),
                colored_guess(word, *feedback),
                feedback_to_emoji(*feedback)
            )
        })
        .collect();

    format!(
        "\n{rule}\n{}\n{rule}\n\n  {}\n  Solution found in {} {}\n\n  Guess history:\n{history}\n{rule}\n",
        "        🎉  W O R D L E   S O L V E D !  🎉".bright_green().bold(),
        performance.bright_yellow().bold(),
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    )
}

/// Message shown when the candidate set runs dry
#[must_use]
pub fn exhausted_message(attempts: usize) -> String {
    format!(
        "{} after {attempts} {}: no word in the dictionary fits the feedback.",
        "❌ No possible words remain".red().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    )
}

/// Print a one-line summary of a finished session
pub fn print_session_summary(target: &str, report: &SessionReport) {
    match report.outcome {
        SessionOutcome::Solved { attempts } => println!(
            "{} {} in {attempts}",
            "✅ Solved".green().bold(),
            target.to_uppercase().bright_yellow().bold()
        ),
        SessionOutcome::Exhausted => println!(
            "{} {} ({} guesses played)",
            "❌ Failed to solve".red().bold(),
            target.to_uppercase().bright_yellow().bold(),
            report.record.len()
        ),
    }
}

/// Print batch statistics
pub fn print_batch_statistics(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Words tested:        {}", stats.total_words);
    println!(
        "  Solved:              {} {}",
        stats.solved,
        format!("({:.1}%)", stats.win_rate() * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed:              {} {}",
            stats.failed,
            format!("({:.1}%)", (1.0 - stats.win_rate()) * 100.0).red()
        );
    }
    match stats.average_attempts {
        Some(average) => println!(
            "  Average guesses:     {}",
            format!("{average:.3}").bright_yellow().bold()
        ),
        None => println!("  Average guesses:     n/a"),
    }
    if let (Some(min), Some(max)) = (stats.min_attempts, stats.max_attempts) {
        println!("  Best / worst:        {min} / {max}");
    }
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if !stats.distribution.is_empty() {
        println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
        let max_count = stats.distribution.values().copied().max().unwrap_or(1);
        for (&attempts, &count) in &stats.distribution {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!(
                "  {attempts:>2} guesses: {} {count:4} ({percentage:5.1}%)",
                bar.green()
            );
        }
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, attempts) in &stats.hardest {
            println!("  {} ({attempts} guesses)", word.text().to_uppercase().yellow());
        }
    }

    if !stats.failures.is_empty() {
        println!("\n💥 {}", "Unsolved".red().bold());
        for word in &stats.failures {
            println!("  {}", word.text().to_uppercase().red());
        }
    }
}
