//! Interactive assistant mode
//!
//! Suggests guesses for a game played elsewhere; the user types back the
//! feedback they observed.

use crate::core::{FeedbackCode, Word};
use crate::output::SHOW_REMAINING_AT;
use crate::output::display::{exhausted_message, victory_banner};
use crate::output::formatters::{colored_guess, word_list};
use crate::solver::{GuessSelector, Session, SessionState, Solver};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// One parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Undo,
    /// Feedback for the suggested guess
    Feedback(FeedbackCode),
    /// The user played a different word
    Played(Word, FeedbackCode),
    Invalid(String),
}

fn parse_command(input: &str) -> Command {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Command::Quit,
        "new" | "n" => return Command::New,
        "undo" | "u" => return Command::Undo,
        "win" | "correct" | "solved" => return Command::Feedback(FeedbackCode::ALL_CORRECT),
        _ => {}
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        [feedback] => match feedback.parse::<FeedbackCode>() {
            Ok(code) => Command::Feedback(code),
            Err(e) => Command::Invalid(e.to_string()),
        },
        [word, feedback] => match (Word::new(*word), feedback.parse::<FeedbackCode>()) {
            (Ok(word), Ok(code)) => Command::Played(word, code),
            (Err(e), _) => Command::Invalid(e.to_string()),
            (_, Err(e)) => Command::Invalid(e.to_string()),
        },
        _ => Command::Invalid("expected feedback such as 'gy--g', or 'WORD FEEDBACK'".into()),
    }
}

/// Run the interactive assistant until the user quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<S: GuessSelector, R: BufRead, W: Write>(
    solver: &Solver<S>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n{}", "Wordle Sieve - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "After each guess, enter the feedback you saw:")?;
    writeln!(out, "  g = green, y = yellow, - = gray   (e.g. 'g-y--')")?;
    writeln!(out, "  'WORD FEEDBACK' if you played a different word")?;
    writeln!(out, "  'win' when solved, 'undo', 'new' or 'quit'\n")?;

    let mut session = solver.session();
    for warning in session.warnings() {
        writeln!(out, "{} {warning}", "Warning:".yellow().bold())?;
    }

    loop {
        match session.state() {
            SessionState::Solved => {
                write!(out, "{}", victory_banner(session.record().len(), session.record()))?;
                if !read_yes(input, out, "Play again? (yes/no)")? {
                    writeln!(out, "\n👋 Thanks for playing!")?;
                    return Ok(());
                }
                session = solver.session();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            SessionState::Exhausted => {
                writeln!(out, "\n{}", exhausted_message(session.record().len()))?;
                writeln!(out, "Your feedback may be incorrect. Type 'undo' or 'new'.\n")?;
            }
            _ => show_suggestion(&session, out)?,
        }

        let Some(line) = prompt(input, out, "Feedback")? else {
            return Ok(());
        };

        match parse_command(&line) {
            Command::Quit => {
                writeln!(out, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
            Command::New => {
                session = solver.session();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Command::Undo => {
                if session.undo() {
                    writeln!(out, "✓ Undone! Back to turn {}\n", session.next_attempt())?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            Command::Feedback(code) => {
                if session.state().is_terminal() {
                    writeln!(out, "Session is over; type 'undo' or 'new'.\n")?;
                } else {
                    let guess = session.next_guess()?;
                    session.submit(guess, code)?;
                }
            }
            Command::Played(word, code) => {
                if session.state().is_terminal() {
                    writeln!(out, "Session is over; type 'undo' or 'new'.\n")?;
                } else {
                    session.submit(word, code)?;
                }
            }
            Command::Invalid(reason) => writeln!(out, "❌ {reason}\n")?,
        }
    }
}

fn show_suggestion<S: GuessSelector, W: Write>(session: &Session<'_, S>, out: &mut W) -> Result<()> {
    let candidates = session.candidates();
    let guess = session.next_guess()?;

    writeln!(out, "{}", "─".repeat(60))?;
    writeln!(
        out,
        "Turn {}: {} candidates remaining",
        session.next_attempt(),
        candidates.len()
    )?;
    writeln!(out, "{}", "─".repeat(60))?;

    if let Some((word, feedback)) = session.record().last() {
        writeln!(out, "Last: {}", colored_guess(word, *feedback))?;
    }
    let tag = if session.state() == SessionState::Opening {
        " (opening)"
    } else {
        ""
    };
    writeln!(out, "📊 Suggested guess: {}{tag}", guess.text().to_uppercase())?;

    if !candidates.is_empty() && candidates.len() <= SHOW_REMAINING_AT {
        writeln!(out, "Remaining: {}", word_list(candidates.words()))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_yes<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<bool> {
    Ok(prompt(input, out, label)?
        .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y")))
}
