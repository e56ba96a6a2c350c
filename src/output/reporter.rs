//! Console transcript for simulated sessions

use super::display::{exhausted_message, victory_banner};
use super::formatters::{colored_guess, word_list};
use crate::core::Word;
use crate::solver::{GuessEvent, GuessRecord, SessionObserver, SessionState, SessionWarning};
use colored::Colorize;
use std::io::{self, Write};

/// Remaining candidates are listed once there are this many or fewer
pub const SHOW_REMAINING_AT: usize = 10;

/// Prints each guess as it is played, then a banner or failure line
///
/// Observer hooks cannot fail, so the first write error is kept and handed
/// back by [`ConsoleReporter::finish`]; later output is skipped.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    record: GuessRecord,
    error: Option<io::Error>,
}

impl ConsoleReporter {
    /// Reporter writing to stdout
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReporter<W> {
    #[must_use]
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            record: GuessRecord::default(),
            error: None,
        }
    }

    /// Return the writer, or the first error hit while writing the transcript
    ///
    /// # Errors
    /// Returns the first I/O error raised by the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            self.error = Some(e);
        }
    }
}

impl<W: Write> SessionObserver for ConsoleReporter<W> {
    fn on_warning(&mut self, warning: &SessionWarning) {
        self.emit(&format!("{} {warning}\n", "Warning:".yellow().bold()));
    }

    fn on_guess(&mut self, event: &GuessEvent<'_>) {
        self.record.push(event.guess.clone(), event.feedback);

        let tag = if event.phase == SessionState::Opening {
            " (opening)".bright_black().to_string()
        } else {
            String::new()
        };
        self.emit(&format!(
            "Guess {}: {}  →  {}{tag}\n",
            event.attempt,
            colored_guess(event.guess, event.feedback),
            event.feedback
        ));

        if let Some(remaining) = event.remaining {
            self.emit(&format!("  → {} possible words remain.\n", remaining.len()));
            if !remaining.is_empty() && remaining.len() <= SHOW_REMAINING_AT {
                self.emit(&format!("  Remaining: {}\n", word_list(remaining.words())));
            }
        }
    }

    fn on_solved(&mut self, attempts: usize, _word: &Word) {
        let banner = victory_banner(attempts, &self.record);
        self.emit(&banner);
    }

    fn on_exhausted(&mut self, attempts: usize) {
        self.emit(&format!("\n{}\n", exhausted_message(attempts)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::solver::{Solver, SolverConfig};

    fn transcript(openings: &[&str], target: &str) -> String {
        colored::control::set_override(false);
        let dictionary = Dictionary::from_strs(&["spore", "crane", "adieu", "rival"]).unwrap();
        let solver = Solver::new(&dictionary, SolverConfig::with_openings(openings).unwrap());
        let mut reporter = ConsoleReporter::with_writer(Vec::new());

        solver
            .solve(&Word::new(target).unwrap(), &mut reporter)
            .unwrap();

        String::from_utf8(reporter.finish().unwrap()).unwrap()
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in:\n{haystack}"))
    }

    #[test]
    fn solved_transcript_in_order() {
        let output = transcript(&["crane"], "rival");

        let first = position(&output, "Guess 1:");
        let remaining = position(&output, "1 possible words remain.");
        let listed = position(&output, "Remaining: RIVAL");
        let second = position(&output, "Guess 2:");
        let banner = position(&output, "Solution found in 2 guesses");

        assert!(first < remaining && remaining < listed && listed < second && second < banner);
        assert!(output.contains("-yy-- (opening)"));
        // The solving guess does not report a remaining count
        assert_eq!(output.matches("possible words remain").count(), 1);
    }

    #[test]
    fn warning_and_exhaustion_are_reported() {
        let output = transcript(&["aurei"], "zzzzz");

        assert!(output.starts_with("Warning: opening"));
        assert!(output.contains("0 possible words remain."));
        assert!(!output.contains("Remaining:"));
        assert!(output.contains("No possible words remain"));
    }

    #[test]
    fn first_write_error_is_returned() {
        #[derive(Debug)]
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut reporter = ConsoleReporter::with_writer(Broken);
        reporter.on_exhausted(1);
        reporter.on_exhausted(2);

        assert_eq!(reporter.finish().unwrap_err().to_string(), "closed");
    }
}
