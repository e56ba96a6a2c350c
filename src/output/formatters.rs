//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackCode, Word};
use colored::Colorize;

/// Render a guess as coloured letter tiles, Wordle style
#[must_use]
pub fn colored_guess(word: &Word, feedback: FeedbackCode) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| {
            let tile = format!(" {letter} ");
            match mark {
                Feedback::Correct => tile.black().on_green().bold().to_string(),
                Feedback::Present => tile.black().on_yellow().bold().to_string(),
                Feedback::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Format a feedback code as emoji tiles
#[must_use]
pub fn feedback_to_emoji(feedback: FeedbackCode) -> String {
    feedback.to_emoji()
}

/// Join words as an upper-case, comma separated list
#[must_use]
pub fn word_list(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_to_emoji_all_absent() {
        assert_eq!(feedback_to_emoji(FeedbackCode::ALL_ABSENT), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn feedback_to_emoji_all_correct() {
        assert_eq!(feedback_to_emoji(FeedbackCode::ALL_CORRECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn word_list_is_uppercase() {
        let words = vec![Word::new("crane").unwrap(), Word::new("rival").unwrap()];
        assert_eq!(word_list(&words), "CRANE, RIVAL");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let rendered = colored_guess(&word, "gy---".parse().unwrap());
        assert_eq!(rendered, " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
