//! Main Wordle solver interface
//!
//! A [`Session`] is the state machine for one puzzle:
//!
//! ```text
//! Seeding -> Opening -> Guessing -> Solved
//!                   \           \-> Exhausted
//!                    \-> Solved | Exhausted
//! ```
//!
//! [`Solver`] drives a session against a known target. Interactive callers
//! drive the session themselves with [`Session::next_guess`] and
//! [`Session::submit`].

use super::observer::{GuessEvent, SessionObserver, SessionWarning};
use super::record::GuessRecord;
use super::selector::{DistinctLetters, GuessSelector};
use super::CandidateSet;
use crate::core::{Dictionary, FeedbackCode, Word, evaluate};
use crate::error::SolverError;
use tracing::{debug, warn};

/// Opening guesses played when none are configured
pub const DEFAULT_OPENINGS: [&str; 2] = ["aurei", "shock"];

/// Phase of a solving session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Seeding,
    Opening,
    Guessing,
    Solved,
    Exhausted,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The target was guessed on this 1-based attempt
    Solved { attempts: usize },
    /// No candidate fits the observed feedback
    Exhausted,
}

impl SessionOutcome {
    #[must_use]
    pub const fn attempts(self) -> Option<usize> {
        match self {
            Self::Solved { attempts } => Some(attempts),
            Self::Exhausted => None,
        }
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// Everything a finished session produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    pub record: GuessRecord,
    pub warnings: Vec<SessionWarning>,
}

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Played in order before the selector takes over
    pub openings: Vec<Word>,
}

impl SolverConfig {
    /// Configuration with the given opening guesses
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` if any opening is malformed.
    pub fn with_openings<S: AsRef<str>>(openings: &[S]) -> Result<Self, SolverError> {
        let openings = openings
            .iter()
            .map(|text| Word::new(text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { openings })
    }

    /// Configuration that goes straight to heuristic guessing
    #[must_use]
    pub const fn without_openings() -> Self {
        Self {
            openings: Vec::new(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            openings: DEFAULT_OPENINGS
                .iter()
                .filter_map(|&text| Word::new(text).ok())
                .collect(),
        }
    }
}

/// State of one solving session
///
/// Owns its candidate set; borrows the dictionary, openings and selector from
/// the [`Solver`] that created it.
pub struct Session<'s, S: GuessSelector> {
    dictionary: &'s Dictionary,
    openings: &'s [Word],
    selector: &'s S,
    candidates: CandidateSet,
    // Candidate sets before each submitted guess, for undo
    snapshots: Vec<CandidateSet>,
    record: GuessRecord,
    warnings: Vec<SessionWarning>,
    state: SessionState,
}

impl<'s, S: GuessSelector> Session<'s, S> {
    fn new(dictionary: &'s Dictionary, openings: &'s [Word], selector: &'s S) -> Self {
        let mut session = Self {
            dictionary,
            openings,
            selector,
            candidates: CandidateSet::default(),
            snapshots: Vec::new(),
            record: GuessRecord::default(),
            warnings: Vec::new(),
            state: SessionState::Seeding,
        };
        session.seed();
        session
    }

    fn seed(&mut self) {
        self.candidates = CandidateSet::from_dictionary(self.dictionary);

        for opening in self.openings {
            if !self.dictionary.contains(opening) {
                warn!(opening = %opening, "opening guess not in dictionary; still using it");
                self.warnings
                    .push(SessionWarning::OpeningNotInDictionary(opening.clone()));
            }
        }

        self.state = self.settle();
        debug!(
            candidates = self.candidates.len(),
            openings = self.openings.len(),
            "session seeded"
        );
    }

    // Pending openings are played even once the candidate set is empty;
    // exhaustion only applies once the selector would take over.
    fn settle(&self) -> SessionState {
        match self.phase_for(self.record.len()) {
            SessionState::Guessing if self.candidates.is_empty() => SessionState::Exhausted,
            phase => phase,
        }
    }

    fn phase_for(&self, guesses_played: usize) -> SessionState {
        if guesses_played < self.openings.len() {
            SessionState::Opening
        } else {
            SessionState::Guessing
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub const fn record(&self) -> &GuessRecord {
        &self.record
    }

    #[must_use]
    pub fn warnings(&self) -> &[SessionWarning] {
        &self.warnings
    }

    /// Number the next guess will be played as (starts at 1)
    #[must_use]
    pub fn next_attempt(&self) -> usize {
        self.record.len() + 1
    }

    /// The guess to play next: the pending opening, or the selector's choice
    ///
    /// # Errors
    /// Returns `SolverError::InvalidState` once the session has finished.
    pub fn next_guess(&self) -> Result<Word, SolverError> {
        match self.state {
            SessionState::Opening => self
                .openings
                .get(self.record.len())
                .cloned()
                .ok_or(SolverError::InvalidState("no opening guess left to play")),
            SessionState::Guessing => self.selector.select(&self.candidates),
            SessionState::Seeding => Err(SolverError::InvalidState("session is not seeded")),
            SessionState::Solved | SessionState::Exhausted => {
                Err(SolverError::InvalidState("session has already finished"))
            }
        }
    }

    /// Apply the feedback observed for `guess` and advance the state machine
    ///
    /// The guess need not be the suggested one. All-correct feedback ends the
    /// session as solved. Once no opening is left to play, an empty candidate
    /// set ends it as exhausted.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidState` once the session has finished.
    pub fn submit(
        &mut self,
        guess: Word,
        feedback: FeedbackCode,
    ) -> Result<SessionState, SolverError> {
        if self.state.is_terminal() {
            return Err(SolverError::InvalidState("session has already finished"));
        }

        let attempt = self.next_attempt();
        let before = self.candidates.len();

        if feedback.is_solved() {
            self.snapshots.push(self.candidates.clone());
            self.record.push(guess, feedback);
            self.state = SessionState::Solved;
            debug!(attempt, "solved");
            return Ok(self.state);
        }

        let remaining = self.candidates.filter(&guess, feedback);
        debug!(
            attempt,
            guess = %guess,
            feedback = %feedback,
            before,
            after = remaining.len(),
            "filtered candidates"
        );

        self.snapshots
            .push(std::mem::replace(&mut self.candidates, remaining));
        self.record.push(guess, feedback);

        self.state = self.settle();
        Ok(self.state)
    }

    /// Take back the last submitted guess
    ///
    /// Returns `false` if nothing has been played yet.
    pub fn undo(&mut self) -> bool {
        match (self.record.pop(), self.snapshots.pop()) {
            (Some(_), Some(candidates)) => {
                self.candidates = candidates;
                self.state = self.settle();
                true
            }
            _ => false,
        }
    }

    /// The outcome, once the session has reached a terminal state
    #[must_use]
    pub fn outcome(&self) -> Option<SessionOutcome> {
        match self.state {
            SessionState::Solved => Some(SessionOutcome::Solved {
                attempts: self.record.len(),
            }),
            SessionState::Exhausted => Some(SessionOutcome::Exhausted),
            _ => None,
        }
    }

    /// Consume a finished session into its report
    ///
    /// # Errors
    /// Returns `SolverError::InvalidState` if the session is still running.
    pub fn finish(self) -> Result<SessionReport, SolverError> {
        let outcome = self
            .outcome()
            .ok_or(SolverError::InvalidState("session is still running"))?;
        Ok(SessionReport {
            outcome,
            record: self.record,
            warnings: self.warnings,
        })
    }
}

/// Main Wordle solver
///
/// Holds the shared dictionary and configuration, and hands out independent
/// sessions.
pub struct Solver<'d, S: GuessSelector = DistinctLetters> {
    dictionary: &'d Dictionary,
    config: SolverConfig,
    selector: S,
}

impl<'d> Solver<'d, DistinctLetters> {
    /// Create a solver using the distinct-letters selector
    #[must_use]
    pub fn new(dictionary: &'d Dictionary, config: SolverConfig) -> Self {
        Self::with_selector(dictionary, config, DistinctLetters)
    }
}

impl<'d, S: GuessSelector> Solver<'d, S> {
    /// Create a solver with a custom guess selector
    #[must_use]
    pub fn with_selector(dictionary: &'d Dictionary, config: SolverConfig, selector: S) -> Self {
        Self {
            dictionary,
            config,
            selector,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Start a fresh session seeded with the full dictionary
    #[must_use]
    pub fn session(&self) -> Session<'_, S> {
        Session::new(self.dictionary, &self.config.openings, &self.selector)
    }

    /// Play a full session against a known target
    ///
    /// # Errors
    /// Returns `SolverError::InvalidState` only if the selector misbehaves;
    /// failing to find the target is reported as
    /// [`SessionOutcome::Exhausted`].
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Dictionary, Word};
    /// use wordle_sieve::solver::{NoopObserver, SessionOutcome, Solver, SolverConfig};
    ///
    /// let dictionary = Dictionary::from_strs(&["spore", "crane", "adieu", "rival"]).unwrap();
    /// let config = SolverConfig::with_openings(&["crane"]).unwrap();
    /// let solver = Solver::new(&dictionary, config);
    ///
    /// let target = Word::new("rival").unwrap();
    /// let report = solver.solve(&target, &mut NoopObserver).unwrap();
    /// assert_eq!(report.outcome, SessionOutcome::Solved { attempts: 2 });
    /// ```
    pub fn solve<O: SessionObserver + ?Sized>(
        &self,
        target: &Word,
        observer: &mut O,
    ) -> Result<SessionReport, SolverError> {
        let mut session = self.session();
        for warning in session.warnings() {
            observer.on_warning(warning);
        }

        while !session.state().is_terminal() {
            let attempt = session.next_attempt();
            let phase = session.state();
            let guess = session.next_guess()?;
            let feedback = evaluate(&guess, target);
            let state = session.submit(guess.clone(), feedback)?;

            observer.on_guess(&GuessEvent {
                attempt,
                guess: &guess,
                feedback,
                phase,
                remaining: (state != SessionState::Solved).then(|| session.candidates()),
            });

            match state {
                SessionState::Solved => observer.on_solved(attempt, &guess),
                SessionState::Exhausted => observer.on_exhausted(attempt),
                _ => {}
            }
        }

        session.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::NoopObserver;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        guesses: Vec<(usize, String, String, SessionState, Option<usize>)>,
        solved: Option<usize>,
        exhausted: Option<usize>,
        warnings: Vec<SessionWarning>,
    }

    impl SessionObserver for Recorder {
        fn on_warning(&mut self, warning: &SessionWarning) {
            self.warnings.push(warning.clone());
        }

        fn on_guess(&mut self, event: &GuessEvent<'_>) {
            self.guesses.push((
                event.attempt,
                event.guess.to_string(),
                event.feedback.to_string(),
                event.phase,
                event.remaining.map(CandidateSet::len),
            ));
        }

        fn on_solved(&mut self, attempts: usize, _word: &Word) {
            self.solved = Some(attempts);
        }

        fn on_exhausted(&mut self, attempts: usize) {
            self.exhausted = Some(attempts);
        }
    }

    fn small_dictionary() -> Dictionary {
        Dictionary::from_strs(&["spore", "crane", "adieu", "rival"]).unwrap()
    }

    #[test]
    fn end_to_end_rival() {
        let dictionary = small_dictionary();
        let solver = Solver::new(&dictionary, SolverConfig::with_openings(&["crane"]).unwrap());
        let mut recorder = Recorder::default();

        let report = solver.solve(&word("rival"), &mut recorder).unwrap();

        assert_eq!(report.outcome, SessionOutcome::Solved { attempts: 2 });
        assert_eq!(
            recorder.guesses,
            vec![
                (1, "crane".into(), "-yy--".into(), SessionState::Opening, Some(1)),
                (2, "rival".into(), "ggggg".into(), SessionState::Guessing, None),
            ]
        );
        assert_eq!(recorder.solved, Some(2));
        assert!(recorder.warnings.is_empty());
        assert_eq!(report.record.len(), 2);
    }

    #[test]
    fn solved_by_opening() {
        let dictionary = small_dictionary();
        let solver = Solver::new(
            &dictionary,
            SolverConfig::with_openings(&["adieu", "crane"]).unwrap(),
        );

        let report = solver.solve(&word("crane"), &mut NoopObserver).unwrap();

        assert_eq!(report.outcome, SessionOutcome::Solved { attempts: 2 });
    }

    #[test]
    fn target_outside_dictionary_is_exhausted() {
        let dictionary = small_dictionary();
        let solver = Solver::new(&dictionary, SolverConfig::without_openings());
        let mut recorder = Recorder::default();

        let report = solver.solve(&word("zzzzz"), &mut recorder).unwrap();

        assert_eq!(report.outcome, SessionOutcome::Exhausted);
        assert_eq!(report.outcome.attempts(), None);
        assert_eq!(recorder.exhausted, Some(report.record.len()));
        assert_eq!(recorder.solved, None);
    }

    #[test]
    fn opening_outside_dictionary_warns_but_plays() {
        let dictionary = small_dictionary();
        let solver = Solver::new(&dictionary, SolverConfig::with_openings(&["aurei"]).unwrap());
        let mut recorder = Recorder::default();

        let report = solver.solve(&word("rival"), &mut recorder).unwrap();

        assert_eq!(
            report.warnings,
            vec![SessionWarning::OpeningNotInDictionary(word("aurei"))]
        );
        assert_eq!(recorder.warnings, report.warnings);
        assert_eq!(report.record.entries()[0].0, word("aurei"));
        assert!(report.outcome.is_solved());
    }

    #[test]
    fn openings_play_even_with_one_candidate_left() {
        let dictionary = small_dictionary();
        let solver = Solver::new(
            &dictionary,
            SolverConfig::with_openings(&["crane", "spore"]).unwrap(),
        );

        let report = solver.solve(&word("rival"), &mut NoopObserver).unwrap();

        let guesses: Vec<&str> = report.record.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(guesses, ["crane", "spore", "rival"]);
        assert_eq!(report.outcome, SessionOutcome::Solved { attempts: 3 });
    }

    #[test]
    fn openings_continue_after_candidates_run_out() {
        let dictionary = Dictionary::from_strs(&["crane", "rival"]).unwrap();
        let solver = Solver::new(
            &dictionary,
            SolverConfig::with_openings(&["adieu", "shock"]).unwrap(),
        );
        let mut recorder = Recorder::default();

        let report = solver.solve(&word("shock"), &mut recorder).unwrap();

        let guesses: Vec<&str> = report.record.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(guesses, ["adieu", "shock"]);
        assert_eq!(report.outcome, SessionOutcome::Solved { attempts: 2 });
        assert_eq!(recorder.guesses[0].4, Some(0));
        assert_eq!(recorder.exhausted, None);
    }

    #[test]
    fn exhaustion_waits_for_last_opening() {
        let dictionary = Dictionary::from_strs(&["crane", "rival"]).unwrap();
        let solver = Solver::new(
            &dictionary,
            SolverConfig::with_openings(&["adieu", "shock"]).unwrap(),
        );
        let mut session = solver.session();

        let state = session
            .submit(word("adieu"), "-----".parse().unwrap())
            .unwrap();
        assert_eq!(state, SessionState::Opening);
        assert!(session.candidates().is_empty());
        assert_eq!(session.next_guess().unwrap(), word("shock"));

        let state = session
            .submit(word("shock"), "g----".parse().unwrap())
            .unwrap();
        assert_eq!(state, SessionState::Exhausted);

        assert!(session.undo());
        assert_eq!(session.state(), SessionState::Opening);
    }

    #[test]
    fn default_config_uses_default_openings() {
        let config = SolverConfig::default();
        let texts: Vec<&str> = config.openings.iter().map(Word::text).collect();
        assert_eq!(texts, DEFAULT_OPENINGS);
    }

    #[test]
    fn with_openings_rejects_malformed_word() {
        assert!(matches!(
            SolverConfig::with_openings(&["crane", "xx"]),
            Err(SolverError::InvalidWord(_))
        ));
    }

    #[test]
    fn session_walks_through_states() {
        let dictionary = small_dictionary();
        let solver = Solver::new(&dictionary, SolverConfig::with_openings(&["crane"]).unwrap());
        let mut session = solver.session();

        assert_eq!(session.state(), SessionState::Opening);
        assert_eq!(session.candidates().len(), 4);
        assert_eq!(session.next_guess().unwrap(), word("crane"));

        let state = session
            .submit(word("crane"), "-yy--".parse().unwrap())
            .unwrap();
        assert_eq!(state, SessionState::Guessing);
        assert_eq!(session.next_guess().unwrap(), word("rival"));

        let state = session
            .submit(word("rival"), FeedbackCode::ALL_CORRECT)
            .unwrap();
        assert_eq!(state, SessionState::Solved);
        assert!(session.next_guess().is_err());
        assert!(session.submit(word("rival"), FeedbackCode::ALL_CORRECT).is_err());
        assert_eq!(
            session.finish().unwrap().outcome,
            SessionOutcome::Solved { attempts: 2 }
        );
    }

    #[test]
    fn inconsistent_feedback_exhausts_session() {
        let dictionary = small_dictionary();
        let solver = Solver::new(&dictionary, SolverConfig::without_openings());
        let mut session = solver.session();

        let state = session
            .submit(word("crane"), "ggggy".parse().unwrap())
            .unwrap();

        assert_eq!(state, SessionState::Exhausted);
        assert_eq!(session.outcome(), Some(SessionOutcome::Exhausted));
    }

    #[test]
    fn undo_restores_candidates_and_phase() {
        let dictionary = small_dictionary();
        let solver = Solver::new(&dictionary, SolverConfig::with_openings(&["crane"]).unwrap());
        let mut session = solver.session();

        assert!(!session.undo());
        session
            .submit(word("crane"), "ggggy".parse().unwrap())
            .unwrap();
        assert_eq!(session.state(), SessionState::Exhausted);

        assert!(session.undo());
        assert_eq!(session.state(), SessionState::Opening);
        assert_eq!(session.candidates().len(), 4);
        assert!(session.record().is_empty());
    }

    #[test]
    fn unfinished_session_cannot_finish() {
        let dictionary = small_dictionary();
        let solver = Solver::new(&dictionary, SolverConfig::default());
        assert!(matches!(
            solver.session().finish(),
            Err(SolverError::InvalidState(_))
        ));
    }
}
