//! Quiz control loop.
//!
//! A run resumes or starts a session, presents questions one at a time,
//! then either offers to save progress or reports the final score. All
//! user interaction goes through [`Presenter`] and persistence through
//! [`SessionStore`], so the loop itself is plain sequential code.

use crate::error::RunError;
use crate::scoring::Score;
use crate::session::{SessionState, SessionStore};
use crate::types::{QuizDocument, QuizItem};
use std::io;
use tracing::{debug, info, warn};

/// Answer to a question prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Chosen(char),
    /// The user aborted the prompt (Esc, q or Ctrl+C).
    Cancelled,
}

/// Yes/no questions asked during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    /// Resume a saved session at the given 1-based question number.
    Resume { question: usize },
    Continue,
    Save,
}

impl Confirm {
    pub fn message(&self) -> String {
        match self {
            Self::Resume { question } => format!(
                "Found previous session, do you want to resume to question #{question}?"
            ),
            Self::Continue => "Continue?".to_string(),
            Self::Save => "Do you want to save your progress and resume later?".to_string(),
        }
    }

    /// Answer preselected in the prompt.
    pub fn default_answer(&self) -> bool {
        true
    }
}

/// Outcome messages shown after the loop ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved { location: String },
    NotSaved,
    HistoryDeleted { location: String },
    DeleteFailed { location: String, reason: String },
}

/// Terminal interaction used by the runner.
///
/// Every method may block on the user. Cancellation is reported through
/// the return value, never as an error.
pub trait Presenter {
    /// Show a question and wait for a choice.
    fn ask(&mut self, item: &QuizItem) -> io::Result<Selection>;

    /// Show whether `choice` was right, then the explanation.
    fn reveal(&mut self, item: &QuizItem, choice: char, correct: bool) -> io::Result<()>;

    /// Ask a yes/no question. `None` when the prompt was cancelled.
    fn confirm(&mut self, confirm: Confirm) -> io::Result<Option<bool>>;

    /// Show per-question results and the final score.
    fn report(&mut self, state: &SessionState, score: &Score) -> io::Result<()>;

    fn notify(&mut self, notice: Notice) -> io::Result<()>;
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Reached the end and reported the score.
    Finished(Score),
    /// Stopped early and saved progress.
    Saved,
    /// Stopped early without saving.
    Discarded,
}

/// Whether a run that stopped at `index` takes the save path.
///
/// A run that stops with only the last question unanswered is treated as
/// finished. An empty quiz is finished.
pub fn should_save(index: usize, len: usize) -> bool {
    index + 1 < len
}

/// Drives one quiz session.
pub struct QuizRunner<'a, P: ?Sized, S: ?Sized> {
    document: &'a QuizDocument,
    presenter: &'a mut P,
    store: &'a S,
    resume: bool,
}

impl<'a, P, S> QuizRunner<'a, P, S>
where
    P: Presenter + ?Sized,
    S: SessionStore + ?Sized,
{
    pub fn new(document: &'a QuizDocument, presenter: &'a mut P, store: &'a S) -> Self {
        Self {
            document,
            presenter,
            store,
            resume: true,
        }
    }

    /// Skip looking for a saved session when `false`.
    pub fn with_resume(mut self, resume: bool) -> Self {
        self.resume = resume;
        self
    }

    /// Run the session to its end.
    pub fn run(mut self) -> Result<RunOutcome, RunError> {
        let mut state = self.load()?;
        self.play(&mut state)?;

        if should_save(state.index, self.document.len()) {
            self.save(&state)
        } else {
            self.finish(&state)
        }
    }

    /// Resume a saved session if there is one and the user agrees.
    fn load(&mut self) -> Result<SessionState, RunError> {
        if !self.resume {
            return Ok(SessionState::new());
        }

        let saved = match self.store.read() {
            Ok(Some(state)) if state.is_consistent(self.document.len()) => state,
            Ok(Some(state)) => {
                debug!(
                    index = state.index,
                    answers = state.history.len(),
                    "ignoring inconsistent saved session"
                );
                return Ok(SessionState::new());
            }
            Ok(None) => return Ok(SessionState::new()),
            Err(err) => {
                debug!(error = %err, "ignoring unreadable saved session");
                return Ok(SessionState::new());
            }
        };

        let confirm = Confirm::Resume {
            question: saved.index + 1,
        };
        match self.presenter.confirm(confirm).map_err(RunError::Prompt)? {
            Some(true) => {
                info!(index = saved.index, "resuming saved session");
                Ok(saved)
            }
            _ => Ok(SessionState::new()),
        }
    }

    fn play(&mut self, state: &mut SessionState) -> Result<(), RunError> {
        let document = self.document;

        while let Some(item) = document.get(state.index) {
            let choice = match self.presenter.ask(item).map_err(RunError::Prompt)? {
                Selection::Chosen(choice) => choice,
                Selection::Cancelled => {
                    debug!(index = state.index, "question cancelled");
                    break;
                }
            };

            let correct = item.is_correct(choice);
            self.presenter
                .reveal(item, choice, correct)
                .map_err(RunError::Prompt)?;
            state.record(choice, correct);
            debug!(index = state.index, %choice, correct, "answer recorded");

            if state.index < document.len() {
                let next = self
                    .presenter
                    .confirm(Confirm::Continue)
                    .map_err(RunError::Prompt)?;
                if next != Some(true) {
                    break;
                }
            }
        }

        Ok(())
    }

    fn save(&mut self, state: &SessionState) -> Result<RunOutcome, RunError> {
        let keep = self
            .presenter
            .confirm(Confirm::Save)
            .map_err(RunError::Prompt)?;

        if keep == Some(true) {
            self.store.write(state)?;
            info!(index = state.index, location = %self.store.location(), "session saved");
            self.presenter
                .notify(Notice::Saved {
                    location: self.store.location(),
                })
                .map_err(RunError::Prompt)?;
            Ok(RunOutcome::Saved)
        } else {
            self.presenter
                .notify(Notice::NotSaved)
                .map_err(RunError::Prompt)?;
            Ok(RunOutcome::Discarded)
        }
    }

    fn finish(&mut self, state: &SessionState) -> Result<RunOutcome, RunError> {
        let score = Score::from_session(state);
        info!(correct = score.correct, total = score.total, "quiz finished");
        self.presenter
            .report(state, &score)
            .map_err(RunError::Prompt)?;

        let location = self.store.location();
        let notice = match self.store.remove() {
            Ok(true) => Some(Notice::HistoryDeleted { location }),
            Ok(false) => None,
            Err(err) => {
                warn!(error = %err, "failed to delete saved session");
                Some(Notice::DeleteFailed {
                    location,
                    reason: err.to_string(),
                })
            }
        };
        if let Some(notice) = notice {
            self.presenter.notify(notice).map_err(RunError::Prompt)?;
        }

        Ok(RunOutcome::Finished(score))
    }
}
