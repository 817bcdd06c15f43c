//! Shared helpers for the session integration tests.

pub mod fixtures;

use std::collections::VecDeque;
use std::io;

use quiz_core::{Confirm, Notice, Presenter, QuizItem, Score, Selection, SessionState};

/// Presenter answering from a script and recording what it was shown.
#[derive(Default)]
pub struct ScriptedPresenter {
    selections: VecDeque<Selection>,
    confirms: VecDeque<Option<bool>>,
    pub asked: Vec<String>,
    pub confirmed: Vec<Confirm>,
    pub reports: Vec<Score>,
    pub notices: Vec<Notice>,
}

impl ScriptedPresenter {
    pub fn new(selections: &[Selection], confirms: &[Option<bool>]) -> Self {
        Self {
            selections: selections.iter().copied().collect(),
            confirms: confirms.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Presenter for ScriptedPresenter {
    fn ask(&mut self, item: &QuizItem) -> io::Result<Selection> {
        self.asked.push(item.title.clone());
        Ok(self.selections.pop_front().expect("no scripted selection left"))
    }

    fn reveal(&mut self, _item: &QuizItem, _choice: char, _correct: bool) -> io::Result<()> {
        Ok(())
    }

    fn confirm(&mut self, confirm: Confirm) -> io::Result<Option<bool>> {
        self.confirmed.push(confirm);
        Ok(self.confirms.pop_front().expect("no scripted confirmation left"))
    }

    fn report(&mut self, _state: &SessionState, score: &Score) -> io::Result<()> {
        self.reports.push(*score);
        Ok(())
    }

    fn notify(&mut self, notice: Notice) -> io::Result<()> {
        self.notices.push(notice);
        Ok(())
    }
}
