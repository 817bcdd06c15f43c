//! Interactive terminal presenter.

use std::io;

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm as ConfirmPrompt, Select};
use quiz_core::{
    AnswerRecord, Confirm, Notice, Presenter, QuizItem, Score, ScoreBand, Selection, SessionState,
};
use termimad::MadSkin;

/// Presents questions on stdout with `dialoguer` prompts.
pub struct TerminalPresenter {
    term: Term,
    skin: MadSkin,
    theme: ColorfulTheme,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            skin: MadSkin::default(),
            theme: ColorfulTheme::default(),
        }
    }

    fn render_markdown(&self, text: &str) -> io::Result<()> {
        self.term
            .write_line(&self.skin.term_text(text).to_string())
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a dialoguer result so that an interrupted prompt reads as cancelled.
fn cancellable<T>(result: dialoguer::Result<Option<T>>) -> io::Result<Option<T>> {
    match result {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(dialoguer::Error::IO(err)) => Err(err),
    }
}

impl Presenter for TerminalPresenter {
    fn ask(&mut self, item: &QuizItem) -> io::Result<Selection> {
        self.term.clear_screen()?;
        self.term
            .write_line(&style(&item.title).bold().underlined().to_string())?;
        self.term.write_line("")?;
        self.render_markdown(&item.question)?;

        let labels: Vec<String> = item
            .choices
            .iter()
            .map(|c| format!("{}. {}", c.label, c.text))
            .collect();
        let picked = cancellable(
            Select::with_theme(&self.theme)
                .items(&labels)
                .default(0)
                .interact_on_opt(&self.term),
        )?;
        self.term.write_line("")?;

        match picked.and_then(|idx| item.choices.get(idx)) {
            Some(choice) => Ok(Selection::Chosen(choice.label)),
            None => {
                self.term.show_cursor()?;
                Ok(Selection::Cancelled)
            }
        }
    }

    fn reveal(&mut self, item: &QuizItem, _choice: char, correct: bool) -> io::Result<()> {
        let verdict = if correct {
            style("\tCORRECT!").green().bold()
        } else {
            style("\tINCORRECT!").red().bold()
        };
        self.term.write_line(&verdict.to_string())?;
        self.term.write_line("")?;
        self.render_markdown(&item.explanation)
    }

    fn confirm(&mut self, confirm: Confirm) -> io::Result<Option<bool>> {
        self.term.write_line("")?;
        let answer = cancellable(
            ConfirmPrompt::with_theme(&self.theme)
                .with_prompt(confirm.message())
                .default(confirm.default_answer())
                .interact_on_opt(&self.term),
        )?;
        if answer.is_none() {
            self.term.show_cursor()?;
        }
        Ok(answer)
    }

    fn report(&mut self, state: &SessionState, score: &Score) -> io::Result<()> {
        self.term.write_line(&style("Your answers:").bold().to_string())?;
        for record in &state.history {
            self.term.write_line(&answer_line(record))?;
        }
        self.term.write_line("")?;
        self.term.write_line(&score_line(score))?;
        self.term.write_line("")
    }

    fn notify(&mut self, notice: Notice) -> io::Result<()> {
        self.term.write_line(&notice_line(&notice))
    }
}

fn answer_line(record: &AnswerRecord) -> String {
    let choice = record.choice.map_or_else(|| "-".to_string(), String::from);
    let verdict = if record.valid {
        style("correct").green()
    } else {
        style("incorrect").red()
    };
    format!("- {choice} ({verdict})")
}

fn score_line(score: &Score) -> String {
    let text = score.to_string();
    let value = match score.band() {
        ScoreBand::High => style(text).green(),
        ScoreBand::Medium => style(text),
        ScoreBand::Low => style(text).red(),
    };
    format!("{}{}", style("Your score: ").bold(), value.bold())
}

fn notice_line(notice: &Notice) -> String {
    match notice {
        Notice::Saved { location } => {
            format!("Progress saved to {}.", style(location).bold())
        }
        Notice::NotSaved => format!("Progress {}.", style("NOT saved").bold()),
        Notice::HistoryDeleted { location } => style(format!(
            "Note: history file {} has been deleted.",
            style(location).bold()
        ))
        .dim()
        .to_string(),
        Notice::DeleteFailed { location, reason } => style(format!(
            "Note: failed to delete history file {} ({reason}).",
            style(location).bold()
        ))
        .red()
        .to_string(),
    }
}
