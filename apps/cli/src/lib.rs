pub mod cli;
pub mod logging;
pub mod source;
pub mod store;
pub mod terminal;

use quiz_core::QuizRunner;

use crate::cli::Cli;
use crate::source::{load_quiz, FileSource, HttpSource};
use crate::store::{default_state_path, FileStore};
use crate::terminal::TerminalPresenter;

/// Load the question bank, then run one interactive session.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let document = match &cli.document {
        Some(path) => load_quiz(&cli.lang, &FileSource::new(path)).await?,
        None => load_quiz(&cli.lang, &HttpSource::new(&cli.source_url)?).await?,
    };

    let state_path = cli.state_file.unwrap_or_else(default_state_path);
    tracing::debug!(path = %state_path.display(), "using session file");
    let store = FileStore::new(state_path);

    let mut presenter = TerminalPresenter::new();
    let outcome = QuizRunner::new(&document, &mut presenter, &store)
        .with_resume(!cli.fresh)
        .run()?;

    tracing::info!(?outcome, "session ended");
    Ok(())
}
