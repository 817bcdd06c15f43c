//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use quiz_core::DEFAULT_SOURCE_URL;

#[derive(Debug, Parser)]
#[command(
    name = "js-questions",
    version,
    about = "Answer JavaScript questions in your terminal",
    long_about = "Downloads the JavaScript questions README for the chosen language, \
                  asks each question in turn and keeps score.\n\n\
                  Progress can be saved when you stop early and resumed on the next run."
)]
pub struct Cli {
    /// Question bank edition: en, ru, vi, de or bs.
    #[arg(value_name = "LANG", default_value = "en")]
    pub lang: String,

    /// Directory the README files are downloaded from.
    #[arg(
        long = "source-url",
        value_name = "URL",
        env = "JS_QUESTIONS_SOURCE_URL",
        default_value = DEFAULT_SOURCE_URL
    )]
    pub source_url: String,

    /// Read the questions from a local markdown file instead of downloading them.
    #[arg(long = "document", value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// Where progress is saved (default: ~/.js-questions-cli.json).
    #[arg(long = "state-file", value_name = "PATH", env = "JS_QUESTIONS_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Start from the first question without offering to resume.
    #[arg(long)]
    pub fresh: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}
