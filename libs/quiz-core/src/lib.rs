//! Core quiz library used by the `js-questions` command-line runner.
//!
//! Provides:
//! - Language table for the upstream question bank editions
//! - Staged markdown parser producing quiz items
//! - Resumable session state and the storage seam it persists through
//! - Score computation
//! - The quiz runner state machine, driven through a presenter seam

pub mod error;
pub mod language;
pub mod parser;
pub mod runner;
pub mod scoring;
pub mod session;
pub mod types;

pub use error::{ConfigError, ParseError, Result, RunError, StoreError};
pub use language::{Language, DEFAULT_SOURCE_URL};
pub use parser::parse;
pub use runner::{Confirm, Notice, Presenter, QuizRunner, RunOutcome, Selection};
pub use scoring::{Score, ScoreBand};
pub use session::{AnswerRecord, SessionState, SessionStore};
pub use types::{Choice, QuizDocument, QuizItem};
