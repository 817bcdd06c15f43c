//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while turning the markdown document into quiz items.
///
/// Any of these aborts the whole parse; no partial quiz is produced.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("section {section} does not match the question layout: {excerpt}")]
    MalformedSection { section: usize, excerpt: String },

    #[error("invalid choice line in section {section}: {line:?}")]
    MalformedChoice { section: usize, line: String },

    #[error("section {section} has {count} choice(s), at least 2 are required")]
    TooFewChoices { section: usize, count: usize },

    #[error("duplicate choice {label} in section {section}")]
    DuplicateChoice { section: usize, label: char },

    #[error("answer {answer} in section {section} is not one of the choices")]
    UnknownAnswer { section: usize, answer: char },
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported lang, supported: {supported}")]
    UnsupportedLanguage { code: String, supported: String },
}

/// Errors raised by a session store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid session record: {0}")]
    Decode(String),

    #[error("failed to encode session record: {0}")]
    Encode(String),
}

/// Errors that end a quiz run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
