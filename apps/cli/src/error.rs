//! User-facing command errors.

use notecard_core::{EntryError, StoreError};
use thiserror::Error;

/// Every error the interpreter reports. All of them are recoverable: the
/// message is shown and the interpreter waits for the next line.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type ? for a list of commands")]
    CommandNotFound(String),

    #[error("usage: {usage}")]
    UsageMismatch { usage: &'static str },

    #[error("a studyset named '{0}' already exists")]
    DuplicateName(String),

    #[error("no studyset named '{0}'")]
    SetNotFound(String),

    #[error("{0} has no notecards")]
    EmptySet(String),

    #[error("syntax error: {0}")]
    SyntaxError(String),

    #[error("{set} has no term '{term}'")]
    TermNotFound { set: String, term: String },

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl From<EntryError> for CommandError {
    fn from(e: EntryError) -> Self {
        Self::SyntaxError(e.to_string())
    }
}

/// Result type alias for command handlers.
pub type Result<T> = std::result::Result<T, CommandError>;
