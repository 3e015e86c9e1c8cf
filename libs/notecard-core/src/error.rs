//! Error types for notecard-core.

use thiserror::Error;

/// Errors raised while reading a studyset file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing '=' delimiter at line {line}")]
    MissingDelimiter { line: usize },
}

/// Errors raised while reading a typed `term - definition` entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("expected <term> - <definition>")]
    MissingSeparator,

    #[error("term is empty")]
    EmptyTerm,

    #[error("definition is empty")]
    EmptyDefinition,

    #[error("term may not contain '{0}'")]
    ReservedCharacter(char),
}

/// Errors raised by the studyset store and its repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access studyset {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not list studysets in {path}: {source}")]
    Listing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid studyset name: {0}")]
    InvalidName(String),
}

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;
