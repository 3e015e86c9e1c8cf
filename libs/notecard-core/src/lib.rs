//! Core notecard library used by the command-line front end.
//!
//! Provides:
//! - Shared types (Notecard, Studyset)
//! - Line formats for studyset files and typed entries
//! - Randomized draw pool for study sessions
//! - Studyset store with pluggable persistence

pub mod error;
pub mod parser;
pub mod pool;
pub mod store;
pub mod types;

pub use error::{EntryError, ParseError, StoreError};
pub use parser::{format_studyset, parse, parse_entry, ParsedStudyset, DELIMITER};
pub use pool::DrawPool;
pub use store::{
    validate_name, DirectoryRepository, LoadReport, MemoryRepository, Store, StudysetRepository,
    STUDYSET_EXTENSION,
};
pub use types::{Notecard, Studyset};
