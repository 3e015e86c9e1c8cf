//! Line formats for studysets.
//!
//! # File format
//! One card per line, split on the first `=`:
//! ```text
//! cat=a small mammal
//! equation=x = y + 1
//! ```
//!
//! # Entry format
//! Cards typed at the prompt use a standalone `-` between term and definition:
//! ```text
//! cat - a small mammal
//! ```

use crate::error::{EntryError, ParseError};
use crate::types::{Notecard, Studyset};

/// Separates term from definition in a studyset file.
pub const DELIMITER: char = '=';

/// Separates term from definition in a typed entry.
pub const ENTRY_SEPARATOR: &str = "-";

/// Cards read from a studyset file, plus the lines that could not be read.
#[derive(Debug, Default)]
pub struct ParsedStudyset {
    pub cards: Vec<Notecard>,
    pub skipped: Vec<ParseError>,
}

/// Parse a single file line into a card.
pub fn parse_line(line: &str, line_number: usize) -> Result<Notecard, ParseError> {
    let (term, definition) = line
        .split_once(DELIMITER)
        .ok_or(ParseError::MissingDelimiter { line: line_number })?;
    Ok(Notecard::new(term, definition))
}

/// Parse file content. Blank lines are ignored; malformed lines are skipped
/// and reported in [`ParsedStudyset::skipped`].
pub fn parse(content: &str) -> ParsedStudyset {
    let mut parsed = ParsedStudyset::default();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, idx + 1) {
            Ok(card) => parsed.cards.push(card),
            Err(err) => parsed.skipped.push(err),
        }
    }

    parsed
}

pub fn format_line(card: &Notecard) -> String {
    format!("{}{}{}", card.term(), DELIMITER, card.definition())
}

/// Serialize every card of a studyset, newline-terminated, in order.
pub fn format_studyset(set: &Studyset) -> String {
    let mut out = String::new();
    for card in set.terms() {
        out.push_str(&format_line(card));
        out.push('\n');
    }
    out
}

/// Parse a typed `term - definition` entry.
///
/// Input is split on whitespace and divided at the first standalone `-`.
/// Both halves are re-joined with single spaces.
pub fn parse_entry(text: &str) -> Result<(String, String), EntryError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let split = tokens
        .iter()
        .position(|t| *t == ENTRY_SEPARATOR)
        .ok_or(EntryError::MissingSeparator)?;

    let term = tokens[..split].join(" ");
    let definition = tokens[split + 1..].join(" ");

    if term.is_empty() {
        return Err(EntryError::EmptyTerm);
    }
    if definition.is_empty() {
        return Err(EntryError::EmptyDefinition);
    }
    if term.contains(DELIMITER) {
        return Err(EntryError::ReservedCharacter(DELIMITER));
    }

    Ok((term, definition))
}
