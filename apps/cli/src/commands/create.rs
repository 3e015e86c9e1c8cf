//! `new <name>`: build a studyset from typed entries.

use super::session::{run_session, Session};
use super::Interpreter;
use crate::console::{Console, Style};
use crate::error::{CommandError, Result};
use notecard_core::{parse_entry, validate_name, Studyset, StudysetRepository};
use rand::Rng;

struct CreateSession {
    set: Studyset,
    prompt: String,
}

impl CreateSession {
    fn new(name: &str) -> Self {
        Self {
            set: Studyset::new(name),
            prompt: format!("{name}+ "),
        }
    }
}

impl Session for CreateSession {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn handle<C: Console>(&mut self, line: &str, console: &mut C) {
        if line.trim().is_empty() {
            return;
        }
        match parse_entry(line) {
            Ok((term, definition)) => {
                console.emit(&format!("Added {term}"), Style::Plain);
                self.set.add_term(term, definition);
            }
            Err(err) => console.emit(&CommandError::from(err).to_string(), Style::Error),
        }
    }
}

impl<R: StudysetRepository, C: Console, G: Rng> Interpreter<R, C, G> {
    pub(super) fn create(&mut self, name: &str) -> Result<()> {
        if self.store.is_taken(name) {
            return Err(CommandError::DuplicateName(name.to_string()));
        }
        validate_name(name)
            .map_err(|_| CommandError::SyntaxError(format!("'{name}' cannot be used as a studyset name")))?;

        self.console.emit(
            &format!("Creating {name}. Enter <term> - <definition> lines, then done."),
            Style::Heading,
        );
        let mut session = CreateSession::new(name);
        run_session(&mut session, &mut self.console);

        let count = session.set.len();
        tracing::debug!(studyset = name, cards = count, "created studyset");
        self.store.add_studyset(session.set);
        self.save()?;

        let noun = if count == 1 { "notecard" } else { "notecards" };
        self.console
            .emit(&format!("Saved {name} with {count} {noun}"), Style::Plain);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn create_session_collects_valid_entries() {
        let mut console = ScriptedConsole::new([
            "cat - a small mammal",
            "no separator",
            "",
            "dog - a loyal mammal",
            "done",
        ]);
        let mut session = CreateSession::new("vocab");
        run_session(&mut session, &mut console);

        let terms: Vec<&str> = session.set.terms().iter().map(|c| c.term()).collect();
        assert_eq!(terms, vec!["cat", "dog"]);
        assert_eq!(
            console.lines(),
            vec![
                "Added cat",
                "syntax error: expected <term> - <definition>",
                "Added dog",
            ]
        );
        assert_eq!(console.output()[1].0, Style::Error);
    }
}
