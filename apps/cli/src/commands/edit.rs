//! `edit <studyset>`: add and remove notecards.

use super::session::{run_session, Session};
use super::Interpreter;
use crate::console::{Console, Style};
use crate::error::{CommandError, Result};
use notecard_core::{parse_entry, Studyset, StudysetRepository};
use rand::Rng;

/// One line of edit input.
#[derive(Debug, PartialEq, Eq)]
enum EditAction {
    Add { term: String, definition: String },
    Remove { term: String },
}

fn parse_action(line: &str) -> Result<EditAction> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match verb {
        "add" => {
            let (term, definition) = parse_entry(rest)?;
            Ok(EditAction::Add { term, definition })
        }
        "remove" => {
            let term = rest.split_whitespace().collect::<Vec<_>>().join(" ");
            if term.is_empty() {
                return Err(CommandError::SyntaxError("expected remove <term>".to_string()));
            }
            Ok(EditAction::Remove { term })
        }
        _ => Err(CommandError::SyntaxError(
            "expected add <term> - <definition> or remove <term>".to_string(),
        )),
    }
}

struct EditSession<'a> {
    set: &'a mut Studyset,
    prompt: String,
}

impl EditSession<'_> {
    fn apply(&mut self, action: EditAction) -> Result<String> {
        match action {
            EditAction::Add { term, definition } => {
                let message = format!("Added {term}");
                self.set.add_term(term, definition);
                Ok(message)
            }
            EditAction::Remove { term } => {
                if self.set.remove_term(&term).is_none() {
                    return Err(CommandError::TermNotFound {
                        set: self.set.name().to_string(),
                        term,
                    });
                }
                Ok(format!("Removed {term}"))
            }
        }
    }
}

impl Session for EditSession<'_> {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn handle<C: Console>(&mut self, line: &str, console: &mut C) {
        if line.trim().is_empty() {
            return;
        }
        match parse_action(line).and_then(|action| self.apply(action)) {
            Ok(message) => console.emit(&message, Style::Plain),
            Err(err) => console.emit(&err.to_string(), Style::Error),
        }
    }
}

impl<R: StudysetRepository, C: Console, G: Rng> Interpreter<R, C, G> {
    pub(super) fn edit(&mut self, name: &str) -> Result<()> {
        let set = self
            .store
            .get_studyset_mut(name)
            .ok_or_else(|| CommandError::SetNotFound(name.to_string()))?;

        self.console.emit(
            &format!("Editing {name}. Use add <term> - <definition> or remove <term>, then done."),
            Style::Heading,
        );
        let mut session = EditSession {
            set,
            prompt: format!("{name}* "),
        };
        run_session(&mut session, &mut self.console);

        self.save()
    }
}
