//! Read-only commands: `list` and `sets`.

use super::Interpreter;
use crate::console::{Console, Style};
use crate::error::{CommandError, Result};
use notecard_core::StudysetRepository;
use rand::Rng;

impl<R: StudysetRepository, C: Console, G: Rng> Interpreter<R, C, G> {
    pub(super) fn list(&mut self, name: &str) -> Result<()> {
        let set = self
            .store
            .get_studyset(name)
            .ok_or_else(|| CommandError::SetNotFound(name.to_string()))?;
        if set.is_empty() {
            return Err(CommandError::EmptySet(name.to_string()));
        }

        for card in set.terms() {
            let line = format!("{} - {}", card.term(), card.definition());
            self.console.emit(&line, Style::Plain);
        }
        Ok(())
    }

    pub(super) fn sets(&mut self) {
        if self.store.is_empty() {
            self.console.emit("No studysets yet", Style::Plain);
            return;
        }

        self.console.emit("Studysets", Style::Heading);
        for name in self.store.names() {
            self.console.emit(name, Style::Plain);
        }
    }
}
