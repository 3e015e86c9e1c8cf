//! `study <studyset>`: randomized recall session.

use super::session::{run_session, Session};
use super::Interpreter;
use crate::console::{Console, Style};
use crate::error::{CommandError, Result};
use notecard_core::{DrawPool, Notecard, StudysetRepository};
use rand::Rng;

struct StudySession<'r, G> {
    pool: DrawPool,
    rng: &'r mut G,
    current: Option<Notecard>,
}

impl<G: Rng> Session for StudySession<'_, G> {
    fn prompt(&self) -> &str {
        "guess> "
    }

    fn before_read<C: Console>(&mut self, console: &mut C) {
        self.current = self.pool.draw(&mut *self.rng);
        if let Some(card) = &self.current {
            console.emit(card.term(), Style::Heading);
        }
    }

    fn handle<C: Console>(&mut self, line: &str, console: &mut C) {
        let Some(card) = &self.current else {
            return;
        };
        let style = if line.trim() == card.definition().trim() {
            Style::Emphasis
        } else {
            Style::Plain
        };
        console.emit(card.definition(), style);
    }
}

impl<R: StudysetRepository, C: Console, G: Rng> Interpreter<R, C, G> {
    pub(super) fn study(&mut self, name: &str) -> Result<()> {
        let set = self
            .store
            .get_studyset(name)
            .ok_or_else(|| CommandError::SetNotFound(name.to_string()))?;
        if set.is_empty() {
            return Err(CommandError::EmptySet(name.to_string()));
        }

        self.console.emit(
            &format!(
                "Studying {name} ({} notecards). Type each definition, or done to stop.",
                set.len()
            ),
            Style::Heading,
        );
        let mut session = StudySession {
            pool: DrawPool::new(set.clone_terms()),
            rng: &mut self.rng,
            current: None,
        };
        run_session(&mut session, &mut self.console);

        tracing::debug!(studyset = name, cycles = session.pool.cycle(), "study session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(rng: &mut StdRng, cards: Vec<Notecard>) -> StudySession<'_, StdRng> {
        StudySession {
            pool: DrawPool::new(cards),
            rng,
            current: None,
        }
    }

    #[test]
    fn exact_guess_is_emphasized() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut console = ScriptedConsole::new(["a small mammal", "a big mammal", "done"]);
        let mut study = session(&mut rng, vec![Notecard::new("cat", "a small mammal")]);

        run_session(&mut study, &mut console);

        assert_eq!(
            console.output(),
            &[
                (Style::Heading, "cat".to_string()),
                (Style::Emphasis, "a small mammal".to_string()),
                (Style::Heading, "cat".to_string()),
                (Style::Plain, "a small mammal".to_string()),
                (Style::Heading, "cat".to_string()),
            ]
        );
    }

    #[test]
    fn surrounding_whitespace_in_definition_still_matches() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut console = ScriptedConsole::new(["feline", "done"]);
        let mut study = session(&mut rng, vec![Notecard::new("cat", "feline ")]);

        run_session(&mut study, &mut console);

        assert_eq!(console.output()[1], (Style::Emphasis, "feline ".to_string()));
    }

    #[test]
    fn done_ends_without_revealing() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut console = ScriptedConsole::new(["done"]);
        let mut study = session(&mut rng, vec![Notecard::new("cat", "a small mammal")]);

        run_session(&mut study, &mut console);

        assert_eq!(console.lines(), vec!["cat"]);
        assert_eq!(study.pool.remaining(), 0);
    }
}
