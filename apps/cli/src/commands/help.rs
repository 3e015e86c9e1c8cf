use super::{Interpreter, COMMANDS};
use crate::console::{Console, Style};
use notecard_core::StudysetRepository;
use rand::Rng;

impl<R: StudysetRepository, C: Console, G: Rng> Interpreter<R, C, G> {
    pub(super) fn help(&mut self) {
        self.console.emit("Commands", Style::Heading);
        for spec in COMMANDS {
            let line = format!("  {:<18} {}", spec.usage, spec.description);
            self.console.emit(&line, Style::Plain);
        }
    }
}
