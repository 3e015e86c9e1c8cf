//! Shared harness for interpreter integration tests.
//!
//! A `TestContext` wires an interpreter to a scripted console, a seeded RNG
//! and either an in-memory repository or a temporary directory.

#![allow(dead_code)]

use notecard_core::{DirectoryRepository, MemoryRepository, Store, StudysetRepository};
use notecards_cli::{Interpreter, ScriptedConsole, Style};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

pub struct TestContext<R: StudysetRepository> {
    pub interpreter: Interpreter<R, ScriptedConsole, StdRng>,
}

impl TestContext<MemoryRepository> {
    /// Interpreter over an empty in-memory repository.
    pub fn new() -> Self {
        Self::with_repository(MemoryRepository::new())
    }

    /// Interpreter over in-memory studyset files, loaded at startup.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        Self::with_repository(MemoryRepository::with_files(files.iter().copied()))
    }
}

impl<R: StudysetRepository> TestContext<R> {
    pub fn with_repository(repository: R) -> Self {
        let mut store = Store::new(repository);
        store.load().expect("load studysets");
        Self {
            interpreter: Interpreter::new(store, ScriptedConsole::default(), StdRng::seed_from_u64(42)),
        }
    }

    /// Queue `lines` as input, run the interpreter and return what it emitted.
    pub fn run(&mut self, lines: &[&str]) -> Vec<(Style, String)> {
        for line in lines {
            self.interpreter.console_mut().push_input(*line);
        }
        self.interpreter.run();
        self.interpreter.console_mut().take_output()
    }

    /// Like [`TestContext::run`], returning text only.
    pub fn run_lines(&mut self, lines: &[&str]) -> Vec<String> {
        self.run(lines).into_iter().map(|(_, text)| text).collect()
    }
}

/// Temporary data directory with its repository.
pub fn temp_repository() -> (TempDir, DirectoryRepository) {
    let dir = TempDir::new().expect("create temp dir");
    let repo = DirectoryRepository::new(dir.path());
    (dir, repo)
}

pub fn errors(output: &[(Style, String)]) -> Vec<&str> {
    output
        .iter()
        .filter(|(style, _)| *style == Style::Error)
        .map(|(_, text)| text.as_str())
        .collect()
}
