//! Interactive notecard study tool.
//!
//! Studysets live as `<name>.studyset` files in a data directory and are
//! created, studied and edited through a line-based command interpreter.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;

pub use commands::{Flow, Interpreter};
pub use config::Config;
pub use console::{Console, ScriptedConsole, Style, TerminalConsole};
pub use error::CommandError;

use anyhow::Context;
use notecard_core::{DirectoryRepository, Store};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber. Logs go to stderr, filtered by `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the studysets in `config.dir` and run the interpreter on the terminal.
pub fn run(config: Config) -> anyhow::Result<()> {
    let mut store = Store::new(DirectoryRepository::new(&config.dir));
    let report = store
        .load()
        .with_context(|| format!("failed to load studysets from {}", config.dir.display()))?;

    let mut console = TerminalConsole::new(!config.no_color);
    if !report.unreadable.is_empty() {
        console.emit(
            &format!("Could not read studysets: {}", report.unreadable.join(", ")),
            Style::Error,
        );
    }
    if report.skipped_lines > 0 {
        console.emit(
            &format!("Skipped {} malformed lines while loading", report.skipped_lines),
            Style::Error,
        );
    }
    console.emit("Type ? for a list of commands", Style::Plain);

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(dir = %config.dir.display(), studysets = store.len(), "starting interpreter");
    Interpreter::new(store, console, rng).run();
    Ok(())
}
