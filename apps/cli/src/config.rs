//! Command-line and environment configuration.

use clap::Parser;
use std::path::PathBuf;

/// Study term/definition notecards from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "notecards", version, about)]
pub struct Config {
    /// Directory holding `<name>.studyset` files.
    #[arg(long, env = "NOTECARDS_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Disable colored output.
    #[arg(long, env = "NOTECARDS_NO_COLOR")]
    pub no_color: bool,

    /// Seed for the study draw order, for reproducible sessions.
    #[arg(long, env = "NOTECARDS_SEED")]
    pub seed: Option<u64>,
}
