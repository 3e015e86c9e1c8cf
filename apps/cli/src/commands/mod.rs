//! Command table and interpreter.

mod create;
mod edit;
mod help;
mod list;
mod session;
mod study;

use crate::console::{Console, Style};
use crate::error::{CommandError, Result};
use notecard_core::{Store, StudysetRepository};
use rand::Rng;

/// Commands understood at the top-level prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    New,
    Study,
    Edit,
    List,
    Sets,
}

/// Name, usage template and description of a command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub kind: CommandKind,
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

impl CommandSpec {
    /// Number of words a command line must have, command name included.
    pub fn arity(&self) -> usize {
        self.usage.split_whitespace().count()
    }
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        kind: CommandKind::Help,
        name: "?",
        usage: "?",
        description: "Show this list of commands",
    },
    CommandSpec {
        kind: CommandKind::Exit,
        name: "exit",
        usage: "exit",
        description: "Quit the program",
    },
    CommandSpec {
        kind: CommandKind::New,
        name: "new",
        usage: "new <name>",
        description: "Create a studyset and enter its notecards",
    },
    CommandSpec {
        kind: CommandKind::Study,
        name: "study",
        usage: "study <studyset>",
        description: "Study a studyset's notecards in random order",
    },
    CommandSpec {
        kind: CommandKind::Edit,
        name: "edit",
        usage: "edit <studyset>",
        description: "Add or remove notecards in a studyset",
    },
    CommandSpec {
        kind: CommandKind::List,
        name: "list",
        usage: "list <studyset>",
        description: "Show every notecard in a studyset",
    },
    CommandSpec {
        kind: CommandKind::Sets,
        name: "sets",
        usage: "sets",
        description: "Show the names of all studysets",
    },
];

pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// A validated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    pub kind: CommandKind,
    pub args: Vec<&'a str>,
}

/// Tokenize a line and check it against the command table.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command<'_>>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let spec = find_command(name).ok_or_else(|| CommandError::CommandNotFound(name.to_string()))?;
    if tokens.len() != spec.arity() {
        return Err(CommandError::UsageMismatch { usage: spec.usage });
    }

    Ok(Some(Command {
        kind: spec.kind,
        args: args.to_vec(),
    }))
}

/// Whether the interpreter keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Reads command lines, dispatches them and drives the interactive sessions.
pub struct Interpreter<R, C, G> {
    store: Store<R>,
    console: C,
    rng: G,
}

impl<R, C, G> Interpreter<R, C, G>
where
    R: StudysetRepository,
    C: Console,
    G: Rng,
{
    pub fn new(store: Store<R>, console: C, rng: G) -> Self {
        Self { store, console, rng }
    }

    pub fn store(&self) -> &Store<R> {
        &self.store
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Process command lines until `exit` or end of input.
    ///
    /// Nothing is saved here: every mutating session saves when it ends.
    pub fn run(&mut self) {
        while let Some(line) = self.console.read_line("> ") {
            if self.execute(&line) == Flow::Exit {
                break;
            }
        }
    }

    /// Process one command line, reporting any error to the console.
    pub fn execute(&mut self, line: &str) -> Flow {
        match self.dispatch(line) {
            Ok(flow) => flow,
            Err(err) => {
                tracing::debug!(%err, line, "command failed");
                self.console.emit(&err.to_string(), Style::Error);
                Flow::Continue
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<Flow> {
        let Some(command) = parse_command(line)? else {
            return Ok(Flow::Continue);
        };
        tracing::debug!(kind = ?command.kind, args = ?command.args, "dispatching command");

        match command.kind {
            CommandKind::Help => self.help(),
            CommandKind::Exit => return Ok(Flow::Exit),
            CommandKind::New => self.create(command.args[0])?,
            CommandKind::Study => self.study(command.args[0])?,
            CommandKind::Edit => self.edit(command.args[0])?,
            CommandKind::List => self.list(command.args[0])?,
            CommandKind::Sets => self.sets(),
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> Result<()> {
        self.store.save().map_err(CommandError::from)
    }
}
