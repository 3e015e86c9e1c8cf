//! Shared driver for the line-by-line sessions.

use crate::console::Console;

/// Token that ends a session.
pub const SENTINEL: &str = "done";

/// One line of session input, classified once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Done,
    Line(&'a str),
}

impl<'a> Input<'a> {
    /// End of input counts as `done`.
    pub fn classify(line: Option<&'a str>) -> Self {
        match line {
            None => Self::Done,
            Some(text) if text.trim() == SENTINEL => Self::Done,
            Some(text) => Self::Line(text),
        }
    }
}

/// A sub-mode that consumes lines until the sentinel.
pub trait Session {
    fn prompt(&self) -> &str;

    /// Runs before every read.
    fn before_read<C: Console>(&mut self, _console: &mut C) {}

    fn handle<C: Console>(&mut self, line: &str, console: &mut C);
}

/// Feed lines to `session` until it sees `done` or input ends.
pub fn run_session<S: Session, C: Console>(session: &mut S, console: &mut C) {
    loop {
        session.before_read(console);
        let line = console.read_line(session.prompt());
        match Input::classify(line.as_deref()) {
            Input::Done => return,
            Input::Line(text) => session.handle(text, console),
        }
    }
}
