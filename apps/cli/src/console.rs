//! Line-oriented console the interpreter talks through.

use colored::Colorize;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// How a line of output should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Emphasis,
    Heading,
    Error,
}

pub trait Console {
    /// Show `prompt` and read one line without its terminator.
    /// `None` means input has ended.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    fn emit(&mut self, text: &str, style: Style);
}

/// Console over stdin (or any buffered reader) and stdout, colored with `colored`.
///
/// Input bytes that are not valid UTF-8 are decoded lossily, so a bad line is
/// still a line.
pub struct TerminalConsole<I = io::StdinLock<'static>> {
    input: I,
}

impl TerminalConsole {
    pub fn new(color: bool) -> Self {
        Self::with_reader(io::stdin().lock(), color)
    }
}

impl<I: BufRead> TerminalConsole<I> {
    pub fn with_reader(input: I, color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }
        Self { input }
    }
}

/// Decode one raw input line, dropping its terminator.
fn decode_line(mut raw: Vec<u8>) -> String {
    while matches!(raw.last().copied(), Some(b'\n' | b'\r')) {
        raw.pop();
    }
    match String::from_utf8(raw) {
        Ok(line) => line,
        Err(err) => {
            tracing::warn!("input line is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

impl<I: BufRead> Console for TerminalConsole<I> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let mut stdout = io::stdout();
        if let Err(err) = write!(stdout, "{prompt}").and_then(|()| stdout.flush()) {
            tracing::debug!(%err, "failed to write prompt");
        }

        let mut raw = Vec::new();
        match self.input.read_until(b'\n', &mut raw) {
            Ok(0) => None,
            Ok(_) => Some(decode_line(raw)),
            Err(err) => {
                tracing::error!(%err, "failed to read input");
                None
            }
        }
    }

    fn emit(&mut self, text: &str, style: Style) {
        match style {
            Style::Plain => println!("{text}"),
            Style::Emphasis => println!("{}", text.green().bold()),
            Style::Heading => println!("{}", text.bold()),
            Style::Error => println!("{}", text.red()),
        }
    }
}

/// Console fed from a fixed script, recording everything emitted.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<(Style, String)>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    pub fn output(&self) -> &[(Style, String)] {
        &self.output
    }

    /// Emitted text, without styles.
    pub fn lines(&self) -> Vec<&str> {
        self.output.iter().map(|(_, text)| text.as_str()).collect()
    }

    /// Drain and return everything emitted so far.
    pub fn take_output(&mut self) -> Vec<(Style, String)> {
        std::mem::take(&mut self.output)
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.input.pop_front()
    }

    fn emit(&mut self, text: &str, style: Style) {
        self.output.push((style, text.to_string()));
    }
}
