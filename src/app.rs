//! Interactive session for the contact book.
//!
//! Reads one line at a time, dispatches it, writes the reply, and stops after
//! the exit command. The session owns the address book for its whole life.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::book::AddressBook;
use crate::commands::handlers::system::GREETING;
use crate::commands::{execute, CommandContext, CommandKind, CommandRouter};
use crate::error::Result;

/// Prompt shown before each input line unless configured otherwise.
pub const DEFAULT_PROMPT: &str = ">>>";

/// Result of processing one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Reply to show; the session keeps running.
    Reply(String),
    /// Farewell to show; the session is over.
    Exit(String),
}

impl InputResult {
    /// Returns the text to show the user.
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(s) | Self::Exit(s) => s,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The exit command ran.
    Terminated,
    /// Input ran out before any exit command.
    InputClosed,
}

/// Session settings.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Text written before each input line.
    pub prompt: String,
    /// Whether to print the greeting once before the first prompt.
    pub greet_on_start: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            greet_on_start: false,
        }
    }
}

/// One interactive session over an address book.
#[derive(Debug, Default)]
pub struct Session {
    book: AddressBook,
    options: SessionOptions,
}

impl Session {
    /// Creates a session with an empty address book.
    pub fn new(options: SessionOptions) -> Self {
        Self {
            book: AddressBook::new(),
            options,
        }
    }

    /// Returns the session's address book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parses and executes one line of input.
    ///
    /// # Errors
    ///
    /// Returns only errors the handler boundary does not recover from.
    pub fn handle_input(&mut self, line: &str) -> Result<InputResult> {
        let command = CommandRouter::parse(line);
        let mut ctx = CommandContext::new(&mut self.book);
        let output = execute(&mut ctx, &command)?;

        if command.kind == CommandKind::Exit {
            return Ok(InputResult::Exit(output.text().to_string()));
        }
        Ok(InputResult::Reply(output.text().to_string()))
    }

    /// Runs the read-dispatch-print loop until exit or end of input.
    ///
    /// # Errors
    ///
    /// Returns I/O failures and any error a handler did not recover from.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionEnd> {
        info!("Session started");

        if self.options.greet_on_start {
            writeln!(output, "{GREETING}")?;
        }

        let mut line = String::new();
        loop {
            write!(output, "{}", self.options.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                info!(contacts = self.book.len(), "Input closed before exit command");
                return Ok(SessionEnd::InputClosed);
            }

            let text = strip_line_ending(&line);
            debug!(input = text, "Read line");

            let result = self.handle_input(text)?;
            writeln!(output, "{}", result.text())?;

            if let InputResult::Exit(_) = result {
                info!(contacts = self.book.len(), "Session terminated");
                output.flush()?;
                return Ok(SessionEnd::Terminated);
            }
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
