//! Transport-agnostic command output types.
//!
//! A handler reply is always shown to the user as plain text; the variant only
//! records whether it came from a recovered error.

use std::fmt;

/// Output from a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Informational message (success, status, etc.).
    Info(String),

    /// Message of a recovered error.
    Error(String),
}

impl CommandOutput {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates an error message.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Returns the text shown to the user.
    pub fn text(&self) -> &str {
        match self {
            Self::Info(s) | Self::Error(s) => s,
        }
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
