//! Command parsing and dispatch for the contact book.
//!
//! Parsing is kept apart from execution so the router can be tested without
//! an address book.

pub mod definitions;
pub mod handlers;
pub mod help;
pub mod output;
pub mod router;

pub use definitions::{CommandDef, CommandKind, COMMANDS};
pub use handlers::{execute, CommandContext};
pub use output::CommandOutput;
pub use router::{CommandRouter, ParsedCommand};
