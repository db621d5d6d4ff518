//! Command handlers for the contact book.
//!
//! Each handler takes the context and its positional arguments and returns the
//! reply text. `execute` is the single boundary where recoverable errors turn
//! into replies; anything else is passed up to end the session.

pub mod contacts;
pub mod system;

use tracing::{debug, warn};

use super::definitions::CommandKind;
use super::output::CommandOutput;
use super::router::ParsedCommand;
use crate::book::AddressBook;
use crate::error::{ContactsError, Result};

/// Context provided to command handlers.
pub struct CommandContext<'a> {
    /// The session's address book.
    pub book: &'a mut AddressBook,
}

impl<'a> CommandContext<'a> {
    /// Creates a context over the given address book.
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }
}

/// Runs the handler for `command` and translates recoverable errors.
///
/// # Errors
///
/// Returns any error for which `ContactsError::is_recoverable` is false.
pub fn execute(ctx: &mut CommandContext<'_>, command: &ParsedCommand) -> Result<CommandOutput> {
    debug!(kind = ?command.kind, args = command.args.len(), "Dispatching command");

    let args = command.args.as_slice();
    let result = match command.kind {
        CommandKind::AddContact => contacts::handle_add(ctx, args),
        CommandKind::ChangePhone => contacts::handle_change(ctx, args),
        CommandKind::GetPhone => contacts::handle_phone(ctx, args),
        CommandKind::ShowAll => contacts::handle_show_all(ctx, args),
        CommandKind::Greeting => Ok(system::handle_greeting()),
        CommandKind::Exit => Ok(system::handle_exit()),
        CommandKind::Unknown => Ok(system::handle_unknown()),
    };

    recover(command.kind, result)
}

fn recover(kind: CommandKind, result: Result<String>) -> Result<CommandOutput> {
    match result {
        Ok(text) => Ok(CommandOutput::info(text)),
        Err(e) if e.is_recoverable() => {
            warn!(?kind, category = e.category(), "{}", e);
            Ok(CommandOutput::error(e.to_string()))
        }
        Err(e) => Err(e),
    }
}

/// Returns the positional argument at `index`, or a missing-argument error
/// naming it together with the command's usage.
pub(crate) fn required_arg(args: &[String], index: usize, kind: CommandKind) -> Result<&str> {
    if let Some(arg) = args.get(index) {
        return Ok(arg.as_str());
    }

    let name = kind
        .definition()
        .and_then(|def| def.args.get(index))
        .map(|arg| arg.name)
        .unwrap_or("argument");
    Err(ContactsError::missing_argument(format!(
        "Missing argument '{}'. Usage: {}",
        name,
        kind.usage()
    )))
}
