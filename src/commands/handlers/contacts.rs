//! Contact command handlers (add, change, phone, show all).

use tracing::info;

use super::{required_arg, CommandContext};
use crate::book::{Name, Phone, Record};
use crate::commands::definitions::CommandKind;
use crate::error::{ContactsError, Result};

/// Handle `add <name> <phone>`.
///
/// Adds the phone to an existing contact, or stores a new contact holding it.
pub fn handle_add(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<String> {
    let name = Name::new(required_arg(args, 0, CommandKind::AddContact)?)?;
    let phone = Phone::new(required_arg(args, 1, CommandKind::AddContact)?)?;

    if let Some(record) = ctx.book.get_mut(name.as_str()) {
        info!(contact = %name, phone = %phone, "Adding phone to existing contact");
        return Ok(record.add_phone(phone));
    }

    info!(contact = %name, "Creating contact");
    Ok(ctx.book.add_record(Record::new(name, Some(phone))))
}

/// Handle `change <name> <old_phone> <new_phone>`.
pub fn handle_change(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<String> {
    let name = Name::new(required_arg(args, 0, CommandKind::ChangePhone)?)?;
    let old_phone = Phone::new(required_arg(args, 1, CommandKind::ChangePhone)?)?;
    let new_phone = Phone::new(required_arg(args, 2, CommandKind::ChangePhone)?)?;

    match ctx.book.get_mut(name.as_str()) {
        Some(record) => {
            info!(contact = %name, old = %old_phone, new = %new_phone, "Changing phone");
            Ok(record.change_phone(&old_phone, new_phone))
        }
        None => Ok(format!("No contact {} in address book", name)),
    }
}

/// Handle `phone <name>`.
pub fn handle_phone(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<String> {
    let name = Name::new(required_arg(args, 0, CommandKind::GetPhone)?)?;

    let record = ctx
        .book
        .get(name.as_str())
        .ok_or_else(|| ContactsError::missing_contact(format!("Contact '{}' not found.", name)))?;

    Ok(format!(
        "The phone number(s) for '{}' is/are: {}.",
        name,
        record.phones_display()
    ))
}

/// Handle `show all`.
///
/// An empty book yields an empty reply.
pub fn handle_show_all(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<String> {
    Ok(ctx.book.to_string())
}
