//! Help text for the contact book commands, built from the command table.

use super::definitions::{CommandDef, COMMANDS};

const HEADER: &str = "Commands (keywords are case-insensitive):";

/// Builds the help text listing every interactive command.
///
/// Each command gets its usage and description on one line, followed by one
/// indented line per argument.
pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|def| def.usage.len()).max().unwrap_or(0);

    let mut text = String::from(HEADER);
    for def in COMMANDS {
        text.push('\n');
        text.push_str(&command_lines(def, width));
    }
    text
}

fn command_lines(def: &CommandDef, width: usize) -> String {
    let mut lines = format!("  {:<width$}  - {}", def.usage, def.description);
    for arg in def.args {
        let placeholder = format!("<{}>", arg.name);
        lines.push_str(&format!("\n    {placeholder:<width$}    {}", arg.description));
    }
    lines
}
