//! Command parsing and routing.
//!
//! Matches raw input against the keyword table and splits what follows the
//! keyword into positional arguments.

use super::definitions::{CommandKind, COMMANDS};

/// Parsed command with arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Handler to dispatch to.
    pub kind: CommandKind,
    /// Whitespace-separated words after the keyword, original casing kept.
    pub args: Vec<String>,
}

impl ParsedCommand {
    fn unknown() -> Self {
        Self {
            kind: CommandKind::Unknown,
            args: Vec::new(),
        }
    }
}

/// Command router for parsing user input.
pub struct CommandRouter;

impl CommandRouter {
    /// Parse user input into a command.
    ///
    /// The first table entry with a keyword that prefixes the input wins, even
    /// when a later keyword would match more of it. No trimming happens before
    /// matching, so leading whitespace makes the input unknown.
    pub fn parse(input: &str) -> ParsedCommand {
        for def in COMMANDS {
            for keyword in def.keywords {
                if let Some(rest) = strip_keyword(input, keyword) {
                    return ParsedCommand {
                        kind: def.kind,
                        args: rest.split_whitespace().map(String::from).collect(),
                    };
                }
            }
        }
        ParsedCommand::unknown()
    }
}

/// Strips `keyword` from the front of `input`, ignoring ASCII case.
///
/// Keywords are ASCII, so the matched prefix has the keyword's byte length and
/// the remainder is sliced from the original input with its casing intact.
fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let head = input.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(&input[keyword.len()..])
    } else {
        None
    }
}
