//! Command definitions for declarative command metadata.
//!
//! The table order is the matching order: the router walks it top to bottom
//! and each entry's keywords left to right, taking the first prefix match.

/// Which handler a command dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Add a phone to a contact, creating the contact if needed.
    AddContact,
    /// Replace one of a contact's phones.
    ChangePhone,
    /// List a contact's phones.
    GetPhone,
    /// List every contact.
    ShowAll,
    /// Greeting.
    Greeting,
    /// End the session.
    Exit,
    /// Input matched no keyword.
    Unknown,
}

impl CommandKind {
    /// Returns the table entry for this kind, if it has one.
    pub fn definition(self) -> Option<&'static CommandDef> {
        COMMANDS.iter().find(|def| def.kind == self)
    }

    /// Returns the usage line for this kind, or an empty string for `Unknown`.
    pub fn usage(self) -> &'static str {
        self.definition().map(|def| def.usage).unwrap_or("")
    }
}

/// Definition of a command argument.
#[derive(Debug, Clone)]
pub struct ArgDef {
    /// Argument name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
}

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Handler this command dispatches to.
    pub kind: CommandKind,
    /// Trigger phrases, matched case-insensitively as input prefixes.
    pub keywords: &'static [&'static str],
    /// Short description shown in help.
    pub description: &'static str,
    /// Detailed usage information.
    pub usage: &'static str,
    /// Positional arguments, in order.
    pub args: &'static [ArgDef],
}

/// All command definitions, in matching order.
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        kind: CommandKind::AddContact,
        keywords: &["add"],
        description: "Add a phone to a contact, creating the contact if absent",
        usage: "add <name> <phone>",
        args: &[
            ArgDef {
                name: "name",
                description: "Contact name",
            },
            ArgDef {
                name: "phone",
                description: "Phone number to add",
            },
        ],
    },
    CommandDef {
        kind: CommandKind::ChangePhone,
        keywords: &["change"],
        description: "Replace a phone number of a contact",
        usage: "change <name> <old_phone> <new_phone>",
        args: &[
            ArgDef {
                name: "name",
                description: "Contact name",
            },
            ArgDef {
                name: "old_phone",
                description: "Phone number to replace",
            },
            ArgDef {
                name: "new_phone",
                description: "Replacement phone number",
            },
        ],
    },
    CommandDef {
        kind: CommandKind::GetPhone,
        keywords: &["phone"],
        description: "List phone numbers of a contact",
        usage: "phone <name>",
        args: &[ArgDef {
            name: "name",
            description: "Contact name",
        }],
    },
    CommandDef {
        kind: CommandKind::ShowAll,
        keywords: &["show all"],
        description: "List all contacts",
        usage: "show all",
        args: &[],
    },
    CommandDef {
        kind: CommandKind::Greeting,
        keywords: &["hello"],
        description: "Greeting",
        usage: "hello",
        args: &[],
    },
    CommandDef {
        kind: CommandKind::Exit,
        keywords: &["good bye", "close", "exit"],
        description: "Exit the application",
        usage: "good bye | close | exit",
        args: &[],
    },
];
