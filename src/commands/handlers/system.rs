//! System command handlers (hello, exit, unknown input).

/// Reply to `hello`.
pub const GREETING: &str = "How can I help you?";

/// Reply to `good bye`, `close` and `exit`.
pub const FAREWELL: &str = "Good bye!";

/// Reply to input that matches no command.
pub const INVALID_COMMAND: &str = "Invalid command. Please try again.";

/// Handle `hello`.
pub fn handle_greeting() -> String {
    GREETING.to_string()
}

/// Handle `good bye`, `close` or `exit`.
pub fn handle_exit() -> String {
    FAREWELL.to_string()
}

/// Handle unknown input.
pub fn handle_unknown() -> String {
    INVALID_COMMAND.to_string()
}
