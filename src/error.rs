//! Error types for the contact book.
//!
//! Defines the main error enum used throughout the application. Three kinds are
//! recoverable: a handler that fails with one of them shows the message to the
//! user and the session keeps going. Every other kind ends the session.

use thiserror::Error;

/// Main error type for contact book operations.
#[derive(Error, Debug)]
pub enum ContactsError {
    /// A lookup by name found no contact.
    #[error("{0}")]
    MissingContact(String),

    /// A command was given fewer arguments than it needs.
    #[error("{0}")]
    MissingArgument(String),

    /// A value could not be used as a name or phone number.
    #[error("{0}")]
    InvalidValue(String),

    /// Configuration errors (unreadable or malformed config file, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal or script I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContactsError {
    /// Creates a missing-contact error with the given message.
    pub fn missing_contact(msg: impl Into<String>) -> Self {
        Self::MissingContact(msg.into())
    }

    /// Creates a missing-argument error with the given message.
    pub fn missing_argument(msg: impl Into<String>) -> Self {
        Self::MissingArgument(msg.into())
    }

    /// Creates an invalid-value error with the given message.
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true if the handler boundary turns this error into a reply.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingContact(_) | Self::MissingArgument(_) | Self::InvalidValue(_)
        )
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingContact(_) => "Missing Contact",
            Self::MissingArgument(_) => "Missing Argument",
            Self::InvalidValue(_) => "Invalid Value",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using ContactsError.
pub type Result<T> = std::result::Result<T, ContactsError>;
