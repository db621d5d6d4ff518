//! Name and Phone value fields.
//!
//! Both are thin wrappers over the text the user typed. Phone numbers are not
//! checked for format; the only rule is that neither field may be blank.

use crate::error::{ContactsError, Result};
use std::fmt;

/// A contact name, used as the address book key.
///
/// # Example
///
/// ```
/// use contacts_cli::book::Name;
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// assert_eq!(name.to_string(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Creates a name.
    ///
    /// # Errors
    ///
    /// Returns `ContactsError::InvalidValue` if the name is blank.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ContactsError::invalid_value("Name cannot be empty"));
        }
        Ok(Self(value))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number, stored exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Creates a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ContactsError::InvalidValue` if the number is blank.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ContactsError::invalid_value("Phone cannot be empty"));
        }
        Ok(Self(value))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
