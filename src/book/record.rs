//! A single contact: a name and its phone numbers.

use super::field::{Name, Phone};
use std::fmt;

/// One contact in the address book.
///
/// Phones keep insertion order and never hold two equal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Creates a record, optionally with a first phone number.
    pub fn new(name: Name, phone: Option<Phone>) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
        }
    }

    /// Returns the contact name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the phone numbers in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Returns the phone numbers joined by comma-space.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Appends a phone unless an equal one is already present.
    ///
    /// Both outcomes are reported as a message; this never fails.
    pub fn add_phone(&mut self, phone: Phone) -> String {
        if self.phones.contains(&phone) {
            return format!("{} present in phones of contact {}", phone, self.name);
        }
        let message = format!("phone {} add to contact {}", phone, self.name);
        self.phones.push(phone);
        message
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position.
    ///
    /// If `new` is already another of this contact's phones the record is left
    /// unchanged and that is reported instead.
    pub fn change_phone(&mut self, old: &Phone, new: Phone) -> String {
        let Some(slot) = self.phones.iter().position(|p| p == old) else {
            return format!("{} not present in phones of contact {}", old, self.name);
        };
        if new != *old && self.phones.contains(&new) {
            return format!("{} present in phones of contact {}", new, self.name);
        }

        let message = format!("old phone {} change to {}", old, new);
        self.phones[slot] = new;
        message
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_display())
    }
}
