//! The address book: contacts keyed by name, in insertion order.

use super::record::Record;
use indexmap::IndexMap;
use std::fmt;

/// Contacts keyed by the string form of their name, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Creates an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record under its name.
    ///
    /// An existing record with the same name is replaced wholesale, phones and
    /// all, and keeps its place in the listing order.
    pub fn add_record(&mut self, record: Record) -> String {
        let message = format!("Contact {} add success", record);
        let key = record.name().as_str().to_string();
        self.records.insert(key, record);
        message
    }

    /// Looks up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Looks up a record by exact name for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Returns the number of contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}
