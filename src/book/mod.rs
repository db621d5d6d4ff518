//! Contact data model: value fields, records and the address book.

pub mod address_book;
pub mod field;
pub mod record;

pub use address_book::AddressBook;
pub use field::{Name, Phone};
pub use record::Record;
