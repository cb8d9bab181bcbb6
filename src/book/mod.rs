//! The address book and its birthday queries.

pub mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};
