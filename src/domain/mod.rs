//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers and birthdays. These value objects validate at
//! construction time so an invalid value can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;

use std::fmt;

/// A validated scalar value with a canonical text rendering.
///
/// Every field renders through `Display` as exactly the text it was
/// created from, so `Field::value` and `to_string` always agree.
pub trait Field: fmt::Display {
    /// Canonical text of the field.
    fn value(&self) -> &str;
}
