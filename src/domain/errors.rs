//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real date in `DD.MM.YYYY` form.
    InvalidBirthday(String),

    /// The provided text does not name a day of the week.
    InvalidWeekday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (expected 10 digits)", phone)
            }
            Self::InvalidBirthday(text) => {
                write!(f, "Invalid birthday format: {} (expected DD.MM.YYYY)", text)
            }
            Self::InvalidWeekday(text) => write!(f, "Invalid weekday: {}", text),
        }
    }
}

impl std::error::Error for ValidationError {}
