//! Birthday value object.

use super::errors::ValidationError;
use super::Field;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `chrono` format string for birthday text.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Exact shape of birthday text. `chrono` alone accepts single-digit days
/// and months, so the shape is checked before parsing.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Keeps both the text it was created from and the parsed date. The text
/// must be `DD.MM.YYYY` and name a real calendar day.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::Birthday;
/// use chrono::Datelike;
///
/// let birthday = Birthday::new("24.08.1991").unwrap();
/// assert_eq!(birthday.date().month(), 8);
/// assert_eq!(birthday.to_string(), "24.08.1991");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text has the wrong
    /// shape or names a day that does not exist (e.g. `31.04.2000`).
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();

        if !BIRTHDAY_SHAPE.is_match(&text) {
            return Err(ValidationError::InvalidBirthday(text));
        }

        match NaiveDate::parse_from_str(&text, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { text, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(text)),
        }
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The text the birthday was created from.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Field for Birthday {
    fn value(&self) -> &str {
        &self.text
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
