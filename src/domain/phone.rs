//! PhoneNumber value object.

use super::errors::ValidationError;
use super::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits every stored phone number has.
pub const PHONE_DIGITS: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten ASCII decimal digits with no formatting
/// characters. Anything else is rejected at construction.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(PhoneNumber::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly
    /// ten decimal digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check whether `phone` would be accepted by [`PhoneNumber::new`].
    pub fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for PhoneNumber {
    fn value(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert_eq!(phone.to_string(), "1234567890");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("123456789").is_err());
        assert!(PhoneNumber::new("12345678901").is_err());
        assert!(PhoneNumber::new("12345abcde").is_err());
        assert!(PhoneNumber::new("123-456-78").is_err());
        assert!(PhoneNumber::new("+123456789").is_err());
        assert!(PhoneNumber::new(" 123456789").is_err());
        assert!(PhoneNumber::new("0000000000").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(PhoneNumber::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_phone_error_carries_input() {
        assert_eq!(
            PhoneNumber::new("abc"),
            Err(ValidationError::InvalidPhone("abc".to_string()))
        );
    }

    proptest! {
        #[test]
        fn test_phone_every_ten_digit_string_round_trips(text in "[0-9]{10}") {
            let phone = PhoneNumber::new(text.clone()).unwrap();
            prop_assert_eq!(phone.value(), text.as_str());
            prop_assert_eq!(phone.to_string(), text);
        }

        #[test]
        fn test_phone_rejects_wrong_length(text in "[0-9]{0,9}|[0-9]{11,20}") {
            prop_assert_eq!(
                PhoneNumber::new(text.clone()),
                Err(ValidationError::InvalidPhone(text))
            );
        }

        #[test]
        fn test_phone_rejects_non_digit(
            head in "[0-9]{0,9}",
            bad in "[^0-9]",
            tail in "[0-9]{0,9}",
        ) {
            let text = format!("{}{}{}", head, bad, tail);
            prop_assert!(PhoneNumber::new(text).is_err());
        }
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"1234567890\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
