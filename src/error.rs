//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the address book.
///
/// Every variant is recoverable: the shell reports it and reads the next
/// command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Input failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record exists under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record exists but does not hold this phone
    #[error("Phone {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    /// The record exists but has no birthday set
    #[error("No birthday set for contact {0}")]
    BirthdayNotSet(String),

    /// A command received the wrong number of arguments
    #[error("Command '{command}' expects {expected} argument(s), got {got}")]
    Arity {
        command: String,
        expected: usize,
        got: usize,
    },

    /// The command word is not recognized
    #[error("Invalid command: {0}")]
    UnknownCommand(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("Alice".to_string());
        assert_eq!(err.to_string(), "Contact not found: Alice");

        let err = BookError::BirthdayNotSet("Bob".to_string());
        assert_eq!(err.to_string(), "No birthday set for contact Bob");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a positive number"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: BookError = ValidationError::InvalidPhone("123".to_string()).into();
        assert_eq!(
            err.to_string(),
            ValidationError::InvalidPhone("123".to_string()).to_string()
        );
    }

    #[test]
    fn test_arity_error_variant() {
        let err = BookError::Arity {
            command: "add".to_string(),
            expected: 2,
            got: 1,
        };
        assert!(err.to_string().contains("'add'"));
        assert!(err.to_string().contains("expects 2"));
        assert!(err.to_string().contains("got 1"));
    }
}
