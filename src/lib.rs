//! Assistant Bot - an interactive command-line contact manager.
//!
//! Keeps names, phone numbers and birthdays in memory and answers which
//! contacts have a birthday in the coming week, moving weekend birthdays
//! to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: The contact `Record`
//! - **book**: The `AddressBook` and birthday calendar arithmetic
//! - **matching**: Exact phone and fuzzy name search
//! - **services**: Address book operations rendered as status messages
//! - **shell**: Line-oriented command parsing and dispatch
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod services;
pub mod shell;

pub use book::{AddressBook, UpcomingBirthday};
pub use config::Config;
pub use domain::{Birthday, ContactName, Field, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use matching::{ContactMatcher, MatchResult};
pub use models::Record;
pub use services::{ContactService, ServiceOptions};
