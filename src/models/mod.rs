//! Data models for the address book.
//!
//! A `Record` aggregates the validated fields of a single contact.

pub mod record;

pub use record::Record;
