//! In-memory address book keyed by contact name.

use super::birthdays::{self, UpcomingBirthday};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Local, NaiveDate, Weekday};
use std::collections::HashMap;
use tracing::debug;

/// A name-keyed collection of contact records.
///
/// Names are unique. Iteration follows the order in which names were first
/// added; overwriting a record keeps its position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key.clone(), record);
        if previous.is_none() {
            self.order.push(key);
        } else {
            debug!(name = %key, "replaced existing record");
        }
        previous
    }

    /// Look up a record by name. Surrounding whitespace is ignored.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name.trim())
    }

    /// Mutable lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name.trim())
    }

    /// Like [`AddressBook::find_mut`], but a missing name is an error.
    pub fn get_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name.trim())
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove and return the record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let key = name.trim();
        let removed = self
            .records
            .remove(key)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.order.retain(|n| n != key);
        debug!(name = key, "deleted record");
        Ok(removed)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts with a birthday 1 to `window_days` days after `today`,
    /// with weekend birthdays congratulated on the following Monday.
    ///
    /// Order follows the book and is not sorted by date.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        birthdays::upcoming(self.records(), today, window_days)
    }

    /// [`AddressBook::upcoming_birthdays`] relative to the local date.
    pub fn upcoming_birthdays_from_today(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive(), window_days)
    }

    /// The earliest upcoming birthday (on or after `today`) falling on
    /// `weekday`, across all contacts.
    pub fn next_birthday_on(&self, weekday: Weekday, today: NaiveDate) -> Option<NaiveDate> {
        birthdays::next_on_weekday(self.records(), weekday, today)
    }
}
