//! Contact service layer.
//!
//! The in-process API the command shell talks to. Each operation returns a
//! user-facing status message or a typed error; the service owns the
//! address book and nothing else holds a reference to it.

use crate::book::{AddressBook, UpcomingBirthday};
use crate::config::Config;
use crate::domain::{ValidationError, BIRTHDAY_FORMAT};
use crate::error::{BookError, BookResult};
use crate::matching::ContactMatcher;
use crate::models::Record;
use chrono::{Local, NaiveDate, Weekday};
use tracing::{debug, info};

/// Options that shape service output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Days ahead `upcoming_birthdays` looks
    pub birthday_window_days: u32,

    /// Maximum `search` results
    pub max_search_results: usize,

    /// Minimum `search` confidence (0-100)
    pub search_confidence_threshold: u8,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ServiceOptions {
    fn from(config: &Config) -> Self {
        Self {
            birthday_window_days: config.birthday_window_days,
            max_search_results: config.max_search_results,
            search_confidence_threshold: config.search_confidence_threshold,
        }
    }
}

/// Address book operations rendered as status messages.
#[derive(Debug, Default)]
pub struct ContactService {
    book: AddressBook,
    options: ServiceOptions,
    matcher: ContactMatcher,
}

impl ContactService {
    /// Create a service over an empty address book.
    pub fn new(options: ServiceOptions) -> Self {
        Self::with_book(AddressBook::new(), options)
    }

    /// Create a service over an existing address book.
    pub fn with_book(book: AddressBook, options: ServiceOptions) -> Self {
        Self {
            book,
            options,
            matcher: ContactMatcher::new(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn options(&self) -> ServiceOptions {
        self.options
    }

    /// Add a phone to `name`, creating the contact if it does not exist.
    ///
    /// An existing contact keeps its phones and birthday; the new phone is
    /// appended.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<String> {
        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            return Ok("Contact updated.".to_string());
        }

        let mut record = Record::with_name(name)?;
        record.add_phone(phone)?;
        info!(name = %record.name(), "contact created");
        self.book.add_record(record);
        Ok("Contact added.".to_string())
    }

    /// Replace `old_phone` with `new_phone` for `name`.
    pub fn change_contact(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> BookResult<String> {
        self.book.get_mut(name)?.edit_phone(old_phone, new_phone)?;
        Ok("Contact updated.".to_string())
    }

    /// Render the record for `name`.
    pub fn show_phone(&self, name: &str) -> BookResult<String> {
        self.book
            .find(name)
            .map(ToString::to_string)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Render every record, one per line.
    pub fn list_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts found.".to_string();
        }
        self.book
            .records()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Set or replace the birthday of `name`.
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> BookResult<String> {
        self.book.get_mut(name)?.set_birthday(birthday)?;
        Ok("Birthday added.".to_string())
    }

    /// Render the birthday of `name`.
    pub fn show_birthday(&self, name: &str) -> BookResult<String> {
        let record = self
            .book
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        let birthday = record
            .birthday()
            .ok_or_else(|| BookError::BirthdayNotSet(record.name().to_string()))?;
        Ok(format!("{}'s birthday: {}", record.name(), birthday))
    }

    /// Upcoming birthdays relative to the local date.
    pub fn upcoming_birthdays(&self) -> String {
        self.upcoming_birthdays_at(Local::now().date_naive())
    }

    /// Upcoming birthdays relative to `today`, one `name: date (weekday)`
    /// line per contact.
    pub fn upcoming_birthdays_at(&self, today: NaiveDate) -> String {
        let window = self.options.birthday_window_days;
        let upcoming = self.book.upcoming_birthdays(today, window);
        debug!(%today, window, found = upcoming.len(), "computed upcoming birthdays");

        if upcoming.is_empty() {
            return format!("No birthdays coming up in the next {} days.", window);
        }
        upcoming
            .iter()
            .map(Self::format_upcoming)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Delete the contact `name`.
    pub fn delete_contact(&mut self, name: &str) -> BookResult<String> {
        self.book.delete(name)?;
        Ok("Contact deleted.".to_string())
    }

    /// Remove every occurrence of `phone` from `name`.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<String> {
        let record = self.book.get_mut(name)?;
        if record.remove_phone(phone) == 0 {
            return Err(BookError::PhoneNotFound {
                name: record.name().to_string(),
                phone: phone.to_string(),
            });
        }
        Ok("Phone removed.".to_string())
    }

    /// Search contacts by exact phone or fuzzy name.
    pub fn search(&self, query: &str) -> String {
        let results = self.matcher.find_matches(
            query,
            &self.book,
            self.options.max_search_results,
            self.options.search_confidence_threshold,
        );
        if results.is_empty() {
            return "No matching contacts.".to_string();
        }
        results
            .iter()
            .map(|m| format!("{} [{}%]", m.record, m.confidence))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The next birthday falling on `weekday`, relative to the local date.
    pub fn next_birthday_on(&self, weekday: &str) -> BookResult<String> {
        self.next_birthday_on_at(weekday, Local::now().date_naive())
    }

    /// The next birthday falling on `weekday`, relative to `today`.
    pub fn next_birthday_on_at(&self, weekday: &str, today: NaiveDate) -> BookResult<String> {
        let weekday: Weekday = weekday
            .parse()
            .map_err(|_| ValidationError::InvalidWeekday(weekday.to_string()))?;

        Ok(match self.book.next_birthday_on(weekday, today) {
            Some(date) => format!(
                "Next birthday on {}: {}",
                Self::weekday_name(weekday),
                date.format(BIRTHDAY_FORMAT)
            ),
            None => format!("No birthdays fall on {}.", Self::weekday_name(weekday)),
        })
    }

    fn format_upcoming(upcoming: &UpcomingBirthday) -> String {
        format!(
            "{}: {} ({})",
            upcoming.name,
            upcoming.congratulation_date.format(BIRTHDAY_FORMAT),
            upcoming.congratulation_date.format("%A")
        )
    }

    fn weekday_name(weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}
