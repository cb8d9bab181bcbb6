//! Contact record: one person's name, phones and birthday.

use crate::domain::{Birthday, ContactName, Field, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact in the address book.
///
/// The name is fixed at creation. Phones keep insertion order and may
/// repeat. Every mutator validates its input before touching the record,
/// so a rejected call leaves the record as it was.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Unique key of the record within the book
    name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Optional date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate `name` and create an empty record for it.
    pub fn with_name(name: &str) -> BookResult<Self> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(phone)?;
        debug!(contact = %self.name, %phone, "adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Returns how many were removed;
    /// zero when the phone was not present.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();
        debug!(contact = %self.name, phone, removed, "removed phone");
        removed
    }

    /// Replace every phone equal to `old_phone` with `new_phone`.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if `new_phone` is not a valid number
    /// - `BookError::PhoneNotFound` if the record does not hold `old_phone`
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new_phone)?;

        if self.find_phone(old_phone).is_none() {
            return Err(BookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: old_phone.to_string(),
            });
        }

        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old_phone) {
            *phone = replacement.clone();
        }
        debug!(contact = %self.name, old_phone, new_phone, "edited phone");
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate `text` as a birthday and replace any existing one.
    pub fn set_birthday(&mut self, text: &str) -> BookResult<()> {
        let birthday = Birthday::new(text)?;
        debug!(contact = %self.name, %birthday, "setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.value())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
