//! Test fixtures and sample data.
//!
//! Reusable records, books and dates so tests never depend on the real
//! current date.

use assistant_bot::{AddressBook, Record};
use chrono::NaiveDate;

/// Build a date, panicking on an impossible one.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Create a record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::with_name(name).expect("valid test name");
    for phone in phones {
        record.add_phone(phone).expect("valid test phone");
    }
    if let Some(text) = birthday {
        record.set_birthday(text).expect("valid test birthday");
    }
    record
}

/// Create a book holding `(name, birthday)` contacts, each with one phone.
#[allow(dead_code)]
pub fn book_with_birthdays(entries: &[(&str, Option<&str>)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        book.add_record(sample_record(name, &["1234567890"], *birthday));
    }
    book
}
