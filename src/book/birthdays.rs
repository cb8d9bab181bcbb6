//! Birthday calendar arithmetic.
//!
//! Pure functions over `chrono::NaiveDate`: the next anniversary of a
//! birth date, the weekend shift to Monday, and the upcoming-birthdays
//! window filter. "Today" is always passed in so results are reproducible.

use crate::domain::ContactName;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Default number of days ahead to look for birthdays.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact the birthday belongs to
    pub name: ContactName,

    /// The anniversary itself
    pub birthday: NaiveDate,

    /// Day to congratulate on: the anniversary, moved to Monday if it
    /// falls on a weekend
    pub congratulation_date: NaiveDate,
}

/// The anniversary of `birth` in `year`.
///
/// 29 February maps to 28 February in non-leap years. Returns `None` only
/// when `year` is outside the range `chrono` can represent.
pub fn anniversary_in(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// The first anniversary of `birth` on or after `today`.
pub fn next_anniversary(birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birth, today.year())?;
    if this_year < today {
        anniversary_in(birth, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// The next `target` weekday strictly after `from`.
///
/// When `from` already is `target` the result is a week later.
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let current = i64::from(from.weekday().num_days_from_monday());
    let wanted = i64::from(target.num_days_from_monday());
    let mut days_ahead = (wanted - current).rem_euclid(7);
    if days_ahead == 0 {
        days_ahead = 7;
    }
    from + Duration::days(days_ahead)
}

/// Move a Saturday or Sunday to the following Monday; weekdays are kept.
pub fn congratulation_date(anniversary: NaiveDate) -> NaiveDate {
    match anniversary.weekday() {
        Weekday::Sat | Weekday::Sun => next_weekday(anniversary, Weekday::Mon),
        _ => anniversary,
    }
}

/// Contacts whose next anniversary is 1 to `window_days` days after
/// `today`. A birthday today is not reported.
///
/// The result follows the iteration order of `records`.
pub fn upcoming<'a, I>(records: I, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let window = i64::from(window_days);

    records
        .into_iter()
        .filter_map(|record| {
            let birth = record.birthday()?.date();
            let anniversary = next_anniversary(birth, today)?;
            let days_until = (anniversary - today).num_days();
            if days_until <= 0 || days_until > window {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().clone(),
                birthday: anniversary,
                congratulation_date: congratulation_date(anniversary),
            })
        })
        .collect()
}

/// The earliest anniversary on or after `today` that falls on `weekday`.
pub fn next_on_weekday<'a, I>(records: I, weekday: Weekday, today: NaiveDate) -> Option<NaiveDate>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| next_anniversary(record.birthday()?.date(), today))
        .filter(|anniversary| anniversary.weekday() == weekday)
        .min()
}
