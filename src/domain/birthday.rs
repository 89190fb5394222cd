//! Birthday value object.

use super::errors::FieldKind;
use super::field::{FieldFormat, ValidatedField};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$").expect("birthday pattern is valid")
});

/// Format rule for birthdays: a real calendar date written as `DD.MM.YYYY`.
#[derive(Debug)]
pub enum BirthdayFormat {}

impl FieldFormat for BirthdayFormat {
    const KIND: FieldKind = FieldKind::Birthday;
    type Parsed = NaiveDate;

    fn parse(raw: &str) -> Option<NaiveDate> {
        let caps = BIRTHDAY_PATTERN.captures(raw)?;
        let day = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let year = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// A validated birthday. Renders exactly as it was entered.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.01.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.01.1990");
/// assert!(Birthday::new("31.02.1990").is_err());
/// ```
pub type Birthday = ValidatedField<BirthdayFormat>;

impl ValidatedField<BirthdayFormat> {
    /// The calendar date of birth.
    pub fn date(&self) -> NaiveDate {
        *self.parsed()
    }

    /// The first anniversary of this birthday on or after `today`.
    ///
    /// A 29 February birthday is observed on 28 February in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = anniversary_in(self.date(), today.year());
        if this_year < today {
            anniversary_in(self.date(), today.year() + 1)
        } else {
            this_year
        }
    }
}

fn anniversary_in(birth: NaiveDate, year: i32) -> NaiveDate {
    birth
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birth.month(), 28))
        .unwrap_or(birth)
}
