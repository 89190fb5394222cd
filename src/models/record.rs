//! Record model: one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an ordered list of phones and an optional birthday.
///
/// Phones keep insertion order and may repeat. The birthday can be set once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Format` if `raw` is not exactly 10 digits; the
    /// phone list is left as it was.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> BookResult<()> {
        let phone = Phone::new(raw)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `raw`. Does nothing if there is none.
    pub fn remove_phone(&mut self, raw: &str) {
        if let Some(index) = self.position_of(raw) {
            tracing::debug!(contact = %self.name, phone = raw, "Removing phone");
            self.phones.remove(index);
        }
    }

    /// Replace one occurrence of `old` with `new`, appended at the end.
    ///
    /// `new` is validated before anything is removed, so a rejected edit
    /// leaves the phone list untouched.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if no phone equals `old`
    /// - `BookError::Format` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<()> {
        let index = self.position_of(old).ok_or_else(|| BookError::PhoneNotFound {
            name: self.name.to_string(),
            phone: old.to_string(),
        })?;
        let replacement = Phone::new(new)?;

        tracing::debug!(contact = %self.name, old, new = %replacement, "Editing phone");
        self.phones.remove(index);
        self.phones.push(replacement);
        Ok(())
    }

    /// First phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| *phone == raw)
    }

    /// Set the birthday. Only allowed while no birthday is stored.
    ///
    /// # Errors
    ///
    /// - `BookError::BirthdayAlreadySet` if a birthday exists
    /// - `BookError::Format` if `raw` is not a `DD.MM.YYYY` date
    pub fn set_birthday(&mut self, raw: impl Into<String>) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::BirthdayAlreadySet(self.name.to_string()));
        }
        let birthday = Birthday::new(raw)?;
        tracing::debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Time until the next birthday, counted from the local date today.
    pub fn days_to_birthday(&self) -> Option<Duration> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Time from `today` until the next occurrence of the birthday.
    ///
    /// Zero when the birthday is today; `None` when no birthday is set.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<Duration> {
        self.birthday
            .as_ref()
            .map(|birthday| birthday.next_occurrence(today) - today)
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str("None"),
        }
    }
}
