//! Case-insensitive substring matching over a record's fields.

use crate::error::{BookError, BookResult};
use crate::models::Record;

/// Type of searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchableField {
    /// Contact name
    Name,
    /// One of the contact's phones
    Phone,
    /// Rendered birthday
    Birthday,
}

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringQuery {
    needle: String,
}

impl SubstringQuery {
    /// Build a query from user input. Matching ignores case only; any
    /// whitespace in the query is part of the needle.
    ///
    /// # Errors
    ///
    /// Returns `BookError::EmptyQuery` if the query is empty or only whitespace.
    pub fn new(query: &str) -> BookResult<Self> {
        if query.trim().is_empty() {
            return Err(BookError::EmptyQuery);
        }
        Ok(Self {
            needle: query.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// True if `haystack` contains the query, ignoring case.
    pub fn matches_text(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }

    /// Every field of `record` containing the query, one entry per phone hit.
    pub fn matched_fields(&self, record: &Record) -> Vec<SearchableField> {
        let mut fields = Vec::new();

        if self.matches_text(record.name().as_str()) {
            fields.push(SearchableField::Name);
        }

        fields.extend(
            record
                .phones()
                .iter()
                .filter(|phone| self.matches_text(phone.as_str()))
                .map(|_| SearchableField::Phone),
        );

        if record
            .birthday()
            .is_some_and(|birthday| self.matches_text(birthday.as_str()))
        {
            fields.push(SearchableField::Birthday);
        }

        fields
    }

    /// True if any field of `record` contains the query.
    pub fn matches(&self, record: &Record) -> bool {
        !self.matched_fields(record).is_empty()
    }
}
