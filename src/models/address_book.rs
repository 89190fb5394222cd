//! AddressBook model: the name-keyed collection of records.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::search::SubstringQuery;
use std::collections::HashMap;
use std::slice;

/// All contacts, keyed by name and kept in insertion order.
///
/// Adding a record under a name that is already present replaces the old
/// record in place; its position in iteration order does not change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    /// Name to position in `records`.
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().to_string();
        match self.index.get(&key) {
            Some(&position) => {
                tracing::debug!(contact = %key, "Replacing existing contact");
                self.records[position] = record;
            }
            None => {
                tracing::debug!(contact = %key, "Adding contact");
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&position) => self.records.get_mut(position),
            None => None,
        }
    }

    /// Like [`find_mut`](Self::find_mut) but a missing name is an error.
    pub fn require_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove the record stored under `name`. Returns `None` if absent.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        let removed = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        tracing::debug!(contact = name, "Deleted contact");
        Some(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    /// Records whose name, phones or birthday contain `query`, ignoring case.
    ///
    /// Each matching record appears once, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `BookError::EmptyQuery` for a blank query.
    pub fn search(&self, query: &str) -> BookResult<Vec<&Record>> {
        let query = SubstringQuery::new(query)?;
        let hits: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| query.matches(record))
            .collect();

        tracing::debug!(query = query.as_str(), hits = hits.len(), "Search completed");
        Ok(hits)
    }

    /// Matching records rendered one per line.
    pub fn search_rendered(&self, query: &str) -> BookResult<String> {
        Ok(render_lines(self.search(query)?))
    }

    /// Lazily split the records into pages of `page_size`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPageSize` when `page_size` is zero.
    pub fn iter_pages(&self, page_size: usize) -> BookResult<Pages<'_>> {
        if page_size == 0 {
            return Err(BookError::InvalidPageSize(page_size));
        }
        Ok(Pages {
            chunks: self.records.chunks(page_size),
            page_number: 0,
        })
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

/// One-pass iterator over rendered pages, numbered from 1.
///
/// Each item is `"Page {n}:"` followed by the page's records, one per line.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: slice::Chunks<'a, Record>,
    page_number: usize,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let chunk = self.chunks.next()?;
        self.page_number += 1;
        Some(format!("Page {}:\n{}", self.page_number, render_lines(chunk)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

fn render_lines<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records
        .into_iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
