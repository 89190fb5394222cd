//! Substring search over contacts.
//!
//! A query matches a record when the record's name, any of its phones, or
//! its rendered birthday contains the query text, ignoring case.

pub mod substring;

pub use substring::{SearchableField, SubstringQuery};
