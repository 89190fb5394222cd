//! Phone value object.

use super::errors::FieldKind;
use super::field::{FieldFormat, ValidatedField};
use once_cell::sync::Lazy;
use regex::Regex;

/// Exactly ten ASCII digits, nothing else.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Format rule for phone numbers.
#[derive(Debug)]
pub enum PhoneFormat {}

impl FieldFormat for PhoneFormat {
    const KIND: FieldKind = FieldKind::Phone;
    type Parsed = ();

    fn parse(raw: &str) -> Option<()> {
        PHONE_PATTERN.is_match(raw).then_some(())
    }
}

/// A validated phone number.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("+380501234567").is_err());
/// ```
pub type Phone = ValidatedField<PhoneFormat>;
