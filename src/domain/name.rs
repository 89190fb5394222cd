//! Name value object.

use super::errors::FieldKind;
use super::field::{FieldFormat, ValidatedField};

/// Format rule for contact names: anything with a visible character.
#[derive(Debug)]
pub enum NameFormat {}

impl FieldFormat for NameFormat {
    const KIND: FieldKind = FieldKind::Name;
    type Parsed = ();

    fn parse(raw: &str) -> Option<()> {
        (!raw.trim().is_empty()).then_some(())
    }
}

/// A contact name. Also the key of its record in the address book.
pub type Name = ValidatedField<NameFormat>;
