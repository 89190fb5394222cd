//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is made of: its name,
//! phone numbers and birthday. Each field is checked against its format at
//! construction time, so invalid data can never be represented in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::{FieldKind, ValidationError};
pub use field::{FieldFormat, ValidatedField};
pub use name::Name;
pub use phone::Phone;
