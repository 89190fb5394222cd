//! Domain validation errors.

use std::fmt;
use thiserror::Error;

/// The kind of field a value was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Contact name
    Name,
    /// Ten-digit phone number
    Phone,
    /// `DD.MM.YYYY` birthday
    Birthday,
}

impl FieldKind {
    /// Get display name for the field kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Birthday => "birthday",
        }
    }

    /// Human readable description of the accepted format.
    pub fn expected_format(&self) -> &'static str {
        match self {
            Self::Name => "a non-empty name",
            Self::Phone => "exactly 10 digits",
            Self::Birthday => "a date as DD.MM.YYYY",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value does not satisfy the format of its field kind.
    #[error("Invalid {kind}: '{value}' (expected {})", .kind.expected_format())]
    InvalidFormat { kind: FieldKind, value: String },
}

impl ValidationError {
    /// The field kind that rejected the value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::InvalidFormat { kind, .. } => *kind,
        }
    }

    /// The rejected raw value.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidFormat { value, .. } => value,
        }
    }
}
