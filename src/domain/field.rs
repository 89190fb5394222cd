//! Generic validated field.
//!
//! A [`ValidatedField`] can only be built through its format's predicate, so
//! holding one is proof that the raw value is well formed. Replacing a field
//! means building a new one; a rejected value never touches the old field.

use super::errors::{FieldKind, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Format rule attached to a field kind.
pub trait FieldFormat {
    /// Kind reported in validation errors.
    const KIND: FieldKind;

    /// Value extracted from the raw string during validation.
    type Parsed: Clone + fmt::Debug;

    /// Parse the raw value, returning `None` when it violates the format.
    fn parse(raw: &str) -> Option<Self::Parsed>;
}

/// A raw string value that satisfies the format `F`.
pub struct ValidatedField<F: FieldFormat> {
    raw: String,
    parsed: F::Parsed,
    _format: PhantomData<F>,
}

impl<F: FieldFormat> ValidatedField<F> {
    /// Validate `raw` against the field format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` carrying the field kind and
    /// the rejected value.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        match F::parse(&raw) {
            Some(parsed) => Ok(Self {
                raw,
                parsed,
                _format: PhantomData,
            }),
            None => Err(ValidationError::InvalidFormat {
                kind: F::KIND,
                value: raw,
            }),
        }
    }

    /// The field kind.
    pub fn kind(&self) -> FieldKind {
        F::KIND
    }

    /// Get the raw value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub(crate) fn parsed(&self) -> &F::Parsed {
        &self.parsed
    }
}

impl<F: FieldFormat> Clone for ValidatedField<F> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            parsed: self.parsed.clone(),
            _format: PhantomData,
        }
    }
}

impl<F: FieldFormat> fmt::Debug for ValidatedField<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(F::KIND.display_name()).field(&self.raw).finish()
    }
}

// Parsed is derived from raw, so raw alone decides equality.
impl<F: FieldFormat> PartialEq for ValidatedField<F> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<F: FieldFormat> Eq for ValidatedField<F> {}

impl<F: FieldFormat> Hash for ValidatedField<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<F: FieldFormat> PartialEq<str> for ValidatedField<F> {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl<F: FieldFormat> PartialEq<&str> for ValidatedField<F> {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

// Serde support - serialize as the raw string
impl<F: FieldFormat> Serialize for ValidatedField<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, F: FieldFormat> Deserialize<'de> for ValidatedField<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ValidatedField::new(s).map_err(serde::de::Error::custom)
    }
}

// Display renders the raw value untouched
impl<F: FieldFormat> fmt::Display for ValidatedField<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
