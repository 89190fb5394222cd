//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A value failed its field format
    #[error(transparent)]
    Format(#[from] ValidationError),

    /// Birthday can only be set once
    #[error("Birthday already set for {0}")]
    BirthdayAlreadySet(String),

    /// Phone referenced by an edit is not on the record
    #[error("Phone {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    /// No contact stored under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// Page size must be at least one
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),

    /// Search query is blank
    #[error("Search query cannot be empty")]
    EmptyQuery,
}

/// Errors that can occur while loading or saving an address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored bytes are not a valid address book
    #[error("Corrupt address book data: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Stored data uses a layout this build cannot read
    #[error("Unsupported address book version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// Session refuses to write because its stores could not be read
    #[error("Saving is disabled for this session: {0}")]
    ReadOnly(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the command loop.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Input was empty
    #[error("Enter a command (type 'help' for the list)")]
    Empty,

    /// Verb is not a known command
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// Wrong number or shape of arguments
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// Argument could not be interpreted
    #[error("Invalid argument '{value}': {reason}")]
    InvalidArgument { value: String, reason: String },

    /// The book rejected the operation
    #[error(transparent)]
    Book(#[from] BookError),

    /// Persisting the book failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Format(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
