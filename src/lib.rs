//! Contact Book - a command-line address book with validated contacts.
//!
//! Stores names, phone numbers and birthdays, supports add/edit/delete,
//! substring search and paged listing, and persists the whole book to a
//! JSON file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday)
//! - **models**: Contact records and the address book
//! - **search**: Case-insensitive substring matching
//! - **repositories**: JSON codec and file-backed persistence
//! - **session**: The current book and its repository
//! - **commands**: Command parsing and execution
//! - **repl**: The interactive loop over any reader and writer
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use commands::{Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, FieldKind, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Pages, Record};
pub use repositories::{BookRepository, JsonFileRepository};
pub use session::Session;
