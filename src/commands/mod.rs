//! Interactive command layer.
//!
//! Parses a line of user input into a [`Command`] and runs it against a
//! [`Session`](crate::session::Session), producing the text to print.

pub mod handlers;
pub mod parser;

pub use handlers::{execute, Outcome, HELP};
pub use parser::{parse, Command};
