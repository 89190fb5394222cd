//! Turns a line of user input into a [`Command`].

use crate::error::{CommandError, CommandResult};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    /// Create a contact if absent, optionally adding a phone
    Add { name: String, phone: Option<String> },
    /// Replace one of a contact's phones
    Change { name: String, old: String, new: String },
    RemovePhone { name: String, phone: String },
    /// List a contact's phones
    Phone { name: String },
    Birthday { name: String, date: String },
    /// Days until a contact's birthday
    Days { name: String },
    Delete { name: String },
    Search { query: String },
    ShowAll,
    /// Show the book page by page; `None` uses the configured size
    Pages { size: Option<usize> },
    Save,
    Exit,
}

pub const USAGE_ADD: &str = "add <name> [phone]";
pub const USAGE_CHANGE: &str = "change <name> <old phone> <new phone>";
pub const USAGE_REMOVE_PHONE: &str = "remove-phone <name> <phone>";
pub const USAGE_PHONE: &str = "phone <name>";
pub const USAGE_BIRTHDAY: &str = "birthday <name> <DD.MM.YYYY>";
pub const USAGE_DAYS: &str = "days <name>";
pub const USAGE_DELETE: &str = "delete <name>";
pub const USAGE_SEARCH: &str = "search <text>";
pub const USAGE_PAGES: &str = "pages [page size]";

/// Parse one input line.
///
/// The verb is case-insensitive; arguments are whitespace separated. `search`
/// takes the rest of the line as its query.
///
/// # Errors
///
/// - `CommandError::Empty` for a blank line
/// - `CommandError::Unknown` for an unrecognized verb
/// - `CommandError::Usage` when the arguments do not fit the verb
/// - `CommandError::InvalidArgument` for a page size that is not a number
pub fn parse(line: &str) -> CommandResult<Command> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().ok_or(CommandError::Empty)?.to_lowercase();
    let args: Vec<&str> = tokens.collect();

    let command = match (verb.as_str(), args.as_slice()) {
        ("hello" | "hi", []) => Command::Hello,
        ("help", []) => Command::Help,
        ("add", [name]) => Command::Add {
            name: name.to_string(),
            phone: None,
        },
        ("add", [name, phone]) => Command::Add {
            name: name.to_string(),
            phone: Some(phone.to_string()),
        },
        ("add", _) => return Err(CommandError::Usage(USAGE_ADD)),
        ("change", [name, old, new]) => Command::Change {
            name: name.to_string(),
            old: old.to_string(),
            new: new.to_string(),
        },
        ("change", _) => return Err(CommandError::Usage(USAGE_CHANGE)),
        ("remove-phone", [name, phone]) => Command::RemovePhone {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ("remove-phone", _) => return Err(CommandError::Usage(USAGE_REMOVE_PHONE)),
        ("phone", [name]) => Command::Phone {
            name: name.to_string(),
        },
        ("phone", _) => return Err(CommandError::Usage(USAGE_PHONE)),
        ("birthday", [name, date]) => Command::Birthday {
            name: name.to_string(),
            date: date.to_string(),
        },
        ("birthday", _) => return Err(CommandError::Usage(USAGE_BIRTHDAY)),
        ("days", [name]) => Command::Days {
            name: name.to_string(),
        },
        ("days", _) => return Err(CommandError::Usage(USAGE_DAYS)),
        ("delete", [name]) => Command::Delete {
            name: name.to_string(),
        },
        ("delete", _) => return Err(CommandError::Usage(USAGE_DELETE)),
        ("search", []) => return Err(CommandError::Usage(USAGE_SEARCH)),
        ("search", query) => Command::Search {
            query: query.join(" "),
        },
        ("show", [all]) if all.eq_ignore_ascii_case("all") => Command::ShowAll,
        ("pages", []) => Command::Pages { size: None },
        ("pages", [size]) => Command::Pages {
            size: Some(parse_page_size(size)?),
        },
        ("pages", _) => return Err(CommandError::Usage(USAGE_PAGES)),
        ("save", []) => Command::Save,
        ("exit" | "close", []) => Command::Exit,
        ("good", [bye]) if bye.eq_ignore_ascii_case("bye") => Command::Exit,
        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };

    Ok(command)
}

fn parse_page_size(raw: &str) -> CommandResult<usize> {
    raw.parse::<usize>()
        .map_err(|_| CommandError::InvalidArgument {
            value: raw.to_string(),
            reason: "page size must be a whole number".to_string(),
        })
}
