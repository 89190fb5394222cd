//! Executes parsed commands against a session.

use crate::commands::parser::Command;
use crate::domain::Phone;
use crate::error::{BookError, CommandResult};
use crate::models::Record;
use crate::repositories::BookRepository;
use crate::session::Session;

/// Text shown by `help`.
pub const HELP: &str = "\
Commands:
  hello                                  greet
  add <name> [phone]                     add a contact, or a phone to an existing one
  change <name> <old phone> <new phone>  replace a phone
  remove-phone <name> <phone>            remove a phone
  phone <name>                           show a contact's phones
  birthday <name> <DD.MM.YYYY>           set a contact's birthday
  days <name>                            days until a contact's birthday
  delete <name>                          delete a contact
  search <text>                          find contacts by name, phone or birthday
  show all                               show every contact
  pages [page size]                      show contacts page by page
  save                                   save the address book
  exit | close | good bye                save and quit
Phones are exactly 10 digits.";

/// What the command loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and keep reading commands
    Reply(String),
    /// Print the message and stop
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Reply(message) | Self::Exit(message) => message,
        }
    }
}

/// Run `command` against the session's book.
///
/// # Errors
///
/// Book errors (missing contact, bad phone or birthday, ...) and storage
/// errors from `save`/`exit` are returned for the caller to report; the
/// session stays usable.
pub fn execute<R: BookRepository>(
    session: &mut Session<R>,
    command: Command,
) -> CommandResult<Outcome> {
    tracing::debug!(?command, "Executing command");

    let reply = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Help => HELP.to_string(),
        Command::Add { name, phone } => add_contact(session, name, phone)?,
        Command::Change { name, old, new } => {
            session.mutate(|book| book.require_mut(&name)?.edit_phone(&old, new))?;
            format!("Phone {} of {} changed", old, name)
        }
        Command::RemovePhone { name, phone } => {
            let record = find_contact(session, &name)?;
            if record.find_phone(&phone).is_none() {
                format!("{} has no phone {}", name, phone)
            } else {
                session.mutate(|book| {
                    book.require_mut(&name).map(|record| record.remove_phone(&phone))
                })?;
                format!("Phone {} removed from {}", phone, name)
            }
        }
        Command::Phone { name } => {
            let record = find_contact(session, &name)?;
            if record.phones().is_empty() {
                format!("{} has no phones", name)
            } else {
                record
                    .phones()
                    .iter()
                    .map(Phone::as_str)
                    .collect::<Vec<_>>()
                    .join("; ")
            }
        }
        Command::Birthday { name, date } => {
            session.mutate(|book| book.require_mut(&name)?.set_birthday(date))?;
            format!("Birthday of {} set", name)
        }
        Command::Days { name } => {
            let record = find_contact(session, &name)?;
            match record.days_to_birthday().map(|delta| delta.num_days()) {
                None => format!("{} has no birthday set", name),
                Some(0) => format!("Today is {}'s birthday!", name),
                Some(1) => format!("1 day until {}'s birthday", name),
                Some(days) => format!("{} days until {}'s birthday", days, name),
            }
        }
        Command::Delete { name } => {
            session.mutate(|book| {
                book.delete(&name)
                    .ok_or_else(|| BookError::ContactNotFound(name.clone()))
            })?;
            format!("Contact {} deleted", name)
        }
        Command::Search { query } => {
            let found = session.book().search_rendered(&query)?;
            if found.is_empty() {
                format!("No contacts match '{}'", query)
            } else {
                found
            }
        }
        Command::ShowAll => {
            if session.book().is_empty() {
                "Address book is empty".to_string()
            } else {
                session
                    .book()
                    .records()
                    .map(Record::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::Pages { size } => {
            let size = size.unwrap_or_else(|| session.page_size());
            let pages: Vec<String> = session.book().iter_pages(size)?.collect();
            if pages.is_empty() {
                "Address book is empty".to_string()
            } else {
                pages.join("\n\n")
            }
        }
        Command::Save => {
            session.save()?;
            "Address book saved".to_string()
        }
        Command::Exit => {
            if session.is_dirty() && !session.is_read_only() {
                session.save()?;
            }
            return Ok(Outcome::Exit("Good bye!".to_string()));
        }
    };

    Ok(Outcome::Reply(reply))
}

fn add_contact<R: BookRepository>(
    session: &mut Session<R>,
    name: String,
    phone: Option<String>,
) -> CommandResult<String> {
    if session.book().contains(&name) {
        return match phone {
            Some(phone) => {
                session.mutate(|book| book.require_mut(&name)?.add_phone(phone))?;
                Ok(format!("Phone added to {}", name))
            }
            None => Ok(format!("Contact {} already exists", name)),
        };
    }

    // Build the whole record first so a bad phone adds nothing
    session.mutate(|book| -> CommandResult<()> {
        let mut record = Record::new(name.as_str())?;
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        book.add_record(record);
        Ok(())
    })?;
    Ok(format!("Contact {} added", name))
}

fn find_contact<'a, R: BookRepository>(
    session: &'a Session<R>,
    name: &str,
) -> CommandResult<&'a Record> {
    session
        .book()
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
}
