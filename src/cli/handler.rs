//! Command execution.

use super::messages::{render_error, HELP};
use super::Command;
use crate::book::{AddressBook, DEFAULT_PAGE_SIZE};
use crate::config::Config;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use chrono::NaiveDate;

/// What the command loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and read the next command.
    Reply(String),
    /// Print the farewell and stop.
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Reply(message) | Outcome::Exit(message) => message,
        }
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Executes commands against the address book it owns.
pub struct CommandHandler {
    book: AddressBook,
    config: Config,
    clock: fn() -> NaiveDate,
}

impl CommandHandler {
    pub fn new(book: AddressBook, config: Config) -> Self {
        Self {
            book,
            config,
            clock: local_today,
        }
    }

    /// Replace the source of "today" used by `days`.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Parse and execute one input line, rendering any error as the reply.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let result = line
            .parse::<Command>()
            .map_err(AddressBookError::from)
            .and_then(|command| self.execute(command));

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(error = %e, "Command failed");
                Outcome::Reply(render_error(&e))
            }
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> AddressBookResult<Outcome> {
        let reply = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Help => HELP.to_string(),
            Command::Add {
                name,
                phone,
                birthday,
            } => {
                if self.book.contains(&name) {
                    format!("Contact {} already exists. Not added.", name)
                } else {
                    let record = Record::new(name.as_str(), phone.as_str(), birthday.as_deref())?;
                    self.book.add_record(record);
                    format!("Added new contact: {}, phone: {}", name, phone)
                }
            }
            Command::Change { name, phone } => {
                if !self.book.contains(&name) {
                    return Err(AddressBookError::NotFound(name));
                }
                self.book.change_contact(&name, &phone)?;
                format!("Changed phone for {} to {}", name, phone)
            }
            Command::Phone { name } => self.book.lookup(&name)?.to_string(),
            Command::AddPhone { name, phone } => {
                self.book.lookup_mut(&name)?.add_phone(phone.as_str())?;
                format!("Added phone {} to {}", phone, name)
            }
            Command::RemovePhone { name, phone } => {
                match self.book.lookup_mut(&name)?.remove_phone(&phone) {
                    0 => format!("{} has no phone {}. Nothing removed.", name, phone),
                    _ => format!("Removed phone {} from {}", phone, name),
                }
            }
            Command::EditPhone { name, old, new } => {
                match self.book.lookup_mut(&name)?.edit_phone(&old, &new)? {
                    0 => format!("{} has no phone {}. Nothing changed.", name, old),
                    _ => format!("Changed phone {} to {} for {}", old, new, name),
                }
            }
            Command::SetBirthday { name, date } => {
                self.book.lookup_mut(&name)?.set_birthday(&date)?;
                format!("Birthday of {} set to {}", name, date)
            }
            Command::DaysToBirthday { name } => {
                let today = (self.clock)();
                match self.book.lookup(&name)?.days_to_birthday(today) {
                    Some(0) => format!("Today is {}'s birthday!", name),
                    Some(days) => format!("{} days until {}'s birthday", days, name),
                    None => format!("No birthday date for {}", name),
                }
            }
            Command::Search { query } => {
                let found = self.book.search_contact(&query);
                if found.is_empty() {
                    format!("No contacts matching '{}'.", query)
                } else {
                    found.trim_end().to_string()
                }
            }
            Command::List { page_size } => {
                let entries: Vec<String> = self
                    .book
                    .iterate(page_size.unwrap_or(DEFAULT_PAGE_SIZE))
                    .collect();
                if entries.is_empty() {
                    "No contacts saved.".to_string()
                } else {
                    entries.join("\n")
                }
            }
            Command::ShowAll => self.show_all(),
            Command::Remove { name } => {
                self.book.remove_contact(&name)?;
                format!("Removed contact {}", name)
            }
            Command::Save { path } => {
                let path = path.unwrap_or_else(|| self.config.storage_path.clone());
                self.book.save(&path)?;
                format!("Saved {} contacts to {}", self.book.len(), path.display())
            }
            Command::Load { path } => {
                let path = path.unwrap_or_else(|| self.config.storage_path.clone());
                self.book = AddressBook::load(&path)?;
                format!("Loaded {} contacts from {}", self.book.len(), path.display())
            }
            Command::Exit => return Ok(Outcome::Exit(self.shutdown())),
        };
        Ok(Outcome::Reply(reply))
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts saved.".to_string();
        }
        let mut lines = vec!["All contacts:".to_string()];
        let pages = self.book.pages(self.config.page_size);
        for (number, page) in pages.enumerate() {
            lines.push(format!("-- page {} --", number + 1));
            lines.extend(page);
        }
        lines.join("\n")
    }

    /// Save the book if autosave is on and return the farewell message.
    pub fn shutdown(&self) -> String {
        let farewell = "Good bye!".to_string();
        if !self.config.autosave {
            return farewell;
        }
        match self.book.save(&self.config.storage_path) {
            Ok(()) => farewell,
            Err(e) => {
                tracing::error!("Failed to save address book: {}", e);
                format!("{}\n{}", render_error(&AddressBookError::from(e)), farewell)
            }
        }
    }
}
