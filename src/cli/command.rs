//! Command parsing.

use crate::error::{CommandError, CommandResult};
use std::path::PathBuf;
use std::str::FromStr;
use std::str::SplitWhitespace;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    Change {
        name: String,
        phone: String,
    },
    /// Show one contact.
    Phone {
        name: String,
    },
    AddPhone {
        name: String,
        phone: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    EditPhone {
        name: String,
        old: String,
        new: String,
    },
    SetBirthday {
        name: String,
        date: String,
    },
    DaysToBirthday {
        name: String,
    },
    Search {
        query: String,
    },
    /// Show the first `page_size` contacts.
    List {
        page_size: Option<usize>,
    },
    /// Show every contact, page by page.
    ShowAll,
    Remove {
        name: String,
    },
    Save {
        path: Option<PathBuf>,
    },
    Load {
        path: Option<PathBuf>,
    },
    Exit,
}

/// Positional argument reader for one command.
struct Args<'a> {
    command: &'static str,
    words: SplitWhitespace<'a>,
}

impl Args<'_> {
    fn required(&mut self, argument: &'static str) -> CommandResult<String> {
        self.words
            .next()
            .map(str::to_string)
            .ok_or(CommandError::MissingArgument {
                command: self.command,
                argument,
            })
    }

    fn optional(&mut self) -> Option<String> {
        self.words.next().map(str::to_string)
    }

    fn finish<T>(mut self, command: T) -> CommandResult<T> {
        match self.words.next() {
            Some(_) => Err(CommandError::TooManyArguments(self.command)),
            None => Ok(command),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> CommandResult<Self> {
        let line = line.trim();
        if line == "." {
            return Ok(Command::Exit);
        }

        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?.to_lowercase();
        let args = |command| Args { command, words };

        match keyword.as_str() {
            "hello" => args("hello").finish(Command::Hello),
            "help" => args("help").finish(Command::Help),
            "add" => {
                let mut args = args("add");
                let name = args.required("name")?;
                let phone = args.required("phone")?;
                let birthday = args.optional();
                args.finish(Command::Add {
                    name,
                    phone,
                    birthday,
                })
            }
            "change" => {
                let mut args = args("change");
                let name = args.required("name")?;
                let phone = args.required("phone")?;
                args.finish(Command::Change { name, phone })
            }
            "phone" => {
                let mut args = args("phone");
                let name = args.required("name")?;
                args.finish(Command::Phone { name })
            }
            "add_phone" => {
                let mut args = args("add_phone");
                let name = args.required("name")?;
                let phone = args.required("phone")?;
                args.finish(Command::AddPhone { name, phone })
            }
            "remove_phone" => {
                let mut args = args("remove_phone");
                let name = args.required("name")?;
                let phone = args.required("phone")?;
                args.finish(Command::RemovePhone { name, phone })
            }
            "edit_phone" => {
                let mut args = args("edit_phone");
                let name = args.required("name")?;
                let old = args.required("old")?;
                let new = args.required("new")?;
                args.finish(Command::EditPhone { name, old, new })
            }
            "birthday" => {
                let mut args = args("birthday");
                let name = args.required("name")?;
                let date = args.required("date")?;
                args.finish(Command::SetBirthday { name, date })
            }
            "days" => {
                let mut args = args("days");
                let name = args.required("name")?;
                args.finish(Command::DaysToBirthday { name })
            }
            "search" => {
                let mut args = args("search");
                let query = args.required("query")?;
                args.finish(Command::Search { query })
            }
            "list" => {
                let mut args = args("list");
                let page_size = args
                    .optional()
                    .map(|n| n.parse::<usize>().map_err(|_| CommandError::InvalidNumber(n)))
                    .transpose()?;
                args.finish(Command::List { page_size })
            }
            "show_all" | "get_contacts" => args("show_all").finish(Command::ShowAll),
            "remove" | "delete" => {
                let mut args = args("remove");
                let name = args.required("name")?;
                args.finish(Command::Remove { name })
            }
            "save" => {
                let mut args = args("save");
                let path = args.optional().map(PathBuf::from);
                args.finish(Command::Save { path })
            }
            "load" => {
                let mut args = args("load");
                let path = args.optional().map(PathBuf::from);
                args.finish(Command::Load { path })
            }
            "exit" | "close" | "goodbye" => args("exit").finish(Command::Exit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
