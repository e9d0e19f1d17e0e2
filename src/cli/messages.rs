//! User-facing text.
//!
//! Every error the core raises is rendered here, in one place, so the
//! command loop can report it and carry on.

use crate::error::AddressBookError;

/// Command overview printed by `help`.
pub const HELP: &str = "\
Commands:
  hello                          greet
  add <name> <phone> [birthday]  add a new contact (phone: 9 digits, birthday: YYYY-MM-DD)
  change <name> <phone>          replace a contact with one holding only <phone>
  phone <name>                   show a contact
  add_phone <name> <phone>       add another phone number
  remove_phone <name> <phone>    remove a phone number
  edit_phone <name> <old> <new>  replace a phone number
  birthday <name> <date>         set the birthday
  days <name>                    days until the next birthday
  search <query>                 find contacts by part of the name
  list [n]                       show the first n contacts (default 1)
  show_all                       show every contact, page by page
  remove <name>                  delete a contact
  save [path]                    write the address book to disk
  load [path]                    replace the address book with a saved one
  exit | close | goodbye | .     leave";

/// Render an error for the console.
pub fn render_error(error: &AddressBookError) -> String {
    match error {
        AddressBookError::Validation(e) => {
            format!("Error: {} (got '{}').", e, e.value())
        }
        AddressBookError::NotFound(name) => {
            format!("Error: no contact named '{}'.", name)
        }
        AddressBookError::Persistence(e) => format!("Error: {}.", e),
        AddressBookError::Command(e) => {
            format!("Error: {}. Type 'help' for the list of commands.", e)
        }
    }
}
