//! Command-line front end.
//!
//! - **command**: parsing one input line into a [`Command`]
//! - **handler**: executing commands against an owned [`crate::AddressBook`]
//! - **messages**: turning errors into user-facing text

mod command;
mod handler;
mod messages;

pub use command::Command;
pub use handler::{CommandHandler, Outcome};
pub use messages::{render_error, HELP};
