//! Address Book - a command-line contact manager.
//!
//! Contacts carry a name, any number of phone numbers and an optional
//! birthday. Fields are validated on every assignment, and the whole book is
//! persisted as a single snapshot file.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday)
//! - **models**: The contact record
//! - **book**: The keyed collection of records
//! - **storage**: Snapshot persistence
//! - **cli**: Command parsing, execution and error rendering
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{AddressBook, Pages, DEFAULT_PAGE_SIZE};
pub use cli::{Command, CommandHandler, Outcome};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, CommandError, ConfigError, PersistenceError};
pub use models::Record;
pub use storage::{FileSnapshotStore, Snapshot, SnapshotStore};
