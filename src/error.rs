//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::ValidationError`] and are
//! wrapped by [`AddressBookError::Validation`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by address book operations.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// A field value failed its format check
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Reading or writing a snapshot failed
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Malformed or unknown command input
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Errors that can occur while saving or loading a snapshot.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Snapshot file does not exist
    #[error("Snapshot not found: {}", .path.display())]
    Missing { path: PathBuf },

    /// Filesystem access failed
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the snapshot
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// Snapshot contents could not be decoded
    #[error("Invalid snapshot {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot was written by an incompatible format version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// Snapshot holds two records with the same name
    #[error("Duplicate contact in snapshot: {0}")]
    DuplicateContact(String),
}

/// Errors that can occur while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing was entered
    #[error("Empty command")]
    Empty,

    /// Keyword does not name a command
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// A required argument is missing
    #[error("Missing argument <{argument}> for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// More arguments than the command accepts
    #[error("Too many arguments for '{0}'")]
    TooManyArguments(&'static str),

    /// A numeric argument did not parse
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
