//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default snapshot file, relative to the working directory.
pub const DEFAULT_STORAGE_FILE: &str = "address_book.json";

/// Configuration for the address book CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot file loaded at startup and used by `save`/`load` without a path
    pub storage_path: PathBuf,

    /// Entries per page for `show_all` (default: 10)
    pub page_size: usize,

    /// Save to `storage_path` on exit (default: true)
    pub autosave: bool,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Snapshot file path (default: `address_book.json`)
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Entries per page for `show_all` (default: 10)
    /// - `ADDRESS_BOOK_AUTOSAVE`: Save on exit (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine, a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Self::default();

        let storage_path = match env::var("ADDRESS_BOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.storage_path,
        };

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let autosave = Self::parse_env_bool("ADDRESS_BOOK_AUTOSAVE", defaults.autosave)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            storage_path,
            page_size,
            autosave,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_FILE),
            page_size: 10,
            autosave: true,
            log_level: "warn".to_string(),
        }
    }
}
