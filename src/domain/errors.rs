//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly nine digits.
    InvalidPhone(String),

    /// The provided birthday is not a `YYYY-MM-DD` date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidPhone(value) | Self::InvalidBirthday(value) => value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must be 9 digits long"),
            Self::InvalidBirthday(_) => write!(f, "Birthday must be 10 digits long"),
        }
    }
}

impl std::error::Error for ValidationError {}
