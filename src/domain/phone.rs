//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 9;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9}$").expect("Failed to compile phone regex"));

/// A validated phone number.
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, Phone};
///
/// let phone = Phone::new("123456789").unwrap();
/// assert_eq!(phone.value(), "123456789");
/// assert!(Phone::new("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly nine characters
    /// - Every character is an ASCII digit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        Self::validate(&phone)?;
        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Phone {
    fn validate(value: &str) -> Result<(), ValidationError> {
        if PHONE_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidPhone(value.to_string()))
        }
    }

    fn value(&self) -> &str {
        &self.0
    }

    fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        Self::validate(&value)?;
        self.0 = value;
        Ok(())
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
