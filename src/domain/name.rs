//! Name field.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The contact name. Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }

    fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.0 = value.into();
        Ok(())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_set_is_unconditional() {
        let mut name = Name::new("Alice");
        name.set_value("").unwrap();
        assert_eq!(name.value(), "");
        name.set_value("Bob Smith").unwrap();
        assert_eq!(name.to_string(), "Bob Smith");
    }
}
