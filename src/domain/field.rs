//! The common field contract.

use super::errors::ValidationError;
use std::fmt;

/// A single named scalar value belonging to a contact record.
///
/// Implementors hold a string value and may reject assignments that fail
/// their format check. A failed [`Field::set_value`] leaves the previous
/// value untouched.
pub trait Field: fmt::Display {
    /// Check a candidate value against the field's format.
    ///
    /// The default accepts everything.
    fn validate(_value: &str) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Get the current value.
    fn value(&self) -> &str;

    /// Replace the current value, validating it first.
    fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError>;
}
