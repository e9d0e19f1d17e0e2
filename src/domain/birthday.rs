//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Storage format of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile birthday regex")
});

/// A validated `YYYY-MM-DD` birthday.
///
/// The string form is kept as given; the parsed date backs the
/// days-until-birthday computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` unless the value is ten
    /// characters long and names a real calendar date.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let date = Self::parse(&raw)?;
        Ok(Self { raw, date })
    }

    fn parse(value: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// The parsed date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Days from `today` until the next anniversary of this birthday.
    ///
    /// Returns 0 when `today` is the birthday. A 29 February birthday falls
    /// on 28 February in common years.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> i64 {
        let mut next = anniversary(self.date, today.year());
        if next < today {
            next = anniversary(self.date, today.year() + 1);
        }
        (next - today).num_days().max(0)
    }
}

/// The birthday's month and day in `year`.
fn anniversary(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}

impl Field for Birthday {
    fn validate(value: &str) -> Result<(), ValidationError> {
        Self::parse(value).map(|_| ())
    }

    fn value(&self) -> &str {
        &self.raw
    }

    fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let raw = value.into();
        self.date = Self::parse(&raw)?;
        self.raw = raw;
        Ok(())
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
