//! Contact record representing one person in the address book.

use crate::domain::{Birthday, Field, Name, Phone, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an ordered list of phone numbers and an optional birthday.
///
/// Phone numbers keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    name: Name,

    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with one phone number and an optional birthday.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the phone or the birthday is malformed.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let phone = Phone::new(phone)?;
        let birthday = birthday.map(Birthday::new).transpose()?;
        Ok(Self {
            name: Name::new(name),
            phones: vec![phone],
            birthday,
        })
    }

    /// The contact name.
    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone entry equal to `phone`. Returns how many were removed.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();
        tracing::debug!(contact = %self.name, phone, removed, "Removed phone");
        removed
    }

    /// Replace every phone entry equal to `old` with `new`.
    ///
    /// Returns how many entries were replaced. When nothing matches the
    /// record is left as is and `new` is not checked.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        if !self.phones.iter().any(|p| p.as_str() == old) {
            return Ok(0);
        }
        Phone::validate(new)?;

        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            phone.set_value(new)?;
            replaced += 1;
        }
        tracing::debug!(contact = %self.name, old, new, replaced, "Edited phone");
        Ok(replaced)
    }

    /// Attach or replace the birthday.
    pub fn set_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        match self.birthday.as_mut() {
            Some(birthday) => birthday.set_value(date)?,
            None => self.birthday = Some(Birthday::new(date)?),
        }
        Ok(())
    }

    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Days from `today` until the next birthday, or `None` when no birthday is set.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .as_ref()
            .map(|birthday| birthday.days_to_next_birthday(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Name: {}, Phones: {}", self.name, phones)?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_values(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("Alice", "123456789", None).unwrap();
        assert_eq!(record.name(), "Alice");
        assert_eq!(phone_values(&record), vec!["123456789"]);
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_new_validates_fields() {
        assert!(Record::new("Alice", "123", None).is_err());
        assert!(Record::new("Alice", "123456789", Some("2000-1-1")).is_err());
        assert!(Record::new("Alice", "123456789", Some("2000-01-01")).is_ok());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = Record::new("Alice", "111111111", None).unwrap();
        record.add_phone("222222222").unwrap();
        record.add_phone("111111111").unwrap();
        assert_eq!(
            phone_values(&record),
            vec!["111111111", "222222222", "111111111"]
        );

        assert!(record.add_phone("abc").is_err());
        assert_eq!(record.phones().len(), 3);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = Record::new("Alice", "111111111", None).unwrap();
        record.add_phone("222222222").unwrap();
        record.add_phone("111111111").unwrap();

        assert_eq!(record.remove_phone("111111111"), 2);
        assert_eq!(phone_values(&record), vec!["222222222"]);

        assert_eq!(record.remove_phone("999999999"), 0);
        assert_eq!(phone_values(&record), vec!["222222222"]);
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = Record::new("Alice", "123456789", None).unwrap();
        record.add_phone("555555555").unwrap();

        assert_eq!(record.edit_phone("123456789", "987654321").unwrap(), 1);
        assert_eq!(phone_values(&record), vec!["987654321", "555555555"]);
    }

    #[test]
    fn test_edit_phone_without_match_is_noop() {
        let mut record = Record::new("Alice", "123456789", None).unwrap();
        assert_eq!(record.edit_phone("000000000", "x").unwrap(), 0);
        assert_eq!(phone_values(&record), vec!["123456789"]);
    }

    #[test]
    fn test_edit_phone_rejects_invalid_replacement() {
        let mut record = Record::new("Alice", "123456789", None).unwrap();
        assert!(record.edit_phone("123456789", "x").is_err());
        assert_eq!(phone_values(&record), vec!["123456789"]);
    }

    #[test]
    fn test_days_to_birthday() {
        let today = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let mut record = Record::new("Alice", "123456789", None).unwrap();
        assert_eq!(record.days_to_birthday(today), None);

        record.set_birthday("2000-01-01").unwrap();
        assert_eq!(record.days_to_birthday(today), Some(200));

        record.set_birthday("2000-06-20").unwrap();
        assert_eq!(record.days_to_birthday(today), Some(5));

        assert!(record.set_birthday("June 20").is_err());
        assert_eq!(record.birthday().map(Birthday::value), Some("2000-06-20"));

        record.clear_birthday();
        assert_eq!(record.days_to_birthday(today), None);
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new("Alice", "123456789", None).unwrap();
        record.add_phone("987654321").unwrap();
        assert_eq!(
            record.to_string(),
            "Name: Alice, Phones: 123456789, 987654321"
        );

        record.set_birthday("1990-03-14").unwrap();
        assert_eq!(
            record.to_string(),
            "Name: Alice, Phones: 123456789, 987654321, Birthday: 1990-03-14"
        );
    }

    #[test]
    fn test_record_serialization() {
        let record = Record::new("Alice", "123456789", Some("2000-01-01")).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","phones":["123456789"],"birthday":"2000-01-01"}"#
        );

        let without_birthday = Record::new("Bob", "987654321", None).unwrap();
        let json = serde_json::to_string(&without_birthday).unwrap();
        assert!(!json.contains("birthday"));
    }

    #[test]
    fn test_record_deserialization_validates_phones() {
        let json = r#"{"name":"Alice","phones":["12"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_deserialization_requires_known_fields() {
        let misspelled = r#"{"name":"Alice","phone":["123456789"]}"#;
        assert!(serde_json::from_str::<Record>(misspelled).is_err());

        let without_phones = r#"{"name":"Alice"}"#;
        assert!(serde_json::from_str::<Record>(without_phones).is_err());

        let no_phones = r#"{"name":"Alice","phones":[]}"#;
        let record: Record = serde_json::from_str(no_phones).unwrap();
        assert!(record.phones().is_empty());
    }
}
