//! Address book: contact records keyed by name.

use super::Pages;
use crate::error::{AddressBookError, AddressBookResult, PersistenceError, PersistenceResult};
use crate::models::Record;
use crate::storage::{FileSnapshotStore, Snapshot, SnapshotStore};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Number of entries [`AddressBook::iterate`] yields when the caller has no preference.
pub const DEFAULT_PAGE_SIZE: usize = 1;

/// Contact records keyed by name, in insertion order.
///
/// At most one record exists per name. Replacing a record keeps its
/// position; removing one shifts the later records up.
///
/// Records live in a plain vector, so keyed operations scan names linearly.
/// That keeps insertion order trivial and is cheap for a personal address book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

/// Render one entry as `"<name>: <record>"`.
pub(crate) fn render_entry(record: &Record) -> String {
    format!("{}: {}", record.name(), record)
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }

    /// Insert a record, replacing any record with the same name in place.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name()) {
            Some(index) => {
                tracing::debug!(contact = record.name(), "Replacing contact");
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                tracing::debug!(contact = record.name(), "Adding contact");
                self.records.push(record);
                None
            }
        }
    }

    /// Create a record for `name` with a single phone and store it.
    ///
    /// An existing record with the same name is overwritten.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> AddressBookResult<()> {
        let record = Record::new(name, phone, None)?;
        self.add_record(record);
        Ok(())
    }

    /// Replace the record stored under `name` with a fresh one holding only `phone`.
    ///
    /// Prior phones and birthday are discarded. Callers that only want to
    /// change one number should use [`Record::edit_phone`] via
    /// [`AddressBook::lookup_mut`].
    pub fn change_contact(&mut self, name: &str, phone: &str) -> AddressBookResult<()> {
        self.add_contact(name, phone)
    }

    /// Records whose name contains `query`, ignoring case.
    pub fn matching<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Record> + 'a {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(move |r| r.name().to_lowercase().contains(&needle))
    }

    /// Render every matching entry on its own line.
    pub fn search_contact(&self, query: &str) -> String {
        let mut result = String::new();
        for record in self.matching(query) {
            result.push_str(&render_entry(record));
            result.push('\n');
        }
        result
    }

    /// Remove and return the record stored under `name`.
    pub fn remove_contact(&mut self, name: &str) -> AddressBookResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| AddressBookError::NotFound(name.to_string()))?;
        tracing::debug!(contact = name, "Removing contact");
        Ok(self.records.remove(index))
    }

    pub fn lookup(&self, name: &str) -> AddressBookResult<&Record> {
        self.records
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| AddressBookError::NotFound(name.to_string()))
    }

    pub fn lookup_mut(&mut self, name: &str) -> AddressBookResult<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.name() == name)
            .ok_or_else(|| AddressBookError::NotFound(name.to_string()))
    }

    /// The first `page_size` entries rendered as `"<name>: <record>"`.
    ///
    /// Every call starts again from the first contact.
    pub fn iterate(&self, page_size: usize) -> impl Iterator<Item = String> + '_ {
        self.records.iter().take(page_size).map(render_entry)
    }

    /// Walk the whole book `page_size` entries at a time.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages::new(&self.records, page_size)
    }

    /// Capture the current state as a snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.records.clone())
    }

    /// Rebuild a book from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateContact` if two records share a name.
    pub fn from_snapshot(snapshot: Snapshot) -> PersistenceResult<Self> {
        {
            let mut seen = HashSet::new();
            for record in &snapshot.contacts {
                if !seen.insert(record.name()) {
                    return Err(PersistenceError::DuplicateContact(
                        record.name().to_string(),
                    ));
                }
            }
        }
        Ok(Self {
            records: snapshot.contacts,
        })
    }

    /// Write the whole book to `store`, replacing what it held.
    pub fn save_to(&self, store: &dyn SnapshotStore) -> PersistenceResult<()> {
        store.write(&self.snapshot())?;
        tracing::info!(contacts = self.len(), "Address book saved");
        Ok(())
    }

    /// Open the book held by `store`, starting empty if it holds nothing yet.
    ///
    /// # Errors
    ///
    /// Any failure other than a missing snapshot is returned, so a corrupt
    /// file is never silently replaced by an empty book.
    pub fn open(store: &dyn SnapshotStore) -> PersistenceResult<Self> {
        match Self::load_from(store) {
            Err(PersistenceError::Missing { path }) => {
                tracing::info!(path = %path.display(), "No address book yet, starting empty");
                Ok(Self::new())
            }
            other => other,
        }
    }

    /// Read a book from `store`.
    pub fn load_from(store: &dyn SnapshotStore) -> PersistenceResult<Self> {
        let book = Self::from_snapshot(store.read()?)?;
        tracing::info!(contacts = book.len(), "Address book loaded");
        Ok(book)
    }

    /// Write the whole book to the file at `path`, overwriting any previous snapshot.
    pub fn save(&self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        self.save_to(&FileSnapshotStore::new(path))
    }

    /// Read a book from the snapshot file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the file is missing, unreadable or
    /// not a valid snapshot.
    pub fn load(path: impl AsRef<Path>) -> PersistenceResult<Self> {
        Self::load_from(&FileSnapshotStore::new(path))
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", render_entry(record))?;
        }
        Ok(())
    }
}
