//! Page-by-page traversal of an address book.

use crate::models::Record;

/// Cursor over consecutive pages of rendered `"<name>: <record>"` entries.
///
/// Each call to [`crate::AddressBook::pages`] returns a fresh cursor starting
/// at the first contact; the book itself holds no iteration state.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: &'a [Record],
    page_size: usize,
    offset: usize,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: &'a [Record], page_size: usize) -> Self {
        Self {
            records,
            page_size,
            offset: 0,
        }
    }

    /// Index of the first entry on the next page.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Pages<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.page_size == 0 || self.offset >= self.records.len() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.records.len());
        let page = self.records[self.offset..end]
            .iter()
            .map(super::address_book::render_entry)
            .collect();
        self.offset = end;
        Some(page)
    }
}
