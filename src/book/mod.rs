//! The keyed collection of contact records.

mod address_book;
mod pages;

pub use address_book::{AddressBook, DEFAULT_PAGE_SIZE};
pub use pages::Pages;
