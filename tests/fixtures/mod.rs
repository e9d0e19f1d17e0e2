//! Test fixtures and sample data.

use address_book::{AddressBook, Record};

/// Create a sample record with a name and phone.
#[allow(dead_code)]
pub fn sample_record(name: &str, phone: &str) -> Record {
    Record::new(name, phone, None).expect("sample phone must be valid")
}

/// A book holding Alice, BOB and Carol, in that order.
///
/// Alice has two phones and a birthday so round-trips cover every field.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut alice = Record::new("Alice", "111111111", Some("1990-03-14")).unwrap();
    alice.add_phone("111111112").unwrap();
    book.add_record(alice);

    book.add_record(sample_record("BOB", "222222222"));
    book.add_record(sample_record("Carol", "333333333"));
    book
}
