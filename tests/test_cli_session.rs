//! End-to-end command sessions against the command handler.

use address_book::{AddressBook, CommandHandler, Config, Outcome};
use chrono::NaiveDate;
use std::path::Path;
use tempfile::tempdir;

fn handler_for(path: &Path, autosave: bool) -> CommandHandler {
    let config = Config {
        storage_path: path.to_path_buf(),
        autosave,
        ..Config::default()
    };
    CommandHandler::new(AddressBook::new(), config)
        .with_clock(|| NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
}

fn run(handler: &mut CommandHandler, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| handler.handle_line(line).message().to_string())
        .collect()
}

#[test]
fn test_session_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");

    let mut handler = handler_for(&path, false);
    let replies = run(
        &mut handler,
        &[
            "add Alice 123456789 1990-01-15",
            "add Bob 987654321",
            "save",
        ],
    );
    assert_eq!(replies[2], format!("Saved 2 contacts to {}", path.display()));

    let mut fresh = handler_for(&path, false);
    let replies = run(&mut fresh, &["load", "days Alice", "phone Bob"]);
    assert_eq!(replies[0], format!("Loaded 2 contacts from {}", path.display()));
    assert_eq!(replies[1], "5 days until Alice's birthday");
    assert_eq!(replies[2], "Name: Bob, Phones: 987654321");
}

#[test]
fn test_failed_load_keeps_current_book() {
    let dir = tempdir().unwrap();
    let mut handler = handler_for(&dir.path().join("book.json"), false);

    run(&mut handler, &["add Alice 123456789"]);
    let replies = run(&mut handler, &["load /definitely/not/here.json"]);
    assert!(replies[0].starts_with("Error: Snapshot not found"));
    assert!(handler.book().contains("Alice"));
}

#[test]
fn test_exit_autosaves() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");

    let mut handler = handler_for(&path, true);
    run(&mut handler, &["add Alice 123456789"]);
    assert_eq!(
        handler.handle_line("close"),
        Outcome::Exit("Good bye!".to_string())
    );

    let saved = AddressBook::load(&path).unwrap();
    assert!(saved.contains("Alice"));
}

#[test]
fn test_bad_input_is_reported_and_session_continues() {
    let dir = tempdir().unwrap();
    let mut handler = handler_for(&dir.path().join("book.json"), false);

    let replies = run(
        &mut handler,
        &[
            "fly Alice",
            "add Alice",
            "add Alice 12345",
            "add Alice 123456789 2023-02-30",
            "add Alice 123456789",
        ],
    );
    assert!(replies[0].starts_with("Error: Unknown command: fly"));
    assert!(replies[1].starts_with("Error: Missing argument <phone> for 'add'"));
    assert_eq!(
        replies[2],
        "Error: Phone number must be 9 digits long (got '12345')."
    );
    assert_eq!(
        replies[3],
        "Error: Birthday must be 10 digits long (got '2023-02-30')."
    );
    assert_eq!(replies[4], "Added new contact: Alice, phone: 123456789");
    assert_eq!(handler.into_book().len(), 1);
}
