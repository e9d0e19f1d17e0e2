//! Address Book - Main entry point
//!
//! Reads commands from stdin, one per line, and prints replies to stdout.
//! Logs go to stderr.

use address_book::storage::FileSnapshotStore;
use address_book::{AddressBook, CommandHandler, Config, Outcome};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let store = FileSnapshotStore::new(&config.storage_path);
    let book = AddressBook::open(&store).with_context(|| {
        format!(
            "Failed to load address book from {}",
            store.path().display()
        )
    })?;

    let mut handler = CommandHandler::new(book, config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("How can I help you? Type 'help' for the list of commands.");
    loop {
        print!("Enter command: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input behaves like `exit`
            println!();
            println!("{}", handler.shutdown());
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match handler.handle_line(&line) {
            Outcome::Reply(message) => println!("{}", message),
            Outcome::Exit(message) => {
                println!("{}", message);
                break;
            }
        }
    }

    if let Err(e) = stdout.flush() {
        error!("Failed to flush stdout: {}", e);
    }
    info!("Address book session finished");
    Ok(())
}
