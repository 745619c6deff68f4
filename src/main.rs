//! Address Book - demo entry point
//!
//! Builds a small address book, applies a few edits and prints every
//! contact as JSON on stdout. Logs go to stderr.

use address_book::{AddressBook, Config, Record};
use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let loaded = Config::from_env();

    // Initialize logging (stderr only so stdout carries just the JSON)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Config::startup_log_level(&loaded)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match loaded {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let book = match build_demo_book() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to build address book: {:#}", e);
            return Err(e);
        }
    };
    info!("Address book holds {} records", book.len());

    let contacts: Vec<_> = book.iterate().collect();
    print_json(&contacts, config.pretty_json)?;

    let today = Local::now().date_naive();
    let upcoming = book.upcoming_birthdays(today, config.upcoming_birthday_days);
    info!(
        "{} birthdays in the next {} days",
        upcoming.len(),
        config.upcoming_birthday_days
    );
    for entry in &upcoming {
        info!("{}: {}", entry.summary.name, entry.countdown);
    }

    Ok(())
}

fn build_demo_book() -> Result<AddressBook> {
    let mut sem = Record::try_new("Sem", Some("098-454-58-96"))?;
    sem.add_phone("067-897-78-78")?;
    sem.change_phone("067-897-78-78", "095-111-0000")?;

    let mut bill = Record::try_new("Bill", Some("(067)0000000"))?;
    bill.add_phone("555-888-99-66")?;
    bill.add_phone("000-777-11-22")?;

    let mut book = AddressBook::new();
    book.add_record(sem);
    book.add_record(bill);

    book.get_mut("Sem")
        .context("Sem missing from address book")?
        .add_birthday(1987, 8, 12)?;

    Ok(book)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
