//! Shared fixtures for integration tests.

#![allow(dead_code)]

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

/// Build a record, panicking on invalid fixture data.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::try_new(name, None).expect("fixture name is valid");
    for phone in phones {
        record.add_phone(phone).expect("fixture phone is valid");
    }
    record
}

/// Two contacts matching the demo binary.
pub fn demo_book() -> AddressBook {
    let mut sem = sample_record("Sem", &["098-454-58-96", "067-897-78-78"]);
    sem.change_phone("067-897-78-78", "095-111-0000")
        .expect("phone present");
    sem.add_birthday(1987, 8, 12).expect("valid date");

    let bill = sample_record("Bill", &["(067)0000000", "555-888-99-66", "000-777-11-22"]);

    let mut book = AddressBook::new();
    book.add_record(sem);
    book.add_record(bill);
    book
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}
