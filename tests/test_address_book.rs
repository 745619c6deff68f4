//! Integration tests for records inside an address book.
//!
//! These tests drive the public API the way a host application would:
//! build records, store them, edit them in place and read summaries back.

mod common;

use address_book::{
    AddressBook, BirthdayCountdown, MatchType, Record, RecordError, RecordQuery, ValidationError,
};
use common::{date, demo_book, sample_record};

/// Test the demo scenario end to end.
///
/// This test validates:
/// - A changed phone is removed and its replacement appended
/// - A birthday attached after insertion is visible through the book
/// - Summaries come back in insertion order
#[test]
fn test_demo_scenario() {
    let book = demo_book();

    let summaries: Vec<_> = book.iterate().collect();
    assert_eq!(summaries.len(), 2);

    assert_eq!(summaries[0].name, "Sem");
    assert_eq!(summaries[0].phones, "+380984545896, +380951110000");
    assert_eq!(summaries[0].birthday.as_deref(), Some("1987-08-12"));

    assert_eq!(summaries[1].name, "Bill");
    assert_eq!(
        summaries[1].phones,
        "+380670000000, +385558889966, +380007771122"
    );
    assert_eq!(summaries[1].birthday, None);
}

#[test]
fn test_change_phone_through_book() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Ann", &["+380671234567"]));

    let record = book.get_mut("Ann").unwrap();
    record.change_phone("067 123 45 67", "099-000-00-00").unwrap();

    assert!(record.has_phone("+380990000000").unwrap());
    assert!(!record.has_phone("+380671234567").unwrap());
    assert_eq!(book.all_summaries()[0].1.phones, "+380990000000");
}

#[test]
fn test_change_phone_missing_leaves_record_untouched() {
    let mut book = demo_book();
    let before = book.get("Bill").unwrap().clone();

    let result = book
        .get_mut("Bill")
        .unwrap()
        .change_phone("0501112233", "0990000000");

    assert_eq!(
        result,
        Err(RecordError::PhoneNotFound("+380501112233".to_string()))
    );
    assert_eq!(book.get("Bill").unwrap(), &before);
}

#[test]
fn test_same_name_overwrites() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Sem", &["0984545896"]));
    book.add_record(sample_record("Sem", &["0501112233", "0670000000"]));

    let summaries = book.all_summaries();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].0, "Sem");
    assert_eq!(summaries[0].1.phones, "+380501112233, +380670000000");
}

/// Test that a record can be reached by the same padded name it was created with.
///
/// This test validates:
/// - Lookups trim the name the same way the stored key was trimmed
/// - Removing by a padded name actually removes the record
#[test]
fn test_padded_name_round_trip() {
    let mut book = AddressBook::new();
    book.add_record(Record::try_new(" Sem ", Some("0984545896")).unwrap());

    assert!(book.contains(" Sem "));
    book.get_mut(" Sem ").unwrap().add_birthday(1987, 8, 12).unwrap();
    assert_eq!(
        book.get(" Sem ").unwrap().birthday().map(|b| b.to_string()),
        Some("1987-08-12".to_string())
    );

    assert!(book.remove_record(" Sem ").is_some());
    assert_eq!(book.len(), 0);
    assert!(!book.contains("Sem"));
}

#[test]
fn test_all_summaries_follow_insertion_order() {
    let book = demo_book();
    let names: Vec<String> = book.all_summaries().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Sem", "Bill"]);
}

#[test]
fn test_remove_unknown_record_is_noop() {
    let mut book = demo_book();
    assert!(book.remove_record("Nobody").is_none());
    assert_eq!(book.len(), 2);

    assert!(book.remove_record("Sem").is_some());
    assert!(book.remove_record("Sem").is_none());
    assert_eq!(book.names().collect::<Vec<_>>(), vec!["Bill"]);
}

#[test]
fn test_iterate_reflects_later_edits() {
    let mut book = demo_book();
    let before: Vec<_> = book.iterate().collect();

    book.get_mut("Bill").unwrap().add_birthday(1990, 3, 4).unwrap();
    let after: Vec<_> = book.iterate().collect();

    assert_eq!(before[1].birthday, None);
    assert_eq!(after[1].birthday.as_deref(), Some("1990-03-04"));
}

#[test]
fn test_invalid_input_never_stored() {
    let mut record = sample_record("Sem", &["0984545896"]);

    assert!(matches!(
        record.add_phone("12-34"),
        Err(RecordError::Validation(ValidationError::InvalidPhoneLength { .. }))
    ));
    assert!(matches!(
        record.add_birthday(2023, 2, 29),
        Err(RecordError::Validation(ValidationError::InvalidDate { .. }))
    ));

    assert_eq!(record.phones().len(), 1);
    assert!(record.birthday().is_none());
}

#[test]
fn test_birthday_countdown_branches() {
    let mut record = Record::try_new("Sem", None).unwrap();
    record.add_birthday(1990, 12, 31).unwrap();

    let ahead = record.days_to_birthday_from(date(2024, 1, 1)).unwrap();
    assert_eq!(ahead, BirthdayCountdown::ThisYear(365));
    assert_eq!(ahead.to_string(), "Left to birthday 365 days.");

    record.add_birthday(1990, 1, 1).unwrap();
    let passed = record.days_to_birthday_from(date(2024, 1, 2)).unwrap();
    assert_eq!(passed, BirthdayCountdown::NextYear(365));
    assert_eq!(passed.to_string(), "Birthday will be through 365 days.");
}

#[test]
fn test_find_records() {
    let book = demo_book();

    let by_phone = book.find(
        &RecordQuery {
            phone: Some("555 888 99 66".to_string()),
            ..Default::default()
        },
        5,
        0,
    );
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].record.name().as_str(), "Bill");
    assert_eq!(by_phone[0].match_type, MatchType::ExactPhone);

    let by_name = book.find(
        &RecordQuery {
            name: Some("sem".to_string()),
            ..Default::default()
        },
        5,
        50,
    );
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].record.name().as_str(), "Sem");
    assert_eq!(by_name[0].confidence, 95);
}

#[test]
fn test_upcoming_birthdays_window() {
    let book = demo_book();

    let upcoming = book.upcoming_birthdays(date(2024, 8, 1), 14);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].summary.name, "Sem");
    assert_eq!(upcoming[0].countdown.days(), 11);

    assert!(book.upcoming_birthdays(date(2024, 8, 13), 14).is_empty());
}

#[test]
fn test_summaries_serialize_as_json() {
    let book = demo_book();
    let json = serde_json::to_value(book.iterate().collect::<Vec<_>>()).unwrap();

    assert_eq!(json[0]["name"], "Sem");
    assert_eq!(json[0]["birthday"], "1987-08-12");
    assert!(json[1]["birthday"].is_null());
}
