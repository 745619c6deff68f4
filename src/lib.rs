//! Address Book - an in-memory contact manager with validated values.
//!
//! Contacts are stored as records holding a name, any number of phone
//! numbers and an optional birthday. Phones and birthdays are validated value
//! objects: they are normalized at construction and can never hold an
//! invalid value.
//!
//! # Architecture
//!
//! - **domain**: Value objects (name, phone number, birthday) and validation errors
//! - **models**: The `Record` aggregate and its summary views
//! - **book**: The name-keyed `AddressBook` collection
//! - **matching**: Fuzzy name and exact phone lookup
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut record = Record::try_new("Sem", Some("098-454-58-96")).unwrap();
//! record.add_phone("067-897-78-78").unwrap();
//! record.change_phone("067-897-78-78", "095-111-0000").unwrap();
//! record.add_birthday(1987, 8, 12).unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//!
//! let summary = book.iterate().next().unwrap();
//! assert_eq!(summary.phones, "+380984545896, +380951110000");
//! assert_eq!(summary.birthday.as_deref(), Some("1987-08-12"));
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;

pub use book::{AddressBook, Summaries, UpcomingBirthday};
pub use config::Config;
pub use domain::{
    validate_birthday, validate_phone, BirthdayDate, ContactName, PhoneNumber, ValidationError,
};
pub use error::{ConfigError, RecordError, RecordResult};
pub use matching::{MatchResult, MatchType, RecordMatcher, RecordQuery};
pub use models::{BirthdayCountdown, ContactSummary, Record};
