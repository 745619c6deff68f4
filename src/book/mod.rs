//! The address book collection.

mod address_book;

pub use address_book::{AddressBook, Records, Summaries, UpcomingBirthday};
