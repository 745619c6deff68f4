//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a contact is made
//! of: its name, phone numbers and birthday. Each value object validates at
//! construction time, so an invalid phone or date can never be stored.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::BirthdayDate;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::{PhoneNumber, DEFAULT_COUNTRY_CODE};

/// Validate a raw phone string into its canonical form.
pub fn validate_phone(raw: &str) -> Result<PhoneNumber, ValidationError> {
    PhoneNumber::new(raw)
}

/// Validate a (year, month, day) triple into a birthday.
pub fn validate_birthday(
    year: i32,
    month: u32,
    day: u32,
) -> Result<BirthdayDate, ValidationError> {
    BirthdayDate::new(year, month, day)
}
