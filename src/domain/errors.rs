//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty after trimming.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The phone number still contains non-digit characters after separators are stripped.
    #[error("Invalid phone number format: {0}")]
    InvalidPhoneFormat(String),

    /// The phone number has neither 10 nor 12 digits.
    #[error("Invalid phone number length: {raw} has {digits} digits, expected 10 or 12")]
    InvalidPhoneLength { raw: String, digits: usize },

    /// The (year, month, day) triple is not a real calendar date.
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The date string is not in `YYYY-MM-DD` form.
    #[error("Invalid date string (expected YYYY-MM-DD): {0}")]
    InvalidDateFormat(String),
}
