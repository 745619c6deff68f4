//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Country code prepended to 10-digit domestic numbers.
pub const DEFAULT_COUNTRY_CODE: &str = "38";

/// Characters stripped from raw input before the digit check.
const SEPARATORS: [char; 4] = ['(', ')', '-', ' '];

/// A validated, canonical international phone number.
///
/// The canonical form is always `+` followed by 12 digits. Raw input may
/// contain a leading `+`, parentheses, hyphens and spaces; a 10-digit
/// domestic number gets the default country code prepended.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(067) 123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "+380671234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize and validate a raw phone string.
    ///
    /// # Validation Rules
    ///
    /// - Surrounding whitespace and a single leading `+` are removed
    /// - `(`, `)`, `-` and spaces are removed
    /// - Everything left must be an ASCII digit
    /// - 12 digits are kept as is, 10 digits get the `38` country code
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if a non-digit remains,
    /// or `ValidationError::InvalidPhoneLength` for any other digit count.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let trimmed = raw.trim();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits: String = unsigned
            .chars()
            .filter(|c| !SEPARATORS.contains(c))
            .collect();

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhoneFormat(raw.to_string()));
        }

        match digits.len() {
            12 => Ok(Self(format!("+{}", digits))),
            10 => Ok(Self(format!("+{}{}", DEFAULT_COUNTRY_CODE, digits))),
            n => Err(ValidationError::InvalidPhoneLength {
                raw: raw.to_string(),
                digits: n,
            }),
        }
    }

    /// Get the canonical phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical digits without the leading `+`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as canonical string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
