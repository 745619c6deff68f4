//! Read-only views of a record.

use serde::Serialize;
use std::fmt;

/// Separator used when joining a record's phones into one string.
pub const PHONE_SEPARATOR: &str = ", ";

/// Snapshot of a record: name, joined phones and birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSummary {
    /// The contact's name
    pub name: String,

    /// Canonical phones joined with `", "`, empty when the record has none
    pub phones: String,

    /// Birthday as `YYYY-MM-DD`, `None` when not set
    pub birthday: Option<String>,
}

/// Days remaining until a contact's next birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "when", content = "days", rename_all = "snake_case")]
pub enum BirthdayCountdown {
    /// This year's birthday is today or still ahead
    ThisYear(u32),

    /// This year's birthday has passed; counts to next year's
    NextYear(u32),
}

impl BirthdayCountdown {
    /// Number of days until the birthday, in `0..=366`.
    pub fn days(&self) -> u32 {
        match self {
            Self::ThisYear(days) | Self::NextYear(days) => *days,
        }
    }
}

impl fmt::Display for BirthdayCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThisYear(days) => write!(f, "Left to birthday {} days.", days),
            Self::NextYear(days) => write!(f, "Birthday will be through {} days.", days),
        }
    }
}
