//! Data models for address book entries.
//!
//! This module contains the `Record` aggregate and the read-only views
//! produced from it.

pub mod record;
pub mod summary;

pub use record::Record;
pub use summary::{BirthdayCountdown, ContactSummary};
