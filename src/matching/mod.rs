//! Record lookup by name or phone.
//!
//! This module provides fuzzy name matching and exact phone matching over
//! the records of an address book.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{MatchResult, MatchType, RecordMatcher, RecordQuery};
