//! Name-keyed collection of records.

use crate::matching::{MatchResult, RecordMatcher, RecordQuery};
use crate::models::{BirthdayCountdown, ContactSummary, Record};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// An in-memory address book.
///
/// Records are keyed by name. Adding a record whose name is already present
/// replaces the old one. Iteration follows first-insertion order: a
/// replaced record keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

/// A record whose birthday falls within a requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub summary: ContactSummary,
    pub countdown: BirthdayCountdown,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().to_string();
        let replaced = self.records.insert(key.clone(), record);

        match replaced {
            Some(_) => tracing::debug!(name = %key, "Record replaced"),
            None => {
                tracing::debug!(name = %key, "Record added");
                self.order.push(key);
            }
        }
        replaced
    }

    /// Remove the record stored under `name`.
    ///
    /// Unknown names are a no-op and return `None`.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        let name = Self::key(name);
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        tracing::debug!(name = %name, "Record removed");
        Some(removed)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(Self::key(name))
    }

    /// Mutable access for editing a stored record in place.
    ///
    /// The record's name cannot be changed through this reference, so the
    /// key stays consistent.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(Self::key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(Self::key(name))
    }

    // Stored keys are trimmed `ContactName`s
    fn key(name: &str) -> &str {
        name.trim()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Records in iteration order.
    pub fn records(&self) -> Records<'_> {
        Records {
            keys: self.order.iter(),
            records: &self.records,
        }
    }

    /// Summary of every record paired with its name, in iteration order.
    pub fn all_summaries(&self) -> Vec<(String, ContactSummary)> {
        self.records()
            .map(|record| (record.name().to_string(), record.summary()))
            .collect()
    }

    /// Lazy sequence of summaries in iteration order.
    ///
    /// Each call starts a fresh pass over the book.
    pub fn iterate(&self) -> Summaries<'_> {
        Summaries {
            inner: self.records(),
        }
    }

    /// Find records by fuzzy name or exact phone.
    pub fn find(
        &self,
        query: &RecordQuery,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'_>> {
        RecordMatcher::new().find_matches(query, self.records(), max_results, min_confidence)
    }

    /// Records whose next birthday is at most `within_days` after `today`,
    /// soonest first, ties broken by name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records()
            .filter_map(|record| {
                let countdown = record.days_to_birthday_from(today).ok()?;
                (countdown.days() <= within_days).then(|| UpcomingBirthday {
                    summary: record.summary(),
                    countdown,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.countdown
                .days()
                .cmp(&b.countdown.days())
                .then_with(|| a.summary.name.cmp(&b.summary.name))
        });
        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

/// Iterator over an address book's records in insertion order.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    keys: std::slice::Iter<'a, String>,
    records: &'a HashMap<String, Record>,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        // Every key in `order` has an entry in `records`
        let key = self.keys.next()?;
        self.records.get(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}

/// Iterator over record summaries, see [`AddressBook::iterate`].
#[derive(Debug, Clone)]
pub struct Summaries<'a> {
    inner: Records<'a>,
}

impl Iterator for Summaries<'_> {
    type Item = ContactSummary;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Record::summary)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Summaries<'_> {}
