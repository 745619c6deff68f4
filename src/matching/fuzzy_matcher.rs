//! Fuzzy matching implementation for record lookup.
//!
//! This module provides record matching with:
//! - Exact matching on canonical phone numbers
//! - Fuzzy name matching (substring and Levenshtein distance)
//! - Confidence scoring (0-100 scale)

use crate::domain::PhoneNumber;
use crate::models::Record;

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Search query parameters for record matching.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    /// Name to search for
    pub name: Option<String>,

    /// Phone number to search for, in any form the phone validator accepts
    pub phone: Option<String>,
}

/// Record matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Default)]
pub struct RecordMatcher;

impl RecordMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find matching records based on the search query.
    ///
    /// # Arguments
    /// * `query` - Search parameters (name, phone)
    /// * `records` - Records to search through
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100) for fuzzy matches
    ///
    /// # Returns
    /// A vector of MatchResult, sorted by confidence (highest first)
    pub fn find_matches<'a>(
        &self,
        query: &RecordQuery,
        records: impl IntoIterator<Item = &'a Record>,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        // A phone that fails validation cannot equal any stored phone
        let phone = query
            .phone
            .as_deref()
            .and_then(|raw| PhoneNumber::new(raw).ok());
        let name = query.name.as_deref().map(Self::normalize_name);

        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for record in records {
            if let Some(phone) = &phone {
                if record.phones().contains(phone) {
                    results.push(MatchResult {
                        record,
                        confidence: 100,
                        match_type: MatchType::ExactPhone,
                    });
                    continue;
                }
            }

            if let Some(name) = &name {
                let target = Self::normalize_name(record.name().as_str());
                let confidence = Self::calculate_fuzzy_score(name, &target);
                if confidence > 0 && confidence >= min_confidence {
                    results.push(MatchResult {
                        record,
                        confidence,
                        match_type: MatchType::FuzzyName,
                    });
                }
            }
        }

        // Sort by confidence (highest first), then by name
        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().cmp(b.record.name()))
        });
        results.truncate(max_results);

        results
    }

    /// Calculate fuzzy match score using substring and Levenshtein distance.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1: Vec<char> = s1.chars().collect();
        let s2: Vec<char> = s2.chars().collect();

        if s1.is_empty() {
            return s2.len();
        }
        if s2.is_empty() {
            return s1.len();
        }

        // Single rolling row
        let mut row: Vec<usize> = (0..=s2.len()).collect();
        for (i, c1) in s1.iter().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, c2) in s2.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
                diagonal = row[j + 1];
                row[j + 1] = next;
            }
        }

        row[s2.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
