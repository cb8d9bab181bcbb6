//! Fuzzy matching implementation for contact search.
//!
//! This module provides contact matching with:
//! - Exact matching on phone numbers
//! - Fuzzy name matching (substring and Levenshtein distance)
//! - Confidence scoring (0-100 scale)

use crate::book::AddressBook;
use crate::domain::PhoneNumber;
use crate::models::Record;

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// The matched record
    pub record: Record,

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

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find records matching `query`.
    ///
    /// A query that is a valid phone number matches records holding that
    /// number exactly. Any other query is matched against names.
    ///
    /// # Returns
    /// Up to `max_results` matches with at least `min_confidence`, sorted by
    /// confidence (highest first), then by name.
    pub fn find_matches(
        &self,
        query: &str,
        book: &AddressBook,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult> {
        let query = query.trim();
        let by_phone = PhoneNumber::is_valid(query);
        let mut results: Vec<MatchResult> = Vec::new();

        for record in book.records() {
            let matched = if by_phone {
                record
                    .find_phone(query)
                    .map(|_| (100, MatchType::ExactPhone))
            } else {
                Self::fuzzy_match_name(query, record.name().as_str())
                    .map(|score| (score, MatchType::FuzzyName))
            };

            if let Some((confidence, match_type)) = matched {
                if confidence >= min_confidence {
                    results.push(MatchResult {
                        record: record.clone(),
                        confidence,
                        match_type,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().cmp(b.record.name()))
        });
        results.truncate(max_results);

        results
    }

    /// Fuzzy match a name. Returns confidence (0-95) if matched.
    fn fuzzy_match_name(query: &str, name: &str) -> Option<u8> {
        let score =
            Self::calculate_fuzzy_score(&Self::normalize_name(query), &Self::normalize_name(name));
        (score > 0).then_some(score)
    }

    /// Calculate fuzzy match score using substring matching and Levenshtein distance.
    ///
    /// Returns a confidence score from 0-95 (100 is reserved for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        // Contains match (substring)
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
            // Too many differences
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Two rolling rows instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
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

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> AddressBook {
        let mut book = AddressBook::new();
        for (name, phone) in [
            ("Alice Smith", "1111111111"),
            ("Alicia Keys", "2222222222"),
            ("Bob Stone", "3333333333"),
        ] {
            let mut record = Record::with_name(name).unwrap();
            record.add_phone(phone).unwrap();
            book.add_record(record);
        }
        book
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(
            ContactMatcher::normalize_name("  Alice   SMITH "),
            "alice smith"
        );
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(ContactMatcher::levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(ContactMatcher::levenshtein_distance("", "abc"), 3);
        assert_eq!(ContactMatcher::levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_calculate_fuzzy_score() {
        assert_eq!(ContactMatcher::calculate_fuzzy_score("bob", "bob"), 95);
        assert!(ContactMatcher::calculate_fuzzy_score("ali", "alice smith") >= 10);
        assert_eq!(ContactMatcher::calculate_fuzzy_score("xyz", "alice"), 0);
        assert_eq!(ContactMatcher::calculate_fuzzy_score("", "alice"), 0);
    }

    #[test]
    fn test_exact_phone_match() {
        let matcher = ContactMatcher::new();
        let results = matcher.find_matches("3333333333", &book(), 5, 30);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.name().as_str(), "Bob Stone");
        assert_eq!(results[0].confidence, 100);
        assert_eq!(results[0].match_type, MatchType::ExactPhone);
    }

    #[test]
    fn test_fuzzy_name_match_sorted_by_confidence() {
        let matcher = ContactMatcher::new();
        let results = matcher.find_matches("alice smith", &book(), 5, 30);

        assert!(!results.is_empty());
        assert_eq!(results[0].record.name().as_str(), "Alice Smith");
        assert_eq!(results[0].confidence, 95);
        assert!(results
            .windows(2)
            .all(|pair| pair[0].confidence >= pair[1].confidence));
    }

    #[test]
    fn test_max_results_and_threshold() {
        let matcher = ContactMatcher::new();
        assert!(matcher.find_matches("ali", &book(), 1, 0).len() <= 1);
        assert!(matcher.find_matches("zzzzzz", &book(), 5, 30).is_empty());
    }
}
