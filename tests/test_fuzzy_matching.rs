//! Tests for contact search: exact phone matches, typo-tolerant name
//! matches and confidence ordering.

mod fixtures;

use assistant_bot::matching::{ContactMatcher, MatchType};
use assistant_bot::AddressBook;
use fixtures::*;

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Jonathan", &["1234567890"], None));
    book.add_record(sample_record("Jon", &["5555555555"], None));
    book.add_record(sample_record("Maria", &["0987654321", "1234567890"], None));
    book
}

/// Test exact name matching returns the highest fuzzy confidence.
#[test]
fn test_exact_name_match() {
    let matcher = ContactMatcher::new();
    let matches = matcher.find_matches("JON", &sample_book(), 10, 0);

    assert!(!matches.is_empty(), "Exact match should return results");
    assert_eq!(matches[0].record.name().as_str(), "Jon");
    assert_eq!(matches[0].confidence, 95);
    assert_eq!(matches[0].match_type, MatchType::FuzzyName);
}

/// Test typo tolerance through edit distance.
#[test]
fn test_typo_tolerance() {
    let matcher = ContactMatcher::new();
    let matches = matcher.find_matches("Mariya", &sample_book(), 10, 30);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].record.name().as_str(), "Maria");
    assert!(matches[0].confidence < 95);
}

/// Test a phone shared by two contacts returns both at full confidence.
#[test]
fn test_shared_phone_matches_every_holder() {
    let matcher = ContactMatcher::new();
    let matches = matcher.find_matches("1234567890", &sample_book(), 10, 0);

    let mut names: Vec<&str> = matches.iter().map(|m| m.record.name().as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Jonathan", "Maria"]);
    assert!(matches
        .iter()
        .all(|m| m.confidence == 100 && m.match_type == MatchType::ExactPhone));
}

/// Test a ten-digit query never falls back to name matching.
#[test]
fn test_unknown_phone_matches_nothing() {
    let matcher = ContactMatcher::new();
    assert!(matcher
        .find_matches("0000000000", &sample_book(), 10, 0)
        .is_empty());
}

/// Test results are ordered by confidence and capped.
#[test]
fn test_ordering_and_limit() {
    let matcher = ContactMatcher::new();
    let matches = matcher.find_matches("jon", &sample_book(), 10, 0);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].record.name().as_str(), "Jon");
    assert_eq!(matches[1].record.name().as_str(), "Jonathan");

    let capped = matcher.find_matches("jon", &sample_book(), 1, 0);
    assert_eq!(capped.len(), 1);
}
