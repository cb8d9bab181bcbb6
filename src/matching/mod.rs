//! Contact search utilities.
//!
//! Exact phone matching and fuzzy name matching over the address book.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, MatchResult, MatchType};
