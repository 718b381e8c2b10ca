//! PlaceName value object.
//!
//! One rule covers locality, city, state and country; the error carries the
//! specific field so retry prompts stay precise.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated place name, stored lowercase.
///
/// ## Validation Rules
///
/// - 1 or 2 words of letters, separated by a single space
/// - At most 100 characters total
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceName(String);

impl PlaceName {
    /// Create a new PlaceName, naming the address field in the error.
    pub fn new(field: &str, value: String) -> ValidationResult<Self> {
        Self::parse(&value).ok_or_else(|| ValidationError::invalid_place_name(field, value))
    }

    /// Check whether a raw string is a syntactically valid place name.
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.chars().count() > 100 {
            return false;
        }
        let words: Vec<&str> = trimmed.split(' ').collect();
        if words.is_empty() || words.len() > 2 {
            return false;
        }
        words
            .iter()
            .all(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
    }

    /// Parse and normalize a raw string, returning `None` on invalid input.
    pub fn parse(raw: &str) -> Option<Self> {
        if Self::is_valid(raw) {
            Some(Self(raw.trim().to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Get the normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_place_names() {
        assert_eq!(PlaceName::parse("Chennai").unwrap().as_str(), "chennai");
        assert_eq!(
            PlaceName::parse(" New Delhi ").unwrap().as_str(),
            "new delhi"
        );
    }

    #[test]
    fn test_single_space_rule() {
        // Double space means an empty middle word.
        assert!(PlaceName::parse("new  delhi").is_none());
        assert!(PlaceName::parse("one two three").is_none());
    }

    #[test]
    fn test_rejects_non_letters() {
        assert!(PlaceName::parse("area 51").is_none());
        assert!(PlaceName::parse("st-marks").is_none());
        assert!(PlaceName::parse("").is_none());
    }

    #[test]
    fn test_length_cap() {
        let fifty = "a".repeat(50);
        // 50 + space + 49 = 100 chars: accepted.
        assert!(PlaceName::parse(&format!("{fifty} {}", "a".repeat(49))).is_some());
        // 50 + space + 50 = 101 chars: rejected.
        assert!(PlaceName::parse(&format!("{fifty} {fifty}")).is_none());
    }

    #[test]
    fn test_error_names_field() {
        match PlaceName::new("city", "x2".to_string()) {
            Err(ValidationError::InvalidPlaceName { field, value }) => {
                assert_eq!(field, "city");
                assert_eq!(value, "x2");
            }
            other => panic!("Expected InvalidPlaceName, got: {:?}", other),
        }
    }
}
