//! ProjectDescription value object.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated project description.
///
/// 10-300 characters after trimming, of which at least 10 must be letters —
/// a pile of punctuation or digits alone does not describe anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectDescription(String);

impl ProjectDescription {
    /// Create a new ProjectDescription with validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        if Self::is_valid(&value) {
            Ok(Self(value.trim().to_string()))
        } else {
            Err(ValidationError::InvalidProjectDescription { value })
        }
    }

    /// Check whether a raw string is a valid description.
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if !(10..=300).contains(&len) {
            return false;
        }
        trimmed.chars().filter(|c| c.is_alphabetic()).count() >= 10
    }

    /// Parse a raw string, returning `None` on invalid input.
    pub fn parse(raw: &str) -> Option<Self> {
        if Self::is_valid(raw) {
            Some(Self(raw.trim().to_string()))
        } else {
            None
        }
    }

    /// Get the trimmed description text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ProjectDescription {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_description() {
        let desc = ProjectDescription::parse(" Rebuild the payroll pipeline. ").unwrap();
        assert_eq!(desc.as_str(), "Rebuild the payroll pipeline.");
    }

    #[test]
    fn test_length_bounds() {
        assert!(ProjectDescription::parse("too short").is_none()); // 9 chars
        assert!(ProjectDescription::parse("long enough").is_some()); // 11 chars
        assert!(ProjectDescription::parse(&"a".repeat(300)).is_some());
        assert!(ProjectDescription::parse(&"a".repeat(301)).is_none());
    }

    #[test]
    fn test_requires_ten_letters() {
        // 12 characters but only 2 letters.
        assert!(ProjectDescription::parse("12345 678 ab").is_none());
        assert!(ProjectDescription::parse("abcdefghij12").is_some());
    }
}
