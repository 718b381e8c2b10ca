//! Street value object.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated street line, stored lowercase.
///
/// ## Validation Rules
///
/// - 4-55 characters after trimming
/// - Letters, digits, spaces and dots only
/// - No two dots in a row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Street(String);

impl Street {
    /// Create a new Street with validation and normalization.
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::parse(&value).ok_or(ValidationError::InvalidStreet { value })
    }

    /// Check whether a raw string is a syntactically valid street.
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if !(4..=55).contains(&len) {
            return false;
        }
        let mut previous_was_dot = false;
        for c in trimmed.chars() {
            if c == '.' {
                if previous_was_dot {
                    return false;
                }
                previous_was_dot = true;
            } else if c.is_ascii_alphanumeric() || c == ' ' {
                previous_was_dot = false;
            } else {
                return false;
            }
        }
        true
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

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Street {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
