//! PersonName value object.
//!
//! Used for both employee names and project manager names, which share the
//! same rule. Accepted names are normalized to lowercase with single spaces
//! between words.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, normalized person name.
///
/// ## Validation Rules
///
/// - 1 to 3 whitespace-separated alphabetic words
/// - First word 3-20 letters, subsequent words 2-20 letters
/// - Matched case-insensitively, stored lowercase with single spaces
///
/// ## Examples
///
/// ```rust
/// use employee_registry::record::value_objects::PersonName;
///
/// let name = PersonName::parse(" John  Paul ").unwrap();
/// assert_eq!(name.as_str(), "john paul");
///
/// assert!(PersonName::parse("J").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName with validation and normalization.
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::parse(&value).ok_or(ValidationError::InvalidPersonName { value })
    }

    /// Create a PersonName without validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure the value is an already-normalized valid name.
    #[allow(dead_code)]
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Check whether a raw string is a syntactically valid name.
    pub fn is_valid(raw: &str) -> bool {
        let words: Vec<&str> = raw.split_whitespace().collect();
        if words.is_empty() || words.len() > 3 {
            return false;
        }
        words.iter().enumerate().all(|(i, word)| {
            let min = if i == 0 { 3 } else { 2 };
            let len = word.chars().count();
            len >= min && len <= 20 && word.chars().all(|c| c.is_ascii_alphabetic())
        })
    }

    /// Parse and normalize a raw string, returning `None` on invalid input.
    pub fn parse(raw: &str) -> Option<Self> {
        if !Self::is_valid(raw) {
            return None;
        }
        let normalized = raw
            .split_whitespace()
            .map(|w| w.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self(normalized))
    }

    /// Get the normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PersonName {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
