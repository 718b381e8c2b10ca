//! ProjectName value object.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, normalized project name.
///
/// ## Validation Rules
///
/// - 1-5 whitespace-separated alphabetic words
/// - 3-60 letters in total (separators excluded)
/// - Stored lowercase with single spaces
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectName(String);

impl ProjectName {
    /// Create a new ProjectName with validation and normalization.
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::parse(&value).ok_or(ValidationError::InvalidProjectName { value })
    }

    /// Check whether a raw string is a syntactically valid project name.
    pub fn is_valid(raw: &str) -> bool {
        let words: Vec<&str> = raw.split_whitespace().collect();
        if words.is_empty() || words.len() > 5 {
            return false;
        }
        if !words
            .iter()
            .all(|w| w.chars().all(|c| c.is_ascii_alphabetic()))
        {
            return false;
        }
        let letters: usize = words.iter().map(|w| w.chars().count()).sum();
        (3..=60).contains(&letters)
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

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ProjectName {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
