//! DoorNumber value object.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated door number.
///
/// ## Validation Rules
///
/// - 1 or 2 alphanumeric segments joined by a single `-` or `/`
///   (e.g. "12A", "12-4", "B/204")
/// - No run of digits longer than 5 within a segment
///
/// Door numbers keep their original casing; unlike names they are codes,
/// not prose.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorNumber(String);

impl DoorNumber {
    /// Create a new DoorNumber with validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        if Self::is_valid(&value) {
            Ok(Self(value.trim().to_string()))
        } else {
            Err(ValidationError::InvalidDoorNumber { value })
        }
    }

    /// Check whether a raw string is a syntactically valid door number.
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        let segments: Vec<&str> = trimmed.split(['-', '/']).collect();
        if segments.is_empty() || segments.len() > 2 {
            return false;
        }
        segments.iter().all(|segment| Self::segment_is_valid(segment))
    }

    /// Parse a raw string, returning `None` on invalid input.
    pub fn parse(raw: &str) -> Option<Self> {
        if Self::is_valid(raw) {
            Some(Self(raw.trim().to_string()))
        } else {
            None
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn segment_is_valid(segment: &str) -> bool {
        if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_alphanumeric()) {
            return false;
        }
        // Cap each digit run at 5.
        let mut run = 0usize;
        for c in segment.chars() {
            if c.is_ascii_digit() {
                run += 1;
                if run > 5 {
                    return false;
                }
            } else {
                run = 0;
            }
        }
        true
    }
}

impl fmt::Display for DoorNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for DoorNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
