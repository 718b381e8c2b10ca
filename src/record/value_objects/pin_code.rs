//! PinCode value object.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated postal pin code.
///
/// 3-9 digits, kept as a string so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinCode(String);

impl PinCode {
    /// Create a new PinCode with validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        if Self::is_valid(&value) {
            Ok(Self(value.trim().to_string()))
        } else {
            Err(ValidationError::InvalidPinCode { value })
        }
    }

    /// Check whether a raw string is a syntactically valid pin code.
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        (3..=9).contains(&len) && trimmed.chars().all(|c| c.is_ascii_digit())
    }

    /// Parse a raw string, returning `None` on invalid input.
    pub fn parse(raw: &str) -> Option<Self> {
        if Self::is_valid(raw) {
            Some(Self(raw.trim().to_string()))
        } else {
            None
        }
    }

    /// Get the digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PinCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
