//! MobileNumber value object.
//!
//! Syntactic validation only; the duplicate check against existing employees
//! lives in the registry's uniqueness checker.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated 10-digit mobile number.
///
/// ## Validation Rules
///
/// - Exactly 10 ASCII digits after trimming
/// - First digit between 6 and 9
///
/// Stored numerically; the leading-digit rule guarantees the formatted value
/// is always 10 digits again.
///
/// ## Examples
///
/// ```rust
/// use employee_registry::record::value_objects::MobileNumber;
///
/// let number = MobileNumber::parse("9876543210").unwrap();
/// assert_eq!(number.to_string(), "9876543210");
///
/// assert!(MobileNumber::parse("5876543210").is_none());
/// assert!(MobileNumber::parse("98765432100").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MobileNumber(u64);

impl MobileNumber {
    /// Create a new MobileNumber from an already-typed value.
    pub fn new(value: u64) -> ValidationResult<Self> {
        if (6_000_000_000..=9_999_999_999).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidMobileNumber {
                value: value.to_string(),
            })
        }
    }

    /// Check whether a raw string is a syntactically valid mobile number.
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        trimmed.chars().count() == 10
            && trimmed.chars().all(|c| c.is_ascii_digit())
            && matches!(trimmed.chars().next(), Some('6'..='9'))
    }

    /// Parse a raw string, returning `None` on invalid input.
    pub fn parse(raw: &str) -> Option<Self> {
        if !Self::is_valid(raw) {
            return None;
        }
        raw.trim().parse::<u64>().ok().map(Self)
    }

    /// Get the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for MobileNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::parse(value).ok_or_else(|| ValidationError::InvalidMobileNumber {
            value: value.to_string(),
        })
    }
}
