//! EmployeeId value object.
//!
//! This module provides a type-safe wrapper around employee ids with built-in
//! validation. Employee ids are caller-supplied positive integers; uniqueness
//! is enforced by the record store, not here.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated employee id.
///
/// EmployeeId wraps a positive 32-bit integer. Raw input is accepted only
/// when the trimmed string is a plain decimal integer without leading zeros
/// ("007" and "0" are both rejected) that fits in `i32`.
///
/// ## Examples
///
/// ```rust
/// use employee_registry::record::value_objects::EmployeeId;
///
/// let id = EmployeeId::parse(" 42 ").unwrap();
/// assert_eq!(id.value(), 42);
///
/// assert!(EmployeeId::parse("0").is_none());
/// assert!(EmployeeId::parse("007").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(i32);

impl EmployeeId {
    /// Create a new EmployeeId from an already-typed integer.
    ///
    /// # Returns
    ///
    /// * `Ok(EmployeeId)` - If the value is positive
    /// * `Err(ValidationError)` - If the value is zero or negative
    pub fn new(value: i32) -> ValidationResult<Self> {
        if value <= 0 {
            return Err(ValidationError::InvalidEmployeeId {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Check whether a raw string is a syntactically valid employee id.
    ///
    /// Accepts iff the trimmed input matches `[1-9][0-9]*` and fits in `i32`.
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        match chars.next() {
            Some(c) if ('1'..='9').contains(&c) => {}
            _ => return false,
        }
        if !chars.all(|c| c.is_ascii_digit()) {
            return false;
        }
        // Values past i32::MAX pass the pattern but overflow the typed id.
        trimmed.parse::<i32>().is_ok()
    }

    /// Parse a raw string into a typed id, returning `None` on invalid input.
    pub fn parse(raw: &str) -> Option<Self> {
        if !Self::is_valid(raw) {
            return None;
        }
        raw.trim().parse::<i32>().ok().map(Self)
    }

    /// Get the integer value of the id.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for EmployeeId {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::parse(value).ok_or_else(|| ValidationError::InvalidEmployeeId {
            value: value.to_string(),
        })
    }
}

impl TryFrom<i32> for EmployeeId {
    type Error = ValidationError;

    fn try_from(value: i32) -> ValidationResult<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert_eq!(EmployeeId::parse("1").unwrap().value(), 1);
        assert_eq!(EmployeeId::parse("2147483647").unwrap().value(), i32::MAX);
        assert_eq!(EmployeeId::parse("  5  ").unwrap().value(), 5);
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert!(EmployeeId::parse("0").is_none());
        assert!(EmployeeId::parse("-3").is_none());
        assert!(EmployeeId::new(0).is_err());
        assert!(EmployeeId::new(-1).is_err());
    }

    #[test]
    fn test_rejects_leading_zeros() {
        assert!(EmployeeId::parse("007").is_none());
        assert!(EmployeeId::parse("01").is_none());
    }

    #[test]
    fn test_rejects_non_integer() {
        assert!(EmployeeId::parse("").is_none());
        assert!(EmployeeId::parse("3.0").is_none());
        assert!(EmployeeId::parse("abc").is_none());
        assert!(EmployeeId::parse("1 2").is_none());
    }

    #[test]
    fn test_rejects_overflow() {
        // Matches the pattern but exceeds i32::MAX.
        assert!(EmployeeId::parse("2147483648").is_none());
        assert!(EmployeeId::parse("99999999999").is_none());
    }

    #[test]
    fn test_display() {
        let id = EmployeeId::new(42).unwrap();
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_try_from() {
        assert!(EmployeeId::try_from("12").is_ok());
        assert!(EmployeeId::try_from("x").is_err());
        assert!(EmployeeId::try_from(9).is_ok());
    }
}
