//! EmailAddress value object.
//!
//! Uniqueness against existing employees is checked by the registry, not
//! here. Note that uppercase input is rejected outright rather than folded:
//! the canonical rule requires the address to already be lowercase.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, lowercase email address.
///
/// ## Validation Rules
///
/// - Local part: 3-53 characters of lowercase letters, digits and the
///   separators `.`, `-`, `_`; starts and ends alphanumeric; no two
///   separators in a row
/// - Exactly one `@`
/// - Domain: 1-3 dot-separated labels of lowercase letters and digits
///
/// ## Examples
///
/// ```rust
/// use employee_registry::record::value_objects::EmailAddress;
///
/// assert!(EmailAddress::parse("a.b-c_d@sub.domain.com").is_some());
/// assert!(EmailAddress::parse("A@b.com").is_none());      // uppercase
/// assert!(EmailAddress::parse("a..b@c.com").is_none());   // repeated separator
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress with validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        if Self::is_valid(&value) {
            Ok(Self(value.trim().to_string()))
        } else {
            Err(ValidationError::InvalidEmail { value })
        }
    }

    /// Create an EmailAddress without validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure the value meets all email validation rules.
    #[allow(dead_code)]
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Check whether a raw string is a syntactically valid email address.
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        let Some((local, domain)) = trimmed.split_once('@') else {
            return false;
        };
        Self::local_part_is_valid(local) && Self::domain_is_valid(domain)
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

    /// Get the owned string value.
    pub fn into_string(self) -> String {
        self.0
    }

    fn local_part_is_valid(local: &str) -> bool {
        let len = local.chars().count();
        if !(3..=53).contains(&len) {
            return false;
        }
        let is_sep = |c: char| matches!(c, '.' | '-' | '_');
        let is_alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();

        let first = local.chars().next();
        let last = local.chars().next_back();
        if !first.is_some_and(is_alnum) || !last.is_some_and(is_alnum) {
            return false;
        }

        let mut previous_was_sep = false;
        for c in local.chars() {
            if is_alnum(c) {
                previous_was_sep = false;
            } else if is_sep(c) {
                if previous_was_sep {
                    return false;
                }
                previous_was_sep = true;
            } else {
                return false;
            }
        }
        true
    }

    fn domain_is_valid(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.is_empty() || labels.len() > 3 {
            return false;
        }
        labels.iter().all(|label| {
            !label.is_empty()
                && label
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
