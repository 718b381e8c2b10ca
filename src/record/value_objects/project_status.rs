//! ProjectStatus value object.
//!
//! Parsed from a single-letter code. An unrecognized non-blank code is a
//! typed [`ValidationError::UnknownStatusCode`] everywhere — never a silent
//! default — so callers can tell "garbage code" apart from "nothing entered".

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    Development,
    Testing,
    Live,
}

impl ProjectStatus {
    /// Check whether a raw string is a recognized status code.
    pub fn is_valid(raw: &str) -> bool {
        Self::from_code(raw).is_ok()
    }

    /// Parse a status code, returning `None` on any failure.
    ///
    /// Use [`ProjectStatus::from_code`] when the caller needs to distinguish
    /// an unknown code from blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_code(raw).ok()
    }

    /// Parse a single-letter status code, case-folded to uppercase.
    ///
    /// # Returns
    ///
    /// * `Ok(ProjectStatus)` for D, T or L
    /// * `Err(MissingRequiredField)` for blank input
    /// * `Err(UnknownStatusCode)` for any other code
    pub fn from_code(raw: &str) -> ValidationResult<Self> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(ValidationError::missing_required("projectStatus"));
        }
        match code.to_ascii_uppercase().as_str() {
            "D" => Ok(Self::Development),
            "T" => Ok(Self::Testing),
            "L" => Ok(Self::Live),
            _ => Err(ValidationError::UnknownStatusCode {
                code: code.to_string(),
            }),
        }
    }

    /// Single-letter code for this status.
    pub fn code(&self) -> char {
        match self {
            Self::Development => 'D',
            Self::Testing => 'T',
            Self::Live => 'L',
        }
    }

    /// Uppercase name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "DEVELOPMENT",
            Self::Testing => "TESTING",
            Self::Live => "LIVE",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::from_code(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_case_folded() {
        assert_eq!(
            ProjectStatus::from_code("d").unwrap(),
            ProjectStatus::Development
        );
        assert_eq!(
            ProjectStatus::from_code(" T ").unwrap(),
            ProjectStatus::Testing
        );
        assert_eq!(ProjectStatus::from_code("L").unwrap(), ProjectStatus::Live);
    }

    #[test]
    fn test_unknown_code_is_distinct_from_blank() {
        match ProjectStatus::from_code("X") {
            Err(ValidationError::UnknownStatusCode { code }) => assert_eq!(code, "X"),
            other => panic!("Expected UnknownStatusCode, got: {:?}", other),
        }
        match ProjectStatus::from_code("  ") {
            Err(ValidationError::MissingRequiredField { field }) => {
                assert_eq!(field, "projectStatus")
            }
            other => panic!("Expected MissingRequiredField, got: {:?}", other),
        }
    }

    #[test]
    fn test_multi_letter_code_rejected() {
        assert!(ProjectStatus::from_code("DT").is_err());
        assert!(ProjectStatus::parse("DEVELOPMENT").is_none());
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(ProjectStatus::Live.to_string(), "LIVE");
        assert_eq!(ProjectStatus::Development.code(), 'D');
        let json = serde_json::to_string(&ProjectStatus::Testing).unwrap();
        assert_eq!(json, "\"TESTING\"");
    }
}
