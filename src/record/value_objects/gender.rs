//! Gender value object.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of an employee.
///
/// Input is matched case-insensitively against male / female / others and
/// rendered lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Others,
}

impl Gender {
    /// Check whether a raw string names a recognized gender.
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }

    /// Parse a raw string, case-insensitively. Returns `None` on invalid input.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "others" => Some(Self::Others),
            _ => None,
        }
    }

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Others => "others",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Gender {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::parse(value).ok_or_else(|| ValidationError::InvalidGender {
            value: value.to_string(),
        })
    }
}
