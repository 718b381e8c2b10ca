//! JoiningDate value object with tenure validation.

use crate::error::{ValidationError, ValidationResult};
use crate::record::value_objects::dates::{parse_dd_mm_yyyy, whole_years_between};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated date of joining.
///
/// ## Validation Rules
///
/// - Raw input is `DD-MM-YYYY` and a real calendar date
/// - Must not lie after the reference date
/// - Tenure (whole years from joining to the reference date) is below 43
///
/// The reference date is always injected; see [`BirthDate`] for the
/// reasoning.
///
/// [`BirthDate`]: crate::record::value_objects::BirthDate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JoiningDate(NaiveDate);

impl JoiningDate {
    /// Tenure at or above this many whole years is rejected.
    pub const MAX_TENURE_YEARS: i32 = 43;

    /// Create a new JoiningDate from a typed date, checking the tenure rules
    /// against `today`.
    pub fn new(date: NaiveDate, today: NaiveDate) -> ValidationResult<Self> {
        if date > today {
            return Err(ValidationError::JoinDateInFuture { date });
        }
        let years = whole_years_between(date, today);
        if years >= Self::MAX_TENURE_YEARS {
            return Err(ValidationError::TenureTooLong { years });
        }
        Ok(Self(date))
    }

    /// Check whether a raw string is a well-formed calendar date.
    pub fn is_valid(raw: &str) -> bool {
        parse_dd_mm_yyyy(raw).is_some()
    }

    /// Parse a raw `DD-MM-YYYY` string into a calendar date without applying
    /// the tenure rules.
    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        parse_dd_mm_yyyy(raw)
    }

    /// Semantic check: not in the future and tenure under the limit.
    pub fn is_acceptable(date: NaiveDate, today: NaiveDate) -> bool {
        date <= today && whole_years_between(date, today) < Self::MAX_TENURE_YEARS
    }

    /// Parse and fully validate a raw string against `today`.
    pub fn parse_with(raw: &str, today: NaiveDate) -> Option<Self> {
        let date = parse_dd_mm_yyyy(raw)?;
        Self::new(date, today).ok()
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whole years of tenure on the given date.
    pub fn tenure_on(&self, today: NaiveDate) -> i32 {
        whole_years_between(self.0, today)
    }
}

impl fmt::Display for JoiningDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d-%m-%Y"))
    }
}
