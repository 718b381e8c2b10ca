//! BirthDate value object with age-range validation.
//!
//! Syntactic validity (pattern plus calendar correctness) and the semantic
//! age rule are separate stages: `parse_date` answers the first, `new` and
//! `is_age_in_range` answer the second against an injected `today`. Nothing
//! in this module reads the system clock, keeping every check deterministic
//! and testable.

use crate::error::{ValidationError, ValidationResult};
use crate::record::value_objects::dates::{parse_dd_mm_yyyy, whole_years_between};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated date of birth.
///
/// ## Validation Rules
///
/// - Raw input is `DD-MM-YYYY` and a real calendar date
/// - Age on the reference date is between 18 and 60 whole years, inclusive,
///   computed with calendar-aware year subtraction
///
/// ## Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use employee_registry::record::value_objects::BirthDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
/// let dob = BirthDate::parse_with("06-09-1999", today).unwrap();
/// assert_eq!(dob.age_on(today), 26);
///
/// // Pattern-valid but not a real date
/// assert!(BirthDate::parse_with("31-02-2020", today).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Minimum employable age in whole years.
    pub const MIN_AGE: i32 = 18;
    /// Maximum employable age in whole years.
    pub const MAX_AGE: i32 = 60;

    /// Create a new BirthDate from a typed date, checking the age rule
    /// against `today`.
    pub fn new(date: NaiveDate, today: NaiveDate) -> ValidationResult<Self> {
        let age = whole_years_between(date, today);
        if !(Self::MIN_AGE..=Self::MAX_AGE).contains(&age) {
            return Err(ValidationError::AgeOutOfRange { age });
        }
        Ok(Self(date))
    }

    /// Check whether a raw string is a well-formed calendar date.
    ///
    /// Syntactic check only; the age rule is evaluated separately.
    pub fn is_valid(raw: &str) -> bool {
        parse_dd_mm_yyyy(raw).is_some()
    }

    /// Parse a raw `DD-MM-YYYY` string into a calendar date without applying
    /// the age rule.
    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        parse_dd_mm_yyyy(raw)
    }

    /// Semantic check: is the age derived from `date` employable on `today`?
    pub fn is_age_in_range(date: NaiveDate, today: NaiveDate) -> bool {
        let age = whole_years_between(date, today);
        (Self::MIN_AGE..=Self::MAX_AGE).contains(&age)
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

    /// Whole years of age on the given date.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        whole_years_between(self.0, today)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d-%m-%Y"))
    }
}
