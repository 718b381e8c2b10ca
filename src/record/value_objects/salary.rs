//! Salary value object backed by an exact decimal.
//!
//! Uses `rust_decimal` so that parse-then-format round-trips without
//! floating-point precision loss.

use crate::error::{ValidationError, ValidationResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated salary amount.
///
/// ## Validation Rules
///
/// - Plain decimal number, no sign, no thousands separators
/// - At most 2 decimal places
/// - At least [`Salary::MINIMUM`] (8000.00)
///
/// ## Examples
///
/// ```rust
/// use employee_registry::record::value_objects::Salary;
///
/// let salary = Salary::parse("8000.50").unwrap();
/// assert_eq!(salary.to_string(), "8000.50");
///
/// assert!(Salary::parse("7999.99").is_none());
/// assert!(Salary::parse("8,000").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Salary(Decimal);

impl Salary {
    /// The salary floor. A single constant so the rule can be retargeted
    /// for deployments with a different minimum.
    pub const MINIMUM: Decimal = Decimal::from_parts(8000, 0, 0, false, 0);

    /// Create a new Salary from an already-typed decimal.
    pub fn new(value: Decimal) -> ValidationResult<Self> {
        if value.scale() > 2 {
            return Err(ValidationError::InvalidSalary {
                value: value.to_string(),
            });
        }
        if value < Self::MINIMUM {
            return Err(ValidationError::SalaryBelowMinimum { value });
        }
        Ok(Self(value))
    }

    /// Check whether a raw string is a syntactically valid salary.
    ///
    /// Digits with an optional `.` followed by 1-2 decimal digits. The
    /// minimum-amount rule is applied by [`Salary::parse`] and
    /// [`Salary::new`], not here.
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        let (whole, fraction) = match trimmed.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (trimmed, None),
        };
        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        match fraction {
            None => true,
            Some(f) => (1..=2).contains(&f.len()) && f.chars().all(|c| c.is_ascii_digit()),
        }
    }

    /// Parse a raw string, returning `None` when the input is malformed or
    /// below the minimum.
    pub fn parse(raw: &str) -> Option<Self> {
        if !Self::is_valid(raw) {
            return None;
        }
        let value = Decimal::from_str(raw.trim()).ok()?;
        Self::new(value).ok()
    }

    /// Get the decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Salary {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        if !Self::is_valid(value) {
            return Err(ValidationError::InvalidSalary {
                value: value.to_string(),
            });
        }
        let decimal = Decimal::from_str(value.trim()).map_err(|_| {
            ValidationError::InvalidSalary {
                value: value.to_string(),
            }
        })?;
        Self::new(decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_round_trip_preserves_precision() {
        let salary = Salary::parse("8000.50").unwrap();
        assert_eq!(salary.to_string(), "8000.50");
        assert_eq!(salary.amount(), dec("8000.50"));
    }

    #[test]
    fn test_whole_number_accepted() {
        let salary = Salary::parse("15000").unwrap();
        assert_eq!(salary.amount(), dec("15000"));
    }

    #[test]
    fn test_minimum_boundary() {
        assert!(Salary::parse("8000").is_some());
        assert!(Salary::parse("8000.00").is_some());
        assert!(Salary::parse("7999.99").is_none());
        assert_eq!(
            Salary::new(dec("7999.99")).unwrap_err(),
            ValidationError::SalaryBelowMinimum {
                value: dec("7999.99")
            }
        );
    }

    #[test]
    fn test_decimal_place_limit() {
        assert!(Salary::parse("8000.5").is_some());
        assert!(Salary::parse("8000.555").is_none());
        assert!(Salary::new(dec("8000.555")).is_err());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(Salary::parse("8,000").is_none());
        assert!(Salary::parse("-9000").is_none());
        assert!(Salary::parse("+9000").is_none());
        assert!(Salary::parse("9000.").is_none());
        assert!(Salary::parse(".50").is_none());
        assert!(Salary::parse("").is_none());
        assert!(Salary::parse("1e4").is_none());
    }

    #[test]
    fn test_try_from_distinguishes_errors() {
        assert!(matches!(
            Salary::try_from("abc"),
            Err(ValidationError::InvalidSalary { .. })
        ));
        assert!(matches!(
            Salary::try_from("100"),
            Err(ValidationError::SalaryBelowMinimum { .. })
        ));
    }
}
