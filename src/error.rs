//! Error types for registry operations.
//!
//! Two classes of failure run through the crate: input that fails validation
//! (always locally recoverable, surfaced with the offending field named so a
//! caller can re-prompt) and store faults (not recoverable by re-submitting,
//! kept distinct from every validation outcome).

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Validation errors for user-submitted field values.
///
/// Each variant names the field that was rejected and carries the offending
/// input, so presentation layers can produce a field-specific retry prompt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was never supplied to a builder.
    #[error("Required field '{field}' is missing")]
    MissingRequiredField { field: String },

    /// Employee id must be a positive integer without leading zeros.
    #[error("Invalid employee id '{value}': expected a positive integer without leading zeros")]
    InvalidEmployeeId { value: String },

    /// Name must be 1-3 alphabetic words (first 3-20 letters, rest 2-20).
    #[error("Invalid name '{value}': expected 1-3 alphabetic words")]
    InvalidPersonName { value: String },

    /// Gender must be one of male, female, others.
    #[error("Invalid gender '{value}': expected male, female or others")]
    InvalidGender { value: String },

    /// Date did not parse as a valid DD-MM-YYYY calendar date.
    #[error("Invalid {field} '{value}': expected a valid DD-MM-YYYY date")]
    InvalidDate { field: String, value: String },

    /// Computed age falls outside the employable range.
    #[error("Age {age} is out of range: must be between 18 and 60")]
    AgeOutOfRange { age: i32 },

    /// Date of joining lies after the current date.
    #[error("Date of joining {date} is in the future")]
    JoinDateInFuture { date: NaiveDate },

    /// Tenure computed from the joining date is implausibly long.
    #[error("Tenure of {years} years exceeds the 43 year limit")]
    TenureTooLong { years: i32 },

    /// Mobile number must be 10 digits starting with 6-9.
    #[error("Invalid mobile number '{value}': expected 10 digits starting with 6-9")]
    InvalidMobileNumber { value: String },

    /// Email address failed the format rules.
    #[error("Invalid email address '{value}'")]
    InvalidEmail { value: String },

    /// Salary did not parse as a plain decimal with at most 2 decimal places.
    #[error("Invalid salary '{value}': expected a decimal with at most 2 decimal places")]
    InvalidSalary { value: String },

    /// Salary parsed but falls below the minimum wage floor.
    #[error("Salary {value} is below the minimum of 8000.00")]
    SalaryBelowMinimum { value: Decimal },

    /// Door number failed the format rules.
    #[error("Invalid door number '{value}'")]
    InvalidDoorNumber { value: String },

    /// Street failed the format rules.
    #[error("Invalid street '{value}': expected 4-55 letters, digits, spaces or dots")]
    InvalidStreet { value: String },

    /// A place name (locality, city, state or country) failed the format rules.
    #[error("Invalid {field} '{value}': expected 1-2 alphabetic words")]
    InvalidPlaceName { field: String, value: String },

    /// Pin code must be 3-9 digits.
    #[error("Invalid pin code '{value}': expected 3-9 digits")]
    InvalidPinCode { value: String },

    /// Project name failed the format rules.
    #[error("Invalid project name '{value}': expected 1-5 alphabetic words, 3-60 letters")]
    InvalidProjectName { value: String },

    /// Project description failed the length or content rules.
    #[error("Invalid project description '{value}': expected 10-300 characters with at least 10 letters")]
    InvalidProjectDescription { value: String },

    /// Project status code was non-blank but not one of D, T, L.
    ///
    /// Kept separate from the other variants because an unrecognized code is
    /// a malformed enumerated input, not merely a blank field.
    #[error("Unknown project status code '{code}': expected D, T or L")]
    UnknownStatusCode { code: String },

    /// General validation error with a custom message.
    #[error("Validation failed: {message}")]
    Custom { message: String },
}

impl ValidationError {
    /// Create a missing required field error.
    pub fn missing_required(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create an invalid date error for the named field.
    pub fn invalid_date(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an invalid place name error for the named field.
    pub fn invalid_place_name(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidPlaceName {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a custom validation error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

/// Main error type for registry operations.
///
/// Folds field validation failures, duplicate-value rejections, missing
/// records and store faults into one caller-facing enum. Store faults are
/// never conflated with "duplicate" or "not found" — a failed uniqueness
/// lookup surfaces as [`RegistryError::Store`], not as availability.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A submitted field failed validation or parsing.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A uniqueness-constrained field already exists in the store.
    #[error("Duplicate {field}: '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// No employee with the given id exists.
    #[error("Employee not found: id {id}")]
    NotFound { id: i32 },

    /// The record store failed; the operation may succeed later.
    #[error("Record store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RegistryError {
    /// Create a duplicate-value error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    /// Wrap a store error.
    pub fn store<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(error))
    }

    /// Check whether this error came from the store rather than the input.
    pub fn is_store_fault(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

// Result type aliases for convenience
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type RegistryResult<T> = Result<T, RegistryError>;
