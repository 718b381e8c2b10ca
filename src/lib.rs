//! # Employee Registry
//!
//! A validation-first record management library for employee, address and
//! project data. Every field a caller submits passes through a value object
//! that enforces the domain's format and semantic rules before a record can
//! exist, so downstream code never handles an invalid name, date or salary.
//!
//! ## Architecture
//!
//! The crate is organized in three layers:
//!
//! - **[`record`]** — immutable domain records ([`Employee`], [`Address`],
//!   [`Project`]) assembled from validated value objects via fluent builders.
//!   The value objects in [`record::value_objects`] are the only way to
//!   produce a typed field; their constructors reject anything outside the
//!   domain rules.
//! - **[`storage`]** — the [`RecordStore`] trait and an in-memory reference
//!   implementation. Implementations own persistence and indexing; they never
//!   re-validate.
//! - **[`registry`]** — the [`EmployeeRegistry`] service that runs the full
//!   pipeline over raw input: validate, parse, check uniqueness, assemble,
//!   persist. The store is injected at construction.
//!
//! Validation failures, duplicate rejections, missing records and store
//! faults are distinct error classes (see [`error`]); a store fault during a
//! uniqueness check is never reported as availability.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use employee_registry::registry::{EmployeeInput, EmployeeRegistry};
//! use employee_registry::storage::InMemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = EmployeeRegistry::new(InMemoryStore::new());
//!
//! let employee = registry
//!     .create_employee(&EmployeeInput {
//!         id: "5".into(),
//!         name: " John Paul ".into(),
//!         gender: "MALE".into(),
//!         date_of_birth: "06-09-1999".into(),
//!         mobile_number: "9876543210".into(),
//!         email: "john.paul@example.com".into(),
//!         salary: "15000.00".into(),
//!         date_of_joining: "02-01-2019".into(),
//!     })
//!     .await?;
//!
//! // Names and genders are normalized on the way in.
//! assert_eq!(employee.name.as_str(), "john paul");
//! # Ok(())
//! # }
//! ```
//!
//! Value objects are also usable on their own, without the service layer:
//!
//! ```rust
//! use employee_registry::record::value_objects::MobileNumber;
//!
//! assert!(MobileNumber::is_valid("9876543210"));
//! assert!(!MobileNumber::is_valid("5876543210"));
//! let number = MobileNumber::parse(" 9876543210 ").unwrap();
//! assert_eq!(number.value(), 9_876_543_210);
//! ```
//!
//! ## Date semantics
//!
//! Age and tenure rules depend on "today". Every date-sensitive operation
//! has an `_as_of` variant taking an explicit [`chrono::NaiveDate`], so
//! tests and batch jobs can pin the reference date; the plain variants read
//! the system clock.

pub mod error;
pub mod record;
pub mod registry;
pub mod storage;

pub use error::{RegistryError, RegistryResult, ValidationError, ValidationResult};
pub use record::{Address, Employee, Project};
pub use registry::{AddressInput, EmployeeInput, EmployeeRegistry, ProjectInput};
pub use storage::{InMemoryStore, RecordStore};
