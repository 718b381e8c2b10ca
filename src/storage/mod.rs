//! Storage abstraction for domain records.
//!
//! The `RecordStore` trait defines the persistence operations the registry
//! consumes: keyed lookups, the field queries behind the uniqueness checks,
//! and plain insert/update/delete. Implementations own durability and
//! indexing; validation stays in the value objects and registry.
//!
//! # Uniqueness
//!
//! The registry performs read-then-write duplicate checks, which cannot be
//! atomic across concurrent callers. Backends wanting hard guarantees should
//! enforce unique indexes on mobile number and email at this layer; the id
//! index is already enforced by `insert_employee`.
//!
//! # Example
//!
//! ```rust
//! use employee_registry::storage::{InMemoryStore, RecordStore};
//! use employee_registry::record::value_objects::EmployeeId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::new();
//! assert_eq!(store.count_employees().await?, 0);
//! assert!(store.find_employee_by_id(EmployeeId::new(1)?).await?.is_none());
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::StorageError;
pub use in_memory::{InMemoryStore, InMemoryStoreStats};

use crate::record::value_objects::{EmailAddress, EmployeeId, MobileNumber, ProjectName};
use crate::record::{Address, Employee, Project};
use std::future::Future;

/// Core trait for record stores.
///
/// All operations are async and side-effect-free except the mutations named
/// as such. Lookups return `Ok(None)` for "not found"; an `Err` always means
/// the store itself failed — callers must never read a fault as absence.
pub trait RecordStore: Send + Sync {
    /// The error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Look up an employee by id.
    fn find_employee_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send;

    /// Look up an employee by mobile number.
    ///
    /// Backs the duplicate-mobile check; exact match on the typed number.
    fn find_employee_by_mobile_number(
        &self,
        number: MobileNumber,
    ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send;

    /// Look up an employee by email address.
    fn find_employee_by_email(
        &self,
        email: &EmailAddress,
    ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send;

    /// Total number of stored employees.
    fn count_employees(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send;

    /// Insert a new employee.
    ///
    /// Fails with a conflict error if an employee with the same id exists.
    fn insert_employee(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Replace an existing employee record.
    ///
    /// Fails with a not-found error if no employee with the id exists.
    fn update_employee(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Delete an employee and, by composition, all of their addresses.
    ///
    /// Returns `true` if the employee existed.
    fn delete_employee(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Insert an address for an existing employee.
    fn insert_address(
        &self,
        address: Address,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// All addresses owned by the given employee.
    fn addresses_for(
        &self,
        employee_id: EmployeeId,
    ) -> impl Future<Output = Result<Vec<Address>, Self::Error>> + Send;

    /// Look up a project by its (normalized) name.
    fn find_project_by_name(
        &self,
        name: &ProjectName,
    ) -> impl Future<Output = Result<Option<Project>, Self::Error>> + Send;

    /// Insert a new project.
    ///
    /// Fails with a conflict error if a project with the same name exists.
    fn insert_project(
        &self,
        project: Project,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Delete a project by name. Returns `true` if it existed.
    fn delete_project(
        &self,
        name: &ProjectName,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
