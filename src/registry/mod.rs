//! Registry service: the validate → parse → check → assemble → persist
//! pipeline over a pluggable record store.
//!
//! The store is injected at construction — no process-wide singletons — so
//! the registry is reentrant and trivially testable. Every request runs a
//! fresh pipeline; nothing is cached between calls.
//!
//! Date-sensitive operations come in pairs: the plain method reads the
//! system clock, the `_as_of` variant takes an explicit reference date for
//! deterministic tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use employee_registry::registry::{EmployeeInput, EmployeeRegistry};
//! use employee_registry::storage::InMemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = EmployeeRegistry::new(InMemoryStore::new());
//! let input = EmployeeInput {
//!     id: "5".into(),
//!     name: " John Paul ".into(),
//!     gender: "MALE".into(),
//!     date_of_birth: "06-09-1999".into(),
//!     mobile_number: "9876543210".into(),
//!     email: "john.paul@example.com".into(),
//!     salary: "15000.00".into(),
//!     date_of_joining: "02-01-2019".into(),
//! };
//! let employee = registry.create_employee(&input).await?;
//! assert_eq!(employee.name.as_str(), "john paul");
//! # Ok(())
//! # }
//! ```

pub mod uniqueness;

pub use uniqueness::UniquenessChecker;

use crate::error::{RegistryError, RegistryResult, ValidationError};
use crate::record::builder::{AddressBuilder, EmployeeBuilder, ProjectBuilder};
use crate::record::value_objects::{
    BirthDate, DoorNumber, EmailAddress, EmployeeId, Gender, JoiningDate, MobileNumber, PersonName,
    PinCode, PlaceName, ProjectDescription, ProjectName, ProjectStatus, Salary, Street,
};
use crate::record::{Address, Employee, Project};
use crate::storage::RecordStore;
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};

/// Raw, unvalidated employee fields as collected by a presentation layer.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct EmployeeInput {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub mobile_number: String,
    pub email: String,
    pub salary: String,
    pub date_of_joining: String,
}

/// Raw, unvalidated address fields.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AddressInput {
    pub employee_id: String,
    pub door_number: String,
    pub street: String,
    pub locality: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pin_code: String,
}

/// Raw, unvalidated project fields.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
    /// Single-letter status code: D, T or L.
    pub status_code: String,
    pub manager: String,
}

/// Registry over a record store.
///
/// All mutations follow the same shape: validate and parse every submitted
/// field into value objects, run the uniqueness checks that apply, assemble
/// the immutable record, then write. Invalid input and duplicates never
/// reach the store; store faults surface as [`RegistryError::Store`].
pub struct EmployeeRegistry<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> EmployeeRegistry<S> {
    /// Create a registry over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create an employee from raw input, using the current date for the
    /// age and tenure rules.
    pub async fn create_employee(&self, input: &EmployeeInput) -> RegistryResult<Employee> {
        self.create_employee_as_of(input, Local::now().date_naive())
            .await
    }

    /// Create an employee from raw input against an explicit reference date.
    pub async fn create_employee_as_of(
        &self,
        input: &EmployeeInput,
        today: NaiveDate,
    ) -> RegistryResult<Employee> {
        debug!("validating employee input for id '{}'", input.id);

        let id = EmployeeId::try_from(input.id.as_str())?;
        let name = PersonName::try_from(input.name.as_str())?;
        let gender = Gender::try_from(input.gender.as_str())?;
        let birth_date = parse_birth_date(&input.date_of_birth, today)?;
        let mobile_number = MobileNumber::try_from(input.mobile_number.as_str())?;
        let email = EmailAddress::try_from(input.email.as_str())?;
        let salary = Salary::try_from(input.salary.as_str())?;
        let joining_date = parse_joining_date(&input.date_of_joining, today)?;

        if self
            .store
            .find_employee_by_id(id)
            .await
            .map_err(RegistryError::store)?
            .is_some()
        {
            warn!("rejected employee creation: id {} already exists", id);
            return Err(RegistryError::duplicate("id", id.to_string()));
        }

        let checker = UniquenessChecker::new(&self.store);
        if checker
            .mobile_number_exists(mobile_number)
            .await
            .map_err(RegistryError::store)?
        {
            warn!("rejected employee creation: duplicate mobile number");
            return Err(RegistryError::duplicate(
                "mobileNumber",
                mobile_number.to_string(),
            ));
        }
        if checker
            .email_exists(&email)
            .await
            .map_err(RegistryError::store)?
        {
            warn!("rejected employee creation: duplicate email");
            return Err(RegistryError::duplicate("email", email.as_str()));
        }

        let employee = EmployeeBuilder::new(id)
            .name(name)
            .gender(gender)
            .birth_date(birth_date)
            .mobile_number(mobile_number)
            .email(email)
            .salary(salary)
            .joining_date(joining_date)
            .build()?;

        self.store
            .insert_employee(employee.clone())
            .await
            .map_err(RegistryError::store)?;
        info!("created employee {}", id);
        Ok(employee)
    }

    /// Update one employee's mobile number from raw input.
    ///
    /// Only the new number is validated; the rest of the record is carried
    /// over unchanged via copy-with-replacement.
    pub async fn update_mobile_number(
        &self,
        id: EmployeeId,
        raw: &str,
    ) -> RegistryResult<Employee> {
        let mobile_number = MobileNumber::try_from(raw)?;

        let existing = self
            .store
            .find_employee_by_mobile_number(mobile_number)
            .await
            .map_err(RegistryError::store)?;
        // The employee keeping their own number is not a duplicate.
        if existing.is_some_and(|e| e.id != id) {
            warn!("rejected mobile number update for {}: duplicate", id);
            return Err(RegistryError::duplicate(
                "mobileNumber",
                mobile_number.to_string(),
            ));
        }

        let employee = self.require_employee(id).await?;
        let updated = employee.with_mobile_number(mobile_number);
        self.store
            .update_employee(updated.clone())
            .await
            .map_err(RegistryError::store)?;
        info!("updated mobile number for employee {}", id);
        Ok(updated)
    }

    /// Update one employee's email address from raw input.
    pub async fn update_email(&self, id: EmployeeId, raw: &str) -> RegistryResult<Employee> {
        let email = EmailAddress::try_from(raw)?;

        let existing = self
            .store
            .find_employee_by_email(&email)
            .await
            .map_err(RegistryError::store)?;
        if existing.is_some_and(|e| e.id != id) {
            warn!("rejected email update for {}: duplicate", id);
            return Err(RegistryError::duplicate("email", email.as_str()));
        }

        let employee = self.require_employee(id).await?;
        let updated = employee.with_email(email);
        self.store
            .update_employee(updated.clone())
            .await
            .map_err(RegistryError::store)?;
        info!("updated email for employee {}", id);
        Ok(updated)
    }

    /// Update one employee's salary from raw input.
    pub async fn update_salary(&self, id: EmployeeId, raw: &str) -> RegistryResult<Employee> {
        let salary = Salary::try_from(raw)?;
        let employee = self.require_employee(id).await?;
        let updated = employee.with_salary(salary);
        self.store
            .update_employee(updated.clone())
            .await
            .map_err(RegistryError::store)?;
        info!("updated salary for employee {}", id);
        Ok(updated)
    }

    /// Add an address for an existing employee from raw input.
    pub async fn add_address(&self, input: &AddressInput) -> RegistryResult<Address> {
        let employee_id = EmployeeId::try_from(input.employee_id.as_str())?;
        // The owner must exist before any other field is worth parsing.
        self.require_employee(employee_id).await?;

        let address = AddressBuilder::new(employee_id)
            .door_number(DoorNumber::try_from(input.door_number.as_str())?)
            .street(Street::try_from(input.street.as_str())?)
            .locality(PlaceName::new("locality", input.locality.clone())?)
            .city(PlaceName::new("city", input.city.clone())?)
            .state(PlaceName::new("state", input.state.clone())?)
            .country(PlaceName::new("country", input.country.clone())?)
            .pin_code(PinCode::try_from(input.pin_code.as_str())?)
            .build()?;

        self.store
            .insert_address(address.clone())
            .await
            .map_err(RegistryError::store)?;
        info!("added address for employee {}", employee_id);
        Ok(address)
    }

    /// Create a project from raw input.
    pub async fn create_project(&self, input: &ProjectInput) -> RegistryResult<Project> {
        let name = ProjectName::try_from(input.name.as_str())?;
        let description = ProjectDescription::try_from(input.description.as_str())?;
        let status = ProjectStatus::from_code(&input.status_code)?;
        let manager = PersonName::try_from(input.manager.as_str())?;

        if self
            .store
            .find_project_by_name(&name)
            .await
            .map_err(RegistryError::store)?
            .is_some()
        {
            warn!("rejected project creation: '{}' already exists", name);
            return Err(RegistryError::duplicate("projectName", name.as_str()));
        }

        let project = ProjectBuilder::new(name)
            .description(description)
            .status(status)
            .manager(manager)
            .build()?;

        self.store
            .insert_project(project.clone())
            .await
            .map_err(RegistryError::store)?;
        info!("created project '{}'", project.name);
        Ok(project)
    }

    /// Look up an employee by id.
    pub async fn find_employee(&self, id: EmployeeId) -> RegistryResult<Option<Employee>> {
        self.store
            .find_employee_by_id(id)
            .await
            .map_err(RegistryError::store)
    }

    /// Delete an employee (and, by composition, their addresses).
    pub async fn delete_employee(&self, id: EmployeeId) -> RegistryResult<bool> {
        let deleted = self
            .store
            .delete_employee(id)
            .await
            .map_err(RegistryError::store)?;
        if deleted {
            info!("deleted employee {}", id);
        }
        Ok(deleted)
    }

    /// Total number of stored employees.
    pub async fn employee_count(&self) -> RegistryResult<usize> {
        self.store
            .count_employees()
            .await
            .map_err(RegistryError::store)
    }

    async fn require_employee(&self, id: EmployeeId) -> RegistryResult<Employee> {
        self.store
            .find_employee_by_id(id)
            .await
            .map_err(RegistryError::store)?
            .ok_or_else(|| RegistryError::not_found(id.value()))
    }
}

fn parse_birth_date(raw: &str, today: NaiveDate) -> Result<BirthDate, ValidationError> {
    let date = BirthDate::parse_date(raw)
        .ok_or_else(|| ValidationError::invalid_date("dateOfBirth", raw))?;
    BirthDate::new(date, today)
}

fn parse_joining_date(raw: &str, today: NaiveDate) -> Result<JoiningDate, ValidationError> {
    let date = JoiningDate::parse_date(raw)
        .ok_or_else(|| ValidationError::invalid_date("dateOfJoining", raw))?;
    JoiningDate::new(date, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    fn valid_input() -> EmployeeInput {
        EmployeeInput {
            id: "5".into(),
            name: " John Paul ".into(),
            gender: "MALE".into(),
            date_of_birth: "06-09-1999".into(),
            mobile_number: "9876543210".into(),
            email: "john.paul@example.com".into(),
            salary: "15000.00".into(),
            date_of_joining: "02-01-2019".into(),
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_fields() {
        let registry = EmployeeRegistry::new(InMemoryStore::new());
        let employee = registry
            .create_employee_as_of(&valid_input(), today())
            .await
            .unwrap();

        assert_eq!(employee.id.value(), 5);
        assert_eq!(employee.name.as_str(), "john paul");
        assert_eq!(employee.gender, Gender::Male);
        assert_eq!(employee.mobile_number.to_string(), "9876543210");
        assert_eq!(employee.salary.to_string(), "15000.00");
        assert_eq!(registry.employee_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_field_with_named_error() {
        let registry = EmployeeRegistry::new(InMemoryStore::new());
        let mut input = valid_input();
        input.mobile_number = "5876543210".into();

        let err = registry
            .create_employee_as_of(&input, today())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::InvalidMobileNumber { .. })
        ));
        // Nothing was written.
        assert_eq!(registry.employee_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let registry = EmployeeRegistry::new(InMemoryStore::new());
        registry
            .create_employee_as_of(&valid_input(), today())
            .await
            .unwrap();

        let mut second = valid_input();
        second.mobile_number = "9876543211".into();
        second.email = "other@example.com".into();
        let err = registry
            .create_employee_as_of(&second, today())
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate { ref field, .. } if field == "id"));
    }

    #[tokio::test]
    async fn test_update_salary_keeps_other_fields() {
        let registry = EmployeeRegistry::new(InMemoryStore::new());
        let created = registry
            .create_employee_as_of(&valid_input(), today())
            .await
            .unwrap();

        let updated = registry
            .update_salary(created.id, "20000.00")
            .await
            .unwrap();
        assert_eq!(updated.salary.to_string(), "20000.00");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.email, created.email);
    }

    #[tokio::test]
    async fn test_update_mobile_number_allows_own_number() {
        let registry = EmployeeRegistry::new(InMemoryStore::new());
        let created = registry
            .create_employee_as_of(&valid_input(), today())
            .await
            .unwrap();

        // Re-submitting the same number for the same employee is fine.
        let updated = registry
            .update_mobile_number(created.id, "9876543210")
            .await
            .unwrap();
        assert_eq!(updated.mobile_number, created.mobile_number);
    }

    #[tokio::test]
    async fn test_update_mobile_number_rejects_another_employees_number() {
        let registry = EmployeeRegistry::new(InMemoryStore::new());
        registry
            .create_employee_as_of(&valid_input(), today())
            .await
            .unwrap();

        let mut input = valid_input();
        input.id = "6".into();
        input.mobile_number = "9876543211".into();
        input.email = "second@example.com".into();
        let second = registry
            .create_employee_as_of(&input, today())
            .await
            .unwrap();

        // The first employee's number is taken.
        let err = registry
            .update_mobile_number(second.id, "9876543210")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Duplicate { ref field, ref value }
                if field == "mobileNumber" && value == "9876543210"
        ));

        let stored = registry.find_employee(second.id).await.unwrap().unwrap();
        assert_eq!(stored.mobile_number, second.mobile_number);
    }

    #[tokio::test]
    async fn test_update_email_rejects_another_employees_email() {
        let registry = EmployeeRegistry::new(InMemoryStore::new());
        registry
            .create_employee_as_of(&valid_input(), today())
            .await
            .unwrap();

        let mut input = valid_input();
        input.id = "6".into();
        input.mobile_number = "9876543211".into();
        input.email = "second@example.com".into();
        let second = registry
            .create_employee_as_of(&input, today())
            .await
            .unwrap();

        let err = registry
            .update_email(second.id, "john.paul@example.com")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Duplicate { ref field, ref value }
                if field == "email" && value == "john.paul@example.com"
        ));

        let stored = registry.find_employee(second.id).await.unwrap().unwrap();
        assert_eq!(stored.email, second.email);
    }

    #[tokio::test]
    async fn test_update_missing_employee_is_not_found() {
        let registry = EmployeeRegistry::new(InMemoryStore::new());
        let err = registry
            .update_salary(EmployeeId::new(9).unwrap(), "9000")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { id: 9 }));
    }

    #[tokio::test]
    async fn test_add_address_requires_owner() {
        let registry = EmployeeRegistry::new(InMemoryStore::new());
        let input = AddressInput {
            employee_id: "5".into(),
            door_number: "12A".into(),
            street: "st. marks road".into(),
            locality: "indiranagar".into(),
            city: "bengaluru".into(),
            state: "karnataka".into(),
            country: "india".into(),
            pin_code: "560038".into(),
        };
        let err = registry.add_address(&input).await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { id: 5 }));
    }

    #[tokio::test]
    async fn test_create_project_and_reject_duplicate_name() {
        let registry = EmployeeRegistry::new(InMemoryStore::new());
        let input = ProjectInput {
            name: "Payroll Revamp".into(),
            description: "Rebuild the payroll pipeline.".into(),
            status_code: "d".into(),
            manager: "Mary Jane".into(),
        };
        let project = registry.create_project(&input).await.unwrap();
        assert_eq!(project.name.as_str(), "payroll revamp");
        assert_eq!(project.status, ProjectStatus::Development);
        assert_eq!(project.manager.as_str(), "mary jane");

        let err = registry.create_project(&input).await.unwrap_err();
        assert!(
            matches!(err, RegistryError::Duplicate { ref field, .. } if field == "projectName")
        );
    }

    #[tokio::test]
    async fn test_create_project_unknown_status_code() {
        let registry = EmployeeRegistry::new(InMemoryStore::new());
        let input = ProjectInput {
            name: "Payroll Revamp".into(),
            description: "Rebuild the payroll pipeline.".into(),
            status_code: "X".into(),
            manager: "Mary Jane".into(),
        };
        let err = registry.create_project(&input).await.unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::UnknownStatusCode { .. })
        ));
    }
}
