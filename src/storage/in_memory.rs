//! In-memory record store.
//!
//! Thread-safe reference implementation of [`RecordStore`] over
//! `tokio::sync::RwLock`-guarded maps. Intended for tests, development and
//! the console front end; production deployments plug in a database-backed
//! implementation of the same trait.
//!
//! # Example
//!
//! ```rust
//! use employee_registry::storage::{InMemoryStore, RecordStore};
//! use employee_registry::record::value_objects::*;
//! use employee_registry::record::Employee;
//! use chrono::NaiveDate;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::new();
//! let today = NaiveDate::from_ymd_opt(2026, 8, 23).ok_or("bad date")?;
//! let employee = Employee::new(
//!     EmployeeId::new(5)?,
//!     PersonName::parse("john paul").ok_or("bad name")?,
//!     Gender::Male,
//!     BirthDate::parse_with("06-09-1999", today).ok_or("bad date of birth")?,
//!     MobileNumber::parse("9876543210").ok_or("bad mobile number")?,
//!     EmailAddress::parse("john.paul@example.com").ok_or("bad email")?,
//!     Salary::parse("15000.00").ok_or("bad salary")?,
//!     JoiningDate::parse_with("02-01-2019", today).ok_or("bad joining date")?,
//! );
//! store.insert_employee(employee).await?;
//! assert_eq!(store.count_employees().await?, 1);
//! # Ok(())
//! # }
//! ```

use crate::record::value_objects::{EmailAddress, EmployeeId, MobileNumber, ProjectName};
use crate::record::{Address, Employee, Project};
use crate::storage::{RecordStore, StorageError};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct StoreInner {
    employees: BTreeMap<i32, Employee>,
    addresses: Vec<Address>,
    projects: BTreeMap<String, Project>,
}

/// Thread-safe in-memory store.
///
/// Employees are keyed by id, projects by normalized name; addresses live in
/// insertion order under their owning employee. Cloning shares the
/// underlying data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

/// Counts exposed by [`InMemoryStore::stats`] for debugging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InMemoryStoreStats {
    pub employee_count: usize,
    pub address_count: usize,
    pub project_count: usize,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get record counts for debugging and monitoring.
    pub async fn stats(&self) -> InMemoryStoreStats {
        let inner = self.inner.read().await;
        InMemoryStoreStats {
            employee_count: inner.employees.len(),
            address_count: inner.addresses.len(),
            project_count: inner.projects.len(),
        }
    }

    /// Clear all data (useful for testing).
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.employees.clear();
        inner.addresses.clear();
        inner.projects.clear();
    }
}

impl RecordStore for InMemoryStore {
    type Error = StorageError;

    async fn find_employee_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, Self::Error> {
        let inner = self.inner.read().await;
        Ok(inner.employees.get(&id.value()).cloned())
    }

    async fn find_employee_by_mobile_number(
        &self,
        number: MobileNumber,
    ) -> Result<Option<Employee>, Self::Error> {
        let inner = self.inner.read().await;
        Ok(inner
            .employees
            .values()
            .find(|e| e.mobile_number == number)
            .cloned())
    }

    async fn find_employee_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Employee>, Self::Error> {
        let inner = self.inner.read().await;
        Ok(inner.employees.values().find(|e| &e.email == email).cloned())
    }

    async fn count_employees(&self) -> Result<usize, Self::Error> {
        let inner = self.inner.read().await;
        Ok(inner.employees.len())
    }

    async fn insert_employee(&self, employee: Employee) -> Result<(), Self::Error> {
        let mut inner = self.inner.write().await;
        let key = employee.id.value();
        if inner.employees.contains_key(&key) {
            return Err(StorageError::employee_already_exists(key));
        }
        inner.employees.insert(key, employee);
        Ok(())
    }

    async fn update_employee(&self, employee: Employee) -> Result<(), Self::Error> {
        let mut inner = self.inner.write().await;
        let key = employee.id.value();
        if !inner.employees.contains_key(&key) {
            return Err(StorageError::employee_not_found(key));
        }
        inner.employees.insert(key, employee);
        Ok(())
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<bool, Self::Error> {
        let mut inner = self.inner.write().await;
        let existed = inner.employees.remove(&id.value()).is_some();
        if existed {
            // Address lifetime is bound to the employee.
            inner.addresses.retain(|a| a.employee_id != id);
        }
        Ok(existed)
    }

    async fn insert_address(&self, address: Address) -> Result<(), Self::Error> {
        let mut inner = self.inner.write().await;
        if !inner.employees.contains_key(&address.employee_id.value()) {
            return Err(StorageError::employee_not_found(address.employee_id.value()));
        }
        inner.addresses.push(address);
        Ok(())
    }

    async fn addresses_for(&self, employee_id: EmployeeId) -> Result<Vec<Address>, Self::Error> {
        let inner = self.inner.read().await;
        Ok(inner
            .addresses
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn find_project_by_name(
        &self,
        name: &ProjectName,
    ) -> Result<Option<Project>, Self::Error> {
        let inner = self.inner.read().await;
        Ok(inner.projects.get(name.as_str()).cloned())
    }

    async fn insert_project(&self, project: Project) -> Result<(), Self::Error> {
        let mut inner = self.inner.write().await;
        let key = project.name.as_str().to_string();
        if inner.projects.contains_key(&key) {
            return Err(StorageError::project_already_exists(key));
        }
        inner.projects.insert(key, project);
        Ok(())
    }

    async fn delete_project(&self, name: &ProjectName) -> Result<bool, Self::Error> {
        let mut inner = self.inner.write().await;
        Ok(inner.projects.remove(name.as_str()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::value_objects::{
        BirthDate, DoorNumber, Gender, JoiningDate, PersonName, PinCode, PlaceName, Salary, Street,
    };
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    fn employee(id: i32, mobile: &str, email: &str) -> Employee {
        Employee::new(
            EmployeeId::new(id).unwrap(),
            PersonName::parse("john paul").unwrap(),
            Gender::Male,
            BirthDate::parse_with("06-09-1999", today()).unwrap(),
            MobileNumber::parse(mobile).unwrap(),
            EmailAddress::parse(email).unwrap(),
            Salary::parse("15000.00").unwrap(),
            JoiningDate::parse_with("02-01-2019", today()).unwrap(),
        )
    }

    fn address(employee_id: i32) -> Address {
        Address::new(
            EmployeeId::new(employee_id).unwrap(),
            DoorNumber::parse("12A").unwrap(),
            Street::parse("st. marks road").unwrap(),
            PlaceName::parse("indiranagar").unwrap(),
            PlaceName::parse("bengaluru").unwrap(),
            PlaceName::parse("karnataka").unwrap(),
            PlaceName::parse("india").unwrap(),
            PinCode::parse("560038").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryStore::new();
        store
            .insert_employee(employee(1, "9876543210", "a.one@example.com"))
            .await
            .unwrap();

        let found = store
            .find_employee_by_id(EmployeeId::new(1).unwrap())
            .await
            .unwrap();
        assert!(found.is_some());

        let by_mobile = store
            .find_employee_by_mobile_number(MobileNumber::parse("9876543210").unwrap())
            .await
            .unwrap();
        assert_eq!(by_mobile.unwrap().id.value(), 1);

        let by_email = store
            .find_employee_by_email(&EmailAddress::parse("a.one@example.com").unwrap())
            .await
            .unwrap();
        assert_eq!(by_email.unwrap().id.value(), 1);

        assert_eq!(store.count_employees().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_lookups_are_none_not_errors() {
        let store = InMemoryStore::new();
        assert!(store
            .find_employee_by_id(EmployeeId::new(99).unwrap())
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_employee_by_mobile_number(MobileNumber::parse("9876543210").unwrap())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_conflicts() {
        let store = InMemoryStore::new();
        store
            .insert_employee(employee(1, "9876543210", "a.one@example.com"))
            .await
            .unwrap();
        let err = store
            .insert_employee(employee(1, "9876543211", "a.two@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_update_requires_existing() {
        let store = InMemoryStore::new();
        let err = store
            .update_employee(employee(7, "9876543210", "a.one@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_cascades_addresses() {
        let store = InMemoryStore::new();
        store
            .insert_employee(employee(1, "9876543210", "a.one@example.com"))
            .await
            .unwrap();
        store.insert_address(address(1)).await.unwrap();
        store.insert_address(address(1)).await.unwrap();
        assert_eq!(store.stats().await.address_count, 2);

        assert!(store
            .delete_employee(EmployeeId::new(1).unwrap())
            .await
            .unwrap());
        assert_eq!(store.stats().await.address_count, 0);
        assert!(!store
            .delete_employee(EmployeeId::new(1).unwrap())
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_address_requires_owner() {
        let store = InMemoryStore::new();
        let err = store.insert_address(address(9)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_project_round_trip() {
        use crate::record::value_objects::{ProjectDescription, ProjectStatus};
        use crate::record::Project;

        let store = InMemoryStore::new();
        let project = Project::new(
            ProjectName::parse("payroll revamp").unwrap(),
            ProjectDescription::parse("Rebuild the payroll pipeline.").unwrap(),
            ProjectStatus::Development,
            PersonName::parse("mary jane").unwrap(),
        );
        store.insert_project(project.clone()).await.unwrap();

        let found = store
            .find_project_by_name(&ProjectName::parse("payroll revamp").unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(project.clone()));

        let err = store.insert_project(project).await.unwrap_err();
        assert!(err.is_conflict());

        assert!(store
            .delete_project(&ProjectName::parse("payroll revamp").unwrap())
            .await
            .unwrap());
    }
}
