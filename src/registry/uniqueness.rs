//! Duplicate detection against the record store.

use crate::record::value_objects::{EmailAddress, MobileNumber};
use crate::storage::RecordStore;

/// Checks uniqueness-constrained fields against existing employee records.
///
/// Borrows the store and issues exactly one lookup per check, with no
/// caching or retry. A store fault propagates as `Err` and must never be
/// read as "available" — the registry maps it to a distinct error class.
///
/// Two concurrent creations with the same number can both observe "not
/// found" here; closing that race is the storage backend's job (unique
/// index), not this checker's.
pub struct UniquenessChecker<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> UniquenessChecker<'a, S> {
    /// Create a checker over the given store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Whether any employee already uses this mobile number.
    pub async fn mobile_number_exists(&self, number: MobileNumber) -> Result<bool, S::Error> {
        let existing = self.store.find_employee_by_mobile_number(number).await?;
        Ok(existing.is_some())
    }

    /// Whether any employee already uses this email address.
    pub async fn email_exists(&self, email: &EmailAddress) -> Result<bool, S::Error> {
        let existing = self.store.find_employee_by_email(email).await?;
        Ok(existing.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::value_objects::{
        BirthDate, EmployeeId, Gender, JoiningDate, PersonName, Salary,
    };
    use crate::record::Employee;
    use crate::storage::InMemoryStore;
    use chrono::NaiveDate;

    fn sample_employee() -> Employee {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        Employee::new(
            EmployeeId::new(1).unwrap(),
            PersonName::parse("alice").unwrap(),
            Gender::Female,
            BirthDate::parse_with("06-09-1999", today).unwrap(),
            MobileNumber::parse("9876543210").unwrap(),
            EmailAddress::parse("alice@example.com").unwrap(),
            Salary::parse("9000").unwrap(),
            JoiningDate::parse_with("02-01-2019", today).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_reports_existing_and_absent() {
        let store = InMemoryStore::new();
        store.insert_employee(sample_employee()).await.unwrap();

        let checker = UniquenessChecker::new(&store);
        assert!(checker
            .mobile_number_exists(MobileNumber::parse("9876543210").unwrap())
            .await
            .unwrap());
        assert!(!checker
            .mobile_number_exists(MobileNumber::parse("9876543211").unwrap())
            .await
            .unwrap());
        assert!(checker
            .email_exists(&EmailAddress::parse("alice@example.com").unwrap())
            .await
            .unwrap());
        assert!(!checker
            .email_exists(&EmailAddress::parse("bob@example.com").unwrap())
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_each_check_is_a_fresh_query() {
        let store = InMemoryStore::new();
        let checker = UniquenessChecker::new(&store);
        let number = MobileNumber::parse("9876543210").unwrap();

        assert!(!checker.mobile_number_exists(number).await.unwrap());
        store.insert_employee(sample_employee()).await.unwrap();
        // No caching: the second check sees the new record.
        assert!(checker.mobile_number_exists(number).await.unwrap());
    }
}
