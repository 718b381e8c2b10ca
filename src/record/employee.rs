//! Employee domain record.

use crate::record::value_objects::{
    BirthDate, EmailAddress, EmployeeId, Gender, JoiningDate, MobileNumber, PersonName, Salary,
};
use serde::{Deserialize, Serialize};

/// An immutable, fully-validated employee record.
///
/// Every field is a value object that was validated at construction, so an
/// `Employee` can only hold acceptable data. Assembly performs no further
/// validation.
///
/// Single-field updates use the consuming `with_*` methods: they replace one
/// typed field and keep the rest, so updating a salary never re-validates
/// the name that came with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: PersonName,
    pub gender: Gender,
    pub birth_date: BirthDate,
    pub mobile_number: MobileNumber,
    pub email: EmailAddress,
    pub salary: Salary,
    pub joining_date: JoiningDate,
}

impl Employee {
    /// Assemble an employee from already-validated fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EmployeeId,
        name: PersonName,
        gender: Gender,
        birth_date: BirthDate,
        mobile_number: MobileNumber,
        email: EmailAddress,
        salary: Salary,
        joining_date: JoiningDate,
    ) -> Self {
        Self {
            id,
            name,
            gender,
            birth_date,
            mobile_number,
            email,
            salary,
            joining_date,
        }
    }

    /// Replace the name, keeping every other field.
    pub fn with_name(mut self, name: PersonName) -> Self {
        self.name = name;
        self
    }

    /// Replace the gender, keeping every other field.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Replace the birth date, keeping every other field.
    pub fn with_birth_date(mut self, birth_date: BirthDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    /// Replace the mobile number, keeping every other field.
    pub fn with_mobile_number(mut self, mobile_number: MobileNumber) -> Self {
        self.mobile_number = mobile_number;
        self
    }

    /// Replace the email address, keeping every other field.
    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = email;
        self
    }

    /// Replace the salary, keeping every other field.
    pub fn with_salary(mut self, salary: Salary) -> Self {
        self.salary = salary;
        self
    }

    /// Replace the joining date, keeping every other field.
    pub fn with_joining_date(mut self, joining_date: JoiningDate) -> Self {
        self.joining_date = joining_date;
        self
    }
}
