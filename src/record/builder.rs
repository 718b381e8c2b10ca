//! Fluent builders for assembling domain records.
//!
//! Builders collect already-validated value objects and fail at `build()`
//! with a [`MissingRequiredField`] error when a required field was never
//! supplied. They perform no validation of their own — by the time a value
//! object exists, its field is acceptable.
//!
//! [`MissingRequiredField`]: crate::error::ValidationError::MissingRequiredField
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use employee_registry::record::EmployeeBuilder;
//! use employee_registry::record::value_objects::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let today = NaiveDate::from_ymd_opt(2026, 8, 23).ok_or("bad date")?;
//!     let employee = EmployeeBuilder::new(EmployeeId::new(5)?)
//!         .name(PersonName::try_from("john paul")?)
//!         .gender(Gender::Male)
//!         .birth_date(BirthDate::parse_with("06-09-1999", today).ok_or("bad date of birth")?)
//!         .mobile_number(MobileNumber::try_from("9876543210")?)
//!         .email(EmailAddress::try_from("john.paul@example.com")?)
//!         .salary(Salary::try_from("15000.00")?)
//!         .joining_date(JoiningDate::parse_with("02-01-2019", today).ok_or("bad joining date")?)
//!         .build()?;
//!     assert_eq!(employee.name.as_str(), "john paul");
//!     Ok(())
//! }
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::record::address::Address;
use crate::record::employee::Employee;
use crate::record::project::Project;
use crate::record::value_objects::{
    BirthDate, DoorNumber, EmailAddress, EmployeeId, Gender, JoiningDate, MobileNumber, PersonName,
    PinCode, PlaceName, ProjectDescription, ProjectName, ProjectStatus, Salary, Street,
};

fn required<T>(value: Option<T>, field: &str) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::missing_required(field))
}

/// Builder for [`Employee`] records.
#[derive(Debug, Clone)]
pub struct EmployeeBuilder {
    id: EmployeeId,
    name: Option<PersonName>,
    gender: Option<Gender>,
    birth_date: Option<BirthDate>,
    mobile_number: Option<MobileNumber>,
    email: Option<EmailAddress>,
    salary: Option<Salary>,
    joining_date: Option<JoiningDate>,
}

impl EmployeeBuilder {
    /// Create a builder for the given employee id.
    pub fn new(id: EmployeeId) -> Self {
        Self {
            id,
            name: None,
            gender: None,
            birth_date: None,
            mobile_number: None,
            email: None,
            salary: None,
            joining_date: None,
        }
    }

    /// Set the employee's name.
    pub fn name(mut self, name: PersonName) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the employee's gender.
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the employee's birth date.
    pub fn birth_date(mut self, birth_date: BirthDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Set the employee's mobile number.
    pub fn mobile_number(mut self, mobile_number: MobileNumber) -> Self {
        self.mobile_number = Some(mobile_number);
        self
    }

    /// Set the employee's email address.
    pub fn email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    /// Set the employee's salary.
    pub fn salary(mut self, salary: Salary) -> Self {
        self.salary = Some(salary);
        self
    }

    /// Set the employee's joining date.
    pub fn joining_date(mut self, joining_date: JoiningDate) -> Self {
        self.joining_date = Some(joining_date);
        self
    }

    /// Build the Employee, failing if any required field is missing.
    pub fn build(self) -> ValidationResult<Employee> {
        Ok(Employee::new(
            self.id,
            required(self.name, "name")?,
            required(self.gender, "gender")?,
            required(self.birth_date, "dateOfBirth")?,
            required(self.mobile_number, "mobileNumber")?,
            required(self.email, "email")?,
            required(self.salary, "salary")?,
            required(self.joining_date, "dateOfJoining")?,
        ))
    }
}

/// Builder for [`Address`] records.
#[derive(Debug, Clone)]
pub struct AddressBuilder {
    employee_id: EmployeeId,
    door_number: Option<DoorNumber>,
    street: Option<Street>,
    locality: Option<PlaceName>,
    city: Option<PlaceName>,
    state: Option<PlaceName>,
    country: Option<PlaceName>,
    pin_code: Option<PinCode>,
}

impl AddressBuilder {
    /// Create a builder for an address owned by the given employee.
    pub fn new(employee_id: EmployeeId) -> Self {
        Self {
            employee_id,
            door_number: None,
            street: None,
            locality: None,
            city: None,
            state: None,
            country: None,
            pin_code: None,
        }
    }

    /// Set the door number.
    pub fn door_number(mut self, door_number: DoorNumber) -> Self {
        self.door_number = Some(door_number);
        self
    }

    /// Set the street.
    pub fn street(mut self, street: Street) -> Self {
        self.street = Some(street);
        self
    }

    /// Set the locality.
    pub fn locality(mut self, locality: PlaceName) -> Self {
        self.locality = Some(locality);
        self
    }

    /// Set the city.
    pub fn city(mut self, city: PlaceName) -> Self {
        self.city = Some(city);
        self
    }

    /// Set the state.
    pub fn state(mut self, state: PlaceName) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the country.
    pub fn country(mut self, country: PlaceName) -> Self {
        self.country = Some(country);
        self
    }

    /// Set the pin code.
    pub fn pin_code(mut self, pin_code: PinCode) -> Self {
        self.pin_code = Some(pin_code);
        self
    }

    /// Build the Address, failing if any required field is missing.
    pub fn build(self) -> ValidationResult<Address> {
        Ok(Address::new(
            self.employee_id,
            required(self.door_number, "doorNumber")?,
            required(self.street, "street")?,
            required(self.locality, "locality")?,
            required(self.city, "city")?,
            required(self.state, "state")?,
            required(self.country, "country")?,
            required(self.pin_code, "pinCode")?,
        ))
    }
}

/// Builder for [`Project`] records.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    name: ProjectName,
    description: Option<ProjectDescription>,
    status: Option<ProjectStatus>,
    manager: Option<PersonName>,
}

impl ProjectBuilder {
    /// Create a builder for the given project name.
    pub fn new(name: ProjectName) -> Self {
        Self {
            name,
            description: None,
            status: None,
            manager: None,
        }
    }

    /// Set the project description.
    pub fn description(mut self, description: ProjectDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Set the project status.
    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the project manager.
    pub fn manager(mut self, manager: PersonName) -> Self {
        self.manager = Some(manager);
        self
    }

    /// Build the Project, failing if any required field is missing.
    pub fn build(self) -> ValidationResult<Project> {
        Ok(Project::new(
            self.name,
            required(self.description, "projectDescription")?,
            required(self.status, "projectStatus")?,
            required(self.manager, "projectManager")?,
        ))
    }
}
