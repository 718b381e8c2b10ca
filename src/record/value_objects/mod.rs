//! Value objects for every user-submitted field.
//!
//! Each type owns its field's syntactic rule and normalization. The shared
//! contract is:
//!
//! - `is_valid(&str) -> bool` — pure, whitespace-tolerant syntactic check
//! - `parse(&str) -> Option<Self>` — trim, normalize and convert; `None` on
//!   any invalid input, including pattern-valid but numerically impossible
//!   values (calendar-invalid dates, integer overflow)
//! - `new(..) -> ValidationResult<Self>` — typed constructor with a
//!   field-named error
//!
//! The two date objects additionally take an injected `today` for their
//! semantic (age / tenure) rules; nothing here touches the system clock or
//! the record store.

mod birth_date;
mod dates;
mod door_number;
mod email_address;
mod employee_id;
mod gender;
mod joining_date;
mod mobile_number;
mod person_name;
mod pin_code;
mod place_name;
mod project_description;
mod project_name;
mod project_status;
mod salary;
mod street;

pub use birth_date::BirthDate;
pub use door_number::DoorNumber;
pub use email_address::EmailAddress;
pub use employee_id::EmployeeId;
pub use gender::Gender;
pub use joining_date::JoiningDate;
pub use mobile_number::MobileNumber;
pub use person_name::PersonName;
pub use pin_code::PinCode;
pub use place_name::PlaceName;
pub use project_description::ProjectDescription;
pub use project_name::ProjectName;
pub use project_status::ProjectStatus;
pub use salary::Salary;
pub use street::Street;
