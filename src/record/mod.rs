//! Domain records and the value objects they are assembled from.
//!
//! The flow is always raw string → value object (validate + parse) →
//! builder / `with_*` composition → immutable record. Records never hold
//! unvalidated data.

pub mod address;
pub mod builder;
pub mod employee;
pub mod project;
pub mod value_objects;

pub use address::Address;
pub use builder::{AddressBuilder, EmployeeBuilder, ProjectBuilder};
pub use employee::Employee;
pub use project::Project;
