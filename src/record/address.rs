//! Address domain record.

use crate::record::value_objects::{DoorNumber, EmployeeId, PinCode, PlaceName, Street};
use serde::{Deserialize, Serialize};

/// An immutable, fully-validated postal address.
///
/// Addresses are owned by their employee: the `employee_id` ties the record
/// to its owner and the store cascades deletion with the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub employee_id: EmployeeId,
    pub door_number: DoorNumber,
    pub street: Street,
    pub locality: PlaceName,
    pub city: PlaceName,
    pub state: PlaceName,
    pub country: PlaceName,
    pub pin_code: PinCode,
}

impl Address {
    /// Assemble an address from already-validated fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        employee_id: EmployeeId,
        door_number: DoorNumber,
        street: Street,
        locality: PlaceName,
        city: PlaceName,
        state: PlaceName,
        country: PlaceName,
        pin_code: PinCode,
    ) -> Self {
        Self {
            employee_id,
            door_number,
            street,
            locality,
            city,
            state,
            country,
            pin_code,
        }
    }

    /// Replace the door number, keeping every other field.
    pub fn with_door_number(mut self, door_number: DoorNumber) -> Self {
        self.door_number = door_number;
        self
    }

    /// Replace the street, keeping every other field.
    pub fn with_street(mut self, street: Street) -> Self {
        self.street = street;
        self
    }

    /// Replace the pin code, keeping every other field.
    pub fn with_pin_code(mut self, pin_code: PinCode) -> Self {
        self.pin_code = pin_code;
        self
    }
}
