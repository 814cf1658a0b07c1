//! Delivery address types.

use serde::{Deserialize, Serialize};

use crate::AddressId;

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub phone: String,
}

/// Error returned when a required address field is blank.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("address field '{field}' cannot be empty")]
pub struct AddressValidationError {
    /// Name of the offending field, in wire casing.
    pub field: &'static str,
}

/// Address fields as submitted at checkout, without a database identity.
///
/// Also used as the immutable address snapshot stored on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub phone: String,
}

impl AddressInput {
    /// Check that every field is filled in.
    ///
    /// # Errors
    ///
    /// Returns the first blank field, named in wire casing.
    pub fn validate(&self) -> Result<(), AddressValidationError> {
        let fields = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("zipcode", &self.zipcode),
            ("country", &self.country),
            ("phone", &self.phone),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AddressValidationError { field: name });
            }
        }

        Ok(())
    }
}

impl From<Address> for AddressInput {
    fn from(address: Address) -> Self {
        Self {
            first_name: address.first_name,
            last_name: address.last_name,
            email: address.email,
            street: address.street,
            city: address.city,
            state: address.state,
            zipcode: address.zipcode,
            country: address.country,
            phone: address.phone,
        }
    }
}
