//! Address row type.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use sabzi_core::{Address, AddressId, UserId};

/// An `addresses` table row.
#[derive(Debug, Clone, FromRow)]
pub struct AddressRecord {
    pub id: AddressId,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl AddressRecord {
    /// Convert into the wire representation, dropping ownership columns.
    #[must_use]
    pub fn into_address(self) -> Address {
        Address {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            street: self.street,
            city: self.city,
            state: self.state,
            zipcode: self.zipcode,
            country: self.country,
            phone: self.phone,
        }
    }
}
