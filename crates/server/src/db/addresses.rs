//! Address repository for database operations.

use sqlx::PgPool;

use sabzi_core::{AddressInput, UserId};

use super::RepositoryError;
use crate::models::AddressRecord;

/// Repository for saved delivery addresses.
pub struct AddressRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's saved addresses, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<AddressRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, AddressRecord>(
            r"
            SELECT id, user_id, first_name, last_name, email, street, city,
                   state, zipcode, country, phone, created_at
            FROM addresses
            WHERE user_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Save a new address for a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        user_id: UserId,
        input: &AddressInput,
    ) -> Result<AddressRecord, RepositoryError> {
        let row = sqlx::query_as::<_, AddressRecord>(
            r"
            INSERT INTO addresses (user_id, first_name, last_name, email, street,
                                   city, state, zipcode, country, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, user_id, first_name, last_name, email, street, city,
                      state, zipcode, country, phone, created_at
            ",
        )
        .bind(user_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.street)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.zipcode)
        .bind(&input.country)
        .bind(&input.phone)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }
}
