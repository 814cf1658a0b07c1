//! Queries against the `users` table.

use sqlx::PgPool;

use sabzi_core::{Email, UserId};

use super::RepositoryError;
use crate::models::UserRecord;

/// Lookups and inserts for shopper and admin accounts.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up an account by email, the login path.
    ///
    /// # Errors
    ///
    /// `RepositoryError::Database` when the query fails.
    pub async fn get_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        sqlx::query_as::<_, UserRecord>(
            r"
            SELECT id, name, email, password_hash, is_admin, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await
        .map_err(RepositoryError::Database)
    }

    /// Look up an account by primary key, the token verification path.
    ///
    /// # Errors
    ///
    /// `RepositoryError::Database` when the query fails.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<UserRecord>, RepositoryError> {
        sqlx::query_as::<_, UserRecord>(
            r"
            SELECT id, name, email, password_hash, is_admin, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(RepositoryError::Database)
    }

    /// Insert an account row with an already-hashed password.
    ///
    /// # Errors
    ///
    /// `RepositoryError::Conflict` when the email is taken, otherwise
    /// `RepositoryError::Database`.
    pub async fn create(
        &self,
        name: &str,
        email: &Email,
        password_hash: &str,
        is_admin: bool,
    ) -> Result<UserRecord, RepositoryError> {
        let inserted = sqlx::query_as::<_, UserRecord>(
            r"
            INSERT INTO users (name, email, password_hash, is_admin)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, is_admin, created_at, updated_at
            ",
        )
        .bind(name)
        .bind(email.as_str())
        .bind(password_hash)
        .bind(is_admin)
        .fetch_one(self.pool)
        .await;

        match inserted {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(RepositoryError::Conflict("email already exists".to_owned()))
            }
            Err(other) => Err(RepositoryError::Database(other)),
        }
    }
}
