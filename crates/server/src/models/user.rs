//! User row type.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use sabzi_core::{Email, User, UserId};

/// A `users` table row, including credential material.
///
/// Only `into_public` leaves the server; the hash stays in the auth service.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// User's email address (stored lowercase).
    pub email: Email,
    /// Argon2 hash of the user's password.
    pub password_hash: String,
    /// Whether the user may call admin-only routes.
    pub is_admin: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Convert into the wire representation, dropping credential material.
    #[must_use]
    pub fn into_public(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            is_admin: self.is_admin,
        }
    }
}
