//! Failure cases for registration, login, and token handling.

use thiserror::Error;

use crate::db::RepositoryError;

/// Everything the auth service can report.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The submitted email failed to parse.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] sabzi_core::EmailError),

    /// Wrong password, or no account under that email.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A valid token whose user row has since been deleted.
    #[error("user not found")]
    UserNotFound,

    /// Registration hit an email that is already taken.
    #[error("account already exists")]
    UserAlreadyExists,

    /// Password rejected; the payload is the client-facing message.
    #[error("weak password: {0}")]
    WeakPassword(String),

    /// JWT signing failed.
    #[error("token signing failed")]
    TokenCreation,

    /// Token malformed, forged, or expired.
    #[error("token rejected")]
    InvalidToken,

    /// The user table could not be read or written.
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),

    /// Argon2 failed to hash the password.
    #[error("password hashing failed")]
    PasswordHash,
}
