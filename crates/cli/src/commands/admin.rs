//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! sabzi admin create -e admin@example.com -n "Admin Name" -p "a strong password"
//! ```
//!
//! Bootstraps the very first admin on a fresh deployment, where nobody
//! holds a setup key yet; later admins can also come from
//! `POST /api/user/admin`.
//!
//! Reads `DATABASE_URL` from the environment or a `.env` file.

use secrecy::SecretString;
use thiserror::Error;

use sabzi_core::{Email, EmailError};
use sabzi_server::db::{self, RepositoryError, UserRepository};
use sabzi_server::services::auth::{AuthError, hash_password, validate_password};

/// Ways `admin create` can fail.
#[derive(Debug, Error)]
pub enum AdminError {
    /// `DATABASE_URL` was not provided.
    #[error("environment variable {0} is not set")]
    MissingEnvVar(&'static str),

    /// Could not reach the database.
    #[error("connection failed: {0}")]
    Database(#[from] sqlx::Error),

    /// The email did not parse.
    #[error("bad email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password validation or hashing failed.
    #[error(transparent)]
    Password(#[from] AuthError),

    /// An account under this email is already registered.
    #[error("an account already exists with email {0}")]
    UserExists(String),

    /// The insert itself failed.
    #[error("insert failed: {0}")]
    Repository(RepositoryError),
}

/// Create an admin account directly in the database.
///
/// Validates email and password with the same rules the API applies,
/// then inserts the row with `is_admin` set. Returns the new user ID.
///
/// # Errors
///
/// `AdminError` for a bad email or password, a duplicate email, or a
/// database failure.
pub async fn create_user(email: &str, name: &str, password: &str) -> Result<i32, AdminError> {
    dotenvy::dotenv().ok();

    // Validate before touching the database
    let parsed_email = Email::parse(email)?;
    validate_password(password)?;

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| AdminError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Creating admin account for {email}");

    let password_hash = hash_password(password)?;
    let user = UserRepository::new(&pool)
        .create(name, &parsed_email, &password_hash, true)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => AdminError::UserExists(email.to_owned()),
            other => AdminError::Repository(other),
        })?;

    tracing::info!(user_id = %user.id, "Admin account created");

    Ok(user.id.as_i32())
}
