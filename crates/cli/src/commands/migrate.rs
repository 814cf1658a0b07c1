//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! sabzi migrate
//! ```
//!
//! Migration files live in `crates/server/migrations/` and are embedded
//! into the binary at compile time, so the CLI can migrate a fresh
//! database without a source checkout.
//!
//! Reads `DATABASE_URL` from the environment or a `.env` file.

use sqlx::PgPool;
use thiserror::Error;

/// Ways `migrate` can fail.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// `DATABASE_URL` was not provided.
    #[error("environment variable {0} is not set")]
    MissingEnvVar(&'static str),

    /// Could not reach the database.
    #[error("connection failed: {0}")]
    Database(#[from] sqlx::Error),

    /// A migration failed to apply.
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Apply all pending migrations.
///
/// # Errors
///
/// `MigrationError` when `DATABASE_URL` is unset, the connection fails,
/// or a migration cannot be applied.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| MigrationError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
