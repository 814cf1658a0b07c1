//! Repository layer over the Sabzi Mandi `PostgreSQL` database.
//!
//! # Tables
//!
//! - `users` - Shopper and admin accounts
//! - `products` - Grocery catalog
//! - `addresses` - Saved delivery addresses
//! - `orders` / `order_items` - Checkout snapshots
//!
//! # Migrations
//!
//! Migrations live in `crates/server/migrations/` and are applied with:
//! ```bash
//! cargo run -p sabzi-cli -- migrate
//! ```

pub mod addresses;
pub mod orders;
pub mod products;
pub mod users;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use addresses::AddressRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// Failure surface shared by all repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Query or connection failure reported by sqlx.
    #[error("sqlx: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row that no longer maps onto its model type.
    #[error("stored data invalid: {0}")]
    DataCorruption(String),

    /// Unique constraint hit, in practice a duplicate email.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Open the `PostgreSQL` connection pool the whole process shares.
///
/// # Errors
///
/// `sqlx::Error` when the server is unreachable or rejects the URL.
pub async fn create_pool(database_url: &SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
