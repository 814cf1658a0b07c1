//! Catalog seeding command.
//!
//! Replaces whatever is in the `products` table with the fixed sample
//! catalog, the same operation `POST /api/products/seed` performs. Useful
//! for bootstrapping a fresh database before the server has an admin token.
//!
//! Reads `DATABASE_URL` from the environment or a `.env` file.

use secrecy::SecretString;
use thiserror::Error;
use tracing::info;

use sabzi_core::{CurrencyCode, Price};
use sabzi_server::db::{self, ProductRepository, RepositoryError};
use sabzi_server::seed::sample_products;

/// Ways `seed` can fail.
#[derive(Debug, Error)]
pub enum SeedError {
    /// `DATABASE_URL` was not provided.
    #[error("environment variable {0} is not set")]
    MissingEnvVar(&'static str),

    /// Could not reach the database.
    #[error("connection failed: {0}")]
    Database(#[from] sqlx::Error),

    /// Replacing the catalog failed.
    #[error("seeding failed: {0}")]
    Seed(#[from] RepositoryError),
}

/// Replace the product catalog with the sample set.
///
/// # Errors
///
/// `SeedError` when `DATABASE_URL` is unset, the connection fails, or
/// the replacement transaction fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("DATABASE_URL"))?;

    info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let products = sample_products();
    let inserted = ProductRepository::new(&pool).replace_all(&products).await?;

    for product in &products {
        info!("  {} {}", Price::new(product.price, CurrencyCode::INR), product.name);
    }
    info!(inserted, "Catalog seeded with sample products");
    Ok(())
}
