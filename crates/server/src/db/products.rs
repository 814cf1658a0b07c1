//! Product repository for database operations.

use sqlx::PgPool;

use sabzi_core::{ProductId, ProductInput};

use super::RepositoryError;
use crate::models::ProductRecord;

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the full catalog in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRecord>(
            r"
            SELECT id, name, description, price, category, sub_category, image,
                   available, bestseller, rating, created_at, updated_at
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<ProductRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRecord>(
            r"
            SELECT id, name, description, price, category, sub_category, image,
                   available, bestseller, rating, created_at, updated_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &ProductInput) -> Result<ProductRecord, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRecord>(
            r"
            INSERT INTO products (name, description, price, category, sub_category,
                                  image, available, bestseller, rating)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, description, price, category, sub_category, image,
                      available, bestseller, rating, created_at, updated_at
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.category)
        .bind(&input.sub_category)
        .bind(&input.image)
        .bind(input.available)
        .bind(input.bestseller)
        .bind(input.rating)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Replace every field of an existing product.
    ///
    /// Returns `None` if no product has the given ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Option<ProductRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRecord>(
            r"
            UPDATE products
            SET name = $2, description = $3, price = $4, category = $5,
                sub_category = $6, image = $7, available = $8, bestseller = $9,
                rating = $10, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, price, category, sub_category, image,
                      available, bestseller, rating, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.category)
        .bind(&input.sub_category)
        .bind(&input.image)
        .bind(input.available)
        .bind(input.bestseller)
        .bind(input.rating)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete a product by its ID.
    ///
    /// # Returns
    ///
    /// Returns `true` if the product was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Wipe the catalog and insert the given products in one transaction.
    ///
    /// Destructive: existing rows are gone once this commits.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails; the
    /// transaction rolls back and the previous catalog survives.
    pub async fn replace_all(&self, inputs: &[ProductInput]) -> Result<u64, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM products").execute(&mut *tx).await?;

        for input in inputs {
            sqlx::query(
                r"
                INSERT INTO products (name, description, price, category, sub_category,
                                      image, available, bestseller, rating)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ",
            )
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.sub_category)
            .bind(&input.image)
            .bind(input.available)
            .bind(input.bestseller)
            .bind(input.rating)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(inputs.len() as u64)
    }
}
