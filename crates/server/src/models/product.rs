//! Product row type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use sabzi_core::{Product, ProductId};

/// A `products` table row.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub sub_category: String,
    /// One or more image URLs; the first is the listing thumbnail.
    pub image: Vec<String>,
    pub available: bool,
    pub bestseller: bool,
    pub rating: f32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductRecord {
    /// Convert into the wire representation.
    #[must_use]
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            sub_category: self.sub_category,
            image: self.image,
            available: self.available,
            bestseller: self.bestseller,
            rating: self.rating,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
