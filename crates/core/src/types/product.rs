//! Product catalog types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CurrencyCode, Price, ProductId};

/// A catalog product as served by the API.
///
/// Field names serialize in camelCase to match the storefront wire format
/// (`subCategory`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub sub_category: String,
    /// Image URLs, first entry is the listing thumbnail.
    pub image: Vec<String>,
    pub available: bool,
    pub bestseller: bool,
    pub rating: f32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The product price as a displayable [`Price`] in rupees.
    #[must_use]
    pub const fn display_price(&self) -> Price {
        Price::new(self.price, CurrencyCode::INR)
    }
}

/// Errors that can occur when validating a [`ProductInput`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    /// The product name is empty or whitespace.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The price is below zero.
    #[error("product price cannot be negative")]
    NegativePrice,
    /// The rating is outside the 0 to 5 range.
    #[error("product rating must be between 0 and 5")]
    RatingOutOfRange,
    /// No image URLs were provided.
    #[error("product needs at least one image URL")]
    NoImages,
}

/// Fields accepted when creating or updating a product.
///
/// Updates run through the same validation as creates, so a product can never
/// be edited into an invalid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub sub_category: String,
    #[serde(default)]
    pub image: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub bestseller: bool,
    #[serde(default)]
    pub rating: f32,
}

const fn default_available() -> bool {
    true
}

impl ProductInput {
    /// Check the input against the catalog rules.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: empty name, negative price, rating
    /// outside 0..=5, or an empty image list.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }

        if self.price < Decimal::ZERO {
            return Err(ProductValidationError::NegativePrice);
        }

        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ProductValidationError::RatingOutOfRange);
        }

        if self.image.is_empty() {
            return Err(ProductValidationError::NoImages);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_input() -> ProductInput {
        ProductInput {
            name: "Tomato (Tamatar)".to_owned(),
            description: "Juicy red tomatoes".to_owned(),
            price: Decimal::new(40, 0),
            category: "Fruit Vegetables".to_owned(),
            sub_category: "Fresh".to_owned(),
            image: vec!["https://images.example.com/tomato.jpg".to_owned()],
            available: true,
            bestseller: false,
            rating: 4.6,
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(sample_input().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut input = sample_input();
        input.name = "   ".to_owned();
        assert_eq!(input.validate(), Err(ProductValidationError::EmptyName));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut input = sample_input();
        input.price = Decimal::new(-1, 0);
        assert_eq!(input.validate(), Err(ProductValidationError::NegativePrice));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut input = sample_input();
        input.rating = 5.1;
        assert_eq!(
            input.validate(),
            Err(ProductValidationError::RatingOutOfRange)
        );
    }

    #[test]
    fn test_missing_images_rejected() {
        let mut input = sample_input();
        input.image.clear();
        assert_eq!(input.validate(), Err(ProductValidationError::NoImages));
    }

    #[test]
    fn test_input_defaults() {
        let json = r#"{
            "name": "Potato (Aloo)",
            "price": "35",
            "category": "Root Vegetables",
            "subCategory": "Fresh"
        }"#;
        let input: ProductInput = serde_json::from_str(json).unwrap();
        assert!(input.available);
        assert!(!input.bestseller);
        assert_eq!(input.rating, 0.0);
        assert!(input.image.is_empty());
    }

    #[test]
    fn test_product_camel_case_fields() {
        let product = Product {
            id: ProductId::new(1),
            name: "Okra (Bhindi)".to_owned(),
            description: "Tender green okra".to_owned(),
            price: Decimal::new(45, 0),
            category: "Pod Vegetables".to_owned(),
            sub_category: "Fresh".to_owned(),
            image: vec!["https://images.example.com/okra.jpg".to_owned()],
            available: true,
            bestseller: true,
            rating: 4.4,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("subCategory").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("sub_category").is_none());
    }

    #[test]
    fn test_product_deserializes_from_wire_json() {
        let product = serde_json::from_value::<Product>(serde_json::json!({
            "id": 2,
            "name": "Carrot (Gajar)",
            "description": "Sweet and crunchy",
            "price": "38",
            "category": "Root Vegetables",
            "subCategory": "Fresh",
            "image": ["https://images.example.com/carrot.jpg"],
            "available": true,
            "bestseller": false,
            "rating": 4.7,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.price, Decimal::new(38, 0));
        assert_eq!(product.display_price().display(), "\u{20b9}38.00");
    }
}
