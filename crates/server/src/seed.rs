//! Sample catalog used by the seed endpoint and the CLI seeder.

use rust_decimal::Decimal;

use sabzi_core::ProductInput;

/// The ten-product sample catalog.
///
/// `POST /api/products/seed` wipes the table and inserts exactly these.
#[must_use]
pub fn sample_products() -> Vec<ProductInput> {
    vec![
        product(
            "Potato (Aloo)",
            "Fresh Indian potatoes, perfect for curries and snacks.",
            35,
            "Root Vegetables",
            "https://images.unsplash.com/photo-1504674900247-0877df9cc836?q=80&w=2070&auto=format&fit=crop",
            4.5,
        ),
        product(
            "Tomato (Tamatar)",
            "Juicy red tomatoes, essential for Indian cooking.",
            40,
            "Fruit Vegetables",
            "https://images.unsplash.com/photo-1502741338009-cac2772e18bc?q=80&w=2070&auto=format&fit=crop",
            4.6,
        ),
        product(
            "Onion (Pyaaz)",
            "Fresh onions, a staple in every Indian kitchen.",
            38,
            "Bulb Vegetables",
            "https://images.unsplash.com/photo-1464983953574-0892a716854b?q=80&w=2070&auto=format&fit=crop",
            4.7,
        ),
        product(
            "Spinach (Palak)",
            "Nutritious spinach leaves, rich in iron and vitamins.",
            35,
            "Leafy Greens",
            "https://images.unsplash.com/photo-1506084868230-bb9d95c24759?q=80&w=2070&auto=format&fit=crop",
            4.6,
        ),
        product(
            "Cauliflower (Phool Gobhi)",
            "Fresh white cauliflower, perfect for curries and stir-fries.",
            40,
            "Cruciferous",
            "https://images.unsplash.com/photo-1610832958506-aa56368176cf?q=80&w=2070&auto=format&fit=crop",
            4.5,
        ),
        product(
            "Brinjal/Eggplant (Baingan)",
            "Glossy purple brinjals, great for bharta and curries.",
            42,
            "Fruit Vegetables",
            "https://images.unsplash.com/photo-1518977676601-b53f82aba655?q=80&w=2070&auto=format&fit=crop",
            4.3,
        ),
        product(
            "Okra/Ladyfinger (Bhindi)",
            "Tender okra pods, perfect for stir-fries and curries.",
            45,
            "Pod Vegetables",
            "https://images.unsplash.com/photo-1506084868230-bb9d95c24759?q=80&w=2070&auto=format&fit=crop",
            4.4,
        ),
        product(
            "Bottle Gourd (Lauki/Doodhi)",
            "Fresh bottle gourd, great for curries and kofta.",
            38,
            "Gourd Vegetables",
            "https://images.unsplash.com/photo-1504674900247-0877df9cc836?q=80&w=2070&auto=format&fit=crop",
            4.3,
        ),
        product(
            "Carrot (Gajar)",
            "Sweet and crunchy carrots, perfect for salads and sabzi.",
            38,
            "Root Vegetables",
            "https://images.unsplash.com/photo-1598170845058-32b9d6a5da37?q=80&w=2070&auto=format&fit=crop",
            4.7,
        ),
        product(
            "Cucumber (Kheera)",
            "Fresh cucumbers, perfect for salads and raita.",
            35,
            "Fruit Vegetables",
            "https://images.unsplash.com/photo-1604977042946-1eecc30f269e?q=80&w=2070&auto=format&fit=crop",
            4.4,
        ),
    ]
}

fn product(
    name: &str,
    description: &str,
    price: i64,
    category: &str,
    image: &str,
    rating: f32,
) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from(price),
        category: category.to_string(),
        sub_category: "Fresh".to_string(),
        image: vec![image.to_string()],
        available: true,
        bestseller: false,
        rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_products() {
        assert_eq!(sample_products().len(), 10);
    }

    #[test]
    fn test_catalog_passes_validation() {
        for input in sample_products() {
            assert!(input.validate().is_ok(), "{} failed validation", input.name);
        }
    }
}
