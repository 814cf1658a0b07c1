//! In-memory shop state: catalog snapshot, cart, and filter selections.
//!
//! [`ShopState`] is a plain owned struct with no interior mutability; the UI
//! layer owns one and mutates it directly. Every derived value (filtered
//! listings, cart totals, dropdown options) is recomputed on demand from the
//! snapshot, so there is no cache to invalidate.
//!
//! # Example
//!
//! ```rust
//! use sabzi_client::ShopState;
//! use sabzi_core::ProductId;
//!
//! let mut state = ShopState::new();
//! state.add_to_cart(ProductId::new(1), 2);
//! state.add_to_cart(ProductId::new(1), 1);
//! assert_eq!(state.cart_count(), 3);
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use sabzi_core::{CartLine, Product, ProductId, delivery_fee};

/// Sentinel filter value matching every product.
pub const FILTER_ALL: &str = "all";

/// Sort order applied to the filtered product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep the catalog's own order.
    #[default]
    Default,
    /// Cheapest first.
    PriceLowHigh,
    /// Most expensive first.
    PriceHighLow,
    /// Best rated first.
    Rating,
}

/// The shop client's application state.
///
/// Holds the product snapshot fetched from the API, the cart (product id to
/// quantity), the current filter and sort selections, and the auth token.
/// The cart lives only here; the server first sees it when an order is
/// placed.
#[derive(Debug, Clone)]
pub struct ShopState {
    products: Vec<Product>,
    cart: BTreeMap<ProductId, u32>,
    /// Category filter; [`FILTER_ALL`] disables it.
    pub selected_category: String,
    /// Sub-category (type) filter; [`FILTER_ALL`] disables it.
    pub selected_sub_category: String,
    /// Inclusive price range filter.
    pub price_range: (Decimal, Decimal),
    /// When set, only bestsellers pass the filter.
    pub show_bestsellers_only: bool,
    /// Sort order for [`ShopState::filtered_products`].
    pub sort: SortKey,
    /// Case-insensitive search over name and description; empty disables it.
    pub search: String,
    /// Auth token from register/login, sent on authenticated API calls.
    pub token: Option<String>,
}

impl Default for ShopState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            cart: BTreeMap::new(),
            selected_category: FILTER_ALL.to_string(),
            selected_sub_category: FILTER_ALL.to_string(),
            price_range: (Decimal::ZERO, Decimal::ONE_THOUSAND),
            show_bestsellers_only: false,
            sort: SortKey::Default,
            search: String::new(),
            token: None,
        }
    }
}

impl ShopState {
    /// Fresh state: empty catalog, empty cart, all filters off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Replace the catalog snapshot.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// The unfiltered catalog snapshot.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product in the snapshot.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add `quantity` of a product to the cart, on top of whatever is
    /// already there.
    pub fn add_to_cart(&mut self, id: ProductId, quantity: u32) {
        let entry = self.cart.entry(id).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Set a cart entry to exactly `quantity`. Zero keeps the entry but
    /// removes it from every derived value.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        self.cart.insert(id, quantity);
    }

    /// Quantity of a product currently in the cart (zero when absent).
    #[must_use]
    pub fn cart_quantity(&self, id: ProductId) -> u32 {
        self.cart.get(&id).copied().unwrap_or(0)
    }

    /// Empty the cart, e.g. after an order is placed.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Total number of items in the cart.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.values().sum()
    }

    /// Sum of unit price times quantity over cart entries whose product is
    /// in the snapshot. Entries for unknown products or zero quantities
    /// contribute nothing.
    #[must_use]
    pub fn cart_amount(&self) -> Decimal {
        self.cart
            .iter()
            .filter(|&(_, &quantity)| quantity > 0)
            .filter_map(|(&id, &quantity)| {
                self.product(id).map(|p| p.price * Decimal::from(quantity))
            })
            .sum()
    }

    /// Materialize the cart as order-ready lines, in id order.
    ///
    /// Each line snapshots the product's current name, unit price, and
    /// listing thumbnail. Zero quantities and unknown products are skipped.
    #[must_use]
    pub fn cart_items(&self) -> Vec<CartLine> {
        self.cart
            .iter()
            .filter(|&(_, &quantity)| quantity > 0)
            .filter_map(|(&id, &quantity)| {
                self.product(id).map(|p| CartLine {
                    id,
                    name: p.name.clone(),
                    price: p.price,
                    image: p.image.first().cloned().unwrap_or_default(),
                    quantity,
                })
            })
            .collect()
    }

    /// Cart amount plus the flat delivery fee; the amount quoted when
    /// placing an order.
    #[must_use]
    pub fn checkout_total(&self) -> Decimal {
        self.cart_amount() + delivery_fee()
    }

    // =========================================================================
    // Filtering & Sorting
    // =========================================================================

    /// The catalog after applying the current filters and sort order.
    ///
    /// Filters intersect: category, sub-category, inclusive price range,
    /// bestseller flag, then search. Sorting is stable, so products that
    /// compare equal keep their catalog order; [`SortKey::Default`] keeps
    /// the catalog order outright.
    #[must_use]
    pub fn filtered_products(&self) -> Vec<&Product> {
        let mut items: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                self.selected_category == FILTER_ALL || p.category == self.selected_category
            })
            .filter(|p| {
                self.selected_sub_category == FILTER_ALL
                    || p.sub_category == self.selected_sub_category
            })
            .filter(|p| (self.price_range.0..=self.price_range.1).contains(&p.price))
            .filter(|p| !self.show_bestsellers_only || p.bestseller)
            .filter(|p| self.matches_search(p))
            .collect();

        match self.sort {
            SortKey::Default => {}
            SortKey::PriceLowHigh => items.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHighLow => items.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }

        items
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    /// Category dropdown options: [`FILTER_ALL`] followed by the distinct
    /// categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.distinct_values(|p| &p.category)
    }

    /// Sub-category dropdown options, same shape as
    /// [`ShopState::categories`].
    #[must_use]
    pub fn sub_categories(&self) -> Vec<String> {
        self.distinct_values(|p| &p.sub_category)
    }

    fn distinct_values(&self, field: impl Fn(&Product) -> &str) -> Vec<String> {
        let mut values = vec![FILTER_ALL.to_string()];
        for product in &self.products {
            let value = field(product);
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
        values
    }

    /// Lowest and highest price in the snapshot, for slider bounds.
    /// `None` while the catalog is empty.
    #[must_use]
    pub fn price_bounds(&self) -> Option<(Decimal, Decimal)> {
        self.products
            .iter()
            .map(|p| p.price)
            .fold(None, |bounds, price| {
                Some(match bounds {
                    None => (price, price),
                    Some((min, max)) => (min.min(price), max.max(price)),
                })
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[allow(clippy::too_many_arguments)]
    fn product(
        id: i32,
        name: &str,
        description: &str,
        price: i64,
        category: &str,
        sub_category: &str,
        bestseller: bool,
        rating: f32,
    ) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            price: Decimal::new(price, 0),
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            image: vec![format!("https://images.example.com/{id}.jpg")],
            available: true,
            bestseller,
            rating,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_state() -> ShopState {
        let mut state = ShopState::new();
        state.set_products(vec![
            product(
                1,
                "Potato (Aloo)",
                "Stores well for weeks",
                35,
                "Root Vegetables",
                "Fresh",
                true,
                4.5,
            ),
            product(
                2,
                "Tomato (Tamatar)",
                "Juicy and ripe",
                40,
                "Fruit Vegetables",
                "Fresh",
                false,
                4.2,
            ),
            product(
                3,
                "Spinach (Palak)",
                "Tender leaves, great for saag",
                25,
                "Leafy Greens",
                "Fresh",
                true,
                4.8,
            ),
            product(
                4,
                "Carrot (Gajar)",
                "Sweet and crunchy",
                50,
                "Root Vegetables",
                "Organic",
                false,
                4.0,
            ),
        ]);
        state
    }

    fn filtered_ids(state: &ShopState) -> Vec<i32> {
        state
            .filtered_products()
            .iter()
            .map(|p| p.id.as_i32())
            .collect()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    #[test]
    fn test_add_to_cart_inserts_then_increments() {
        let mut state = sample_state();
        state.add_to_cart(ProductId::new(1), 1);
        state.add_to_cart(ProductId::new(1), 2);
        assert_eq!(state.cart_quantity(ProductId::new(1)), 3);
    }

    #[test]
    fn test_update_quantity_replaces() {
        let mut state = sample_state();
        state.add_to_cart(ProductId::new(1), 5);
        state.update_quantity(ProductId::new(1), 2);
        assert_eq!(state.cart_quantity(ProductId::new(1)), 2);
    }

    #[test]
    fn test_update_quantity_can_insert() {
        let mut state = sample_state();
        state.update_quantity(ProductId::new(2), 4);
        assert_eq!(state.cart_quantity(ProductId::new(2)), 4);
    }

    #[test]
    fn test_cart_quantity_zero_when_absent() {
        let state = sample_state();
        assert_eq!(state.cart_quantity(ProductId::new(1)), 0);
    }

    #[test]
    fn test_cart_count_sums_quantities() {
        let mut state = sample_state();
        state.add_to_cart(ProductId::new(1), 2);
        state.add_to_cart(ProductId::new(3), 1);
        assert_eq!(state.cart_count(), 3);
    }

    #[test]
    fn test_cart_amount_sums_price_times_quantity() {
        let mut state = sample_state();
        state.add_to_cart(ProductId::new(1), 2); // 2 x 35
        state.add_to_cart(ProductId::new(2), 1); // 1 x 40
        assert_eq!(state.cart_amount(), Decimal::new(110, 0));
    }

    #[test]
    fn test_cart_amount_skips_unknown_products() {
        let mut state = sample_state();
        state.add_to_cart(ProductId::new(1), 1);
        state.add_to_cart(ProductId::new(99), 7);
        assert_eq!(state.cart_amount(), Decimal::new(35, 0));
    }

    #[test]
    fn test_cart_amount_skips_zeroed_entries() {
        let mut state = sample_state();
        state.add_to_cart(ProductId::new(1), 2);
        state.update_quantity(ProductId::new(1), 0);
        assert_eq!(state.cart_amount(), Decimal::ZERO);
        assert_eq!(state.cart_count(), 0);
    }

    #[test]
    fn test_cart_items_materializes_lines() {
        let mut state = sample_state();
        state.add_to_cart(ProductId::new(3), 2);
        state.add_to_cart(ProductId::new(1), 1);

        let items = state.cart_items();
        assert_eq!(items.len(), 2);

        // BTreeMap keys come out in id order
        let first = items.first().unwrap();
        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(first.name, "Potato (Aloo)");
        assert_eq!(first.price, Decimal::new(35, 0));
        assert_eq!(first.image, "https://images.example.com/1.jpg");
        assert_eq!(first.quantity, 1);

        let second = items.get(1).unwrap();
        assert_eq!(second.id, ProductId::new(3));
        assert_eq!(second.quantity, 2);
    }

    #[test]
    fn test_cart_items_skips_zeroed_and_unknown() {
        let mut state = sample_state();
        state.add_to_cart(ProductId::new(1), 1);
        state.update_quantity(ProductId::new(1), 0);
        state.add_to_cart(ProductId::new(99), 3);
        assert!(state.cart_items().is_empty());
    }

    #[test]
    fn test_checkout_total_adds_delivery_fee() {
        let mut state = sample_state();
        state.add_to_cart(ProductId::new(2), 2); // 80
        assert_eq!(state.checkout_total(), Decimal::new(90, 0));
    }

    #[test]
    fn test_clear_cart() {
        let mut state = sample_state();
        state.add_to_cart(ProductId::new(1), 2);
        state.clear_cart();
        assert_eq!(state.cart_count(), 0);
        assert!(state.cart_items().is_empty());
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    #[test]
    fn test_default_filters_pass_everything() {
        let state = sample_state();
        assert_eq!(filtered_ids(&state), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_by_category() {
        let mut state = sample_state();
        state.selected_category = "Root Vegetables".to_string();
        assert_eq!(filtered_ids(&state), vec![1, 4]);
    }

    #[test]
    fn test_filters_intersect() {
        let mut state = sample_state();
        state.selected_category = "Root Vegetables".to_string();
        state.selected_sub_category = "Organic".to_string();
        assert_eq!(filtered_ids(&state), vec![4]);

        state.show_bestsellers_only = true;
        assert!(filtered_ids(&state).is_empty());
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let mut state = sample_state();
        state.price_range = (Decimal::new(25, 0), Decimal::new(40, 0));
        assert_eq!(filtered_ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_bestsellers_only() {
        let mut state = sample_state();
        state.show_bestsellers_only = true;
        assert_eq!(filtered_ids(&state), vec![1, 3]);
    }

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let mut state = sample_state();
        state.search = "ALOO".to_string();
        assert_eq!(filtered_ids(&state), vec![1]);
    }

    #[test]
    fn test_search_matches_description() {
        let mut state = sample_state();
        state.search = "saag".to_string();
        assert_eq!(filtered_ids(&state), vec![3]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let mut state = sample_state();
        state.search = String::new();
        assert_eq!(filtered_ids(&state).len(), 4);
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    #[test]
    fn test_sort_price_low_to_high() {
        let mut state = sample_state();
        state.sort = SortKey::PriceLowHigh;
        assert_eq!(filtered_ids(&state), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_price_high_to_low() {
        let mut state = sample_state();
        state.sort = SortKey::PriceHighLow;
        assert_eq!(filtered_ids(&state), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_sort_rating_descending() {
        let mut state = sample_state();
        state.sort = SortKey::Rating;
        assert_eq!(filtered_ids(&state), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_default_sort_keeps_catalog_order() {
        let mut state = sample_state();
        state.sort = SortKey::Default;
        assert_eq!(filtered_ids(&state), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_price_sort_is_stable_for_ties() {
        let mut state = ShopState::new();
        state.set_products(vec![
            product(10, "Okra (Bhindi)", "Tender pods", 30, "Pods", "Fresh", false, 4.1),
            product(11, "Peas (Matar)", "Sweet winter peas", 30, "Pods", "Fresh", false, 4.6),
        ]);
        state.sort = SortKey::PriceLowHigh;
        assert_eq!(filtered_ids(&state), vec![10, 11]);
    }

    // =========================================================================
    // Dropdown options
    // =========================================================================

    #[test]
    fn test_categories_first_seen_order() {
        let state = sample_state();
        assert_eq!(
            state.categories(),
            vec!["all", "Root Vegetables", "Fruit Vegetables", "Leafy Greens"]
        );
    }

    #[test]
    fn test_sub_categories_first_seen_order() {
        let state = sample_state();
        assert_eq!(state.sub_categories(), vec!["all", "Fresh", "Organic"]);
    }

    #[test]
    fn test_price_bounds() {
        let state = sample_state();
        assert_eq!(
            state.price_bounds(),
            Some((Decimal::new(25, 0), Decimal::new(50, 0)))
        );
    }

    #[test]
    fn test_price_bounds_empty_catalog() {
        let state = ShopState::new();
        assert_eq!(state.price_bounds(), None);
    }

    #[test]
    fn test_default_state() {
        let state = ShopState::new();
        assert_eq!(state.selected_category, FILTER_ALL);
        assert_eq!(state.selected_sub_category, FILTER_ALL);
        assert_eq!(state.price_range, (Decimal::ZERO, Decimal::ONE_THOUSAND));
        assert!(!state.show_bestsellers_only);
        assert_eq!(state.sort, SortKey::Default);
        assert!(state.token.is_none());
        assert_eq!(state.cart_count(), 0);
    }
}
