//! Cart line shared by the shop client and order records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ProductId;

/// Flat delivery fee added to every checkout total.
///
/// The client quotes it and the server re-checks the quoted amount against
/// it, so both sides must agree on this value.
#[must_use]
pub const fn delivery_fee() -> Decimal {
    Decimal::TEN
}

/// A materialized cart line: one product with its quantity.
///
/// Produced by the shop client from its cart map and sent verbatim as an
/// order line item, so an order keeps the prices the shopper saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    /// Listing thumbnail (first product image).
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
