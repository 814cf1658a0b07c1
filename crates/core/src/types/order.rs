//! Order types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AddressInput, CartLine, OrderId, OrderStatus, PaymentMethod};

/// A recorded order.
///
/// `address` and `items` are snapshots taken at checkout; later edits to the
/// saved address or the catalog do not rewrite order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub address: AddressInput,
    /// Cart amount plus the delivery fee, as charged.
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}
