//! Order row types.
//!
//! An order spans two tables: `orders` carries the address snapshot and
//! totals, `order_items` the cart lines. The repository reassembles them
//! into the wire `Order`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use sabzi_core::{OrderId, OrderStatus, PaymentMethod, ProductId, UserId};

/// An `orders` table row.
#[derive(Debug, Clone, FromRow)]
pub struct OrderRecord {
    pub id: OrderId,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub phone: String,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

/// An `order_items` table row.
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemRecord {
    pub id: i32,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: i32,
}
