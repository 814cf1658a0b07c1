//! Order repository for database operations.
//!
//! Orders are written as a header row plus one `order_items` row per cart
//! line, inside a single transaction.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

use sabzi_core::{AddressInput, CartLine, Order, OrderId, UserId};

use super::RepositoryError;
use crate::models::{OrderItemRecord, OrderRecord};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record an order with its address snapshot and cart lines.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails; the
    /// transaction rolls back and nothing is recorded.
    pub async fn create(
        &self,
        user_id: UserId,
        address: &AddressInput,
        items: &[CartLine],
        amount: Decimal,
    ) -> Result<OrderId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, OrderRecord>(
            r"
            INSERT INTO orders (user_id, first_name, last_name, email, street,
                                city, state, zipcode, country, phone, amount)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, user_id, first_name, last_name, email, street, city,
                      state, zipcode, country, phone, amount, payment_method,
                      status, placed_at
            ",
        )
        .bind(user_id)
        .bind(&address.first_name)
        .bind(&address.last_name)
        .bind(&address.email)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zipcode)
        .bind(&address.country)
        .bind(&address.phone)
        .bind(amount)
        .fetch_one(&mut *tx)
        .await?;

        for line in items {
            let quantity = i32::try_from(line.quantity).map_err(|_| {
                RepositoryError::DataCorruption(format!(
                    "quantity out of range: {}",
                    line.quantity
                ))
            })?;

            sqlx::query(
                r"
                INSERT INTO order_items (order_id, product_id, name, price, image, quantity)
                VALUES ($1, $2, $3, $4, $5, $6)
                ",
            )
            .bind(order.id)
            .bind(line.id)
            .bind(&line.name)
            .bind(line.price)
            .bind(&line.image)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(order.id)
    }

    /// List a user's orders, newest first, with their cart lines.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored quantity is
    /// not a positive integer.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderRecord>(
            r"
            SELECT id, user_id, first_name, last_name, email, street, city,
                   state, zipcode, country, phone, amount, payment_method,
                   status, placed_at
            FROM orders
            WHERE user_id = $1
            ORDER BY placed_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id.as_i32()).collect();

        let items = sqlx::query_as::<_, OrderItemRecord>(
            r"
            SELECT id, order_id, product_id, name, price, image, quantity
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY order_id, id
            ",
        )
        .bind(&order_ids)
        .fetch_all(self.pool)
        .await?;

        let mut lines_by_order: HashMap<OrderId, Vec<CartLine>> = HashMap::new();
        for item in items {
            let quantity = u32::try_from(item.quantity).map_err(|_| {
                RepositoryError::DataCorruption(format!(
                    "invalid quantity in order {}: {}",
                    item.order_id, item.quantity
                ))
            })?;

            lines_by_order.entry(item.order_id).or_default().push(CartLine {
                id: item.product_id,
                name: item.name,
                price: item.price,
                image: item.image,
                quantity,
            });
        }

        let assembled = orders
            .into_iter()
            .map(|record| {
                let items = lines_by_order.remove(&record.id).unwrap_or_default();
                assemble_order(record, items)
            })
            .collect();

        Ok(assembled)
    }
}

/// Join an order header with its cart lines into the wire shape.
fn assemble_order(record: OrderRecord, items: Vec<CartLine>) -> Order {
    Order {
        id: record.id,
        items,
        address: AddressInput {
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            street: record.street,
            city: record.city,
            state: record.state,
            zipcode: record.zipcode,
            country: record.country,
            phone: record.phone,
        },
        amount: record.amount,
        payment_method: record.payment_method,
        status: record.status,
        placed_at: record.placed_at,
    }
}
