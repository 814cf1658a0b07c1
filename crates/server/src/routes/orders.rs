//! Checkout and order history routes.

use axum::{Json, extract::State};
use rust_decimal::Decimal;

use sabzi_core::{CartLine, MessageResponse, OrderListResponse, PlaceOrderRequest, delivery_fee};

use crate::db::OrderRepository;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::RequireUser;
use crate::state::AppState;

/// Place a cash-on-delivery order.
///
/// POST /api/order/place
///
/// The quoted amount must equal the sum of line subtotals plus the delivery
/// fee; stale carts are rejected rather than silently repriced.
///
/// # Errors
///
/// Returns 400 for an empty cart, a blank address field, or an amount that
/// doesn't match the items. Returns 401 without a valid token.
pub async fn place(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<Json<MessageResponse>> {
    req.address.validate()?;

    if req.items.is_empty() {
        return Err(AppError::Validation("Cart is empty".to_string()));
    }

    if req.items.iter().any(|line| line.quantity == 0) {
        return Err(AppError::Validation(
            "Item quantity must be at least 1".to_string(),
        ));
    }

    let expected = req.items.iter().map(CartLine::subtotal).sum::<Decimal>() + delivery_fee();
    if req.amount != expected {
        return Err(AppError::Validation(
            "Order amount does not match cart contents".to_string(),
        ));
    }

    let order_id = OrderRepository::new(state.pool())
        .create(user.id, &req.address, &req.items, req.amount)
        .await?;

    let order_id_str = order_id.to_string();
    add_breadcrumb("checkout", "Order placed", Some(&[("order_id", &order_id_str)]));
    tracing::info!(%order_id, user_id = %user.id, "Order placed");

    Ok(Json(MessageResponse {
        success: true,
        message: "Order placed successfully".to_string(),
    }))
}

/// List the signed-in user's orders, newest first.
///
/// GET /api/order/list
///
/// # Errors
///
/// Returns 401 without a valid token.
pub async fn list(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<OrderListResponse>> {
    let orders = OrderRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    Ok(Json(OrderListResponse {
        success: true,
        orders,
    }))
}
