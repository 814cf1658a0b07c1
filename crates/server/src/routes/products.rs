//! Product catalog routes.
//!
//! Reads are public; writes require an admin token. The seed route is open
//! and replaces the whole catalog.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use sabzi_core::{MessageResponse, ProductId, ProductInput, ProductListResponse, ProductResponse};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::ProductRecord;
use crate::seed::sample_products;
use crate::state::AppState;

/// List the full catalog.
///
/// GET /api/products
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<ProductListResponse>> {
    let products = ProductRepository::new(state.pool())
        .list()
        .await?
        .into_iter()
        .map(ProductRecord::into_product)
        .collect();

    Ok(Json(ProductListResponse {
        success: true,
        products,
    }))
}

/// Get a single product.
///
/// GET /api/products/{id}
///
/// # Errors
///
/// Returns 404 if no product has the given ID.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductResponse>> {
    let record = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(ProductResponse {
        success: true,
        product: record.into_product(),
    }))
}

/// Create a product.
///
/// POST /api/products
///
/// # Errors
///
/// Returns 400 if the payload fails validation, 401/403 without an admin
/// token.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    input.validate()?;

    let record = ProductRepository::new(state.pool()).create(&input).await?;

    tracing::info!(product_id = %record.id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            success: true,
            product: record.into_product(),
        }),
    ))
}

/// Replace every field of a product.
///
/// PUT /api/products/{id}
///
/// # Errors
///
/// Returns 404 if no product has the given ID, 400 if the payload fails
/// validation.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ProductId>,
    Json(input): Json<ProductInput>,
) -> Result<Json<ProductResponse>> {
    input.validate()?;

    let record = ProductRepository::new(state.pool())
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(ProductResponse {
        success: true,
        product: record.into_product(),
    }))
}

/// Delete a product.
///
/// DELETE /api/products/{id}
///
/// # Errors
///
/// Returns 404 if no product has the given ID.
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ProductId>,
) -> Result<Json<MessageResponse>> {
    let deleted = ProductRepository::new(state.pool()).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    Ok(Json(MessageResponse {
        success: true,
        message: "Product deleted successfully".to_string(),
    }))
}

/// Wipe the catalog and load the sample products.
///
/// POST /api/products/seed
///
/// Unauthenticated; replaces every existing product.
///
/// # Errors
///
/// Returns `AppError::Database` if the transaction fails (the previous
/// catalog survives a rollback).
pub async fn seed(State(state): State<AppState>) -> Result<(StatusCode, Json<MessageResponse>)> {
    let inserted = ProductRepository::new(state.pool())
        .replace_all(&sample_products())
        .await?;

    tracing::info!(inserted, "Catalog reseeded");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            success: true,
            message: "Sample products added successfully".to_string(),
        }),
    ))
}
