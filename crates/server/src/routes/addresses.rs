//! Saved address routes.

use axum::{Json, extract::State};

use sabzi_core::{AddressListResponse, SaveAddressRequest};

use crate::db::AddressRepository;
use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::AddressRecord;
use crate::state::AppState;

/// List the signed-in user's saved addresses.
///
/// GET /api/address/get
///
/// # Errors
///
/// Returns 401 without a valid token.
pub async fn list(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<AddressListResponse>> {
    let addresses = AddressRepository::new(state.pool())
        .list_for_user(user.id)
        .await?
        .into_iter()
        .map(AddressRecord::into_address)
        .collect();

    Ok(Json(AddressListResponse {
        success: true,
        addresses,
    }))
}

/// Save a delivery address and return the updated list.
///
/// POST /api/address/save
///
/// # Errors
///
/// Returns 400 if any address field is blank, 401 without a valid token.
pub async fn save(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(req): Json<SaveAddressRequest>,
) -> Result<Json<AddressListResponse>> {
    req.address.validate()?;

    let repo = AddressRepository::new(state.pool());
    repo.create(user.id, &req.address).await?;

    let addresses = repo
        .list_for_user(user.id)
        .await?
        .into_iter()
        .map(AddressRecord::into_address)
        .collect();

    Ok(Json(AddressListResponse {
        success: true,
        addresses,
    }))
}
