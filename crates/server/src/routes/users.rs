//! User account routes.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use secrecy::ExposeSecret;

use sabzi_core::{AuthResponse, LoginRequest, RegisterRequest, SETUP_KEY_HEADER};

use crate::error::{AppError, Result};
use crate::services::AuthService;
use crate::state::AppState;

/// Register a new shopper account.
///
/// POST /api/user/register
///
/// # Errors
///
/// Returns 400 for a missing name, weak password, invalid email, or an
/// email that is already registered.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let auth = AuthService::new(state.pool(), &state.config().jwt_secret);
    let user = auth
        .register(&req.name, &req.email, &req.password, false)
        .await?;
    let token = auth.issue_token(user.id)?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            token,
            user: user.into_public(),
        }),
    ))
}

/// Sign in with email and password.
///
/// POST /api/user/login
///
/// # Errors
///
/// Returns 401 if the email or password is wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let auth = AuthService::new(state.pool(), &state.config().jwt_secret);
    let user = auth.login(&req.email, &req.password).await?;
    let token = auth.issue_token(user.id)?;

    Ok(Json(AuthResponse {
        success: true,
        token,
        user: user.into_public(),
    }))
}

/// Create an admin account.
///
/// POST /api/user/admin
///
/// The `x-setup-key` header must match `ADMIN_SETUP_KEY`; the route is
/// disabled when no key is configured.
///
/// # Errors
///
/// Returns 403 for a missing or wrong setup key, 400 for invalid payloads.
pub async fn create_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let Some(expected) = state.config().admin_setup_key.as_ref() else {
        return Err(AppError::Forbidden(
            "Not authorized to access this route".to_string(),
        ));
    };

    let provided = headers
        .get(SETUP_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    if provided != expected.expose_secret() {
        return Err(AppError::Forbidden(
            "Not authorized to access this route".to_string(),
        ));
    }

    if req.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let auth = AuthService::new(state.pool(), &state.config().jwt_secret);
    let user = auth
        .register(&req.name, &req.email, &req.password, true)
        .await?;
    let token = auth.issue_token(user.id)?;

    tracing::info!(user_id = %user.id, "Admin account created");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            token,
            user: user.into_public(),
        }),
    ))
}
