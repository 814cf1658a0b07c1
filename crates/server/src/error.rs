//! Error type shared by every route handler.
//!
//! `AppError` folds database, auth, and validation failures into one enum,
//! reports the server-side ones to Sentry, and renders all of them as the
//! uniform `{"success": false, "message": ...}` envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use sabzi_core::{AddressValidationError, MessageResponse, ProductValidationError};

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Application-level error for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Query or connection failure inside the repository layer.
    #[error("database failure: {0}")]
    Database(#[from] RepositoryError),

    /// Registration, login, or token verification failed.
    #[error("auth failure: {0}")]
    Auth(#[from] AuthError),

    /// Product payload rejected before it reaches the database.
    #[error("product rejected: {0}")]
    InvalidProduct(#[from] ProductValidationError),

    /// Address payload rejected before it reaches the database.
    #[error("address rejected: {0}")]
    InvalidAddress(#[from] AddressValidationError),

    /// Hand-rolled request checks (cart contents, quantities).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Row lookup came back empty.
    #[error("not found: {0}")]
    NotFound(String),

    /// No token, bad token, or the bearer no longer exists.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not an admin.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Unexpected server-side failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Server-side faults go to Sentry; client mistakes do not.
    fn report(&self) {
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(self);
            tracing::error!(error = %self, sentry_event_id = %event_id, "Request failed");
        }
    }

    /// Map the error onto an HTTP status and the client-facing message.
    ///
    /// Internal detail never leaks: database and server faults collapse
    /// to a generic 500 body.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Database(_) | Self::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!".to_string())
            }
            Self::Auth(err) => auth_response(err),
            Self::InvalidProduct(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::InvalidAddress(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
        }
    }
}

/// Auth failures carry their own status and message table.
fn auth_response(err: &AuthError) -> (StatusCode, String) {
    match err {
        AuthError::InvalidCredentials => {
            (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
        }
        AuthError::UserNotFound => (StatusCode::UNAUTHORIZED, "User not found".to_string()),
        AuthError::InvalidToken => {
            (StatusCode::UNAUTHORIZED, "Not authorized to access this route".to_string())
        }
        AuthError::UserAlreadyExists => {
            (StatusCode::BAD_REQUEST, "An account with this email already exists".to_string())
        }
        AuthError::WeakPassword(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        AuthError::InvalidEmail(_) => {
            (StatusCode::BAD_REQUEST, "Invalid email address".to_string())
        }
        AuthError::TokenCreation | AuthError::PasswordHash | AuthError::Repository(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!".to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.report();

        let (status, message) = self.status_and_message();
        let body = Json(MessageResponse { success: false, message });
        (status, body).into_response()
    }
}

/// Result type alias used throughout the route handlers.
pub type Result<T> = std::result::Result<T, AppError>;

/// Attach the authenticated user to the Sentry scope.
///
/// Events captured later in the request then carry the user identity.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    let user = sentry::User {
        id: Some(user_id.to_string()),
        email: email.map(String::from),
        ..Default::default()
    };
    sentry::configure_scope(|scope| scope.set_user(Some(user)));
}

/// Record a user action as a Sentry breadcrumb.
///
/// Breadcrumbs show the trail of actions leading up to a captured error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("checkout", "Order placed", Some(&[("order_id", "123")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let data = data
        .unwrap_or_default()
        .iter()
        .map(|(key, value)| {
            ((*key).to_string(), serde_json::Value::String((*value).to_string()))
        })
        .collect();

    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        data,
        ..Default::default()
    });
}
