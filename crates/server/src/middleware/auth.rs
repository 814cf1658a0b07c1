//! Extractors gating routes on a valid token.
//!
//! Handlers take [`RequireUser`] or [`RequireAdmin`] as an argument and
//! get the authenticated user row; requests without a good `token`
//! header never reach the handler body.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

use sabzi_core::{MessageResponse, TOKEN_HEADER};

use crate::error::set_sentry_user;
use crate::models::UserRecord;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Extractor that requires a signed-in user.
///
/// # Example
///
/// ```rust,ignore
/// async fn list_addresses(RequireUser(user): RequireUser) -> impl IntoResponse {
///     format!("addresses for {}", user.name)
/// }
/// ```
pub struct RequireUser(pub UserRecord);

/// Extractor that requires a signed-in admin.
///
/// Rejects non-admin users with 403 after the same token checks as
/// [`RequireUser`].
pub struct RequireAdmin(pub UserRecord);

/// Error returned when a request fails authentication or authorization.
pub enum AuthRejection {
    /// Token missing, malformed, tampered with, or expired.
    NotAuthorized,
    /// Token was valid but the user row no longer exists.
    UserNotFound,
    /// Authenticated but not an admin.
    NotAdmin,
    /// User lookup failed.
    Internal,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotAuthorized => (
                StatusCode::UNAUTHORIZED,
                "Not authorized to access this route",
            ),
            Self::UserNotFound => (StatusCode::UNAUTHORIZED, "User not found"),
            Self::NotAdmin => (StatusCode::FORBIDDEN, "Not authorized to access this route"),
            Self::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!"),
        };

        (
            status,
            Json(MessageResponse {
                success: false,
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthRejection::NotAuthorized)?;

        let auth = AuthService::new(state.pool(), &state.config().jwt_secret);
        let user = auth.authenticate(token).await.map_err(|e| match e {
            AuthError::UserNotFound => AuthRejection::UserNotFound,
            AuthError::Repository(ref err) => {
                let event_id = sentry::capture_error(err);
                tracing::error!(error = %err, sentry_event_id = %event_id, "User lookup failed");
                AuthRejection::Internal
            }
            _ => AuthRejection::NotAuthorized,
        })?;

        set_sentry_user(&user.id, Some(user.email.as_str()));

        Ok(Self(user))
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireUser(user) = RequireUser::from_request_parts(parts, state).await?;

        if !user.is_admin {
            return Err(AuthRejection::NotAdmin);
        }

        Ok(Self(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_status_codes() {
        assert_eq!(
            AuthRejection::NotAuthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthRejection::UserNotFound.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthRejection::NotAdmin.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthRejection::Internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
