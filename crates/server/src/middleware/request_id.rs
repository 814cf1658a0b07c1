//! Per-request correlation IDs.
//!
//! Every request gets an ID that shows up in the tracing span, on the
//! Sentry scope, and in the `x-request-id` response header, so one value
//! ties together logs, error reports, and what the client saw.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the correlation ID in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag the request with a correlation ID.
///
/// An incoming `x-request-id` header is reused as-is so IDs stay stable
/// across proxies; otherwise a fresh UUID v4 is minted.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let upstream = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let request_id = upstream.unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", &request_id);
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;

    // Echoed back so a failing client can quote the ID in a report
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
