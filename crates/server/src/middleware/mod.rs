//! HTTP middleware stack for the API server.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. CORS (permissive, the browser client runs on another origin)
//!
//! Authentication is not a layer: protected handlers opt in with the
//! `RequireUser` / `RequireAdmin` extractors.

pub mod auth;
pub mod request_id;

pub use auth::{AuthRejection, RequireAdmin, RequireUser};
pub use request_id::request_id_middleware;
