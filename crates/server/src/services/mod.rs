//! Business logic services for the API server.
//!
//! # Services
//!
//! - `auth` - User registration, login, and token verification

pub mod auth;

pub use auth::AuthService;
