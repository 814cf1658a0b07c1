//! Headless shop client for Sabzi Mandi.
//!
//! Everything a storefront UI sits on top of, with no rendering attached:
//!
//! - [`ApiClient`], a typed `reqwest` wrapper for the REST API
//! - [`ShopState`], the in-memory shop state: catalog snapshot, cart,
//!   filter and sort selections, and the auth token
//!
//! The split mirrors how the pieces are used: `ApiClient` talks to the
//! network, `ShopState` answers every derived question (filtered listings,
//! cart totals, checkout amount) synchronously from its snapshot.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod state;

pub use api::{ApiClient, ApiError, AuthSession};
pub use state::{ShopState, SortKey};
