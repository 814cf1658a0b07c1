//! HTTP route handlers for the API server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /health/ready           - Readiness check (pings the database)
//!
//! # Products
//! GET    /api/products         - Full catalog
//! GET    /api/products/{id}    - Single product
//! POST   /api/products         - Create product (admin)
//! PUT    /api/products/{id}    - Update product (admin)
//! DELETE /api/products/{id}    - Delete product (admin)
//! POST   /api/products/seed    - Wipe and repopulate the catalog
//!
//! # Users
//! POST /api/user/register      - Create account, returns token
//! POST /api/user/login         - Sign in, returns token
//! POST /api/user/admin         - Create admin account (setup key)
//!
//! # Addresses (require token)
//! GET  /api/address/get        - List saved addresses
//! POST /api/address/save       - Save an address, returns the updated list
//!
//! # Orders (require token)
//! POST /api/order/place        - Place a cash-on-delivery order
//! GET  /api/order/list         - Order history, newest first
//! ```

pub mod addresses;
pub mod orders;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route("/seed", post(products::seed))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/admin", post(users::create_admin))
}

/// Create the address routes router.
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/get", get(addresses::list))
        .route("/save", post(addresses::save))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/place", post(orders::place))
        .route("/list", get(orders::list))
}

/// Create all routes for the API server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/user", user_routes())
        .nest("/api/address", address_routes())
        .nest("/api/order", order_routes())
}
