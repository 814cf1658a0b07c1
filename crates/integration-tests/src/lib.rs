//! Integration tests for the Sabzi Mandi API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//!   (cargo run -p sabzi-cli -- migrate)
//! - The API server running (cargo run -p sabzi-server)
//! - `ADMIN_SETUP_KEY` set to the same value for the server and the tests
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sabzi-integration-tests -- --ignored
//! ```
//!
//! The tests talk to a live server over HTTP and create real rows, and the
//! seeding tests wipe the product table. Point `API_BASE_URL` at a server
//! backed by a disposable database, never a production one.

use reqwest::Client;
use serde_json::{Value, json};
use uuid::Uuid;

/// Password used for every account the tests create.
pub const TEST_PASSWORD: &str = "gram-flour-42";

/// Base URL for the API server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Setup key sent to `POST /api/user/admin`.
///
/// The default matches the key in the development compose file; override it
/// via `ADMIN_SETUP_KEY` when the server is configured differently.
#[must_use]
pub fn setup_key() -> String {
    std::env::var("ADMIN_SETUP_KEY")
        .unwrap_or_else(|_| "kT7vR2qX9mW4zB8nJ3pL6cY5dF1gH0sA".to_string())
}

/// A throwaway email unique per call, so reruns never hit the unique index.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4())
}

/// An account created during a test run, with its signed-in token.
pub struct TestAccount {
    pub token: String,
    pub email: String,
    pub password: String,
}

/// Register a fresh shopper account and return its token.
///
/// # Panics
///
/// Panics if the request fails or the server rejects the registration.
pub async fn register_shopper(client: &Client) -> TestAccount {
    let base_url = base_url();
    let email = unique_email("shopper");

    let resp = client
        .post(format!("{base_url}/api/user/register"))
        .json(&json!({
            "name": "Test Shopper",
            "email": email,
            "password": TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to register shopper");

    assert_eq!(resp.status(), 201, "Shopper registration should succeed");
    let body: Value = resp.json().await.expect("Failed to parse registration");
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .expect("Registration response missing token")
        .to_string();

    TestAccount {
        token,
        email,
        password: TEST_PASSWORD.to_string(),
    }
}

/// Create a fresh admin account via the setup-key route and return its token.
///
/// # Panics
///
/// Panics if the request fails or the setup key does not match the server's.
pub async fn bootstrap_admin(client: &Client) -> TestAccount {
    let base_url = base_url();
    let email = unique_email("admin");

    let resp = client
        .post(format!("{base_url}/api/user/admin"))
        .header("x-setup-key", setup_key())
        .json(&json!({
            "name": "Test Admin",
            "email": email,
            "password": TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to create admin");

    assert_eq!(
        resp.status(),
        201,
        "Admin creation should succeed (is ADMIN_SETUP_KEY set on the server?)"
    );
    let body: Value = resp.json().await.expect("Failed to parse admin response");
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .expect("Admin response missing token")
        .to_string();

    TestAccount {
        token,
        email,
        password: TEST_PASSWORD.to_string(),
    }
}

/// A valid product payload with a recognizable name.
#[must_use]
pub fn sample_product_payload(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Created by an integration test.",
        "price": "12.50",
        "category": "Vegetables",
        "subCategory": "Fresh",
        "image": ["https://cdn.example.com/test.jpg"],
        "available": true,
        "bestseller": false,
        "rating": 4.0,
    })
}

/// A complete delivery address payload.
#[must_use]
pub fn sample_address_payload() -> Value {
    json!({
        "firstName": "Asha",
        "lastName": "Verma",
        "email": "asha.verma@example.com",
        "street": "14 MG Road",
        "city": "Pune",
        "state": "Maharashtra",
        "zipcode": "411001",
        "country": "India",
        "phone": "9876543210",
    })
}
