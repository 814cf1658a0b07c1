//! Integration tests for registration, login, and admin bootstrap.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p sabzi-server)
//! - `ADMIN_SETUP_KEY` set on the server
//!
//! Run with: cargo test -p sabzi-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use sabzi_integration_tests::{TEST_PASSWORD, base_url, setup_key, unique_email};

/// POST a registration payload and return the raw response.
async fn register_raw(
    client: &Client,
    name: &str,
    email: &str,
    password: &str,
) -> reqwest::Response {
    let base_url = base_url();
    client
        .post(format!("{base_url}/api/user/register"))
        .json(&json!({
            "name": name,
            "email": email,
            "password": password,
        }))
        .send()
        .await
        .expect("Failed to send registration")
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_register_returns_token_and_public_user() {
    let client = Client::new();
    let email = unique_email("register");

    let resp = register_raw(&client, "Ravi Kumar", &email, TEST_PASSWORD).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse registration");
    assert_eq!(body.get("success"), Some(&Value::Bool(true)));
    assert!(
        body.get("token")
            .and_then(Value::as_str)
            .is_some_and(|t| !t.is_empty()),
        "Registration should return a signed token"
    );

    let user = body.get("user").expect("Response missing user");
    assert_eq!(user.get("name").and_then(Value::as_str), Some("Ravi Kumar"));
    assert_eq!(
        user.get("email").and_then(Value::as_str),
        Some(email.as_str())
    );
    assert_eq!(user.get("isAdmin"), Some(&Value::Bool(false)));
    assert!(
        user.get("password").is_none() && user.get("passwordHash").is_none(),
        "Password material must never appear on the wire: {user}"
    );
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_register_duplicate_email_fails() {
    let client = Client::new();
    let email = unique_email("duplicate");

    let resp = register_raw(&client, "First Account", &email, TEST_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = register_raw(&client, "Second Account", &email, TEST_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(body.get("success"), Some(&Value::Bool(false)));
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("An account with this email already exists")
    );
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_register_rejects_weak_password() {
    let client = Client::new();

    let resp = register_raw(&client, "Short Pass", &unique_email("weak"), "short").await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("password must be at least 8 characters")
    );
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_register_rejects_blank_name() {
    let client = Client::new();

    let resp = register_raw(&client, "   ", &unique_email("blank-name"), TEST_PASSWORD).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Name is required")
    );
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_register_rejects_invalid_email() {
    let client = Client::new();

    let resp = register_raw(&client, "No At Sign", "not-an-email", TEST_PASSWORD).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Invalid email address")
    );
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_login_round_trip() {
    let client = Client::new();
    let base_url = base_url();
    let email = unique_email("login");

    let resp = register_raw(&client, "Login Tester", &email, TEST_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Email matching is case-insensitive
    let resp = client
        .post(format!("{base_url}/api/user/login"))
        .json(&json!({
            "email": email.to_uppercase(),
            "password": TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to log in");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse login response");
    assert_eq!(body.get("success"), Some(&Value::Bool(true)));
    assert!(
        body.get("token")
            .and_then(Value::as_str)
            .is_some_and(|t| !t.is_empty()),
        "Login should return a signed token"
    );
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_login_wrong_password() {
    let client = Client::new();
    let base_url = base_url();
    let email = unique_email("wrong-pass");

    let resp = register_raw(&client, "Wrong Pass", &email, TEST_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .post(format!("{base_url}/api/user/login"))
        .json(&json!({
            "email": email,
            "password": "definitely-not-it",
        }))
        .send()
        .await
        .expect("Failed to attempt login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Invalid credentials")
    );
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_login_unknown_email_gets_same_error() {
    let client = Client::new();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/user/login"))
        .json(&json!({
            "email": unique_email("nobody"),
            "password": TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to attempt login");

    // Indistinguishable from a wrong password
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Invalid credentials")
    );
}

// ============================================================================
// Admin Bootstrap Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_admin_create_returns_admin_user() {
    let client = Client::new();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/user/admin"))
        .header("x-setup-key", setup_key())
        .json(&json!({
            "name": "Store Owner",
            "email": unique_email("owner"),
            "password": TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to create admin");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse admin response");
    let user = body.get("user").expect("Response missing user");
    assert_eq!(user.get("isAdmin"), Some(&Value::Bool(true)));
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_admin_create_rejects_wrong_setup_key() {
    let client = Client::new();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/user/admin"))
        .header("x-setup-key", "nope")
        .json(&json!({
            "name": "Intruder",
            "email": unique_email("intruder"),
            "password": TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to attempt admin create");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Not authorized to access this route")
    );
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_admin_create_rejects_missing_setup_key() {
    let client = Client::new();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/user/admin"))
        .json(&json!({
            "name": "Intruder",
            "email": unique_email("intruder"),
            "password": TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to attempt admin create");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
