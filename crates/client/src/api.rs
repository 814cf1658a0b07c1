//! Typed client for the Sabzi Mandi REST API.
//!
//! Wraps `reqwest` 0.13 with one method per endpoint. Envelope handling is
//! uniform: non-2xx statuses and `{success: false}` bodies both surface as
//! [`ApiError::Api`] carrying the server's message.

use std::sync::Arc;

use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use sabzi_core::{
    Address, AddressInput, AddressListResponse, AuthResponse, CartLine, LoginRequest,
    MessageResponse, Order, OrderListResponse, PlaceOrderRequest, Product, ProductId,
    ProductInput, ProductListResponse, ProductResponse, RegisterRequest, SETUP_KEY_HEADER,
    SaveAddressRequest, TOKEN_HEADER, User,
};

/// Errors that can occur when calling the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a failure envelope.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured base URL is not a valid URL.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// A signed-in session: the auth token plus the account it belongs to.
///
/// Returned by the register, login, and admin-create calls. The token goes
/// into [`crate::ShopState`] (or any other session store) and back out on
/// authenticated calls.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the Sabzi Mandi REST API.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the API server at `base_url`
    /// (for example `http://localhost:5000`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BaseUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)?;

        // Url::join treats a base without a trailing slash as a file path
        // and would drop its last segment
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url,
            }),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Send a request and decode the enveloped response.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        // Body is read as text so a parse failure can still be logged
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(decode_failure(status, &response_text));
        }

        // A 2xx body can still carry a failure envelope
        if let Ok(envelope) = serde_json::from_str::<MessageResponse>(&response_text)
            && !envelope.success
        {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: envelope.message,
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                let preview: String = response_text.chars().take(500).collect();
                tracing::error!(error = %e, status = %status, body = %preview, "Bad payload");
                Err(ApiError::Parse(e))
            }
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetch the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint("api/products")?;
        let response: ProductListResponse = self.execute(self.inner.client.get(url)).await?;
        Ok(response.products)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let url = self.endpoint(&format!("api/products/{id}"))?;
        let response: ProductResponse = self.execute(self.inner.client.get(url)).await?;
        Ok(response.product)
    }

    /// Create a product. Admin only.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid, the token is not an admin
    /// token, or the request fails.
    #[instrument(skip(self, token, input), fields(name = %input.name))]
    pub async fn create_product(
        &self,
        token: &str,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        let url = self.endpoint("api/products")?;
        let response: ProductResponse = self
            .execute(
                self.inner
                    .client
                    .post(url)
                    .header(TOKEN_HEADER, token)
                    .json(input),
            )
            .await?;
        Ok(response.product)
    }

    /// Replace a product's fields. Admin only.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist, the input is invalid,
    /// the token is not an admin token, or the request fails.
    #[instrument(skip(self, token, input), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        token: &str,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        let url = self.endpoint(&format!("api/products/{id}"))?;
        let response: ProductResponse = self
            .execute(
                self.inner
                    .client
                    .put(url)
                    .header(TOKEN_HEADER, token)
                    .json(input),
            )
            .await?;
        Ok(response.product)
    }

    /// Delete a product. Admin only.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist, the token is not an
    /// admin token, or the request fails.
    #[instrument(skip(self, token), fields(product_id = %id))]
    pub async fn delete_product(&self, token: &str, id: ProductId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("api/products/{id}"))?;
        self.execute::<MessageResponse>(self.inner.client.delete(url).header(TOKEN_HEADER, token))
            .await?;
        Ok(())
    }

    /// Replace the whole catalog with the fixed sample set.
    ///
    /// Destructive: every existing product is deleted first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn seed_products(&self) -> Result<(), ApiError> {
        let url = self.endpoint("api/products/seed")?;
        self.execute::<MessageResponse>(self.inner.client.post(url)).await?;
        Ok(())
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Register a new shopper account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid name/email/password, an already
    /// registered email, or a failed request.
    #[instrument(skip_all, fields(email = %email))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ApiError> {
        let url = self.endpoint("api/user/register")?;
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self.execute(self.inner.client.post(url).json(&body)).await?;
        Ok(AuthSession {
            token: response.token,
            user: response.user,
        })
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns an error for wrong credentials or a failed request.
    #[instrument(skip_all, fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let url = self.endpoint("api/user/login")?;
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self.execute(self.inner.client.post(url).json(&body)).await?;
        Ok(AuthSession {
            token: response.token,
            user: response.user,
        })
    }

    /// Create an admin account using the shared setup key.
    ///
    /// # Errors
    ///
    /// Returns an error for a wrong or missing setup key, an invalid
    /// payload, or a failed request.
    #[instrument(skip_all, fields(email = %email))]
    pub async fn create_admin(
        &self,
        setup_key: &str,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ApiError> {
        let url = self.endpoint("api/user/admin")?;
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self
            .execute(
                self.inner
                    .client
                    .post(url)
                    .header(SETUP_KEY_HEADER, setup_key)
                    .json(&body),
            )
            .await?;
        Ok(AuthSession {
            token: response.token,
            user: response.user,
        })
    }

    // =========================================================================
    // Addresses & Orders
    // =========================================================================

    /// Fetch the signed-in user's saved addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the request fails.
    #[instrument(skip(self, token))]
    pub async fn get_addresses(&self, token: &str) -> Result<Vec<Address>, ApiError> {
        let url = self.endpoint("api/address/get")?;
        let response: AddressListResponse = self
            .execute(self.inner.client.get(url).header(TOKEN_HEADER, token))
            .await?;
        Ok(response.addresses)
    }

    /// Save a delivery address and return the updated list.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid, the token is invalid, or
    /// the request fails.
    #[instrument(skip(self, token, address))]
    pub async fn save_address(
        &self,
        token: &str,
        address: &AddressInput,
    ) -> Result<Vec<Address>, ApiError> {
        let url = self.endpoint("api/address/save")?;
        let body = SaveAddressRequest {
            address: address.clone(),
        };
        let response: AddressListResponse = self
            .execute(
                self.inner
                    .client
                    .post(url)
                    .header(TOKEN_HEADER, token)
                    .json(&body),
            )
            .await?;
        Ok(response.addresses)
    }

    /// Place a cash-on-delivery order.
    ///
    /// `amount` must equal the cart total plus the delivery fee; the server
    /// re-checks it against `items`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is empty, the amount does not match, the
    /// token is invalid, or the request fails.
    #[instrument(skip(self, token, address, items), fields(amount = %amount))]
    pub async fn place_order(
        &self,
        token: &str,
        address: &AddressInput,
        items: &[CartLine],
        amount: Decimal,
    ) -> Result<(), ApiError> {
        let url = self.endpoint("api/order/place")?;
        let body = PlaceOrderRequest {
            address: address.clone(),
            items: items.to_vec(),
            amount,
        };
        self.execute::<MessageResponse>(
            self.inner
                .client
                .post(url)
                .header(TOKEN_HEADER, token)
                .json(&body),
        )
        .await?;
        Ok(())
    }

    /// Fetch the signed-in user's order history, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the request fails.
    #[instrument(skip(self, token))]
    pub async fn list_orders(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        let url = self.endpoint("api/order/list")?;
        let response: OrderListResponse = self
            .execute(self.inner.client.get(url).header(TOKEN_HEADER, token))
            .await?;
        Ok(response.orders)
    }
}

/// Turn a non-2xx response into an [`ApiError`], preferring the server's
/// envelope message over the raw status line.
fn decode_failure(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<MessageResponse>(body).map_or_else(
        |_| format!("HTTP {status}"),
        |envelope| envelope.message,
    );

    tracing::error!(
        status = %status,
        message = %message,
        "API returned non-success status"
    );

    ApiError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 404,
            message: "Product not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (404): Product not found");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = ApiClient::new("not a url");
        assert!(matches!(result, Err(ApiError::BaseUrl(_))));
    }

    #[test]
    fn test_endpoint_joins_without_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000").unwrap();
        let url = client.endpoint("api/products").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/products");
    }

    #[test]
    fn test_endpoint_preserves_base_path() {
        let client = ApiClient::new("http://localhost:5000/sabzi").unwrap();
        let url = client.endpoint("api/order/list").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/sabzi/api/order/list");
    }

    #[test]
    fn test_decode_failure_uses_envelope_message() {
        let err = decode_failure(
            StatusCode::NOT_FOUND,
            r#"{"success":false,"message":"Product not found"}"#,
        );
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Product not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_failure_falls_back_to_status() {
        let err = decode_failure(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "HTTP 502 Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
