//! Request and response payloads for the REST API.
//!
//! Every response body carries a `success` flag. Error responses are always
//! a [`MessageResponse`] with `success: false` and a human-readable message,
//! regardless of which endpoint produced them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Address, AddressInput, CartLine, Order, Product, User};

/// Request header carrying the auth token on protected routes.
pub const TOKEN_HEADER: &str = "token";

/// Request header carrying the shared setup key for `POST /api/user/admin`.
pub const SETUP_KEY_HEADER: &str = "x-setup-key";

// ============================================================================
// Requests
// ============================================================================

/// Body for `POST /api/user/register` and `POST /api/user/admin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/user/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/address/save`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAddressRequest {
    pub address: AddressInput,
}

/// Body for `POST /api/order/place`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub address: AddressInput,
    pub items: Vec<CartLine>,
    /// Cart amount plus delivery fee, computed by the client and re-checked
    /// by the server.
    pub amount: Decimal,
}

// ============================================================================
// Responses
// ============================================================================

/// Plain acknowledgement, also the uniform error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Body of `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub products: Vec<Product>,
}

/// Body of the single-product endpoints (get, create, update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

/// Body of the register, login, and admin-create endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: User,
}

/// Body of `GET /api/address/get` and `POST /api/address/save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressListResponse {
    pub success: bool,
    pub addresses: Vec<Address>,
}

/// Body of `GET /api/order/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub success: bool,
    pub orders: Vec<Order>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_message_envelope_shape() {
        let body = MessageResponse {
            success: false,
            message: "Product not found".to_owned(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"success":false,"message":"Product not found"}"#
        );
    }

    #[test]
    fn test_product_list_envelope_shape() {
        let body = ProductListResponse {
            success: true,
            products: vec![],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json.get("success"), Some(&serde_json::json!(true)));
        assert!(json.get("products").is_some_and(serde_json::Value::is_array));
    }

    #[test]
    fn test_register_request_accepts_wire_json() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"name":"Ravi","email":"ravi@example.com","password":"secret123"}"#,
        )
        .unwrap();
        assert_eq!(req.name, "Ravi");
    }
}
