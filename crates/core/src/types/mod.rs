//! Core types for Sabzi Mandi.
//!
//! This module provides type-safe wrappers for common domain concepts and the
//! wire types exchanged between the API server and the shop client.

pub mod address;
pub mod api;
pub mod cart;
pub mod email;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod status;
pub mod user;

pub use address::{Address, AddressInput, AddressValidationError};
pub use api::*;
pub use cart::{CartLine, delivery_fee};
pub use email::{Email, EmailError};
pub use id::*;
pub use order::Order;
pub use price::{CurrencyCode, Price};
pub use product::{Product, ProductInput, ProductValidationError};
pub use status::{OrderStatus, PaymentMethod};
pub use user::User;
