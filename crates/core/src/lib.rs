//! Sabzi Core - Shared types library.
//!
//! This crate provides common types used across all Sabzi Mandi components:
//! - `server` - REST API for the grocery storefront
//! - `client` - Headless shop client (catalog, cart, filters)
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails, plus
//!   the wire types shared by the server and the client

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
