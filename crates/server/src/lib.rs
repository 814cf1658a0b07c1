//! Sabzi Mandi REST API library.
//!
//! Everything the `sabzi-server` binary serves lives here: configuration,
//! `PostgreSQL` repositories, the auth service, middleware, and the route
//! handlers under `/api`. The binary in `main.rs` only wires these pieces
//! together and starts the listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
