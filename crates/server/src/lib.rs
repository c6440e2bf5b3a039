//! EcoFinds marketplace API library.
//!
//! This crate provides the marketplace API as a library, allowing it to be
//! tested and reused. The binary in `main.rs` wires configuration, the
//! Postgres-backed key-value store and the hosted identity provider together
//! and serves the router returned by [`app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router with state applied.
///
/// Includes health endpoints at the root and all API routes nested under
/// [`routes::API_PREFIX`].
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::router(state)
}
