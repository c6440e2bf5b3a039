//! HTTP route handlers for the marketplace API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Liveness check
//! GET    /health/ready            - Readiness check (store reachable)
//!
//! # Auth
//! POST   /api/v1/signup           - Create an account and profile
//!
//! # Products
//! GET    /api/v1/products         - Product listing (?category=&search=)
//! POST   /api/v1/products         - List a product for sale (auth)
//! GET    /api/v1/products/{id}    - Product detail (bumps view counter)
//! POST   /api/v1/seed-products    - Write the demo catalog
//!
//! # Current user (auth)
//! GET    /api/v1/user/profile     - Caller's profile
//! GET    /api/v1/user/products    - Caller's listings
//!
//! # Wishlist (auth)
//! GET    /api/v1/wishlist         - Resolved wishlist products
//! POST   /api/v1/wishlist/{productId}   - Add to wishlist
//! DELETE /api/v1/wishlist/{productId}   - Remove from wishlist
//!
//! # Chat (auth)
//! POST   /api/v1/chat/message     - Send a direct message
//! GET    /api/v1/chat/{otherUserId} - Conversation with another user
//!
//! # Leaderboard
//! GET    /api/v1/leaderboard      - Top users by eco points
//! ```

pub mod auth;
pub mod chat;
pub mod leaderboard;
pub mod products;
pub mod user;
pub mod wishlist;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Prefix all API routes are nested under.
pub const API_PREFIX: &str = "/api/v1";

/// Build the complete application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest(API_PREFIX, api_routes())
        .layer(TraceLayer::new_for_http())
        // The API serves browser clients on other origins
        .layer(CorsLayer::permissive())
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// All API routes, without the `/api/v1` prefix.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/products", get(products::list).post(products::create))
        .route("/products/{id}", get(products::detail))
        .route("/seed-products", post(products::seed))
        .route("/user/profile", get(user::profile))
        .route("/user/products", get(user::products))
        .route("/wishlist", get(wishlist::list))
        .route(
            "/wishlist/{productId}",
            post(wishlist::add).delete(wishlist::remove),
        )
        .route("/chat/message", post(chat::send))
        .route("/chat/{otherUserId}", get(chat::conversation))
        .route("/leaderboard", get(leaderboard::top))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies store connectivity before returning OK.
/// Returns 503 Service Unavailable if the store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().get("health:ready").await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
