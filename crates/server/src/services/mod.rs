//! Domain services.
//!
//! Each service is a thin borrow over the key-value store, constructed
//! per-request from [`crate::state::AppState`]. All cross-entity queries are
//! prefix scans plus in-memory filtering; see [`crate::store`] for the
//! tradeoff notes.

pub mod chat;
pub mod eco_score;
pub mod leaderboard;
pub mod products;
pub mod wishlist;

pub use chat::ChatService;
pub use eco_score::compute_eco_score;
pub use leaderboard::LeaderboardService;
pub use products::{ProductFilter, ProductService};
pub use wishlist::WishlistService;

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur in domain service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Store operation failed.
    #[error("database error: {0}")]
    Store(#[from] StoreError),

    /// A referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Request payload failed validation.
    #[error("{0}")]
    Validation(String),
}
