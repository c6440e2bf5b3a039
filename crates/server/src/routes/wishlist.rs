//! Wishlist routes.

use axum::extract::State;
use serde_json::{Value, json};

use ecofinds_core::ProductId;

use crate::error::Result;
use crate::extract::{Json, Path};
use crate::middleware::RequireAuth;
use crate::services::WishlistService;
use crate::state::AppState;

/// Resolve the caller's wishlist to products.
///
/// GET /api/v1/wishlist
///
/// Entries whose product no longer exists are dropped from the response.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
) -> Result<Json<Value>> {
    let products = WishlistService::new(state.store()).list(caller.id).await?;
    Ok(Json(json!({ "products": products })))
}

/// Add a product to the caller's wishlist.
///
/// POST /api/v1/wishlist/{productId}
///
/// Idempotent; re-adding refreshes the entry's timestamp.
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Value>> {
    WishlistService::new(state.store())
        .add(caller.id, product_id)
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// Remove a product from the caller's wishlist.
///
/// DELETE /api/v1/wishlist/{productId}
///
/// Removing an absent entry still succeeds.
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Value>> {
    WishlistService::new(state.store())
        .remove(caller.id, product_id)
        .await?;
    Ok(Json(json!({ "success": true })))
}
