//! Current-user routes.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::UserProfile;
use crate::services::ProductService;
use crate::state::AppState;
use crate::store;

/// Fetch the caller's marketplace profile.
///
/// GET /api/v1/user/profile
///
/// 404 when the provider account exists but the profile record is missing
/// (a half-completed signup).
pub async fn profile(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
) -> Result<Json<Value>> {
    let value = state
        .store()
        .get(&UserProfile::storage_key(caller.id))
        .await?
        .ok_or_else(|| AppError::NotFound("profile".to_string()))?;

    let profile: UserProfile = store::decode(value)?;
    Ok(Json(json!({ "profile": profile })))
}

/// List the caller's own product listings.
///
/// GET /api/v1/user/products
pub async fn products(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
) -> Result<Json<Value>> {
    let products = ProductService::new(state.store())
        .list_for_seller(caller.id)
        .await?;
    Ok(Json(json!({ "products": products })))
}
