//! Product catalog routes.

use axum::extract::{Query, State};
use serde_json::{Value, json};

use ecofinds_core::ProductId;

use crate::error::{AppError, Result};
use crate::extract::{Json, Path};
use crate::middleware::RequireAuth;
use crate::models::NewProduct;
use crate::services::{ProductFilter, ProductService};
use crate::state::AppState;

/// List products, newest first.
///
/// GET /api/v1/products?category=&search=
///
/// `category=all` (or absent) disables the category filter; `search` is a
/// case-insensitive substring match on title and description.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Value>> {
    let products = ProductService::new(state.store()).list(&filter).await?;
    Ok(Json(json!({ "products": products })))
}

/// List a new product for sale.
///
/// POST /api/v1/products
///
/// Computes the eco score server-side and awards listing points to the
/// seller's profile.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Json(data): Json<NewProduct>,
) -> Result<Json<Value>> {
    let product = ProductService::new(state.store())
        .create(&caller, data)
        .await?;

    tracing::info!(product_id = %product.id, seller_id = %caller.id, "product listed");
    Ok(Json(json!({ "product": product })))
}

/// Fetch one product with its seller projection.
///
/// GET /api/v1/products/{id}
///
/// Every fetch increments the product's view counter. `seller` is `null`
/// when the seller's profile record no longer resolves. An id that does not
/// parse as a UUID behaves like any other absent product: 404.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = id
        .parse::<ProductId>()
        .map_err(|_| AppError::NotFound("product".to_string()))?;

    let (product, seller) = ProductService::new(state.store()).get(id).await?;
    Ok(Json(json!({ "product": product, "seller": seller })))
}

/// Write the demo catalog.
///
/// POST /api/v1/seed-products
///
/// Unauthenticated on purpose; writes eight sample listings under fresh ids
/// each call.
pub async fn seed(State(state): State<AppState>) -> Result<Json<Value>> {
    let count = ProductService::new(state.store())
        .seed_demo_products()
        .await?;

    tracing::info!(count, "demo catalog seeded");
    Ok(Json(json!({
        "message": "Products seeded successfully",
        "count": count,
    })))
}
