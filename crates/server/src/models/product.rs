//! Product listing model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecofinds_core::{EcoScore, ProductId, UserId};

/// A second-hand product listing.
///
/// Immutable after creation except for the `views` counter, which is bumped
/// on every detail fetch. There is no edit or delete operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// Owning user, weak reference by id. The seller record may be gone.
    pub seller_id: UserId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub condition: String,
    pub material: String,
    /// Ordered image URIs.
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Computed once at creation from material and condition.
    pub eco_score: EcoScore,
    pub created_at: DateTime<Utc>,
    /// Monotonically increasing detail-fetch counter.
    pub views: u64,
    pub likes: u64,
}

impl Product {
    /// Storage key prefix for all products.
    pub const KEY_PREFIX: &'static str = "product:";

    /// Storage key for a product.
    #[must_use]
    pub fn storage_key(id: ProductId) -> String {
        format!("{}{id}", Self::KEY_PREFIX)
    }

    /// Storage key for this product.
    #[must_use]
    pub fn key(&self) -> String {
        Self::storage_key(self.id)
    }
}

/// Payload for listing a new product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub condition: String,
    pub material: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}
