//! Wishlist entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecofinds_core::{ProductId, UserId};

/// Membership marker for a product in a user's wishlist.
///
/// Identity is the (user, product) pair; existence of the record is the only
/// signal. The key layout `wishlist:{userId}:{productId}` makes "all entries
/// for a user" a prefix scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    /// Create an entry stamped with the current time.
    #[must_use]
    pub fn new(user_id: UserId, product_id: ProductId) -> Self {
        Self {
            user_id,
            product_id,
            added_at: Utc::now(),
        }
    }

    /// Storage key for a (user, product) pair.
    #[must_use]
    pub fn storage_key(user_id: UserId, product_id: ProductId) -> String {
        format!("wishlist:{user_id}:{product_id}")
    }

    /// Prefix covering every wishlist entry of one user.
    #[must_use]
    pub fn prefix_for_user(user_id: UserId) -> String {
        format!("wishlist:{user_id}:")
    }
}
