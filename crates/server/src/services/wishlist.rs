//! Wishlist service.

use ecofinds_core::{ProductId, UserId};

use crate::models::{Product, WishlistEntry};
use crate::services::ServiceError;
use crate::store::{self, KvStore};

/// Wishlist operations over the key-value store.
pub struct WishlistService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> WishlistService<'a> {
    /// Create a new wishlist service.
    #[must_use]
    pub const fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// Add a product to the caller's wishlist.
    ///
    /// Upserts: adding an already-wishlisted product refreshes its
    /// `addedAt` timestamp and nothing else. The product id is not checked
    /// against the catalog; a dangling entry is filtered out on read.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` on persistence failure.
    pub async fn add(&self, user_id: UserId, product_id: ProductId) -> Result<(), ServiceError> {
        let entry = WishlistEntry::new(user_id, product_id);
        self.store
            .set(
                &WishlistEntry::storage_key(user_id, product_id),
                store::encode(&entry)?,
            )
            .await?;
        Ok(())
    }

    /// Remove a product from the caller's wishlist.
    ///
    /// Removing an absent entry is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` on persistence failure.
    pub async fn remove(&self, user_id: UserId, product_id: ProductId) -> Result<(), ServiceError> {
        self.store
            .delete(&WishlistEntry::storage_key(user_id, product_id))
            .await?;
        Ok(())
    }

    /// Resolve the caller's wishlist to products.
    ///
    /// Entries whose product no longer resolves are silently dropped; a
    /// wishlist pointing at a vanished listing is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the scan fails or a record is
    /// corrupted.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Product>, ServiceError> {
        let values = self
            .store
            .get_by_prefix(&WishlistEntry::prefix_for_user(user_id))
            .await?;

        let mut products = Vec::with_capacity(values.len());
        for value in values {
            let entry: WishlistEntry = store::decode(value)?;
            if let Some(value) = self
                .store
                .get(&Product::storage_key(entry.product_id))
                .await?
            {
                products.push(store::decode::<Product>(value)?);
            }
        }

        Ok(products)
    }
}
