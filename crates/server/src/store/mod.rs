//! Flat key-value persistence for all marketplace entities.
//!
//! Every domain record is a JSON value stored under a string key of the form
//! `{type}:{id}` (or `{type}:{ownerId}:{id}` for relational-lookup entities
//! like wishlist entries). There are no transactions, no compare-and-swap and
//! no secondary indexes: a direct key fetch and a prefix scan are the only
//! read operations, and "all products" or "all messages between two users"
//! are answered by scanning a prefix and filtering in memory. That is O(total
//! entities of that prefix) per call, an accepted tradeoff at this scale.
//!
//! # Implementations
//!
//! - [`PgKvStore`] - a single `kv_store(key TEXT PRIMARY KEY, value JSONB)`
//!   table in `PostgreSQL`
//! - [`MemoryKvStore`] - a `BTreeMap` behind an `RwLock`, used by tests

mod memory;
mod postgres;

pub use memory::MemoryKvStore;
pub use postgres::PgKvStore;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur in the key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored value could not be decoded into the expected entity shape.
    #[error("corrupted record: {0}")]
    Corrupted(String),
}

/// The persistence contract used by every domain service.
///
/// Individual key operations are assumed to be serialized by the backing
/// store, but there are no multi-key transactions: read-modify-write
/// sequences (view counts, eco point awards) can lose updates under
/// concurrent requests. See the service modules for where this applies.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Store `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Delete the value under `key`. Deleting an absent key is a no-op.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Fetch all values whose key starts with `prefix`.
    ///
    /// Order is unspecified; callers sort as needed.
    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError>;
}

/// Serialize an entity for storage.
///
/// # Errors
///
/// Returns `StoreError::Corrupted` if the entity cannot be represented as
/// JSON (never happens for the derived domain types).
pub fn encode<T: Serialize>(entity: &T) -> Result<Value, StoreError> {
    serde_json::to_value(entity).map_err(|e| StoreError::Corrupted(e.to_string()))
}

/// Decode a stored value into an entity.
///
/// # Errors
///
/// Returns `StoreError::Corrupted` if the stored JSON does not match the
/// expected entity shape.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, StoreError> {
    serde_json::from_value(value).map_err(|e| StoreError::Corrupted(e.to_string()))
}
