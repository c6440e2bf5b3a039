//! `PostgreSQL`-backed key-value store.
//!
//! All entities live in one flat table:
//!
//! ```sql
//! CREATE TABLE kv_store (
//!     key   TEXT PRIMARY KEY,
//!     value JSONB NOT NULL
//! );
//! ```
//!
//! The schema is created on connect if it does not exist, so no separate
//! migration step is required.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{KvStore, StoreError};

/// Key-value store over a single `PostgreSQL` table.
#[derive(Clone)]
pub struct PgKvStore {
    pool: PgPool,
}

impl PgKvStore {
    /// Connect to `PostgreSQL` and ensure the `kv_store` table exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the connection cannot be established
    /// or the schema cannot be created.
    pub async fn connect(database_url: &secrecy::SecretString) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(10))
            .connect(database_url.expose_secret())
            .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS kv_store (
                key   TEXT PRIMARY KEY,
                value JSONB NOT NULL
            )
            ",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Wrap an existing connection pool.
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (health checks).
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl KvStore for PgKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let value: Option<Value> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        sqlx::query(
            r"
            INSERT INTO kv_store (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM kv_store WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError> {
        // Prefixes are internal identifiers ("product:", "wishlist:{uuid}:")
        // and never contain LIKE metacharacters.
        let values: Vec<Value> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key LIKE $1 || '%'")
                .bind(prefix)
                .fetch_all(&self.pool)
                .await?;

        Ok(values)
    }
}
