//! Eco points leaderboard service.

use crate::models::{UserProfile, UserSummary};
use crate::services::ServiceError;
use crate::store::{self, KvStore};

/// Default number of leaderboard entries.
pub const DEFAULT_TOP_N: usize = 10;

/// Leaderboard ranking over the key-value store.
pub struct LeaderboardService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> LeaderboardService<'a> {
    /// Create a new leaderboard service.
    #[must_use]
    pub const fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// The top `n` users by eco points, highest first.
    ///
    /// Ties are broken by ascending user id, so the ranking is deterministic
    /// regardless of scan order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the scan fails or a record is
    /// corrupted.
    pub async fn top_users(&self, n: usize) -> Result<Vec<UserSummary>, ServiceError> {
        let values = self.store.get_by_prefix(UserProfile::KEY_PREFIX).await?;

        let mut profiles = Vec::with_capacity(values.len());
        for value in values {
            profiles.push(store::decode::<UserProfile>(value)?);
        }

        profiles.sort_by(|a, b| {
            b.eco_points
                .cmp(&a.eco_points)
                .then_with(|| a.id.cmp(&b.id))
        });
        profiles.truncate(n);

        Ok(profiles.iter().map(UserProfile::summary).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ecofinds_core::{Email, UserId};

    use super::*;
    use crate::store::MemoryKvStore;

    async fn put_user(store: &MemoryKvStore, name: &str, points: i64) -> UserId {
        let mut profile = UserProfile::new(
            UserId::generate(),
            Email::parse(&format!("{name}@example.com")).unwrap(),
            name.to_string(),
        );
        profile.eco_points = points;
        store
            .set(
                &UserProfile::storage_key(profile.id),
                store::encode(&profile).unwrap(),
            )
            .await
            .unwrap();
        profile.id
    }

    #[tokio::test]
    async fn test_ranked_by_points_descending() {
        let store = MemoryKvStore::new();
        let service = LeaderboardService::new(&store);

        put_user(&store, "low", 10).await;
        put_user(&store, "high", 90).await;
        put_user(&store, "mid", 40).await;

        let top = service.top_users(DEFAULT_TOP_N).await.unwrap();
        let names: Vec<_> = top.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[tokio::test]
    async fn test_truncates_to_n() {
        let store = MemoryKvStore::new();
        let service = LeaderboardService::new(&store);

        for i in 0..5 {
            put_user(&store, &format!("user{i}"), i).await;
        }

        assert_eq!(service.top_users(3).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_ties_broken_by_id() {
        let store = MemoryKvStore::new();
        let service = LeaderboardService::new(&store);

        let a = put_user(&store, "a", 50).await;
        let b = put_user(&store, "b", 50).await;
        let expected = if a < b { vec![a, b] } else { vec![b, a] };

        let top = service.top_users(DEFAULT_TOP_N).await.unwrap();
        let ids: Vec<_> = top.iter().map(|u| u.id).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_empty_store_empty_board() {
        let store = MemoryKvStore::new();
        let service = LeaderboardService::new(&store);
        assert!(service.top_users(DEFAULT_TOP_N).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_projection_has_no_email() {
        let store = MemoryKvStore::new();
        let service = LeaderboardService::new(&store);
        put_user(&store, "ada", 10).await;

        let top = service.top_users(DEFAULT_TOP_N).await.unwrap();
        let json = serde_json::to_value(top.first().unwrap()).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("ecoPoints").is_some());
    }
}
