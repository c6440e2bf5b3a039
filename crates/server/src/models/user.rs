//! User profile model.
//!
//! The identity provider owns credentials; this record only carries the
//! marketplace-side profile (display name, eco points, badges). It is created
//! at signup and mutated by point-award side effects, never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecofinds_core::{Email, UserId};

/// Marketplace profile for a registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    /// Gamification counter; only ever increases (+10 per listed product).
    pub eco_points: i64,
    /// Badge identifiers. Derived elsewhere; stored as-is.
    pub badges: Vec<String>,
    pub joined_at: DateTime<Utc>,
}

impl UserProfile {
    /// Storage key prefix for all user profiles.
    pub const KEY_PREFIX: &'static str = "user:";

    /// Create a fresh profile for a newly registered user.
    #[must_use]
    pub fn new(id: UserId, email: Email, name: String) -> Self {
        Self {
            id,
            email,
            name,
            eco_points: 0,
            badges: Vec::new(),
            joined_at: Utc::now(),
        }
    }

    /// Storage key for a user profile.
    #[must_use]
    pub fn storage_key(id: UserId) -> String {
        format!("{}{id}", Self::KEY_PREFIX)
    }

    /// Reduced projection safe to show to other users.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            eco_points: self.eco_points,
            badges: self.badges.clone(),
        }
    }
}

/// Public projection of a user: what sellers and leaderboard entries expose.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub eco_points: i64,
    pub badges: Vec<String>,
}
