//! Leaderboard route.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::error::Result;
use crate::services::LeaderboardService;
use crate::services::leaderboard::DEFAULT_TOP_N;
use crate::state::AppState;

/// Top users by eco points.
///
/// GET /api/v1/leaderboard
///
/// Public; returns the reduced user projection (no email).
pub async fn top(State(state): State<AppState>) -> Result<Json<Value>> {
    let leaderboard = LeaderboardService::new(state.store())
        .top_users(DEFAULT_TOP_N)
        .await?;
    Ok(Json(json!({ "leaderboard": leaderboard })))
}
