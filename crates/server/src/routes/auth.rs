//! Signup route.

use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::auth::AuthGateway;
use crate::error::Result;
use crate::extract::Json;
use crate::state::AppState;

/// Signup request payload.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Create an account at the identity provider and its marketplace profile.
///
/// POST /api/v1/signup
///
/// # Errors
///
/// Returns 400 for a malformed email, blank name or a provider rejection
/// (duplicate email); 500 when the provider or store is unreachable.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<Value>> {
    let gateway = AuthGateway::new(state.provider(), state.store());
    let profile = gateway
        .signup(&request.email, &request.password, &request.name)
        .await?;

    tracing::info!(user_id = %profile.id, "account created");
    Ok(Json(json!({ "user": profile })))
}
