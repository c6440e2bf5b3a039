//! Direct messaging routes.

use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use ecofinds_core::{ProductId, UserId};

use crate::error::Result;
use crate::extract::{Json, Path};
use crate::middleware::RequireAuth;
use crate::services::ChatService;
use crate::state::AppState;

/// Send-message request payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub recipient_id: UserId,
    pub message: String,
    #[serde(default)]
    pub product_id: Option<ProductId>,
}

/// Send a direct message.
///
/// POST /api/v1/chat/message
///
/// The recipient id is not checked against the store; a message to an
/// unknown user is still persisted.
pub async fn send(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<Value>> {
    let message = ChatService::new(state.store())
        .send(
            caller.id,
            request.recipient_id,
            request.message,
            request.product_id,
        )
        .await?;
    Ok(Json(json!({ "message": message })))
}

/// Fetch the conversation with another user, oldest first.
///
/// GET /api/v1/chat/{otherUserId}
pub async fn conversation(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Path(other_id): Path<UserId>,
) -> Result<Json<Value>> {
    let messages = ChatService::new(state.store())
        .conversation(caller.id, other_id)
        .await?;
    Ok(Json(json!({ "messages": messages })))
}
