//! Direct message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecofinds_core::{MessageId, ProductId, UserId};

/// A direct message between two users, optionally about a product.
///
/// Messages are immutable once written. The `read` flag is stored but never
/// transitioned; there is no mark-read operation in this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl ChatMessage {
    /// Storage key prefix for all messages.
    pub const KEY_PREFIX: &'static str = "message:";

    /// Create a message stamped with the current time.
    #[must_use]
    pub fn new(
        sender_id: UserId,
        recipient_id: UserId,
        message: String,
        product_id: Option<ProductId>,
    ) -> Self {
        Self {
            id: MessageId::generate(),
            sender_id,
            recipient_id,
            message,
            product_id,
            timestamp: Utc::now(),
            read: false,
        }
    }

    /// Storage key for this message.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}{}", Self::KEY_PREFIX, self.id)
    }

    /// Whether this message belongs to the conversation between `a` and `b`,
    /// in either direction.
    #[must_use]
    pub fn is_between(&self, a: UserId, b: UserId) -> bool {
        (self.sender_id == a && self.recipient_id == b)
            || (self.sender_id == b && self.recipient_id == a)
    }
}
