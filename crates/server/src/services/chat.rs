//! Direct messaging service.
//!
//! Messages are durable writes with no delivery guarantee, notification or
//! read-state transition. A conversation is reconstructed by scanning all
//! messages and keeping the bidirectional pair, sorted by timestamp.

use ecofinds_core::{ProductId, UserId};

use crate::models::ChatMessage;
use crate::services::ServiceError;
use crate::store::{self, KvStore};

/// Messaging operations over the key-value store.
pub struct ChatService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> ChatService<'a> {
    /// Create a new chat service.
    #[must_use]
    pub const fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// Send a direct message, optionally referencing a product.
    ///
    /// The recipient and product ids are not validated against the store;
    /// a message to an unknown user is still a durable write.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` on persistence failure.
    pub async fn send(
        &self,
        sender_id: UserId,
        recipient_id: UserId,
        message: String,
        product_id: Option<ProductId>,
    ) -> Result<ChatMessage, ServiceError> {
        let message = ChatMessage::new(sender_id, recipient_id, message, product_id);
        self.store
            .set(&message.key(), store::encode(&message)?)
            .await?;
        Ok(message)
    }

    /// Fetch the conversation between two users, oldest first.
    ///
    /// Symmetric in its arguments: `(a, b)` and `(b, a)` return the same
    /// messages.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the scan fails or a record is
    /// corrupted.
    pub async fn conversation(
        &self,
        caller_id: UserId,
        other_id: UserId,
    ) -> Result<Vec<ChatMessage>, ServiceError> {
        let values = self.store.get_by_prefix(ChatMessage::KEY_PREFIX).await?;

        let mut messages = Vec::new();
        for value in values {
            let message: ChatMessage = store::decode(value)?;
            if message.is_between(caller_id, other_id) {
                messages.push(message);
            }
        }

        messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));
        Ok(messages)
    }
}
