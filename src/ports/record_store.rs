//! Record Store Port - Interface for persisting intake records.
//!
//! Defines how the partially-filled record for a conversation is saved and
//! loaded, keyed strictly by conversation identity. There is no shared
//! state across conversations, and implementations must provide
//! read-your-writes consistency within one conversation: a successful save
//! is observed by every subsequent load for that key.

use async_trait::async_trait;

use crate::domain::foundation::ConversationId;
use crate::domain::intake::IntakeRecord;

/// Errors that can occur during record store operations
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize record: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Port for persisting and loading intake records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Load the record for a conversation.
    ///
    /// Returns `None` when the conversation has no record yet; absence is
    /// not an error - it marks a fresh conversation.
    async fn load(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<IntakeRecord>, RecordStoreError>;

    /// Save the record for a conversation.
    ///
    /// A successful return means the write is durable for this backend.
    /// Callers treat a failed save as a failed turn; they never report
    /// progress to the user that was not durably stored.
    async fn save(
        &self,
        conversation_id: &ConversationId,
        record: &IntakeRecord,
    ) -> Result<(), RecordStoreError>;
}
