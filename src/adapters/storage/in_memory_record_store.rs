//! In-Memory Record Store Adapter
//!
//! Stores intake records in memory, keyed by conversation identity.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ConversationId;
use crate::domain::intake::IntakeRecord;
use crate::ports::{RecordStore, RecordStoreError};

/// In-memory storage for intake records
#[derive(Debug, Clone)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<HashMap<ConversationId, IntakeRecord>>>,
}

impl InMemoryRecordStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored records (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    /// Get the number of stored records
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn load(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<IntakeRecord>, RecordStoreError> {
        let records = self.records.read().await;
        Ok(records.get(conversation_id).cloned())
    }

    async fn save(
        &self,
        conversation_id: &ConversationId,
        record: &IntakeRecord,
    ) -> Result<(), RecordStoreError> {
        let mut records = self.records.write().await;
        records.insert(conversation_id.clone(), record.clone());
        Ok(())
    }
}
