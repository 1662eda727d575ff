//! File-based Record Store Adapter
//!
//! Stores one YAML document per conversation under a base directory.
//! Useful when intake state must survive restarts without a database.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::ConversationId;
use crate::domain::intake::IntakeRecord;
use crate::ports::{RecordStore, RecordStoreError};

/// File-backed storage for intake records
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    base_path: PathBuf,
}

impl FileRecordStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileRecordStore::new("./data/intake");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// File path for a conversation's record.
    ///
    /// Conversation identifiers are channel-supplied strings; characters
    /// outside `[A-Za-z0-9_-]` are replaced so the key is a safe filename.
    fn record_path(&self, conversation_id: &ConversationId) -> PathBuf {
        let sanitized: String = conversation_id
            .as_str()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{}.yaml", sanitized))
    }

    async fn ensure_base_dir(&self) -> Result<(), RecordStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| RecordStoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn load(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<IntakeRecord>, RecordStoreError> {
        let path = self.record_path(conversation_id);
        if !path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&path)
            .await
            .map_err(|e| RecordStoreError::Io(e.to_string()))?;

        let record = serde_yaml::from_str(&yaml)
            .map_err(|e| RecordStoreError::DeserializationFailed(e.to_string()))?;

        Ok(Some(record))
    }

    async fn save(
        &self,
        conversation_id: &ConversationId,
        record: &IntakeRecord,
    ) -> Result<(), RecordStoreError> {
        self.ensure_base_dir().await?;

        let yaml = serde_yaml::to_string(record)
            .map_err(|e| RecordStoreError::SerializationFailed(e.to_string()))?;

        fs::write(self.record_path(conversation_id), yaml)
            .await
            .map_err(|e| RecordStoreError::Io(e.to_string()))?;

        Ok(())
    }
}
