//! Record storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Which record store backend the binary wires up
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

/// Record storage configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    /// Storage backend selection
    #[serde(default)]
    pub backend: StorageBackend,

    /// Root directory for the file backend
    pub file_root: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.file_root.is_none() {
            return Err(ValidationError::MissingFileRoot);
        }
        Ok(())
    }
}
