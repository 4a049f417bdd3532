//! JSON file persistence.

use crate::StateStore;
use async_trait::async_trait;
use stickerlock_core::ModerationState;
use stickerlock_error::StorageError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File-backed store holding the whole state as one pretty-printed JSON
/// record, compatible with the legacy `data.json` layout.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<ModerationState, StorageError> {
        debug!("Reading state file");
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::unavailable(format!("Failed to read state file: {}", e)))?;

        let state: ModerationState = serde_json::from_str(&content)
            .map_err(|e| StorageError::corrupt(format!("Failed to parse state file: {}", e)))?;

        info!(
            admins = state.admins().len(),
            locks = state.user_locks().len(),
            "Loaded moderation state"
        );
        Ok(state)
    }

    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    async fn save(&self, state: &ModerationState) -> Result<(), StorageError> {
        debug!("Writing state file");
        let content = serde_json::to_string_pretty(state)
            .map_err(|e| StorageError::unavailable(format!("Failed to serialize state: {}", e)))?;

        // Write-then-rename so a crash mid-write cannot truncate the live file.
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, content)
            .await
            .map_err(|e| StorageError::unavailable(format!("Failed to write state file: {}", e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| {
                StorageError::unavailable(format!("Failed to replace state file: {}", e))
            })?;

        info!("Moderation state saved");
        Ok(())
    }
}
