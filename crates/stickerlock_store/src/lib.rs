//! State persistence for the stickerlock moderation bot.
//!
//! The whole [`ModerationState`] is read once at startup and rewritten in
//! full on every mutation; there is no incremental persistence.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod json;
mod memory;

use async_trait::async_trait;
use stickerlock_core::ModerationState;
use stickerlock_error::StorageError;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Persistence seam for the moderation state.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Reads and deserializes the persisted state.
    ///
    /// # Errors
    ///
    /// `Unavailable` if the backing resource cannot be read, `Corrupt` if
    /// deserialization fails. Both are fatal at startup.
    async fn load(&self) -> Result<ModerationState, StorageError>;

    /// Serializes and durably overwrites the persisted state.
    ///
    /// Must complete before any success reply derived from the mutation is
    /// sent, so a crash cannot lose an acknowledged change.
    ///
    /// # Errors
    ///
    /// `Unavailable` if the write fails.
    async fn save(&self, state: &ModerationState) -> Result<(), StorageError>;
}
