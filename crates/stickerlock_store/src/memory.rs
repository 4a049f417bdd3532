//! In-memory store for tests.

use crate::StateStore;
use async_trait::async_trait;
use stickerlock_core::ModerationState;
use stickerlock_error::StorageError;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct MemoryInner {
    state: ModerationState,
    save_count: usize,
    fail_writes: bool,
}

/// In-memory store with a save counter and a switchable failure mode.
///
/// Used by engine tests to assert that read-only and denied paths never
/// write, and that a failed write is never acknowledged as success.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    /// Creates a store seeded with the given state.
    pub fn new(state: ModerationState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryInner {
                state,
                save_count: 0,
                fail_writes: false,
            })),
        }
    }

    /// The most recently saved state.
    pub fn saved_state(&self) -> ModerationState {
        self.inner.lock().unwrap().state.clone()
    }

    /// How many saves have succeeded.
    pub fn save_count(&self) -> usize {
        self.inner.lock().unwrap().save_count
    }

    /// Makes subsequent saves fail with a storage error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.lock().unwrap().fail_writes = fail;
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self) -> Result<ModerationState, StorageError> {
        Ok(self.inner.lock().unwrap().state.clone())
    }

    async fn save(&self, state: &ModerationState) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_writes {
            return Err(StorageError::unavailable("simulated write failure"));
        }
        inner.state = state.clone();
        inner.save_count += 1;
        Ok(())
    }
}
