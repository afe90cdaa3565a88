//! In-memory state store.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use promptdeck_core::error::AppError;
use promptdeck_core::result::AppResult;
use promptdeck_core::traits::StateStore;
use promptdeck_entity::LibraryState;

/// State store that keeps the document in process memory.
///
/// Clones share the same slot, so a test can keep a handle while the
/// library owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    state: Arc<RwLock<Option<LibraryState>>>,
    writes: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `state`.
    pub fn with_state(state: LibraryState) -> Self {
        Self {
            state: Arc::new(RwLock::new(Some(state))),
            ..Self::default()
        }
    }

    /// Number of successful `set` calls.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every subsequent `set` fail with a storage error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The currently stored state.
    pub async fn snapshot(&self) -> Option<LibraryState> {
        self.state.read().await.clone()
    }
}

#[async_trait]
impl StateStore<LibraryState> for MemoryStateStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn get(&self) -> AppResult<Option<LibraryState>> {
        Ok(self.state.read().await.clone())
    }

    async fn set(&self, state: &LibraryState) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::storage("Memory store is rejecting writes"));
        }
        *self.state.write().await = Some(state.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
