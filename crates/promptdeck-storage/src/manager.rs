//! State store manager: builds the configured provider.

use std::sync::Arc;

use tracing::info;

use promptdeck_core::config::storage::{StorageConfig, StorageProviderKind};
use promptdeck_core::traits::StateStore;
use promptdeck_entity::LibraryState;

use crate::providers::{JsonFileStateStore, MemoryStateStore};

/// Shared handle to the active state store.
pub type SharedStateStore = Arc<dyn StateStore<LibraryState>>;

/// Holds the state store selected by configuration.
#[derive(Debug, Clone)]
pub struct StateStoreManager {
    store: SharedStateStore,
}

impl StateStoreManager {
    /// Wrap an already constructed store.
    pub fn new(store: SharedStateStore) -> Self {
        Self { store }
    }

    /// Build the provider named by `config.provider`.
    pub fn from_config(config: &StorageConfig) -> Self {
        let store: SharedStateStore = match config.provider {
            StorageProviderKind::File => {
                Arc::new(JsonFileStateStore::new(&config.path, &config.key))
            }
            StorageProviderKind::Memory => Arc::new(MemoryStateStore::new()),
        };
        info!(
            provider = store.provider_type(),
            path = %config.path,
            key = %config.key,
            "State store initialized"
        );
        Self { store }
    }

    /// The active store.
    pub fn store(&self) -> SharedStateStore {
        Arc::clone(&self.store)
    }

    /// Provider type name of the active store.
    pub fn provider_type(&self) -> &str {
        self.store.provider_type()
    }
}
