//! Persistence backend configuration.

use serde::{Deserialize, Serialize};

/// Which persistence backend holds the library state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageProviderKind {
    /// A single JSON document on the local filesystem.
    File,
    /// Process memory only; nothing survives a restart.
    Memory,
}

impl Default for StorageProviderKind {
    fn default() -> Self {
        Self::File
    }
}

impl std::fmt::Display for StorageProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageProviderKind::File => write!(f, "file"),
            StorageProviderKind::Memory => write!(f, "memory"),
        }
    }
}

/// Persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend selection.
    #[serde(default)]
    pub provider: StorageProviderKind,
    /// Path of the JSON document (file provider only).
    #[serde(default = "default_path")]
    pub path: String,
    /// Key under which the state blob is stored inside the document.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProviderKind::default(),
            path: default_path(),
            key: default_key(),
        }
    }
}

fn default_path() -> String {
    "data/prompt-manager.json".to_string()
}

fn default_key() -> String {
    "promptManagerState".to_string()
}
