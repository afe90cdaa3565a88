//! JSON file state store.
//!
//! The file holds one JSON object whose entries are storage keys, the same
//! layout a browser extension's local storage area uses. Only the
//! configured key is read or replaced; sibling keys are preserved.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::debug;

use promptdeck_core::error::{AppError, ErrorKind};
use promptdeck_core::result::AppResult;
use promptdeck_core::traits::StateStore;
use promptdeck_entity::LibraryState;

/// State store backed by a JSON document on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileStateStore {
    /// Location of the document.
    path: PathBuf,
    /// Key of the state entry inside the document.
    key: String,
}

impl JsonFileStateStore {
    /// Create a store for `key` inside the document at `path`.
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. A missing file is an empty document.
    async fn read_document(&self) -> AppResult<Map<String, Value>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read state file: {}", self.path.display()),
                    e,
                ));
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Map::new());
        }

        match serde_json::from_slice::<Value>(&raw)? {
            Value::Object(map) => Ok(map),
            _ => Err(AppError::new(
                ErrorKind::Serialization,
                format!("State file is not a JSON object: {}", self.path.display()),
            )),
        }
    }

    /// Create the parent directory of the document if needed.
    async fn ensure_parent(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl StateStore<LibraryState> for JsonFileStateStore {
    fn provider_type(&self) -> &str {
        "file"
    }

    async fn get(&self) -> AppResult<Option<LibraryState>> {
        let mut document = self.read_document().await?;
        match document.remove(&self.key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    async fn set(&self, state: &LibraryState) -> AppResult<()> {
        let mut document = self.read_document().await?;
        document.insert(self.key.clone(), serde_json::to_value(state)?);

        self.ensure_parent().await?;
        let bytes = serde_json::to_vec_pretty(&Value::Object(document))?;

        // Write beside the target then rename so readers never see a torn file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write state file: {}", tmp.display()),
                e,
            )
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace state file: {}", self.path.display()),
                e,
            )
        })?;

        debug!(
            path = %self.path.display(),
            folders = state.folders.len(),
            prompts = state.prompts.len(),
            bytes = bytes.len(),
            "Wrote state"
        );
        Ok(())
    }
}
