//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from an
//! optional TOML file plus `PROMPTDECK__*` environment variables. Each
//! sub-module represents a logical configuration section.

pub mod drag;
pub mod editor;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

use self::drag::DragConfig;
use self::editor::EditorConfig;
use self::logging::LoggingConfig;
use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Persistence backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Drag gesture tuning.
    #[serde(default)]
    pub drag: DragConfig,
    /// Prompt editor settings.
    #[serde(default)]
    pub editor: EditorConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional; environment variables prefixed with
    /// `PROMPTDECK` (sections separated by `__`) override file values.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PROMPTDECK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
