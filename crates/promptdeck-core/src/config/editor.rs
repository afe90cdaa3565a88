//! Prompt editor configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Prompt editor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Quiet period after the last edit before the draft is autosaved.
    #[serde(default = "default_debounce")]
    pub autosave_debounce_ms: u64,
}

impl EditorConfig {
    /// The debounce window as a [`Duration`].
    pub fn autosave_debounce(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_debounce_ms: default_debounce(),
        }
    }
}

fn default_debounce() -> u64 {
    800
}
