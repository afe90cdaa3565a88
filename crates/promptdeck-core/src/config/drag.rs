//! Drag gesture configuration.

use serde::{Deserialize, Serialize};

/// Tuning shared by the folder-list and prompt-grid drag controllers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragConfig {
    /// Per-axis pointer displacement (px) that turns a press into a drag.
    /// Anything below it on both axes is a click.
    #[serde(default = "default_threshold")]
    pub threshold_px: f64,
    /// Height fraction of the top and bottom bands of a grid cell.
    #[serde(default = "default_band_ratio")]
    pub grid_band_ratio: f64,
    /// Duration handed to the renderer for FLIP animations.
    #[serde(default = "default_flip_duration")]
    pub flip_duration_ms: u64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold_px: default_threshold(),
            grid_band_ratio: default_band_ratio(),
            flip_duration_ms: default_flip_duration(),
        }
    }
}

fn default_threshold() -> f64 {
    5.0
}

fn default_band_ratio() -> f64 {
    0.25
}

fn default_flip_duration() -> u64 {
    200
}
