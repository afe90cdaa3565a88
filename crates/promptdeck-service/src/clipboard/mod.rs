//! Copying prompt content to the clipboard.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use promptdeck_core::traits::Clipboard;
use promptdeck_core::types::PromptId;
use promptdeck_entity::LibraryState;

/// Result of a copy action, for transient UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyStatus {
    /// The content is on the clipboard.
    Copied,
    /// The clipboard rejected the write.
    Failed,
    /// The prompt no longer exists.
    Missing,
}

impl CopyStatus {
    /// Short label for the copy affordance.
    pub fn label(&self) -> &'static str {
        match self {
            CopyStatus::Copied => "Copied",
            CopyStatus::Failed => "Copy failed",
            CopyStatus::Missing => "Prompt not found",
        }
    }
}

/// Writes prompt content through a [`Clipboard`]. Failures are reported
/// once and never retried.
#[derive(Clone)]
pub struct CopyService {
    clipboard: Arc<dyn Clipboard>,
}

impl std::fmt::Debug for CopyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyService").finish_non_exhaustive()
    }
}

impl CopyService {
    /// Create a copy service.
    pub fn new(clipboard: Arc<dyn Clipboard>) -> Self {
        Self { clipboard }
    }

    /// Copy the content of prompt `id`.
    pub async fn copy(&self, state: &LibraryState, id: &PromptId) -> CopyStatus {
        let Some(prompt) = state.prompt(id) else {
            debug!(prompt_id = %id, "Copy requested for a missing prompt");
            return CopyStatus::Missing;
        };
        match self.clipboard.write_text(&prompt.content).await {
            Ok(()) => {
                debug!(prompt_id = %id, chars = prompt.content.chars().count(), "Prompt copied");
                CopyStatus::Copied
            }
            Err(e) => {
                warn!(prompt_id = %id, error = %e, "Clipboard write failed");
                CopyStatus::Failed
            }
        }
    }
}
