//! Prompt-related library events.

use serde::{Deserialize, Serialize};

use crate::types::PromptId;

/// Events related to prompt mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PromptEvent {
    /// A prompt was created.
    Created {
        /// The prompt ID.
        prompt_id: PromptId,
    },
    /// A prompt's title, content, or folder changed.
    Updated {
        /// The prompt ID.
        prompt_id: PromptId,
    },
    /// A prompt was deleted.
    Deleted {
        /// The prompt ID.
        prompt_id: PromptId,
    },
    /// The global prompt order changed.
    Reordered {
        /// Visible prompt ids in the order the user committed.
        visible: Vec<PromptId>,
    },
}
