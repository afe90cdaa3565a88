//! Folder-related library events.

use serde::{Deserialize, Serialize};

use crate::types::{FolderId, PromptId};

/// Events related to folder mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FolderEvent {
    /// A folder was created.
    Created {
        /// The folder ID.
        folder_id: FolderId,
        /// The folder name.
        name: String,
    },
    /// A folder was renamed.
    Renamed {
        /// The folder ID.
        folder_id: FolderId,
        /// The new name.
        name: String,
    },
    /// A folder was deleted and its prompts were detached.
    Deleted {
        /// The folder ID.
        folder_id: FolderId,
        /// Prompts whose folder reference was cleared.
        detached: Vec<PromptId>,
    },
    /// Real folders were given a new order.
    Reordered {
        /// Folder ids in their new order.
        order: Vec<FolderId>,
    },
}
