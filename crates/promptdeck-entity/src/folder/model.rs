//! Folder entity model.

use serde::{Deserialize, Serialize};

use promptdeck_core::traits::Ordered;
use promptdeck_core::types::FolderId;

/// Display name of the "all items" pseudo-folder.
pub const ALL_FOLDER_NAME: &str = "All Prompts";

/// Display name of the folder seeded on first run.
pub const DEFAULT_FOLDER_NAME: &str = "My Prompts";

/// Order value of the sentinel, ahead of every real folder.
pub const SENTINEL_ORDER: i64 = -1;

/// A named group of prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Locked folders cannot be deleted, renamed, or reordered.
    #[serde(default)]
    pub locked: bool,
    /// Display position among real folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Folder {
    /// Create an unlocked folder.
    pub fn new(id: FolderId, name: impl Into<String>, order: i64) -> Self {
        Self {
            id,
            name: name.into(),
            locked: false,
            order: Some(order),
        }
    }

    /// The "all items" pseudo-folder.
    pub fn sentinel() -> Self {
        Self {
            id: FolderId::all(),
            name: ALL_FOLDER_NAME.to_string(),
            locked: true,
            order: Some(SENTINEL_ORDER),
        }
    }

    /// The folder seeded on first run.
    pub fn default_folder() -> Self {
        Self::new(FolderId::default_folder(), DEFAULT_FOLDER_NAME, 0)
    }

    /// Whether this is the "all items" pseudo-folder.
    pub fn is_sentinel(&self) -> bool {
        self.id.is_all()
    }

    /// Whether `name` collides with this folder's name, ignoring case.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl Ordered for Folder {
    type Id = FolderId;

    fn id(&self) -> &FolderId {
        &self.id
    }

    fn order(&self) -> Option<i64> {
        self.order
    }

    fn set_order(&mut self, order: i64) {
        self.order = Some(order);
    }
}
