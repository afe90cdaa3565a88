//! Prompt entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use promptdeck_core::traits::Ordered;
use promptdeck_core::types::{FolderId, PromptId};

/// Title shown for prompts saved without one.
pub const UNTITLED: &str = "Untitled prompt";

/// A stored text snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    /// Unique prompt identifier.
    pub id: PromptId,
    /// Optional display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The text copied to the clipboard. Never empty once persisted.
    pub content: String,
    /// Owning folder; `None` means unfiled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<FolderId>,
    /// Global position across every prompt regardless of folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Milliseconds since the Unix epoch of the last create/edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Prompt {
    /// Title to display, falling back to [`UNTITLED`].
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED,
        }
    }

    /// `updated_at` with absent treated as the epoch.
    pub fn updated_at_millis(&self) -> i64 {
        self.updated_at.unwrap_or(0)
    }

    /// `updated_at` as a timestamp.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at.and_then(DateTime::from_timestamp_millis)
    }

    /// Whether the prompt belongs to `folder` (the sentinel matches all).
    pub fn is_in(&self, folder: &FolderId) -> bool {
        folder.is_all() || self.folder_id.as_ref() == Some(folder)
    }

    /// Case-insensitive substring match against title and content.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .title
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(needle))
            || self.content.to_lowercase().contains(needle)
    }
}

impl Ordered for Prompt {
    type Id = PromptId;

    fn id(&self) -> &PromptId {
        &self.id
    }

    fn order(&self) -> Option<i64> {
        self.order
    }

    fn set_order(&mut self, order: i64) {
        self.order = Some(order);
    }
}

/// User-supplied fields for creating or editing a prompt.
///
/// `folder_id` is raw form input: an empty string or the sentinel id both
/// mean "unfiled".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptDraft {
    /// Title field.
    #[serde(default)]
    pub title: String,
    /// Content field.
    #[serde(default)]
    pub content: String,
    /// Folder selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

impl PromptDraft {
    /// Create a draft.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        folder_id: Option<impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            folder_id: folder_id.map(Into::into),
        }
    }

    /// Capture the editable fields of an existing prompt.
    pub fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            title: prompt.title.clone().unwrap_or_default(),
            content: prompt.content.clone(),
            folder_id: prompt.folder_id.as_ref().map(|f| f.to_string()),
        }
    }

    /// The draft with every field trimmed and an empty folder cleared.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            folder_id: self
                .folder_id
                .as_deref()
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string),
        }
    }

    /// Whether the trimmed content is non-empty.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}
