//! Derived, read-only views of the library state.
//!
//! Nothing here mutates; renderers and the reorder path both call into
//! these functions so that "what is visible" has one definition.

use serde::Serialize;

use promptdeck_core::types::{FolderId, PromptId};
use promptdeck_entity::folder::model::ALL_FOLDER_NAME;
use promptdeck_entity::{Folder, LibraryState, Prompt};

use crate::order::{folder_cmp, prompt_cmp};

/// Active folder plus search text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewQuery {
    /// Folder filter; the sentinel shows every prompt.
    pub folder: FolderId,
    /// Raw search text as typed.
    pub search: String,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self::all()
    }
}

impl ViewQuery {
    /// Every prompt, no search.
    pub fn all() -> Self {
        Self {
            folder: FolderId::all(),
            search: String::new(),
        }
    }

    /// Prompts of one folder.
    pub fn in_folder(folder: FolderId) -> Self {
        Self {
            folder,
            search: String::new(),
        }
    }

    /// Replace the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// The search text trimmed and lower-cased.
    pub fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

/// Visible prompts in display order.
pub fn visible_prompts<'a>(state: &'a LibraryState, query: &ViewQuery) -> Vec<&'a Prompt> {
    let needle = query.needle();
    let mut prompts: Vec<&Prompt> = state
        .prompts
        .iter()
        .filter(|p| p.is_in(&query.folder) && p.matches_query(&needle))
        .collect();
    prompts.sort_by(|a, b| prompt_cmp(a, b));
    prompts
}

/// Ids of [`visible_prompts`], the scope of a prompt reorder.
pub fn visible_ids(state: &LibraryState, query: &ViewQuery) -> Vec<PromptId> {
    visible_prompts(state, query)
        .into_iter()
        .map(|p| p.id.clone())
        .collect()
}

/// Real folders in display order.
pub fn ordered_folders(state: &LibraryState) -> Vec<&Folder> {
    let mut folders: Vec<&Folder> = state.real_folders().collect();
    folders.sort_by(|a, b| folder_cmp(a, b));
    folders
}

/// A folder tab with its prompt count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderSummary {
    /// Folder id.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Whether the folder is locked.
    pub locked: bool,
    /// Prompts filed in the folder; every prompt for the sentinel.
    pub count: usize,
}

impl FolderSummary {
    fn of(state: &LibraryState, folder: &Folder) -> Self {
        Self {
            id: folder.id.clone(),
            name: folder.name.clone(),
            locked: folder.locked,
            count: state.prompt_count(&folder.id),
        }
    }
}

/// The sentinel followed by every real folder in order, with counts.
pub fn folder_summaries(state: &LibraryState) -> Vec<FolderSummary> {
    let sentinel = state
        .folders
        .iter()
        .find(|f| f.is_sentinel())
        .cloned()
        .unwrap_or_else(Folder::sentinel);

    std::iter::once(FolderSummary::of(state, &sentinel))
        .chain(ordered_folders(state).into_iter().map(|f| FolderSummary::of(state, f)))
        .collect()
}

/// Heading for the prompt list: the folder name upper-cased.
///
/// Falls back to the sentinel's name for the sentinel or an unknown id.
pub fn view_title(state: &LibraryState, folder: &FolderId) -> String {
    state
        .folder(folder)
        .filter(|f| !f.is_sentinel())
        .map_or(ALL_FOLDER_NAME, |f| f.name.as_str())
        .to_uppercase()
}
