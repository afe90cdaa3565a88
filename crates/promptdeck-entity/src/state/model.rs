//! The single persisted state document.

use serde::{Deserialize, Serialize};

use promptdeck_core::types::{FolderId, PromptId};

use crate::folder::Folder;
use crate::prompt::Prompt;

/// Every folder and prompt in the library.
///
/// This is the value stored under the configured state key. Missing
/// collections deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryState {
    /// All folders, including the sentinel.
    #[serde(default)]
    pub folders: Vec<Folder>,
    /// All prompts.
    #[serde(default)]
    pub prompts: Vec<Prompt>,
}

impl LibraryState {
    /// The state used when storage holds nothing: the sentinel plus one
    /// default folder, and no prompts.
    pub fn seed() -> Self {
        Self {
            folders: vec![Folder::sentinel(), Folder::default_folder()],
            prompts: Vec::new(),
        }
    }

    /// Add the sentinel if absent and the default folder if there is no
    /// real folder. Returns whether anything was added.
    pub fn ensure_baseline_folders(&mut self) -> bool {
        let mut changed = false;
        if !self.folders.iter().any(Folder::is_sentinel) {
            self.folders.insert(0, Folder::sentinel());
            changed = true;
        }
        if !self.folders.iter().any(|f| !f.is_sentinel()) {
            let order = self.folders.iter().filter_map(|f| f.order).max().unwrap_or(-1) + 1;
            let mut folder = Folder::default_folder();
            folder.order = Some(order.max(0));
            self.folders.push(folder);
            changed = true;
        }
        changed
    }

    /// Real folders, excluding the sentinel.
    pub fn real_folders(&self) -> impl Iterator<Item = &Folder> {
        self.folders.iter().filter(|f| !f.is_sentinel())
    }

    /// Look up a folder by id.
    pub fn folder(&self, id: &FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| &f.id == id)
    }

    /// Look up a prompt by id.
    pub fn prompt(&self, id: &PromptId) -> Option<&Prompt> {
        self.prompts.iter().find(|p| &p.id == id)
    }

    /// Number of prompts filed in `folder`; the sentinel counts all.
    pub fn prompt_count(&self, folder: &FolderId) -> usize {
        self.prompts.iter().filter(|p| p.is_in(folder)).count()
    }
}
