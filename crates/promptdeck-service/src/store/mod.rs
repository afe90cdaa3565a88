//! The entity store: single owner of folders and prompts.
//!
//! Every mutation is validated first and applied whole, so a rejected
//! call leaves the state untouched. Persistence is layered on top by
//! [`Library`](crate::library::Library).

mod folders;
mod prompts;

use std::sync::Arc;

use promptdeck_core::traits::{IdGenerator, Ordered};
use promptdeck_core::types::{FolderId, PromptId};
use promptdeck_entity::{Folder, LibraryState};

use crate::error::StoreError;
use crate::order::{self, Reconciled};

pub use folders::FolderDeletion;

/// Prefix of generated folder ids.
pub const FOLDER_ID_PREFIX: &str = "folder";

/// Prefix of generated prompt ids.
pub const PROMPT_ID_PREFIX: &str = "prompt";

/// Owns the library state and applies validated mutations to it.
#[derive(Debug, Clone)]
pub struct EntityStore {
    state: LibraryState,
    ids: Arc<dyn IdGenerator>,
}

impl EntityStore {
    /// Wrap `state` as-is. Call [`normalize`](Self::normalize) for data
    /// of unknown provenance.
    pub fn new(state: LibraryState, ids: Arc<dyn IdGenerator>) -> Self {
        Self { state, ids }
    }

    /// The current state.
    pub fn state(&self) -> &LibraryState {
        &self.state
    }

    /// Replace the whole state, e.g. after an external change.
    pub fn replace(&mut self, state: LibraryState) {
        self.state = state;
    }

    /// Consume the store, returning its state.
    pub fn into_state(self) -> LibraryState {
        self.state
    }

    /// Repair pass, safe to run on every load.
    ///
    /// Ensures the baseline folders exist, gives any entity without an
    /// `order` its collection position, then reindexes both collections.
    /// Returns whether anything changed; a second call always returns
    /// `false`.
    pub fn normalize(&mut self) -> bool {
        let before = self.state.clone();

        self.state.ensure_baseline_folders();

        let mut position = 0;
        for folder in self.state.folders.iter_mut().filter(|f| !f.is_sentinel()) {
            if folder.order.is_none() {
                folder.order = Some(position);
            }
            position += 1;
        }
        for (position, prompt) in self.state.prompts.iter_mut().enumerate() {
            if prompt.order.is_none() {
                prompt.order = Some(position as i64);
            }
        }

        self.reindex_folders();
        self.reindex_prompts();

        self.state != before
    }

    /// Apply a new order for the visible prompts `visible`.
    ///
    /// Prompts outside `visible` keep their slots in the global order.
    pub fn reorder_prompts(
        &mut self,
        visible: &[PromptId],
        new_order: &[PromptId],
    ) -> Result<Reconciled<PromptId>, StoreError> {
        order::sort_prompts(&mut self.state.prompts);
        Ok(order::reconcile(&mut self.state.prompts, visible, new_order)?)
    }

    /// Apply a new order for the real folders.
    ///
    /// Locked real folders are outside the scope and keep their slots; the
    /// sentinel is never reordered. `new_order` may include locked ids or
    /// the sentinel, which are skipped.
    pub fn reorder_folders(
        &mut self,
        new_order: &[FolderId],
    ) -> Result<Reconciled<FolderId>, StoreError> {
        let (sentinel, mut real): (Vec<Folder>, Vec<Folder>) =
            std::mem::take(&mut self.state.folders)
                .into_iter()
                .partition(Folder::is_sentinel);
        order::sort_folders(&mut real);

        let scope: Vec<FolderId> = real
            .iter()
            .filter(|f| !f.locked)
            .map(|f| f.id.clone())
            .collect();
        let requested: Vec<FolderId> = new_order
            .iter()
            .filter(|id| scope.contains(id))
            .cloned()
            .collect();

        let result = order::reconcile(&mut real, &scope, &requested);

        self.state.folders = sentinel;
        self.state.folders.extend(real);
        Ok(result?)
    }

    /// Real folders sorted and reindexed to `0..N-1`, sentinel first.
    fn reindex_folders(&mut self) -> bool {
        let folders = std::mem::take(&mut self.state.folders);
        let (mut sentinel, mut real): (Vec<Folder>, Vec<Folder>) =
            folders.into_iter().partition(Folder::is_sentinel);
        order::sort_folders(&mut real);
        let changed = order::reindex(&mut real);
        for folder in &mut sentinel {
            folder.set_order(promptdeck_entity::folder::model::SENTINEL_ORDER);
            folder.locked = true;
        }
        sentinel.truncate(1);
        self.state.folders = sentinel;
        self.state.folders.extend(real);
        changed
    }

    /// Prompts sorted and reindexed to `0..N-1`.
    fn reindex_prompts(&mut self) -> bool {
        order::sort_prompts(&mut self.state.prompts);
        order::reindex(&mut self.state.prompts)
    }

    fn next_id(&self, prefix: &str) -> String {
        self.ids.make_id(prefix)
    }
}
