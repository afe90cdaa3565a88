//! The library: entity store plus persistence and change events.
//!
//! Every committed mutation updates memory first, queues a full snapshot
//! on the [`StateWriter`], and broadcasts a [`LibraryEvent`]. Readers
//! always derive from the in-memory state, never from storage.

pub mod writer;

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use promptdeck_core::events::{FolderEvent, LibraryEvent, PromptEvent};
use promptdeck_core::result::AppResult;
use promptdeck_core::traits::{IdGenerator, StateStore};
use promptdeck_core::types::{FolderId, PromptId};
use promptdeck_entity::{Folder, LibraryState, Prompt, PromptDraft};

use crate::error::StoreError;
use crate::store::{EntityStore, FolderDeletion};

pub use writer::StateWriter;

/// Capacity of the change-event channel.
const EVENT_BUFFER: usize = 64;

/// Entity store wired to persistence and change notification.
#[derive(Debug)]
pub struct Library {
    store: EntityStore,
    writer: StateWriter,
    events: broadcast::Sender<LibraryEvent>,
}

impl Library {
    /// Load the library from `state_store`.
    ///
    /// Nothing stored: seed the default state and persist it. Otherwise
    /// repair the stored state and persist only if the repair changed it.
    /// Must run inside a tokio runtime.
    pub async fn load(
        state_store: Arc<dyn StateStore<LibraryState>>,
        ids: Arc<dyn IdGenerator>,
    ) -> AppResult<Self> {
        let stored = state_store.get().await?;
        let writer = StateWriter::spawn(Arc::clone(&state_store));

        let (store, dirty) = match stored {
            None => {
                info!(provider = state_store.provider_type(), "No stored state; seeding defaults");
                (EntityStore::new(LibraryState::seed(), ids), true)
            }
            Some(state) => {
                let mut store = EntityStore::new(state, ids);
                let repaired = store.normalize();
                if repaired {
                    info!("Stored state repaired during load");
                }
                (store, repaired)
            }
        };

        if dirty {
            writer.persist(store.state().clone());
        }
        debug!(
            folders = store.state().folders.len(),
            prompts = store.state().prompts.len(),
            "Library loaded"
        );

        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Ok(Self {
            store,
            writer,
            events,
        })
    }

    /// The in-memory state.
    pub fn state(&self) -> &LibraryState {
        self.store.state()
    }

    /// Subscribe to change events.
    pub fn subscribe(&self) -> broadcast::Receiver<LibraryEvent> {
        self.events.subscribe()
    }

    /// Wait for every queued write to reach storage.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    /// Create a folder.
    pub fn create_folder(&mut self, name: &str) -> Result<Folder, StoreError> {
        let folder = self.store.create_folder(name)?;
        info!(folder_id = %folder.id, name = %folder.name, "Folder created");
        self.commit(FolderEvent::Created {
            folder_id: folder.id.clone(),
            name: folder.name.clone(),
        });
        Ok(folder)
    }

    /// Rename a folder.
    pub fn rename_folder(&mut self, id: &FolderId, name: &str) -> Result<Folder, StoreError> {
        let folder = self.store.rename_folder(id, name)?;
        info!(folder_id = %folder.id, name = %folder.name, "Folder renamed");
        self.commit(FolderEvent::Renamed {
            folder_id: folder.id.clone(),
            name: folder.name.clone(),
        });
        Ok(folder)
    }

    /// Delete a folder, unfiling its prompts. `None` if nothing was deleted.
    pub fn delete_folder(&mut self, id: &FolderId) -> Option<FolderDeletion> {
        let Some(deletion) = self.store.delete_folder(id) else {
            debug!(folder_id = %id, "Folder delete ignored");
            return None;
        };
        info!(
            folder_id = %id,
            detached = deletion.detached.len(),
            "Folder deleted"
        );
        self.commit(FolderEvent::Deleted {
            folder_id: id.clone(),
            detached: deletion.detached.clone(),
        });
        Some(deletion)
    }

    /// Apply a new folder order.
    pub fn reorder_folders(&mut self, new_order: &[FolderId]) -> Result<(), StoreError> {
        let result = self.store.reorder_folders(new_order)?;
        if !result.changed {
            return Ok(());
        }
        info!(dropped = result.dropped.len(), "Folders reordered");
        let order = crate::view::ordered_folders(self.state())
            .into_iter()
            .map(|f| f.id.clone())
            .collect();
        self.commit(FolderEvent::Reordered { order });
        Ok(())
    }

    /// Create a prompt.
    pub fn create_prompt(&mut self, draft: &PromptDraft) -> Result<Prompt, StoreError> {
        let prompt = self.store.create_prompt(draft, now_millis())?;
        info!(prompt_id = %prompt.id, folder_id = ?prompt.folder_id, "Prompt created");
        self.commit(PromptEvent::Created {
            prompt_id: prompt.id.clone(),
        });
        Ok(prompt)
    }

    /// Update a prompt's editable fields.
    pub fn update_prompt(&mut self, id: &PromptId, draft: &PromptDraft) -> Result<Prompt, StoreError> {
        let prompt = self.store.update_prompt(id, draft, now_millis())?;
        info!(prompt_id = %prompt.id, "Prompt updated");
        self.commit(PromptEvent::Updated {
            prompt_id: prompt.id.clone(),
        });
        Ok(prompt)
    }

    /// Delete a prompt. `None` if it was already gone.
    pub fn delete_prompt(&mut self, id: &PromptId) -> Option<Prompt> {
        let Some(prompt) = self.store.delete_prompt(id) else {
            debug!(prompt_id = %id, "Prompt delete ignored");
            return None;
        };
        info!(prompt_id = %id, "Prompt deleted");
        self.commit(PromptEvent::Deleted {
            prompt_id: id.clone(),
        });
        Some(prompt)
    }

    /// Apply a new order for the visible prompts `visible`.
    pub fn reorder_prompts(&mut self, visible: &[PromptId], new_order: &[PromptId]) -> Result<(), StoreError> {
        let result = self.store.reorder_prompts(visible, new_order)?;
        if !result.changed {
            return Ok(());
        }
        info!(
            visible = visible.len(),
            dropped = result.dropped.len(),
            "Prompts reordered"
        );
        let visible = self.reordered_visible(visible);
        self.commit(PromptEvent::Reordered { visible });
        Ok(())
    }

    /// Adopt a state changed elsewhere (another view wrote storage).
    ///
    /// The state is repaired first; it is written back only if the repair
    /// changed it.
    pub fn replace_state(&mut self, state: LibraryState) {
        self.store.replace(state);
        let repaired = self.store.normalize();
        if repaired {
            warn!("Externally replaced state needed repair");
            self.writer.persist(self.store.state().clone());
        }
        info!(prompts = self.state().prompts.len(), "Library state replaced");
        let _ = self.events.send(LibraryEvent::state_replaced());
    }

    /// `visible` in its committed order, without ids the store no longer has.
    fn reordered_visible(&self, visible: &[PromptId]) -> Vec<PromptId> {
        let mut prompts: Vec<&Prompt> = self
            .state()
            .prompts
            .iter()
            .filter(|p| visible.contains(&p.id))
            .collect();
        prompts.sort_by(|a, b| crate::order::prompt_cmp(a, b));
        prompts.into_iter().map(|p| p.id.clone()).collect()
    }

    fn commit(&self, event: impl Into<LibraryEvent>) {
        self.writer.persist(self.store.state().clone());
        // No subscribers is fine.
        let _ = self.events.send(event.into());
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
