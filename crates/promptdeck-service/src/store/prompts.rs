//! Prompt operations.

use promptdeck_core::types::{FolderId, PromptId};
use promptdeck_entity::{Prompt, PromptDraft};

use super::{EntityStore, PROMPT_ID_PREFIX};
use crate::error::StoreError;

impl EntityStore {
    /// Create a prompt placed after every existing prompt.
    ///
    /// `now` is the creation time in epoch milliseconds.
    pub fn create_prompt(&mut self, draft: &PromptDraft, now: i64) -> Result<Prompt, StoreError> {
        let draft = draft.trimmed();
        if draft.content.is_empty() {
            return Err(StoreError::EmptyContent);
        }
        let folder_id = self.resolve_folder(draft.folder_id.as_deref())?;

        let prompt = Prompt {
            id: PromptId::new(self.next_id(PROMPT_ID_PREFIX)),
            title: Some(draft.title).filter(|t| !t.is_empty()),
            content: draft.content,
            folder_id,
            order: Some(self.state.prompts.len() as i64),
            updated_at: Some(now),
        };
        self.state.prompts.push(prompt.clone());
        Ok(prompt)
    }

    /// Replace the editable fields of a prompt, keeping its order.
    pub fn update_prompt(
        &mut self,
        id: &PromptId,
        draft: &PromptDraft,
        now: i64,
    ) -> Result<Prompt, StoreError> {
        let draft = draft.trimmed();
        if draft.content.is_empty() {
            return Err(StoreError::EmptyContent);
        }
        let folder_id = self.resolve_folder(draft.folder_id.as_deref())?;

        let prompt = self
            .state
            .prompts
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        prompt.title = Some(draft.title).filter(|t| !t.is_empty());
        prompt.content = draft.content;
        prompt.folder_id = folder_id;
        prompt.updated_at = Some(now);
        Ok(prompt.clone())
    }

    /// Delete a prompt and close the gap in the global order.
    ///
    /// Returns `None` when the prompt is already gone.
    pub fn delete_prompt(&mut self, id: &PromptId) -> Option<Prompt> {
        let index = self.state.prompts.iter().position(|p| &p.id == id)?;
        let prompt = self.state.prompts.remove(index);
        self.reindex_prompts();
        Some(prompt)
    }

    /// Map a raw folder selection to a real folder id.
    ///
    /// Empty input and the sentinel mean unfiled.
    fn resolve_folder(&self, raw: Option<&str>) -> Result<Option<FolderId>, StoreError> {
        let Some(raw) = raw.filter(|r| !r.is_empty()) else {
            return Ok(None);
        };
        let id = FolderId::new(raw);
        if id.is_all() {
            return Ok(None);
        }
        match self.state.folder(&id) {
            Some(folder) if !folder.is_sentinel() => Ok(Some(id)),
            _ => Err(StoreError::UnknownFolder { id: raw.to_string() }),
        }
    }
}
