//! One open prompt editor.

use tracing::debug;

use promptdeck_core::types::{FolderId, PromptId};
use promptdeck_entity::{Prompt, PromptDraft};

use super::autosave::Autosave;
use crate::error::StoreError;
use crate::library::Library;

/// State of the prompt editor between open and close.
///
/// `snapshot` is the trimmed draft as of the last open or save; the
/// draft is dirty when its trimmed form differs from it.
#[derive(Debug)]
pub struct EditSession {
    prompt_id: Option<PromptId>,
    snapshot: PromptDraft,
    draft: PromptDraft,
    autosave: Option<Autosave>,
}

impl EditSession {
    /// Editor for a new prompt, preselecting `folder` unless it is the
    /// sentinel.
    pub fn create(folder: &FolderId) -> Self {
        let folder_id = (!folder.is_all()).then(|| folder.to_string());
        let draft = PromptDraft {
            folder_id,
            ..PromptDraft::default()
        };
        Self {
            prompt_id: None,
            snapshot: draft.trimmed(),
            draft,
            autosave: None,
        }
    }

    /// Editor for an existing prompt.
    pub fn open(prompt: &Prompt) -> Self {
        let draft = PromptDraft::from_prompt(prompt);
        Self {
            prompt_id: Some(prompt.id.clone()),
            snapshot: draft.trimmed(),
            draft,
            autosave: None,
        }
    }

    /// Attach a debounced autosave timer. Edits that leave the draft
    /// saveable restart it.
    pub fn with_autosave(mut self, autosave: Autosave) -> Self {
        self.autosave = Some(autosave);
        self
    }

    /// The prompt being edited; `None` until a new prompt is first saved.
    pub fn prompt_id(&self) -> Option<&PromptId> {
        self.prompt_id.as_ref()
    }

    /// The current draft.
    pub fn draft(&self) -> &PromptDraft {
        &self.draft
    }

    /// Set the title field.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
        self.touched();
    }

    /// Set the content field.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
        self.touched();
    }

    /// Set the folder selection (`None`, empty, or the sentinel unfile).
    pub fn set_folder(&mut self, folder: Option<impl Into<String>>) {
        self.draft.folder_id = folder.map(Into::into);
        self.touched();
    }

    /// Whether the draft differs from the last saved snapshot.
    pub fn is_dirty(&self) -> bool {
        self.draft.trimmed() != self.snapshot
    }

    /// The save affordance rule: something changed and content is present.
    pub fn can_save(&self) -> bool {
        self.is_dirty() && self.draft.has_content()
    }

    /// Commit the draft through `library`.
    ///
    /// Returns `Ok(None)` when there is nothing to save. A new prompt is
    /// created on its first save and updated afterwards.
    pub fn save(&mut self, library: &mut Library) -> Result<Option<Prompt>, StoreError> {
        if let Some(autosave) = &mut self.autosave {
            autosave.cancel();
        }
        if !self.is_dirty() {
            return Ok(None);
        }

        let prompt = match &self.prompt_id {
            Some(id) => library.update_prompt(id, &self.draft)?,
            None => library.create_prompt(&self.draft)?,
        };
        self.prompt_id = Some(prompt.id.clone());
        self.snapshot = self.draft.trimmed();
        debug!(prompt_id = %prompt.id, "Editor saved");
        Ok(Some(prompt))
    }

    /// Close the editor, dropping any pending autosave.
    pub fn close(mut self) {
        if let Some(autosave) = &mut self.autosave {
            autosave.cancel();
        }
    }

    fn touched(&mut self) {
        let saveable = self.can_save();
        if let Some(autosave) = &mut self.autosave {
            if saveable {
                autosave.schedule(self.draft.clone());
            } else {
                autosave.cancel();
            }
        }
    }
}
