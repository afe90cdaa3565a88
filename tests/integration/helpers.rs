//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use promptdeck_core::config::drag::DragConfig;
use promptdeck_core::traits::SequentialIdGenerator;
use promptdeck_core::types::{FolderId, PromptId, Size};
use promptdeck_entity::{LibraryState, Prompt, PromptDraft};
use promptdeck_service::drag::FlowSurface;
use promptdeck_service::view::FolderSummary;
use promptdeck_service::{Library, RenderPort, Workspace};
use promptdeck_storage::MemoryStateStore;

/// Card size used by every grid surface.
pub const CARD: Size = Size {
    width: 200.0,
    height: 120.0,
};

/// Folder tab size used by every list surface.
pub const TAB: Size = Size {
    width: 180.0,
    height: 36.0,
};

/// Test application context
pub struct TestApp {
    /// Backing store shared with every library loaded from it
    pub store: MemoryStateStore,
}

impl TestApp {
    /// A context with nothing stored yet
    pub fn new() -> Self {
        Self {
            store: MemoryStateStore::new(),
        }
    }

    /// A context whose store already holds `state`
    pub fn with_state(state: LibraryState) -> Self {
        Self {
            store: MemoryStateStore::with_state(state),
        }
    }

    /// Load a library with deterministic ids
    pub async fn library(&self) -> Library {
        Library::load(
            Arc::new(self.store.clone()),
            Arc::new(SequentialIdGenerator::new()),
        )
        .await
        .expect("Failed to load library")
    }

    /// Load a workspace rendering into a [`RecordingPort`]
    pub async fn workspace(&self) -> Workspace<RecordingPort> {
        Workspace::new(self.library().await, RecordingPort::default(), &DragConfig::default())
    }

    /// What storage holds right now
    pub async fn stored(&self) -> LibraryState {
        self.store.snapshot().await.expect("Nothing persisted")
    }
}

/// Create one unfiled prompt per content string, in order
pub fn add_prompts(library: &mut Library, contents: &[&str]) -> Vec<PromptId> {
    contents
        .iter()
        .map(|content| {
            library
                .create_prompt(&PromptDraft::new("", *content, None::<String>))
                .expect("Failed to create prompt")
                .id
        })
        .collect()
}

/// Content of each prompt in `prompts`, in order
pub fn contents(prompts: &[&Prompt]) -> Vec<String> {
    prompts.iter().map(|p| p.content.clone()).collect()
}

/// A three-column grid of prompt cards
pub fn card_grid(ids: &[PromptId]) -> FlowSurface<PromptId> {
    FlowSurface::grid(ids.to_vec(), CARD, 3, 8.0)
}

/// A vertical list of folder tabs
pub fn tab_list(ids: &[FolderId]) -> FlowSurface<FolderId> {
    FlowSurface::list(ids.to_vec(), TAB)
}

/// Render port that records the last frame
#[derive(Debug, Default)]
pub struct RecordingPort {
    /// Folder tabs, sentinel first
    pub folders: Vec<FolderId>,
    /// Highlighted tab
    pub active: Option<FolderId>,
    /// Prompt list heading
    pub title: String,
    /// Visible prompts in order
    pub prompts: Vec<PromptId>,
    /// Every prompt the editor was opened for
    pub opened: Vec<PromptId>,
    /// Number of prompt renders
    pub frames: usize,
}

impl RenderPort for RecordingPort {
    fn render_folders(&mut self, folders: &[FolderSummary], active: &FolderId) {
        self.folders = folders.iter().map(|f| f.id.clone()).collect();
        self.active = Some(active.clone());
    }

    fn render_prompts(&mut self, title: &str, prompts: &[&Prompt]) {
        self.title = title.to_string();
        self.prompts = prompts.iter().map(|p| p.id.clone()).collect();
        self.frames += 1;
    }

    fn open_editor(&mut self, prompt: &Prompt) {
        self.opened.push(prompt.id.clone());
    }
}
