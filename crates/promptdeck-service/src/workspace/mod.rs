//! The management view's wiring: library, filters, two drag controllers,
//! and a typed render port.
//!
//! Gesture outcomes are resolved here. A failed commit is logged and the
//! next render from in-memory state corrects whatever the surface shows;
//! errors never reach the pointer-event caller.

use promptdeck_core::config::drag::DragConfig;
use promptdeck_core::types::{FolderId, Point, PromptId};
use promptdeck_entity::{LibraryState, Prompt};
use tracing::{debug, warn};

use crate::drag::{DragController, DragOutcome, DragSurface, PointerPress, PressDisposition};
use crate::library::Library;
use crate::store::FolderDeletion;
use crate::view::{self, FolderSummary, ViewQuery};

/// What the workspace asks its renderer to do.
pub trait RenderPort {
    /// Draw the folder tabs, sentinel first, highlighting `active`.
    fn render_folders(&mut self, folders: &[FolderSummary], active: &FolderId);

    /// Draw the visible prompts in order under `title`.
    fn render_prompts(&mut self, title: &str, prompts: &[&Prompt]);

    /// Open the editor for `prompt`.
    fn open_editor(&mut self, prompt: &Prompt);
}

/// Library plus view state and gesture routing for one view.
#[derive(Debug)]
pub struct Workspace<R> {
    library: Library,
    port: R,
    query: ViewQuery,
    folder_drag: DragController<FolderId>,
    prompt_drag: DragController<PromptId>,
}

impl<R: RenderPort> Workspace<R> {
    /// Create a workspace showing every prompt and render it once.
    pub fn new(library: Library, port: R, drag: &DragConfig) -> Self {
        let mut workspace = Self {
            library,
            port,
            query: ViewQuery::all(),
            folder_drag: DragController::list(drag),
            prompt_drag: DragController::grid(drag),
        };
        workspace.render();
        workspace
    }

    /// The library.
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// The render port.
    pub fn port(&self) -> &R {
        &self.port
    }

    /// Current folder and search filter.
    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    /// Ids of the prompts currently shown.
    pub fn visible_ids(&self) -> Vec<PromptId> {
        view::visible_ids(self.library.state(), &self.query)
    }

    /// Show `folder`; an unknown id shows every prompt.
    pub fn activate_folder(&mut self, folder: FolderId) {
        self.query.folder = match self.library.state().folder(&folder) {
            Some(_) => folder,
            None => FolderId::all(),
        };
        self.render();
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.render_prompts();
    }

    /// Run a library mutation, then re-render.
    pub fn apply<T>(&mut self, mutate: impl FnOnce(&mut Library) -> T) -> T {
        let result = mutate(&mut self.library);
        self.render();
        result
    }

    /// Delete a folder; if it was active, fall back to every prompt.
    pub fn delete_folder(&mut self, id: &FolderId) -> Option<FolderDeletion> {
        let deletion = self.library.delete_folder(id);
        if deletion.is_some() && &self.query.folder == id {
            self.query.folder = FolderId::all();
        }
        self.render();
        deletion
    }

    /// Adopt a state changed by another view.
    pub fn on_external_change(&mut self, state: LibraryState) {
        self.library.replace_state(state);
        if self.library.state().folder(&self.query.folder).is_none() {
            self.query.folder = FolderId::all();
        }
        self.render();
    }

    /// Pointer-down on a folder tab.
    pub fn folder_press<S: DragSurface<FolderId>>(
        &mut self,
        surface: &S,
        press: PointerPress<FolderId>,
    ) -> PressDisposition {
        self.folder_drag.press(surface, press)
    }

    /// Pointer-move while a folder tab may be dragged.
    pub fn folder_motion<S: DragSurface<FolderId>>(&mut self, surface: &mut S, pointer_id: i64, position: Point) {
        self.folder_drag.motion(surface, pointer_id, position);
    }

    /// Pointer-up for the folder list.
    pub fn folder_release<S: DragSurface<FolderId>>(
        &mut self,
        surface: &mut S,
        pointer_id: i64,
    ) -> Option<DragOutcome<FolderId>> {
        let outcome = self.folder_drag.release(surface, pointer_id)?;
        match &outcome {
            DragOutcome::Click(id) => {
                self.activate_folder(id.clone());
                return Some(outcome);
            }
            DragOutcome::Reorder { order, .. } => {
                if let Err(e) = self.library.reorder_folders(order) {
                    warn!(error = %e, "Folder reorder rejected");
                }
            }
            DragOutcome::Cancelled(id) => debug!(folder_id = %id, "Folder drag cancelled"),
        }
        self.render();
        Some(outcome)
    }

    /// Pointer-down on a prompt card.
    pub fn prompt_press<S: DragSurface<PromptId>>(
        &mut self,
        surface: &S,
        press: PointerPress<PromptId>,
    ) -> PressDisposition {
        self.prompt_drag.press(surface, press)
    }

    /// Pointer-move while a prompt card may be dragged.
    pub fn prompt_motion<S: DragSurface<PromptId>>(&mut self, surface: &mut S, pointer_id: i64, position: Point) {
        self.prompt_drag.motion(surface, pointer_id, position);
    }

    /// Pointer-up for the prompt grid.
    pub fn prompt_release<S: DragSurface<PromptId>>(
        &mut self,
        surface: &mut S,
        pointer_id: i64,
    ) -> Option<DragOutcome<PromptId>> {
        let outcome = self.prompt_drag.release(surface, pointer_id)?;
        match &outcome {
            DragOutcome::Click(id) => {
                if let Some(prompt) = self.library.state().prompt(id) {
                    self.port.open_editor(prompt);
                }
                return Some(outcome);
            }
            DragOutcome::Reorder { order, .. } => {
                let visible = self.visible_ids();
                if let Err(e) = self.library.reorder_prompts(&visible, order) {
                    warn!(error = %e, "Prompt reorder rejected");
                }
            }
            DragOutcome::Cancelled(id) => debug!(prompt_id = %id, "Prompt drag cancelled"),
        }
        self.render();
        Some(outcome)
    }

    /// Whether either controller is mid-drag.
    pub fn is_dragging(&self) -> bool {
        self.folder_drag.is_dragging() || self.prompt_drag.is_dragging()
    }

    /// Re-render everything from in-memory state.
    pub fn render(&mut self) {
        let folders = view::folder_summaries(self.library.state());
        self.port.render_folders(&folders, &self.query.folder);
        self.render_prompts();
    }

    fn render_prompts(&mut self) {
        let state = self.library.state();
        let title = view::view_title(state, &self.query.folder);
        let prompts = view::visible_prompts(state, &self.query);
        self.port.render_prompts(&title, &prompts);
    }
}
