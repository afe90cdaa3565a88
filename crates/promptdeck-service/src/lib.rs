//! # promptdeck-service
//!
//! Library logic for PromptDeck. The [`EntityStore`] owns folders and
//! prompts; the [`order`] module merges a reordered visible subset back
//! into the global order; [`drag`] turns pointer input into those
//! reorders; [`view`] derives what is visible. [`Library`] adds
//! persistence and change events on top of the store, and [`Workspace`]
//! wires everything to a render port.

pub mod clipboard;
pub mod drag;
pub mod editor;
pub mod error;
pub mod library;
pub mod order;
pub mod store;
pub mod view;
pub mod workspace;

pub use clipboard::{CopyService, CopyStatus};
pub use drag::{DragController, DragOutcome, DragSurface, Layout};
pub use editor::{Autosave, EditSession};
pub use error::StoreError;
pub use library::Library;
pub use store::EntityStore;
pub use view::ViewQuery;
pub use workspace::{RenderPort, Workspace};
