//! # promptdeck-entity
//!
//! Entity models for PromptDeck. Every struct here is part of the single
//! persisted state document (`{ folders, prompts }`). Field names follow
//! the document's camelCase wire shape so stored data round-trips as-is.

pub mod folder;
pub mod prompt;
pub mod state;

pub use folder::Folder;
pub use prompt::{Prompt, PromptDraft};
pub use state::LibraryState;
