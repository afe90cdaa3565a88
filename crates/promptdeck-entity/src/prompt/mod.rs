//! Prompt entities.

pub mod model;

pub use model::{Prompt, PromptDraft};
