//! Prompt editing: dirty tracking, the save rule, and debounced autosave.

pub mod autosave;
pub mod session;

pub use autosave::Autosave;
pub use session::EditSession;
