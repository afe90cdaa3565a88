//! Change notifications emitted after every committed library mutation.
//!
//! Views that share the library (the management page and the quick-access
//! popup) subscribe to these and re-derive what they show from the
//! in-memory state.

pub mod folder;
pub mod prompt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use folder::FolderEvent;
pub use prompt::PromptEvent;

/// Wrapper for all library events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the mutation was committed.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all library event types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A folder-related event.
    Folder(FolderEvent),
    /// A prompt-related event.
    Prompt(PromptEvent),
    /// The whole state was swapped for an externally changed copy.
    StateReplaced,
}

impl LibraryEvent {
    /// Create a new library event.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Event announcing an externally replaced state.
    pub fn state_replaced() -> Self {
        Self::new(EventPayload::StateReplaced)
    }
}

impl From<FolderEvent> for LibraryEvent {
    fn from(event: FolderEvent) -> Self {
        Self::new(EventPayload::Folder(event))
    }
}

impl From<PromptEvent> for LibraryEvent {
    fn from(event: PromptEvent) -> Self {
        Self::new(EventPayload::Prompt(event))
    }
}
