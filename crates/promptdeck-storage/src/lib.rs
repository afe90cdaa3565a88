//! # promptdeck-storage
//!
//! State store providers for PromptDeck. The whole library is one JSON
//! document read and written in a single call.

pub mod manager;
pub mod providers;

pub use manager::StateStoreManager;
pub use providers::{JsonFileStateStore, MemoryStateStore};
