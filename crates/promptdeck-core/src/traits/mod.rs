//! Core traits defined in `promptdeck-core` and implemented by other crates.

pub mod clipboard;
pub mod id_generator;
pub mod ordered;
pub mod state_store;

pub use clipboard::Clipboard;
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use ordered::Ordered;
pub use state_store::StateStore;
