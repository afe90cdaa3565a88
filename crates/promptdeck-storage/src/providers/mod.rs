//! Concrete [`StateStore`](promptdeck_core::traits::StateStore) providers.

pub mod local;
pub mod memory;

pub use local::JsonFileStateStore;
pub use memory::MemoryStateStore;
