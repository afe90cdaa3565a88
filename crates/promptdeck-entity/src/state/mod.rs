//! The persisted library document.

pub mod model;

pub use model::LibraryState;
