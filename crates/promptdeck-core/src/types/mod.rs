//! Core type definitions used across the PromptDeck workspace.

pub mod geometry;
pub mod id;

pub use geometry::{Point, Rect, Size};
pub use id::*;
