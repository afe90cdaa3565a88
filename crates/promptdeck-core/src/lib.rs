//! # promptdeck-core
//!
//! Core crate for PromptDeck. Contains collaborator traits, configuration
//! schemas, typed identifiers, geometry primitives, library events, and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other PromptDeck crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
