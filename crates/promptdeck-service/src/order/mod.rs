//! Global ordering of entity collections.
//!
//! Both collections keep a gapless `order` sequence `0..N-1`. Users reorder
//! a filtered subset; [`reconcile`] merges that back without moving
//! anything outside the subset.

pub mod reconcile;
pub mod sort;

pub use reconcile::{ReconcileError, Reconciled, reconcile, reindex};
pub use sort::{folder_cmp, prompt_cmp, sort_folders, sort_prompts};
