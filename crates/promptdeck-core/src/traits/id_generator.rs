//! Identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces collision-resistant unique ids.
///
/// Callers treat the result as opaque and never parse it.
pub trait IdGenerator: Send + Sync + std::fmt::Debug + 'static {
    /// Make a new id carrying `prefix` (e.g. `"folder"`, `"prompt"`).
    fn make_id(&self, prefix: &str) -> String;
}

/// Random ids of the form `{prefix}-{uuid-v4}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn make_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4())
    }
}

/// Deterministic ids of the form `{prefix}-{n}`, counting from 1.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator starting at 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn make_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{n}")
    }
}
