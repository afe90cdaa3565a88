//! Clipboard collaborator.

use async_trait::async_trait;

use crate::result::AppResult;

/// System clipboard access.
///
/// Failures are reported once and never retried by callers.
#[async_trait]
pub trait Clipboard: Send + Sync + 'static {
    /// Replace the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> AppResult<()>;
}
