//! System clipboard backed by `arboard`.

use async_trait::async_trait;

use promptdeck_core::error::{AppError, ErrorKind};
use promptdeck_core::result::AppResult;
use promptdeck_core::traits::Clipboard;

/// Writes to the OS clipboard, opening a fresh handle per write.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> AppResult<()> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new().map_err(|e| {
                AppError::with_source(ErrorKind::Clipboard, "Clipboard unavailable", e)
            })?;
            clipboard.set_text(text).map_err(|e| {
                AppError::with_source(ErrorKind::Clipboard, "Failed to write clipboard", e)
            })
        })
        .await
        .map_err(|e| AppError::internal(format!("Clipboard task failed: {e}")))?
    }
}
