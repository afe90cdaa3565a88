//! Debounced autosave timer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use promptdeck_entity::PromptDraft;

/// Restartable debounce timer that delivers the latest draft once input
/// has been quiet for the configured window.
///
/// Each [`schedule`](Self::schedule) cancels the pending timer. When a
/// timer fires the draft is sent on the channel returned by
/// [`new`](Self::new); the receiver commits it. Dropping the timer cancels
/// whatever is pending.
#[derive(Debug)]
pub struct Autosave {
    debounce: Duration,
    pending: Option<CancellationToken>,
    tx: mpsc::UnboundedSender<PromptDraft>,
}

impl Autosave {
    /// Create a timer with the given quiet window.
    pub fn new(debounce: Duration) -> (Self, mpsc::UnboundedReceiver<PromptDraft>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                debounce,
                pending: None,
                tx,
            },
            rx,
        )
    }

    /// The quiet window.
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Restart the timer with `draft`. Must run inside a tokio runtime.
    pub fn schedule(&mut self, draft: PromptDraft) {
        self.cancel();

        let token = CancellationToken::new();
        let fired = token.clone();
        let tx = self.tx.clone();
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::select! {
                _ = fired.cancelled() => {}
                _ = tokio::time::sleep(debounce) => {
                    debug!(debounce_ms = debounce.as_millis() as u64, "Autosave fired");
                    let _ = tx.send(draft);
                    fired.cancel();
                }
            }
        });

        self.pending = Some(token);
    }

    /// Whether a timer is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Drop for Autosave {
    fn drop(&mut self) {
        self.cancel();
    }
}
