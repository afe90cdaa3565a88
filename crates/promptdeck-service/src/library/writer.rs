//! Ordered background persistence.
//!
//! Mutations never wait for storage. Each committed state is queued here
//! and written by one task in enqueue order; a failed write is logged and
//! the next queued state overwrites it anyway.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use promptdeck_core::traits::StateStore;
use promptdeck_entity::LibraryState;

enum WriteCommand {
    Persist(Box<LibraryState>),
    Flush(oneshot::Sender<()>),
}

impl std::fmt::Debug for WriteCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteCommand::Persist(_) => f.write_str("Persist"),
            WriteCommand::Flush(_) => f.write_str("Flush"),
        }
    }
}

/// Handle to the persistence task.
///
/// The task exits once every handle is dropped and the queue is drained.
#[derive(Debug, Clone)]
pub struct StateWriter {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl StateWriter {
    /// Spawn the writer task on the current tokio runtime.
    pub fn spawn(store: Arc<dyn StateStore<LibraryState>>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<WriteCommand>();

        tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    WriteCommand::Persist(state) => match store.set(&state).await {
                        Ok(()) => debug!(
                            provider = store.provider_type(),
                            prompts = state.prompts.len(),
                            "State persisted"
                        ),
                        Err(e) => warn!(
                            provider = store.provider_type(),
                            error = %e,
                            "Failed to persist state"
                        ),
                    },
                    WriteCommand::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
            debug!("State writer stopped");
        });

        Self { tx }
    }

    /// Queue a full snapshot for writing.
    pub fn persist(&self, state: LibraryState) {
        if self.tx.send(WriteCommand::Persist(Box::new(state))).is_err() {
            warn!("State writer is gone; snapshot dropped");
        }
    }

    /// Wait until every snapshot queued before this call has been handled.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(WriteCommand::Flush(done_tx)).is_err() {
            return;
        }
        let _ = done_rx.await;
    }
}
