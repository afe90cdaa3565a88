//! Copy a prompt to the system clipboard.

use std::sync::Arc;

use clap::Args;

use promptdeck_core::error::AppError;
use promptdeck_core::types::PromptId;
use promptdeck_service::{CopyService, CopyStatus, Library};

use crate::clipboard::SystemClipboard;
use crate::output;

/// Arguments for the copy command
#[derive(Debug, Args)]
pub struct CopyArgs {
    /// Prompt ID
    pub id: String,
}

/// Execute the copy command
pub async fn execute(args: &CopyArgs, library: &Library) -> Result<(), AppError> {
    let service = CopyService::new(Arc::new(SystemClipboard));

    let id = PromptId::new(args.id.as_str());
    let status = service.copy(library.state(), &id).await;

    match status {
        CopyStatus::Copied => {
            output::print_success(status.label());
            Ok(())
        }
        CopyStatus::Missing => Err(AppError::not_found(format!("Prompt {id} not found"))),
        CopyStatus::Failed => Err(AppError::clipboard(status.label())),
    }
}
