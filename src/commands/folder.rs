//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use promptdeck_core::error::AppError;
use promptdeck_core::types::FolderId;
use promptdeck_service::Library;
use promptdeck_service::view::{self, FolderSummary};

use crate::output::{self, OutputFormat};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List folders with prompt counts
    List,
    /// Create a folder
    Create {
        /// Folder name
        name: String,
    },
    /// Rename a folder
    Rename {
        /// Folder ID
        id: String,
        /// New name
        name: String,
    },
    /// Delete a folder; its prompts become unfiled
    Delete {
        /// Folder ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Move a folder within the folder list
    Move {
        /// Folder ID
        id: String,
        /// Place before this folder
        #[arg(long, conflicts_with = "last", required_unless_present = "last")]
        before: Option<String>,
        /// Place at the end
        #[arg(long)]
        last: bool,
    },
}

/// Folder display row for table output
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Locked
    locked: bool,
    /// Prompt count
    prompts: usize,
}

impl From<&FolderSummary> for FolderRow {
    fn from(summary: &FolderSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            name: summary.name.clone(),
            locked: summary.locked,
            prompts: summary.count,
        }
    }
}

/// Execute folder commands
pub fn execute(args: &FolderArgs, library: &mut Library, format: OutputFormat) -> Result<(), AppError> {

    match &args.command {
        FolderCommand::List => {
            let rows: Vec<FolderRow> = view::folder_summaries(library.state()).iter().map(FolderRow::from).collect();
            output::print_list(&rows, format, "No folders.");
        }
        FolderCommand::Create { name } => {
            let folder = library.create_folder(name)?;
            output::print_success(&format!("Folder '{}' created ({})", folder.name, folder.id));
        }
        FolderCommand::Rename { id, name } => {
            let folder = library.rename_folder(&FolderId::new(id.as_str()), name)?;
            output::print_success(&format!("Folder {} renamed to '{}'", folder.id, folder.name));
        }
        FolderCommand::Delete { id, yes } => {
            let id = FolderId::new(id.as_str());
            let Some(folder) = library.state().folder(&id).cloned() else {
                return Err(AppError::not_found(format!("Folder {id} not found")));
            };
            let count = library.state().prompt_count(&id);
            let prompt = format!("Delete folder '{}'? {count} prompt(s) will become unfiled.", folder.name);
            if !super::confirm(&prompt, *yes)? {
                output::print_warning("Aborted.");
                return Ok(());
            }
            match library.delete_folder(&id) {
                Some(deletion) => output::print_success(&format!(
                    "Folder '{}' deleted; {} prompt(s) unfiled",
                    deletion.folder.name,
                    deletion.detached.len()
                )),
                None => output::print_warning(&format!("Folder '{}' cannot be deleted", folder.name)),
            }
        }
        FolderCommand::Move { id, before, last: _ } => {
            let sequence: Vec<FolderId> = view::ordered_folders(library.state())
                .into_iter()
                .map(|f| f.id.clone())
                .collect();
            let before = before.as_deref().map(FolderId::new);
            let order = super::move_within(&sequence, &FolderId::new(id.as_str()), before.as_ref())?;
            library.reorder_folders(&order)?;
            output::print_success(&format!("Folder {id} moved"));
        }
    }

    Ok(())
}
