//! CLI command definitions and dispatch.

pub mod config;
pub mod copy;
pub mod folder;
pub mod prompt;

use std::fmt::Display;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use promptdeck_core::config::AppConfig;
use promptdeck_core::error::AppError;
use promptdeck_core::traits::UuidIdGenerator;
use promptdeck_service::Library;
use promptdeck_storage::StateStoreManager;

use crate::output::OutputFormat;

/// PromptDeck: organize, search, reorder, and copy prompts
#[derive(Debug, Parser)]
#[command(name = "promptdeck", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/promptdeck.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder management
    Folder(folder::FolderArgs),
    /// Prompt management
    Prompt(prompt::PromptArgs),
    /// Copy a prompt's content to the clipboard
    Copy(copy::CopyArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, config, &self.config, self.format).await;
        }

        let mut library = open_library(config).await?;
        let result = match &self.command {
            Commands::Folder(args) => folder::execute(args, &mut library, self.format),
            Commands::Prompt(args) => prompt::execute(args, &mut library, self.format),
            Commands::Copy(args) => copy::execute(args, &library).await,
            Commands::Config(_) => Ok(()),
        };
        // Loading may have queued a seed or repair write even if the command failed.
        library.flush().await;
        result
    }
}

/// Helper: open the library from the configured store
pub async fn open_library(config: &AppConfig) -> Result<Library, AppError> {
    let manager = StateStoreManager::from_config(&config.storage);
    Library::load(manager.store(), Arc::new(UuidIdGenerator)).await
}

/// Helper: ask before a destructive action unless `yes` is set
pub fn confirm(prompt: &str, yes: bool) -> Result<bool, AppError> {
    if yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

/// Move `id` within `sequence` so it sits before `before`, or last.
///
/// This is the order a drag release would commit for the same drop.
pub fn move_within<Id: Clone + PartialEq + Display>(
    sequence: &[Id],
    id: &Id,
    before: Option<&Id>,
) -> Result<Vec<Id>, AppError> {
    if !sequence.contains(id) {
        return Err(AppError::not_found(format!("'{id}' is not in the current view")));
    }
    let mut order: Vec<Id> = sequence.iter().filter(|x| *x != id).cloned().collect();
    let slot = match before {
        None => order.len(),
        Some(anchor) if anchor == id => return Ok(sequence.to_vec()),
        Some(anchor) => order
            .iter()
            .position(|x| x == anchor)
            .ok_or_else(|| AppError::not_found(format!("'{anchor}' is not in the current view")))?,
    };
    order.insert(slot, id.clone());
    Ok(order)
}
