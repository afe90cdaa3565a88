//! Prompt management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use promptdeck_core::error::AppError;
use promptdeck_core::types::{FolderId, PromptId};
use promptdeck_entity::{Prompt, PromptDraft};
use promptdeck_service::view::{self, ViewQuery};
use promptdeck_service::{EditSession, Library};

use crate::output::{self, OutputFormat};

/// Longest content preview shown in the table.
const PREVIEW_CHARS: usize = 48;

/// Arguments for prompt commands
#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Prompt subcommand
    #[command(subcommand)]
    pub command: PromptCommand,
}

/// Folder and search filter shared by list and move
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Show only this folder
    #[arg(long)]
    pub folder: Option<String>,
    /// Case-insensitive search over title and content
    #[arg(short, long)]
    pub search: Option<String>,
}

impl FilterArgs {
    fn query(&self) -> ViewQuery {
        let folder = self.folder.as_deref().map_or_else(FolderId::all, FolderId::new);
        ViewQuery::in_folder(folder).with_search(self.search.clone().unwrap_or_default())
    }
}

/// Prompt subcommands
#[derive(Debug, Subcommand)]
pub enum PromptCommand {
    /// List prompts in display order
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Add a prompt
    Add {
        /// Prompt content
        #[arg(long)]
        content: String,
        /// Optional title
        #[arg(long)]
        title: Option<String>,
        /// Folder ID
        #[arg(long)]
        folder: Option<String>,
    },
    /// Edit a prompt's fields
    Edit {
        /// Prompt ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New content
        #[arg(long)]
        content: Option<String>,
        /// New folder ID ("all" or "" unfiles)
        #[arg(long)]
        folder: Option<String>,
    },
    /// Delete a prompt
    Delete {
        /// Prompt ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Move a prompt within the filtered view
    Move {
        /// Prompt ID
        id: String,
        /// Place before this prompt
        #[arg(long, conflicts_with = "last", required_unless_present = "last")]
        before: Option<String>,
        /// Place at the end of the view
        #[arg(long)]
        last: bool,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Prompt display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PromptRow {
    /// Prompt ID
    id: String,
    /// Title
    title: String,
    /// Folder
    folder: String,
    /// Content preview
    content: String,
    /// Last updated
    updated: String,
}

impl From<&Prompt> for PromptRow {
    fn from(prompt: &Prompt) -> Self {
        Self {
            id: prompt.id.to_string(),
            title: prompt.display_title().to_string(),
            folder: prompt.folder_id.as_ref().map(ToString::to_string).unwrap_or_default(),
            content: preview(&prompt.content),
            updated: prompt
                .updated_at()
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

fn preview(content: &str) -> String {
    let line = content.lines().next().unwrap_or_default();
    if line.chars().count() > PREVIEW_CHARS || content.lines().nth(1).is_some() {
        let cut: String = line.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}…")
    } else {
        line.to_string()
    }
}

/// Execute prompt commands
pub fn execute(args: &PromptArgs, library: &mut Library, format: OutputFormat) -> Result<(), AppError> {

    match &args.command {
        PromptCommand::List { filter } => {
            let query = filter.query();
            let state = library.state();
            let rows: Vec<PromptRow> = view::visible_prompts(state, &query)
                .into_iter()
                .map(PromptRow::from)
                .collect();
            if format == OutputFormat::Table {
                output::print_heading(&view::view_title(state, &query.folder));
            }
            output::print_list(&rows, format, "No prompts.");
        }
        PromptCommand::Add { content, title, folder } => {
            let draft = PromptDraft::new(title.clone().unwrap_or_default(), content.clone(), folder.clone());
            let prompt = library.create_prompt(&draft)?;
            output::print_success(&format!("Prompt {} created", prompt.id));
        }
        PromptCommand::Edit {
            id,
            title,
            content,
            folder,
        } => {
            let id = PromptId::new(id.as_str());
            let prompt = library
                .state()
                .prompt(&id)
                .cloned()
                .ok_or_else(|| AppError::not_found(format!("Prompt {id} not found")))?;

            let mut session = EditSession::open(&prompt);
            if let Some(title) = title {
                session.set_title(title.as_str());
            }
            if let Some(content) = content {
                session.set_content(content.as_str());
            }
            if folder.is_some() {
                session.set_folder(folder.clone());
            }
            match session.save(library)? {
                Some(saved) => output::print_success(&format!("Prompt {} updated", saved.id)),
                None => output::print_warning("Nothing changed."),
            }
            session.close();
        }
        PromptCommand::Delete { id, yes } => {
            let id = PromptId::new(id.as_str());
            let Some(prompt) = library.state().prompt(&id).cloned() else {
                return Err(AppError::not_found(format!("Prompt {id} not found")));
            };
            if !super::confirm(&format!("Delete prompt '{}'?", prompt.display_title()), *yes)? {
                output::print_warning("Aborted.");
                return Ok(());
            }
            if library.delete_prompt(&id).is_some() {
                output::print_success(&format!("Prompt {id} deleted"));
            }
        }
        PromptCommand::Move {
            id,
            before,
            last: _,
            filter,
        } => {
            let visible = view::visible_ids(library.state(), &filter.query());
            let before = before.as_deref().map(PromptId::new);
            let order = super::move_within(&visible, &PromptId::new(id.as_str()), before.as_ref())?;
            library.reorder_prompts(&visible, &order)?;
            output::print_success(&format!("Prompt {id} moved"));
        }
    }

    Ok(())
}
