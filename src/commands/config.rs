//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use promptdeck_core::config::AppConfig;
use promptdeck_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Write the default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(config)?;
                println!("{json}");
            }
            OutputFormat::Table => {
                output::print_heading(&format!("Configuration ({config_path})"));
                output::print_kv("storage.provider", &config.storage.provider.to_string());
                output::print_kv("storage.path", &config.storage.path);
                output::print_kv("storage.key", &config.storage.key);
                output::print_kv("drag.threshold_px", &config.drag.threshold_px.to_string());
                output::print_kv("drag.grid_band_ratio", &config.drag.grid_band_ratio.to_string());
                output::print_kv("drag.flip_duration_ms", &config.drag.flip_duration_ms.to_string());
                output::print_kv(
                    "editor.autosave_debounce_ms",
                    &config.editor.autosave_debounce_ms.to_string(),
                );
                output::print_kv("logging.level", &config.logging.level);
                output::print_kv("logging.format", &config.logging.format);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../config/promptdeck.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(out_path, default_config).await?;

            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}
