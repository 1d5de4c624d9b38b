//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, InactiveDisplay};
use crate::constants::APP_NAME;
use crate::models::AccelMode;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Mode selected on startup (e.g., classic)
    #[arg(long, value_name = "MODE")]
    default_mode: Option<String>,

    /// Rendering of inactive slots (placeholder or hidden)
    #[arg(long, value_name = "STYLE")]
    inactive_display: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    default_mode: AccelMode,
    inactive_display: InactiveDisplay,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            let output = ConfigOutput {
                path: Config::config_file_path()
                    .ok()
                    .map(|p| p.to_string_lossy().to_string()),
                ui: UiOutput {
                    default_mode: config.ui.default_mode,
                    inactive_display: config.ui.inactive_display,
                },
            };
            print_json(&output)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.default_mode.is_none() && self.inactive_display.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-mode or --inactive-display",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(mode) = &self.default_mode {
            config.ui.default_mode = mode
                .parse()
                .map_err(|e| CliError::validation(format!("{e}")))?;
        }

        if let Some(style) = &self.inactive_display {
            config.ui.inactive_display = style
                .parse()
                .map_err(|e| CliError::validation(format!("{e}")))?;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    if let Ok(path) = Config::config_file_path() {
        println!("File:             {}", path.display());
    }
    println!(
        "Default mode:     {} ({})",
        config.ui.default_mode,
        config.ui.default_mode.display_name()
    );
    println!("Inactive display: {}", config.ui.inactive_display.as_str());
}
