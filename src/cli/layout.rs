//! Layout display and checking commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, InactiveDisplay};
use crate::constants::APP_BINARY_NAME;
use crate::layouts::LayoutSet;
use crate::models::AccelMode;
use crate::panel;
use crate::services::LayoutChecker;
use clap::{Args, Subcommand};

/// Layout commands
#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(subcommand)]
    command: LayoutCommand,
}

#[derive(Subcommand, Debug)]
enum LayoutCommand {
    /// Show the option layout of a mode
    Show(LayoutShowArgs),
    /// Check every layout for invariant violations
    Check(LayoutCheckArgs),
}

/// Show the option layout of a mode
#[derive(Args, Debug)]
pub struct LayoutShowArgs {
    /// Mode to show (defaults to the configured default mode)
    #[arg(value_name = "MODE")]
    mode: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Leave out inactive slots instead of showing placeholders
    #[arg(long)]
    hide_inactive: bool,
}

/// Check every layout for invariant violations
#[derive(Args, Debug)]
pub struct LayoutCheckArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl LayoutArgs {
    /// Execute layout subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            LayoutCommand::Show(args) => args.execute(),
            LayoutCommand::Check(args) => args.execute(),
        }
    }
}

/// Builds the layout set, mapping construction failure to a CLI error.
pub(crate) fn load_layouts() -> CliResult<LayoutSet> {
    LayoutSet::new().map_err(|e| CliError::validation(format!("Failed to build layouts: {e:#}")))
}

/// Parses a mode argument.
pub(crate) fn parse_mode(raw: &str) -> CliResult<AccelMode> {
    raw.parse().map_err(|e| CliError::validation(format!("{e}")))
}

impl LayoutShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let mode = match &self.mode {
            Some(raw) => parse_mode(raw)?,
            None => config.ui.default_mode,
        };

        let layouts = load_layouts()?;
        let layout = layouts.select(mode).ok_or_else(|| {
            CliError::validation(format!(
                "No layout policy is defined for mode '{mode}' ({}). Run '{APP_BINARY_NAME} modes' to list modes with a layout.",
                mode.display_name()
            ))
        })?;

        if self.json {
            return print_json(layout);
        }

        let inactive = if self.hide_inactive {
            InactiveDisplay::Hidden
        } else {
            config.ui.inactive_display
        };
        print!("{}", panel::render_layout(layout, inactive));

        Ok(())
    }
}

impl LayoutCheckArgs {
    /// Execute check command
    pub fn execute(&self) -> CliResult<()> {
        let layouts = load_layouts()?;
        let reports = LayoutChecker::check_all(&layouts);

        if self.json {
            print_json(&reports)?;
        } else {
            for report in &reports {
                let mark = if report.is_valid() { "✓" } else { "✗" };
                println!(
                    "{mark} {} ({}): {} active slot(s)",
                    report.name, report.mode, report.active_count
                );
                for problem in &report.problems {
                    println!("    - {problem}");
                }
            }
        }

        let invalid = reports.iter().filter(|r| !r.is_valid()).count();
        if invalid > 0 {
            return Err(CliError::validation(format!(
                "{invalid} layout(s) failed validation"
            )));
        }

        Ok(())
    }
}
