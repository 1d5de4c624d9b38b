//! List acceleration modes.

use crate::cli::common::{print_json, CliResult};
use crate::layouts;
use crate::models::AccelMode;
use clap::Args;
use serde::Serialize;

/// List acceleration modes and whether each has a layout
#[derive(Args, Debug)]
pub struct ModesArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ModeOutput {
    mode: AccelMode,
    name: &'static str,
    has_layout: bool,
}

impl ModesArgs {
    /// Execute the modes command
    pub fn execute(&self) -> CliResult<()> {
        let modes: Vec<ModeOutput> = AccelMode::all()
            .iter()
            .map(|&mode| ModeOutput {
                mode,
                name: mode.display_name(),
                has_layout: layouts::has_layout(mode),
            })
            .collect();

        if self.json {
            return print_json(&modes);
        }

        println!("Available modes:");
        for entry in &modes {
            let marker = if entry.has_layout { "" } else { "  (no layout)" };
            println!("  {:<12} {}{}", entry.mode.as_str(), entry.name, marker);
        }

        Ok(())
    }
}
