//! Assemble engine arguments from a layout and field values.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::layout::{load_layouts, parse_mode};
use crate::services::{FieldValues, ParameterService};
use clap::Args;

/// Print the engine arguments a mode's panel produces for the given values
#[derive(Args, Debug)]
pub struct FinalizeArgs {
    /// Mode whose layout is used
    #[arg(value_name = "MODE")]
    mode: String,

    /// Field value as SLOT=VALUE (repeatable), e.g. --set cap=2
    #[arg(long = "set", value_name = "SLOT=VALUE")]
    values: Vec<String>,
}

impl FinalizeArgs {
    /// Execute the args command
    pub fn execute(&self) -> CliResult<()> {
        let mode = parse_mode(&self.mode)?;

        let layouts = load_layouts()?;
        let layout = layouts.select(mode).ok_or_else(|| {
            CliError::validation(format!("No layout policy is defined for mode '{mode}'"))
        })?;

        let values = FieldValues::from_assignments(self.values.as_slice())
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let args = ParameterService::finalize(layout, &values)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        print_json(&args)
    }
}
