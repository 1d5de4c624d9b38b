//! CLI command handlers for AccelPanel.
//!
//! This module provides headless, scriptable access to the layout table for
//! automation, testing, and host integration.

pub mod args;
pub mod common;
pub mod config;
pub mod layout;
pub mod modes;

// Re-export types used by main.rs and tests
pub use args::FinalizeArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layout::LayoutArgs;
pub use modes::ModesArgs;
