//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use accelpanel::models::{AccelMode, Layout, LayoutOptions, OptionLayout};
use std::path::Path;
use std::process::{Command, Output};

/// Path to the accelpanel binary
pub fn accelpanel_bin() -> &'static str {
    env!("CARGO_BIN_EXE_accelpanel")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share state between them.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(accelpanel_bin());
    cmd.env("ACCELPANEL_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in a fresh temporary config directory.
pub fn run_isolated(args: &[&str]) -> Output {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, temp_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, panicking with stderr on failure.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {stdout}\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// A layout with every slot active, for tests that need a non-classic shape.
pub fn all_active_layout() -> Layout {
    Layout::new(
        "Everything",
        AccelMode::ArbLookup,
        LayoutOptions {
            gain_switch: OptionLayout::active("Gain"),
            acceleration: OptionLayout::active("Acceleration"),
            scale: OptionLayout::active("Scale"),
            cap: OptionLayout::active("Cap"),
            weight: OptionLayout::active("Weight"),
            offset: OptionLayout::active("Offset"),
            limit: OptionLayout::active("Limit"),
            exponent: OptionLayout::active("Exponent"),
            midpoint: OptionLayout::active("Midpoint"),
            lut_text: OptionLayout::active("LUT"),
        },
    )
    .expect("valid layout")
}
