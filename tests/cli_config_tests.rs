//! End-to-end tests for `accelpanel config` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let output = run_isolated(&["config", "show"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Default mode:     classic (Classic)"));
    assert!(stdout.contains("Inactive display: placeholder"));
}

#[test]
fn test_config_show_json_schema() {
    let output = run_isolated(&["config", "show", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert!(result["path"].is_string(), "Should have path");
    assert!(result["ui"].is_object(), "Should have ui object");
    assert_eq!(result["ui"]["default_mode"], "classic");
    assert_eq!(result["ui"]["inactive_display"], "placeholder");
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_inactive_display_hidden() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path();

    let output = isolated_command(&["config", "set", "--inactive-display", "hidden"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_dir.join("config.toml").exists());

    let output = isolated_command(&["config", "show", "--json"], config_dir)
        .output()
        .expect("Failed to execute command");
    let result = stdout_json(&output);
    assert_eq!(result["ui"]["inactive_display"], "hidden");

    // The panel now leaves inactive slots out
    let output = isolated_command(&["layout", "show"], config_dir)
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("(disabled)"));
}

#[test]
fn test_config_set_requires_option() {
    let output = run_isolated(&["config", "set"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("At least one configuration option"));
}

#[test]
fn test_config_set_mode_without_layout_rejected() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = isolated_command(&["config", "set", "--default-mode", "power"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_invalid_inactive_display() {
    let output = run_isolated(&["config", "set", "--inactive-display", "grey"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("placeholder"));
}

#[test]
fn test_corrupt_config_is_reported() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("config.toml"), "[ui\nbroken").unwrap();

    let output = isolated_command(&["config", "show"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}

#[test]
fn test_config_set_leaves_corrupt_config_untouched() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    std::fs::write(&config_file, "[ui\nbroken").unwrap();

    let output = isolated_command(&["config", "set", "--inactive-display", "hidden"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "stderr: {stderr}");
    assert_eq!(std::fs::read_to_string(&config_file).unwrap(), "[ui\nbroken");
}

#[test]
fn test_config_show_header_names_app() {
    let output = run_isolated(&["config", "show"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("AccelPanel configuration\n"));
}
