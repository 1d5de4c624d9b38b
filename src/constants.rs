//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "AccelPanel";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "accelpanel";

/// Directory name created under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "AccelPanel";

/// Environment variable that overrides the config directory (used by tests and portable installs).
pub const CONFIG_DIR_ENV: &str = "ACCELPANEL_CONFIG_DIR";

/// Number of option slots every layout carries.
pub const SLOT_COUNT: usize = 10;

/// Capacity of the spaced lookup table in the acceleration engine.
pub const SPACED_LUT_CAPACITY: usize = 1025;

/// Maximum number of points in an arbitrary lookup table.
pub const ARB_LUT_CAPACITY: usize = SPACED_LUT_CAPACITY / 4;
