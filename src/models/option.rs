//! Per-slot option state.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Activation state and display value of a single option slot.
///
/// # Validation
///
/// - An inactive option always has an empty display value
/// - An active option always has a non-blank display value
///
/// Fields are private and there are no setters, so an option cannot change
/// once its layout has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOptionLayout")]
pub struct OptionLayout {
    active: bool,
    display_value: String,
}

/// Unchecked shape used for deserialization.
#[derive(Deserialize)]
struct RawOptionLayout {
    active: bool,
    #[serde(default)]
    display_value: String,
}

impl TryFrom<RawOptionLayout> for OptionLayout {
    type Error = anyhow::Error;

    fn try_from(raw: RawOptionLayout) -> Result<Self> {
        Self::new(raw.active, raw.display_value)
    }
}

impl OptionLayout {
    /// Creates an option with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `active` is false and `display_value` is not empty
    /// - `active` is true and `display_value` is blank
    pub fn new(active: bool, display_value: impl Into<String>) -> Result<Self> {
        let display_value = display_value.into();

        if !active && !display_value.is_empty() {
            anyhow::bail!(
                "Inactive option must not carry a display value (got '{display_value}')"
            );
        }

        if active && display_value.trim().is_empty() {
            anyhow::bail!("Active option requires a non-empty display value");
        }

        Ok(Self {
            active,
            display_value,
        })
    }

    /// Creates an editable option showing `label`.
    ///
    /// Labels come from the shared default constants, which are never blank.
    #[must_use]
    pub fn active(label: &'static str) -> Self {
        debug_assert!(!label.trim().is_empty(), "option label must not be blank");
        Self {
            active: true,
            display_value: label.to_string(),
        }
    }

    /// Creates a disabled option with an empty value.
    #[must_use]
    pub const fn inactive() -> Self {
        Self {
            active: false,
            display_value: String::new(),
        }
    }

    /// Whether the slot is editable for its mode.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Label shown for the slot; empty when inactive.
    #[must_use]
    pub fn display_value(&self) -> &str {
        &self.display_value
    }
}
