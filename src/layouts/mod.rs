//! Per-mode option layouts.
//!
//! Each mode's activation pattern is a hand-written table in its own module.
//! [`build_layout`] dispatches on the mode tag, and [`LayoutSet`] holds the
//! layouts built at startup so hosts can select one without copying it.

pub mod classic;
pub mod defaults;

use crate::models::{AccelMode, Layout};
use anyhow::Result;
use tracing::debug;

/// Builds the layout for `mode`.
///
/// Building is pure: the same mode always yields an identical layout.
///
/// # Errors
///
/// Returns an error if no activation table is defined for `mode`.
pub fn build_layout(mode: AccelMode) -> Result<Layout> {
    match mode {
        AccelMode::Classic => classic::layout(),
        AccelMode::Jump
        | AccelMode::Natural
        | AccelMode::Motivity
        | AccelMode::Power
        | AccelMode::ArbLookup
        | AccelMode::NoAccel => {
            anyhow::bail!(
                "No layout policy is defined for mode '{}' ({})",
                mode,
                mode.display_name()
            )
        }
    }
}

/// Whether [`build_layout`] has a table for `mode`.
#[must_use]
pub const fn has_layout(mode: AccelMode) -> bool {
    matches!(mode, AccelMode::Classic)
}

/// Modes that have a layout, in registry order.
#[must_use]
pub fn supported_modes() -> Vec<AccelMode> {
    AccelMode::all()
        .iter()
        .copied()
        .filter(|mode| has_layout(*mode))
        .collect()
}

/// All layouts, built once and held for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct LayoutSet {
    layouts: Vec<Layout>,
}

impl LayoutSet {
    /// Builds every supported layout.
    ///
    /// # Errors
    ///
    /// Returns an error if any layout fails to build; no partial set is returned.
    pub fn new() -> Result<Self> {
        let layouts = supported_modes()
            .into_iter()
            .map(|mode| {
                let layout = build_layout(mode)?;
                debug!(
                    mode = %mode,
                    active = layout.active_slots().len(),
                    "built layout '{}'",
                    layout.name()
                );
                Ok(layout)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { layouts })
    }

    /// Gets the layout for `mode`, if one exists.
    #[must_use]
    pub fn select(&self, mode: AccelMode) -> Option<&Layout> {
        self.layouts.iter().find(|layout| layout.mode() == mode)
    }

    /// Iterates over layouts in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Layout> {
        self.layouts.iter()
    }

    /// Number of layouts in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
