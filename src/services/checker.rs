//! Layout invariant checks.
//!
//! Re-verifies the rules every layout must satisfy before the UI renders it:
//!
//! - every one of the ten slots is present
//! - inactive slots show an empty value
//! - active slots show a non-empty value
//! - the layout has a name
//!
//! Layouts built through [`crate::models::Layout::new`] already satisfy these
//! rules; the checker reports them per layout for the `layout check` command.
//!
//! # Example
//!
//! ```rust
//! use accelpanel::layouts::LayoutSet;
//! use accelpanel::services::{LayoutChecker, LayoutStatus};
//!
//! let set = LayoutSet::new().unwrap();
//! for report in LayoutChecker::check_all(&set) {
//!     assert_eq!(report.status, LayoutStatus::Valid);
//! }
//! ```

use serde::Serialize;

use crate::constants::SLOT_COUNT;
use crate::layouts::LayoutSet;
use crate::models::{AccelMode, Layout};

/// Outcome of checking a single layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStatus {
    /// All invariants hold
    Valid,
    /// At least one invariant is violated
    Invalid,
}

/// Result of checking a single layout.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    /// Layout name
    pub name: String,
    /// Mode the layout configures
    pub mode: AccelMode,
    /// Overall status
    pub status: LayoutStatus,
    /// Number of active slots
    pub active_count: usize,
    /// Human-readable descriptions of violated invariants
    pub problems: Vec<String>,
}

impl LayoutReport {
    /// Whether the layout passed every check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status == LayoutStatus::Valid
    }
}

/// Checker for layout invariants.
pub struct LayoutChecker;

impl LayoutChecker {
    /// Checks one layout.
    #[must_use]
    pub fn check(layout: &Layout) -> LayoutReport {
        let mut problems = Vec::new();

        if layout.name().trim().is_empty() {
            problems.push("layout has no name".to_string());
        }

        let options: Vec<_> = layout.options().collect();
        if options.len() != SLOT_COUNT {
            problems.push(format!(
                "expected {SLOT_COUNT} option slots, found {}",
                options.len()
            ));
        }

        let mut active_count = 0;
        for (slot, option) in &options {
            if option.is_active() {
                active_count += 1;
                if option.display_value().trim().is_empty() {
                    problems.push(format!("active slot '{slot}' has an empty value"));
                }
            } else if !option.display_value().is_empty() {
                problems.push(format!(
                    "inactive slot '{slot}' shows stale value '{}'",
                    option.display_value()
                ));
            }
        }

        let status = if problems.is_empty() {
            LayoutStatus::Valid
        } else {
            LayoutStatus::Invalid
        };

        LayoutReport {
            name: layout.name().to_string(),
            mode: layout.mode(),
            status,
            active_count,
            problems,
        }
    }

    /// Checks every layout in the set, in registry order.
    #[must_use]
    pub fn check_all(set: &LayoutSet) -> Vec<LayoutReport> {
        set.iter().map(Self::check).collect()
    }
}
