//! Service layer for business logic.
//!
//! This module contains services that sit between the layout table and its
//! consumers: assembling engine arguments and verifying layout invariants.

pub mod checker;
pub mod parameters;

// Re-export commonly used types
pub use checker::{LayoutChecker, LayoutReport, LayoutStatus};
pub use parameters::{FieldValues, ParameterService};
