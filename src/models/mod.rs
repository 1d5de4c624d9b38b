//! Data models for acceleration modes, option slots, and layouts.
//!
//! This module contains the value types shared by the layout table, the
//! parameter service, and the CLI. Models are independent of any UI.

pub mod args;
pub mod layout;
pub mod lut;
pub mod mode;
pub mod option;
pub mod slot;

// Re-export all model types
pub use args::AccelArgs;
pub use layout::{Layout, LayoutOptions};
pub use lut::{LutPoint, TableArgs};
pub use mode::AccelMode;
pub use option::OptionLayout;
pub use slot::OptionSlot;
