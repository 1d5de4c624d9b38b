//! AccelPanel Library
//!
//! This library provides the option-visibility model for mouse acceleration
//! configuration panels: which curve parameters each acceleration mode
//! exposes, how they are labeled, and how field values are assembled into
//! the argument block sent to the acceleration engine.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod layouts;
pub mod models;
pub mod panel;
pub mod services;
