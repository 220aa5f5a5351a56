//! CLI command handlers for hubmap.
//!
//! This module provides headless, scriptable access to the dataset checks
//! and configuration for automation, testing, and CI use.

pub mod config;
pub mod validate;

// Re-export types used by main.rs and tests
pub use config::ConfigArgs;
pub use validate::ValidateArgs;
