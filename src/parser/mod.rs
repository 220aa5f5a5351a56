//! Parsing and loading for the tabular source files.
//!
//! This module reads the three CSV tables (places, links, items) into raw
//! record sequences. Index construction happens in the services layer.

pub mod tables;

// Re-export commonly used items
pub use tables::{load_tables, RawTables};
