//! Service layer for data logic.
//!
//! This module contains the pure construction and lookup logic that the
//! interaction engine and the CLI both consume.

pub mod index;

// Re-export commonly used types
pub use index::DataIndex;
