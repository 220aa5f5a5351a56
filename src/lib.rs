//! Terminal Map Explorer Library
//!
//! This library provides the core functionality for the hubmap application:
//! loading CSV place tables, indexing hub/place/record relationships, and
//! driving the map view state that the terminal front end renders.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod map;
pub mod models;
pub mod parser;
pub mod services;
pub mod shortcuts;

#[cfg(feature = "ratatui")]
pub mod tui;
