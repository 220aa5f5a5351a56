//! Data models for places, links, and their associated items.
//!
//! This module contains the core data structures used throughout the
//! application. Models are independent of UI and business logic.

pub mod geo;
pub mod item;
pub mod place;
pub mod record;
pub mod rgb;

// Re-export all model types
pub use geo::GeoPoint;
pub use item::Item;
pub use place::{Place, PlaceKind};
pub use record::{ItemRecord, LinkRecord, PlaceRecord};
pub use rgb::RgbColor;
