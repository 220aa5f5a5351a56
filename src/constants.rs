//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the default dataset layout.

/// The display name of the application (human-readable).
pub const APP_NAME: &str = "hubmap";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "hubmap";

/// Default file name for place records inside the data directory.
pub const PLACES_FILE: &str = "places.csv";

/// Default file name for link records inside the data directory.
pub const LINKS_FILE: &str = "links.csv";

/// Default file name for item records inside the data directory.
pub const ITEMS_FILE: &str = "items.csv";

/// Default map center latitude.
pub const DEFAULT_CENTER_LAT: f64 = 48.864_716;

/// Default map center longitude.
pub const DEFAULT_CENTER_LON: f64 = 2.349_014;

/// Default zoom level at startup.
pub const DEFAULT_ZOOM: u8 = 6;

/// Smallest zoom level the viewport allows.
pub const MIN_ZOOM: u8 = 3;

/// Largest zoom level the viewport allows.
pub const MAX_ZOOM: u8 = 12;
