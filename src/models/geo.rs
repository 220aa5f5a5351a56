//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// A point on the map as latitude/longitude in degrees.
///
/// Latitude grows northward (-90 to 90), longitude eastward (-180 to 180).
/// Values outside those ranges are accepted as-is; the viewport clamps for
/// display and the index never rejects a record over its coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a new point from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Clamps the point to the valid world range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            lat: self.lat.clamp(-90.0, 90.0),
            lon: self.lon.clamp(-180.0, 180.0),
        }
    }
}
