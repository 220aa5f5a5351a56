//! Place records shown as map markers.

use super::{GeoPoint, PlaceRecord, RgbColor};

/// Category tag deciding what a click on the place's marker does.
///
/// The set is closed: a hub drills down into its linked entities, an
/// entity opens the detail panel. The tag is fixed when the marker is
/// created; no dispatch happens at click time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceKind {
    /// A hub place; clicking drills down into its linked entities.
    Hub,
    /// A linked place; clicking opens the detail panel.
    Entity,
}

impl PlaceKind {
    /// Parses the category column of the places table.
    ///
    /// Matching is case-insensitive. Anything other than `hub` is treated
    /// as an entity, so malformed rows stay renderable leaf markers.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("hub") {
            Self::Hub
        } else {
            Self::Entity
        }
    }
}

/// A point of interest, immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Unique id within the load.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category tag.
    pub kind: PlaceKind,
    /// Geographic position.
    pub position: GeoPoint,
    /// Marker color.
    pub color: RgbColor,
}

impl Place {
    /// Builds a place from a raw record with tolerant defaults.
    ///
    /// Missing or malformed fields degrade to empty name, zero
    /// coordinates, or the default color; they never fail the load.
    #[must_use]
    pub fn from_record(record: &PlaceRecord) -> Self {
        let parse_coord = |field: Option<&str>| -> f64 {
            field
                .and_then(|value| value.trim().parse::<f64>().ok())
                .unwrap_or(0.0)
        };

        Self {
            id: record.id.clone().unwrap_or_default(),
            name: record.name.clone().unwrap_or_default(),
            kind: PlaceKind::from_tag(record.category.as_deref().unwrap_or("")),
            position: GeoPoint::new(
                parse_coord(record.latitude.as_deref()),
                parse_coord(record.longitude.as_deref()),
            ),
            color: record
                .color
                .as_deref()
                .and_then(|hex| RgbColor::from_hex(hex).ok())
                .unwrap_or_default(),
        }
    }
}
