//! Raw tabular records as they arrive from the loader.
//!
//! Every field is optional: the loader guarantees shape (named string
//! columns), not presence. Records are converted into model types with
//! tolerant defaults during index construction.

use serde::Deserialize;

/// One row of the places table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaceRecord {
    /// Unique place id.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Category tag ("hub" or "entity").
    #[serde(default)]
    pub category: Option<String>,
    /// Latitude in degrees, as written in the file.
    #[serde(default)]
    pub latitude: Option<String>,
    /// Longitude in degrees, as written in the file.
    #[serde(default)]
    pub longitude: Option<String>,
    /// Marker color as a hex string.
    #[serde(default)]
    pub color: Option<String>,
}

/// One row of the links table: a directed hub → entity association.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LinkRecord {
    /// Id of the hub side.
    #[serde(default)]
    pub hub_id: Option<String>,
    /// Id of the linked entity.
    #[serde(default)]
    pub entity_id: Option<String>,
}

/// One row of the items table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemRecord {
    /// Id of the owning entity.
    #[serde(default)]
    pub entity_id: Option<String>,
    /// Item title.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form date string.
    #[serde(default)]
    pub date: Option<String>,
    /// Free-form category string.
    #[serde(default)]
    pub category: Option<String>,
    /// Path or URL of the item's asset.
    #[serde(default)]
    pub asset_path: Option<String>,
}
