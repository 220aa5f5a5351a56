//! Registry of currently-drawn markers.

use std::collections::HashMap;
use tracing::debug;

use super::surface::{ClickAction, MapSurface, MarkerSpec};
use crate::models::PlaceKind;
use crate::services::DataIndex;

/// Owns the set of markers on the surface, keyed by place id.
///
/// Contents always mirror the ids passed to [`MarkerRegistry::add`] since
/// the last clear, minus ids the index does not know.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    markers: HashMap<String, ClickAction>,
}

impl MarkerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every marker from the surface and the registry. Idempotent.
    pub fn clear_all(&mut self, surface: &mut dyn MapSurface) {
        for place_id in self.markers.keys() {
            surface.remove_marker(place_id);
        }
        self.markers.clear();
    }

    /// Adds a marker for the place, if the index knows it.
    ///
    /// Unknown ids are skipped silently. The click action and hover label
    /// are resolved here, once: hubs drill down and stay unlabeled,
    /// entities open the panel and carry their name as hover label.
    /// Re-adding a present id replaces its marker, keeping one entry.
    pub fn add(&mut self, index: &DataIndex, surface: &mut dyn MapSurface, place_id: &str) {
        let Some(place) = index.place(place_id) else {
            debug!(place_id, "skipping marker for unknown place id");
            return;
        };

        let (action, hover_label) = match place.kind {
            PlaceKind::Hub => (ClickAction::Drilldown, None),
            PlaceKind::Entity => (ClickAction::OpenPanel, Some(place.name.clone())),
        };

        surface.add_marker(MarkerSpec {
            place_id: place.id.clone(),
            position: place.position,
            color: place.color,
            action,
            hover_label,
        });
        self.markers.insert(place.id.clone(), action);
    }

    /// True when a marker for the id is currently drawn.
    #[must_use]
    pub fn contains(&self, place_id: &str) -> bool {
        self.markers.contains_key(place_id)
    }

    /// Click action of the drawn marker, if present.
    #[must_use]
    pub fn action(&self, place_id: &str) -> Option<ClickAction> {
        self.markers.get(place_id).copied()
    }

    /// Ids of all drawn markers, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.markers.keys().map(String::as_str)
    }

    /// Number of drawn markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// True when no marker is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
