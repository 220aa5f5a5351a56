//! View state machine driving the marker and connector registries.

use super::surface::{MapSurface, PanelSurface};
use super::{ConnectorRegistry, MarkerRegistry, PanelController};
use crate::services::DataIndex;

/// The map-level view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapView {
    /// All hub markers, no connectors.
    Overview,
    /// One hub with its linked entities and connecting lines.
    Drilldown {
        /// Id of the hub being inspected.
        hub_id: String,
    },
}

impl Default for MapView {
    fn default() -> Self {
        Self::Overview
    }
}

/// Owns the registries, the current view, and the panel controller.
///
/// Every transition is synchronous and rebuilds the registries wholesale:
/// clear everything, then repopulate for the target view. The panel flag
/// is orthogonal to the map view except that returning to the overview
/// forces the panel closed.
///
/// The controller holds no drawing backend of its own; callers pass the
/// live surfaces into each transition, which keeps the machine testable
/// against fakes.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    view: MapView,
    markers: MarkerRegistry,
    connectors: ConnectorRegistry,
    panel: PanelController,
}

impl ViewController {
    /// Creates a controller in the overview state with empty registries.
    ///
    /// Nothing is drawn until the first transition runs; call
    /// [`ViewController::show_overview`] once the index is built.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows all hub markers and nothing else. Valid from any state.
    ///
    /// Clears both registries, adds one marker per hub in load order, and
    /// forces the panel closed (its content stays for the next toggle).
    /// Calling this twice in a row lands in the same state.
    pub fn show_overview(
        &mut self,
        index: &DataIndex,
        map: &mut dyn MapSurface,
        panel: &mut dyn PanelSurface,
    ) {
        self.connectors.clear_all(map);
        self.markers.clear_all(map);

        for hub_id in index.hubs().map(|hub| hub.id.clone()).collect::<Vec<_>>() {
            self.markers.add(index, map, &hub_id);
        }

        self.panel.close(panel);
        self.view = MapView::Overview;
    }

    /// Drills down into one hub. Valid from any state, including an
    /// existing drilldown: the registries reset fully before the new
    /// hub's set is drawn, so nothing from the previous view survives.
    ///
    /// Draws the hub marker, one marker per linked entity, and one
    /// connector per linked entity, all in link load order. Unknown ids
    /// skip without aborting the rest. A hub with no links yields just
    /// its own marker.
    pub fn drilldown(&mut self, hub_id: &str, index: &DataIndex, map: &mut dyn MapSurface) {
        self.connectors.clear_all(map);
        self.markers.clear_all(map);

        self.markers.add(index, map, hub_id);
        let linked = index.linked_entities(hub_id);
        for entity_id in linked {
            self.markers.add(index, map, entity_id);
        }
        self.connectors.add_batch(index, map, hub_id, linked);

        self.view = MapView::Drilldown {
            hub_id: hub_id.to_string(),
        };
    }

    /// Opens the detail panel for an entity. Markers and map view are
    /// untouched.
    pub fn open_panel(
        &mut self,
        entity_id: &str,
        index: &DataIndex,
        panel: &mut dyn PanelSurface,
    ) {
        self.panel.open(entity_id, index, panel);
    }

    /// Closes the detail panel. Markers and map view are untouched.
    pub fn close_panel(&mut self, panel: &mut dyn PanelSurface) {
        self.panel.close(panel);
    }

    /// Flips panel visibility without re-rendering its content.
    pub fn toggle_panel(&mut self, panel: &mut dyn PanelSurface) {
        self.panel.toggle_visibility(panel);
    }

    /// The current map view.
    #[must_use]
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Id of the hub being inspected, when drilled down.
    #[must_use]
    pub fn drilldown_hub(&self) -> Option<&str> {
        match &self.view {
            MapView::Overview => None,
            MapView::Drilldown { hub_id } => Some(hub_id),
        }
    }

    /// True while the detail panel is visible.
    #[must_use]
    pub fn panel_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Id of the entity whose content the panel holds, if any.
    #[must_use]
    pub fn panel_entity(&self) -> Option<&str> {
        self.panel.entity_id()
    }

    /// The return-to-overview control shows only while drilled down.
    #[must_use]
    pub fn return_control_visible(&self) -> bool {
        matches!(self.view, MapView::Drilldown { .. })
    }

    /// The marker registry, for inspection.
    #[must_use]
    pub fn markers(&self) -> &MarkerRegistry {
        &self.markers
    }

    /// The connector registry, for inspection.
    #[must_use]
    pub fn connectors(&self) -> &ConnectorRegistry {
        &self.connectors
    }
}
