//! Collaborator interfaces between the engine and its rendering backends.

use crate::models::{GeoPoint, Item, RgbColor};

/// What a click on a marker triggers.
///
/// Resolved once from the place's category when the marker is created;
/// click handling never re-inspects the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickAction {
    /// Drill down into the marker's place.
    Drilldown,
    /// Open the detail panel for the marker's place.
    OpenPanel,
}

/// Instructions for drawing one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    /// Id of the place the marker stands for; also the marker's key on
    /// the surface.
    pub place_id: String,
    /// Where to draw.
    pub position: GeoPoint,
    /// Marker color.
    pub color: RgbColor,
    /// Click behavior, fixed at creation.
    pub action: ClickAction,
    /// Transient label shown while the pointer hovers the marker.
    /// Entity markers carry their place name; hub markers carry none.
    pub hover_label: Option<String>,
}

/// Identifier of one connector line, issued by the connector registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub(crate) u64);

/// Instructions for drawing one connector line.
///
/// Connector styling is uniform and owned by the surface; the engine only
/// supplies endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    /// Hub endpoint.
    pub from: GeoPoint,
    /// Entity endpoint.
    pub to: GeoPoint,
}

/// Drawing primitives the engine needs from a map backend.
pub trait MapSurface {
    /// Draws a marker. A marker with the same place id is replaced.
    fn add_marker(&mut self, spec: MarkerSpec);

    /// Removes the marker keyed by `place_id`; unknown ids are a no-op.
    fn remove_marker(&mut self, place_id: &str);

    /// Draws one connector line under the given id.
    fn add_line(&mut self, id: LineId, spec: LineSpec);

    /// Removes the connector line; unknown ids are a no-op.
    fn remove_line(&mut self, id: LineId);
}

/// Everything the detail panel renders for one entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelContent {
    /// The entity's display name, shown as the panel header.
    pub header: String,
    /// Associated items in load order.
    pub items: Vec<Item>,
}

/// Primitives the engine needs from the detail panel backend.
pub trait PanelSurface {
    /// Replaces the panel content wholesale.
    fn show_content(&mut self, content: PanelContent);

    /// Shows or hides the panel without touching its content.
    fn set_visible(&mut self, visible: bool);
}
