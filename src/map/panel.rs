//! Detail panel controller.

use tracing::debug;

use super::surface::{PanelContent, PanelSurface};
use crate::services::DataIndex;

/// Drives the side panel showing an entity's associated items.
///
/// Visibility and content move independently: closing hides the panel but
/// leaves its content in place until the next open replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct PanelController {
    open: bool,
    entity_id: Option<String>,
}

impl PanelController {
    /// Creates a controller with the panel closed and empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the entity's items into the panel and opens it.
    ///
    /// The previous content is replaced: a header with the entity's name,
    /// then one block per item in load order. An entity with no items gets
    /// just the header. Ids the index does not know are skipped silently
    /// and leave the panel untouched.
    pub fn open(&mut self, entity_id: &str, index: &DataIndex, surface: &mut dyn PanelSurface) {
        let Some(place) = index.place(entity_id) else {
            debug!(entity_id, "skipping panel for unknown entity id");
            return;
        };

        surface.show_content(PanelContent {
            header: place.name.clone(),
            items: index.items_for(entity_id).to_vec(),
        });
        surface.set_visible(true);
        self.open = true;
        self.entity_id = Some(place.id.clone());
    }

    /// Hides the panel. Content stays for the next toggle.
    pub fn close(&mut self, surface: &mut dyn PanelSurface) {
        surface.set_visible(false);
        self.open = false;
    }

    /// Flips visibility without re-rendering content.
    pub fn toggle_visibility(&mut self, surface: &mut dyn PanelSurface) {
        self.open = !self.open;
        surface.set_visible(self.open);
    }

    /// True while the panel is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Id of the entity whose content the panel holds, if any was ever
    /// rendered.
    #[must_use]
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }
}
