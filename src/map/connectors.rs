//! Registry of currently-drawn connector lines.

use tracing::debug;

use super::surface::{LineId, LineSpec, MapSurface};
use crate::services::DataIndex;

/// Owns the connector lines between a hub and its linked entities.
#[derive(Debug, Clone, Default)]
pub struct ConnectorRegistry {
    lines: Vec<LineId>,
    next_id: u64,
}

impl ConnectorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every connector line from the surface. Idempotent.
    pub fn clear_all(&mut self, surface: &mut dyn MapSurface) {
        for id in self.lines.drain(..) {
            surface.remove_line(id);
        }
    }

    /// Draws one segment from the hub to each entity the index knows.
    ///
    /// Entity ids without an index entry are skipped; the remaining
    /// segments still draw. If the hub id itself is unknown there is
    /// nothing to anchor, so no segment draws at all.
    pub fn add_batch(
        &mut self,
        index: &DataIndex,
        surface: &mut dyn MapSurface,
        hub_id: &str,
        entity_ids: &[String],
    ) {
        let Some(hub) = index.place(hub_id) else {
            debug!(hub_id, "skipping connector batch for unknown hub id");
            return;
        };

        for entity_id in entity_ids {
            let Some(entity) = index.place(entity_id) else {
                debug!(hub_id, entity_id, "skipping connector to unknown entity id");
                continue;
            };

            let id = LineId(self.next_id);
            self.next_id += 1;
            surface.add_line(
                id,
                LineSpec {
                    from: hub.position,
                    to: entity.position,
                },
            );
            self.lines.push(id);
        }
    }

    /// Number of drawn segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when no segment is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
