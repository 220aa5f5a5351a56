//! Drawable scene backing the map canvas.
//!
//! [`MapScene`] is the live drawing surface the registries populate. It
//! keeps markers and lines in insertion order so the canvas paints them
//! deterministically, and answers mouse hit-tests in screen space.

use ratatui::layout::Rect;

use crate::map::{LineId, LineSpec, MapSurface, MarkerSpec};
use crate::tui::viewport::Viewport;

/// Markers within this many cells of the cursor count as hits.
const HIT_RADIUS: u16 = 1;

/// Everything currently drawn on the map.
#[derive(Debug, Default)]
pub struct MapScene {
    markers: Vec<MarkerSpec>,
    lines: Vec<(LineId, LineSpec)>,
    hovered: Option<String>,
}

impl MapScene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers in draw order.
    #[must_use]
    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    /// Lines in draw order.
    #[must_use]
    pub fn lines(&self) -> &[(LineId, LineSpec)] {
        &self.lines
    }

    /// Id of the marker under the cursor, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// The hovered marker's spec, when the hover id is still on the map.
    #[must_use]
    pub fn hovered_marker(&self) -> Option<&MarkerSpec> {
        let id = self.hovered.as_deref()?;
        self.markers.iter().find(|marker| marker.place_id == id)
    }

    /// Updates the hover id.
    pub fn set_hovered(&mut self, place_id: Option<String>) {
        self.hovered = place_id;
    }

    /// Finds the marker nearest to a terminal cell, within the hit radius.
    ///
    /// Distance is measured in screen cells after projection, so a marker
    /// is as easy to hit at every zoom level. Markers outside the viewport
    /// never match. Ties go to the marker drawn first.
    #[must_use]
    pub fn marker_at(
        &self,
        viewport: &Viewport,
        inner: Rect,
        column: u16,
        row: u16,
    ) -> Option<&MarkerSpec> {
        let mut nearest: Option<(&MarkerSpec, u16)> = None;

        for marker in &self.markers {
            let Some((col, r)) = viewport.cell_of(inner, marker.position) else {
                continue;
            };
            let distance = col.abs_diff(column).max(r.abs_diff(row));
            if distance > HIT_RADIUS {
                continue;
            }
            match nearest {
                Some((_, best)) if best <= distance => {}
                _ => nearest = Some((marker, distance)),
            }
        }

        nearest.map(|(marker, _)| marker)
    }
}

impl MapSurface for MapScene {
    fn add_marker(&mut self, spec: MarkerSpec) {
        // Re-adding an id repaints it in place, keeping draw order stable
        if let Some(existing) = self
            .markers
            .iter_mut()
            .find(|marker| marker.place_id == spec.place_id)
        {
            *existing = spec;
        } else {
            self.markers.push(spec);
        }
    }

    fn remove_marker(&mut self, place_id: &str) {
        self.markers.retain(|marker| marker.place_id != place_id);
        if self.hovered.as_deref() == Some(place_id) {
            self.hovered = None;
        }
    }

    fn add_line(&mut self, id: LineId, spec: LineSpec) {
        self.lines.push((id, spec));
    }

    fn remove_line(&mut self, id: LineId) {
        self.lines.retain(|(line_id, _)| *line_id != id);
    }
}
