//! Pan and zoom state for the map canvas.
//!
//! The viewport is a rectangular window onto the world in plain degrees.
//! Zoom levels are discrete; each level halves the visible span, and the
//! lowest level shows the whole world. Panning keeps the window inside
//! world bounds, so the edges behave like walls rather than wrapping.

use ratatui::layout::Rect;

use crate::constants::{MAX_ZOOM, MIN_ZOOM};
use crate::models::GeoPoint;

/// Fraction of the visible span moved per pan step.
const PAN_FRACTION: f64 = 0.1;

/// Visible window onto the world map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: GeoPoint,
    zoom: u8,
}

impl Viewport {
    /// Creates a viewport at the given center and zoom, both clamped to
    /// valid ranges.
    #[must_use]
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        let mut viewport = Self {
            center: center.clamped(),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        };
        viewport.clamp_center();
        viewport
    }

    /// Current center of the window.
    #[must_use]
    pub const fn center(&self) -> GeoPoint {
        self.center
    }

    /// Current zoom level.
    #[must_use]
    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Degrees of longitude currently visible.
    ///
    /// The minimum zoom level spans the full 360 degrees; every further
    /// level halves the window.
    #[must_use]
    pub fn lon_span(&self) -> f64 {
        360.0 / f64::from(1_u32 << (self.zoom - MIN_ZOOM))
    }

    /// Degrees of latitude currently visible, half the longitude span to
    /// match the world's 2:1 aspect.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.lon_span() / 2.0
    }

    /// Longitude bounds in the `[west, east]` form the canvas expects.
    #[must_use]
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lon_span() / 2.0;
        [self.center.lon - half, self.center.lon + half]
    }

    /// Latitude bounds in the `[south, north]` form the canvas expects.
    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [self.center.lat - half, self.center.lat + half]
    }

    /// Moves the window one step in the given direction, expressed as
    /// multiples of the pan step (`dx` east, `dy` north).
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center.lon += dx * self.lon_span() * PAN_FRACTION;
        self.center.lat += dy * self.lat_span() * PAN_FRACTION;
        self.clamp_center();
    }

    /// Zooms in one level, up to the maximum.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
        self.clamp_center();
    }

    /// Zooms out one level, down to the minimum. The center shifts inward
    /// when the wider window would otherwise cross a world edge.
    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
        self.clamp_center();
    }

    /// Recenters the window on a point, keeping it inside world bounds.
    pub fn center_on(&mut self, point: GeoPoint) {
        self.center = point.clamped();
        self.clamp_center();
    }

    fn clamp_center(&mut self) {
        let half_lon = self.lon_span() / 2.0;
        let half_lat = self.lat_span() / 2.0;
        self.center.lon = if half_lon >= 180.0 {
            0.0
        } else {
            self.center.lon.clamp(-180.0 + half_lon, 180.0 - half_lon)
        };
        self.center.lat = if half_lat >= 90.0 {
            0.0
        } else {
            self.center.lat.clamp(-90.0 + half_lat, 90.0 - half_lat)
        };
    }

    /// Converts a terminal cell inside `inner` to the geographic point at
    /// its center. Returns `None` for cells outside the drawable area.
    ///
    /// Terminal rows grow downward while latitude grows upward, so the
    /// vertical axis flips here.
    #[must_use]
    pub fn geo_at(&self, inner: Rect, column: u16, row: u16) -> Option<GeoPoint> {
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        if column < inner.x
            || column >= inner.x + inner.width
            || row < inner.y
            || row >= inner.y + inner.height
        {
            return None;
        }

        let x_frac = (f64::from(column - inner.x) + 0.5) / f64::from(inner.width);
        let y_frac = (f64::from(row - inner.y) + 0.5) / f64::from(inner.height);

        let [west, _] = self.x_bounds();
        let [_, north] = self.y_bounds();

        Some(GeoPoint::new(
            north - y_frac * self.lat_span(),
            west + x_frac * self.lon_span(),
        ))
    }

    /// Converts a geographic point to the terminal cell it falls in within
    /// `inner`. Returns `None` when the point is outside the window.
    #[must_use]
    pub fn cell_of(&self, inner: Rect, point: GeoPoint) -> Option<(u16, u16)> {
        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        let [west, east] = self.x_bounds();
        let [south, north] = self.y_bounds();
        if point.lon < west || point.lon > east || point.lat < south || point.lat > north {
            return None;
        }

        let x_frac = (point.lon - west) / self.lon_span();
        let y_frac = (north - point.lat) / self.lat_span();

        let col = (x_frac * f64::from(inner.width)) as u16;
        let row = (y_frac * f64::from(inner.height)) as u16;

        Some((
            inner.x + col.min(inner.width - 1),
            inner.y + row.min(inner.height - 1),
        ))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(GeoPoint::new(0.0, 0.0), MIN_ZOOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_minimum_zoom_shows_whole_world() {
        let viewport = Viewport::new(GeoPoint::new(48.0, 2.0), MIN_ZOOM);
        assert!(approx(viewport.lon_span(), 360.0));
        assert!(approx(viewport.lat_span(), 180.0));
        // A full-world window has only one legal center
        assert!(approx(viewport.center().lon, 0.0));
        assert!(approx(viewport.center().lat, 0.0));
    }

    #[test]
    fn test_each_zoom_level_halves_the_span() {
        let coarse = Viewport::new(GeoPoint::new(0.0, 0.0), 5);
        let fine = Viewport::new(GeoPoint::new(0.0, 0.0), 6);
        assert!(approx(coarse.lon_span(), 2.0 * fine.lon_span()));
    }

    #[test]
    fn test_zoom_clamps_to_range() {
        let mut viewport = Viewport::new(GeoPoint::new(0.0, 0.0), MAX_ZOOM);
        viewport.zoom_in();
        assert_eq!(viewport.zoom(), MAX_ZOOM);

        let mut viewport = Viewport::new(GeoPoint::new(0.0, 0.0), MIN_ZOOM);
        viewport.zoom_out();
        assert_eq!(viewport.zoom(), MIN_ZOOM);

        let clamped = Viewport::new(GeoPoint::new(0.0, 0.0), 200);
        assert_eq!(clamped.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_pan_stops_at_world_edge() {
        let mut viewport = Viewport::new(GeoPoint::new(0.0, 170.0), 6);
        for _ in 0..100 {
            viewport.pan(1.0, 0.0);
        }
        let [_, east] = viewport.x_bounds();
        assert!(east <= 180.0 + 1e-9);

        let mut viewport = Viewport::new(GeoPoint::new(-80.0, 0.0), 6);
        for _ in 0..100 {
            viewport.pan(0.0, -1.0);
        }
        let [south, _] = viewport.y_bounds();
        assert!(south >= -90.0 - 1e-9);
    }

    #[test]
    fn test_zoom_out_near_edge_pulls_center_inward() {
        let mut viewport = Viewport::new(GeoPoint::new(0.0, 160.0), 8);
        viewport.zoom_out();
        viewport.zoom_out();
        let [_, east] = viewport.x_bounds();
        assert!(east <= 180.0 + 1e-9);
    }

    #[test]
    fn test_geo_at_center_cell_matches_viewport_center() {
        let viewport = Viewport::new(GeoPoint::new(48.0, 2.0), 8);
        let inner = Rect::new(10, 5, 40, 20);

        let point = viewport.geo_at(inner, 30, 15).unwrap();
        assert!((point.lat - viewport.center().lat).abs() < viewport.lat_span() / 10.0);
        assert!((point.lon - viewport.center().lon).abs() < viewport.lon_span() / 10.0);
    }

    #[test]
    fn test_geo_at_rejects_cells_outside_area() {
        let viewport = Viewport::new(GeoPoint::new(0.0, 0.0), 6);
        let inner = Rect::new(10, 5, 40, 20);

        assert!(viewport.geo_at(inner, 9, 10).is_none());
        assert!(viewport.geo_at(inner, 50, 10).is_none());
        assert!(viewport.geo_at(inner, 20, 4).is_none());
        assert!(viewport.geo_at(inner, 20, 25).is_none());
    }

    #[test]
    fn test_cell_roundtrip_stays_in_same_cell() {
        let viewport = Viewport::new(GeoPoint::new(47.0, 1.5), 9);
        let inner = Rect::new(2, 3, 60, 24);

        let point = viewport.geo_at(inner, 31, 14).unwrap();
        let (col, row) = viewport.cell_of(inner, point).unwrap();
        assert_eq!((col, row), (31, 14));
    }

    #[test]
    fn test_cell_of_rejects_points_outside_window() {
        let viewport = Viewport::new(GeoPoint::new(48.0, 2.0), 10);
        let inner = Rect::new(0, 0, 40, 20);

        // Sydney is far outside a window centered on France at zoom 10
        assert!(viewport
            .cell_of(inner, GeoPoint::new(-33.87, 151.21))
            .is_none());
    }

    #[test]
    fn test_rows_flip_against_latitude() {
        let viewport = Viewport::new(GeoPoint::new(0.0, 0.0), 6);
        let inner = Rect::new(0, 0, 40, 20);

        let top = viewport.geo_at(inner, 20, 0).unwrap();
        let bottom = viewport.geo_at(inner, 20, 19).unwrap();
        assert!(top.lat > bottom.lat);
    }
}
