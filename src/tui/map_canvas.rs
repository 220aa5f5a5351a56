//! World map canvas with place markers and connector lines.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Map, MapResolution},
        Block, Borders,
    },
    Frame,
};

use crate::map::MapView;
use crate::tui::AppState;

/// Map canvas widget.
pub struct MapCanvas;

impl MapCanvas {
    /// Render the map into `area`.
    ///
    /// Paint order is coastline, then connectors, then markers, then the
    /// hover label, so places always sit on top of geography.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let viewport = &state.viewport;
        let scene = &state.scene;

        let title = match state.controller.view() {
            MapView::Overview => format!(" Overview ({} hubs) ", state.index.hub_count()),
            MapView::Drilldown { hub_id } => {
                let name = state
                    .index
                    .place(hub_id)
                    .map_or(hub_id.as_str(), |place| place.name.as_str());
                let linked = state.controller.markers().len().saturating_sub(1);
                format!(" {name} ({linked} linked) ")
            }
        };

        let lon_span = viewport.lon_span();
        let lat_span = viewport.lat_span();

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .background_color(theme.background)
            .x_bounds(viewport.x_bounds())
            .y_bounds(viewport.y_bounds())
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: theme.coastline,
                });
                ctx.layer();

                for (_, line) in scene.lines() {
                    ctx.draw(&CanvasLine {
                        x1: line.from.lon,
                        y1: line.from.lat,
                        x2: line.to.lon,
                        y2: line.to.lat,
                        color: theme.connector,
                    });
                }

                for marker in scene.markers() {
                    ctx.print(
                        marker.position.lon,
                        marker.position.lat,
                        Span::styled(
                            "\u{25cf}",
                            Style::default().fg(marker.color.to_ratatui_color()),
                        ),
                    );
                }

                // Name label floats just beside the hovered marker
                if let Some(marker) = scene.hovered_marker() {
                    if let Some(label) = &marker.hover_label {
                        ctx.print(
                            marker.position.lon + lon_span * 0.015,
                            marker.position.lat + lat_span * 0.05,
                            Span::styled(
                                format!(" {label} "),
                                Style::default()
                                    .fg(theme.text)
                                    .bg(theme.surface)
                                    .add_modifier(Modifier::BOLD),
                            ),
                        );
                    }
                }
            });

        f.render_widget(canvas, area);
    }
}
