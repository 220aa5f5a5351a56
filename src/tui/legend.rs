//! Legend box anchored to the map's lower-left corner.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::LegendEntry;
use crate::tui::Theme;

/// Legend widget.
pub struct Legend;

impl Legend {
    /// Render the legend over the map area. An empty entry list renders
    /// nothing, as does a map too small to host the box.
    pub fn render(f: &mut Frame, map_area: Rect, entries: &[LegendEntry], theme: &Theme) {
        if entries.is_empty() {
            return;
        }

        let width = entries
            .iter()
            .map(|entry| entry.label.len())
            .max()
            .unwrap_or(0) as u16
            + 6;
        let height = entries.len() as u16 + 2;

        if map_area.width < width + 2 || map_area.height < height + 2 {
            return;
        }

        let area = Rect::new(
            map_area.x + 1,
            map_area.y + map_area.height - height - 1,
            width,
            height,
        );

        let lines: Vec<Line> = entries
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        "\u{25a0} ",
                        Style::default().fg(entry.color.to_ratatui_color()),
                    ),
                    Span::styled(entry.label.clone(), Style::default().fg(theme.text)),
                ])
            })
            .collect();

        let legend = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Legend ")
                    .style(Style::default().fg(theme.text_muted).bg(theme.background)),
            );

        f.render_widget(Clear, area);
        f.render_widget(legend, area);
    }
}
