//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut status_text: Vec<Line> = Vec::new();

        // First line: error, status message, or a data summary
        if let Some(error) = &state.error_message {
            status_text.push(Line::from(vec![
                Span::styled(
                    "ERROR: ",
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(error.clone()),
            ]));
        } else if !state.status_message.is_empty() {
            let mut spans: Vec<Span> = Vec::new();
            if let Some(stamp) = &state.status_time {
                spans.push(Span::styled(
                    stamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(theme.text_muted),
                ));
            }
            spans.push(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            ));
            status_text.push(Line::from(spans));
        } else {
            status_text.push(Self::summary_line(state, theme));
        }

        // Second line: contextual key hints
        status_text.push(Self::hints_line(state, theme));

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// One-line summary of the loaded data set.
    fn summary_line(state: &AppState, theme: &Theme) -> Line<'static> {
        if state.index.is_empty() {
            return Line::from(Span::styled(
                "No places loaded".to_string(),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(Span::styled(
            format!(
                "{} places, {} hubs, {} records",
                state.index.place_count(),
                state.index.hub_count(),
                state.index.item_count()
            ),
            Style::default().fg(theme.text_secondary),
        ))
    }

    /// Bottom help line, adjusted to what currently has input focus.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints = Self::hints_for(state);

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default().fg(theme.accent),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw((*action).to_string()));
        }

        Line::from(spans)
    }

    /// Key hints for the current input context.
    fn hints_for(state: &AppState) -> &'static [(&'static str, &'static str)] {
        if state.error_message.is_some() {
            return &[("Enter/Esc", "dismiss")];
        }
        if state.overlay.is_some() {
            return &[("Enter/Esc", "close"), ("↑↓", "scroll"), ("q", "quit")];
        }
        &[
            ("click", "open"),
            ("+/-", "zoom"),
            ("o", "overview"),
            ("s", "sidebar"),
            ("r", "reload"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}
