//! Modal overlays drawn on top of the map.
//!
//! Two overlays share one scrollable-modal widget: the welcome screen
//! shown on startup and the shortcut reference opened with '?'.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::Theme;
use crate::constants::APP_NAME;

/// Which overlay is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Startup screen introducing the map.
    Welcome,
    /// Scrollable shortcut reference.
    Help,
}

/// State for the active modal overlay.
#[derive(Debug, Clone)]
pub struct Overlay {
    kind: OverlayKind,
    /// Current scroll offset (line number)
    scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

/// Returns the centered modal rectangle used by every overlay.
///
/// The mouse handler uses the same rectangle to treat clicks outside
/// the modal as a dismissal.
#[must_use]
pub fn overlay_rect(area: Rect) -> Rect {
    // Centered modal size (60% width, 70% height)
    let width = (area.width * 60) / 100;
    let height = (area.height * 70) / 100;
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;

    Rect {
        x: x + area.x,
        y: y + area.y,
        width,
        height,
    }
}

impl Overlay {
    /// Creates the startup welcome overlay.
    #[must_use]
    pub fn welcome() -> Self {
        Self::new(OverlayKind::Welcome)
    }

    /// Creates the help overlay.
    #[must_use]
    pub fn help() -> Self {
        Self::new(OverlayKind::Help)
    }

    fn new(kind: OverlayKind) -> Self {
        // Line count is theme-independent, so any concrete theme works here
        let total_lines = Self::content(kind, &Theme::dark()).len();
        Self {
            kind,
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Returns which overlay this is.
    #[must_use]
    pub const fn kind(&self) -> OverlayKind {
        self.kind
    }

    /// Returns true when the help overlay is showing.
    #[must_use]
    pub fn is_help(&self) -> bool {
        self.kind == OverlayKind::Help
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    fn content(kind: OverlayKind, theme: &Theme) -> Vec<Line<'static>> {
        match kind {
            OverlayKind::Welcome => Self::welcome_content(theme),
            OverlayKind::Help => Self::help_content(theme),
        }
    }

    fn welcome_content(theme: &Theme) -> Vec<Line<'static>> {
        let key = Style::default().fg(theme.success);
        let text = Style::default().fg(theme.text);
        vec![
            Line::from(Span::styled(
                format!("Welcome to {APP_NAME}"),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "This map shows a collection of places. Hub places gather",
                text,
            )),
            Line::from(Span::styled("other places around them.", text)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  • Click a ", text),
                Span::styled("hub", key),
                Span::styled(" to focus it and draw its linked places.", text),
            ]),
            Line::from(vec![
                Span::styled("  • Click a ", text),
                Span::styled("linked place", key),
                Span::styled(" to list its records in the sidebar.", text),
            ]),
            Line::from(vec![
                Span::styled("  • Hover a ", text),
                Span::styled("linked place", key),
                Span::styled(" to see its name.", text),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("Arrows / hjkl", key),
                Span::styled("   Pan the map", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("+ / -", key),
                Span::styled("           Zoom in and out", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("o", key),
                Span::styled("               Return to the overview", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("?", key),
                Span::styled("               Full shortcut list", text),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to start exploring.",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
        ]
    }

    fn help_content(theme: &Theme) -> Vec<Line<'static>> {
        let section = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let key = Style::default().fg(theme.success);
        let text = Style::default().fg(theme.text);
        vec![
            // Navigation Section
            Line::from(Span::styled("═══ NAVIGATION ═══", section)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("Arrow Keys", key),
                Span::styled("          Pan the map (up/down/left/right)", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("h/j/k/l", key),
                Span::styled("             VIM-style panning", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("+ / =", key),
                Span::styled("               Zoom in", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("-", key),
                Span::styled("                    Zoom out", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("Mouse Wheel", key),
                Span::styled("         Zoom at the map, scroll in the sidebar", text),
            ]),
            Line::from(""),
            // Views Section
            Line::from(Span::styled("═══ VIEWS ═══", section)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("Click hub", key),
                Span::styled("           Focus the hub and its linked places", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("Click linked place", key),
                Span::styled("  Open its records in the sidebar", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("Hover linked place", key),
                Span::styled("  Show its name next to the marker", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("o / Backspace", key),
                Span::styled("       Return to the overview", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("Escape", key),
                Span::styled("              Close the sidebar, then the focus", text),
            ]),
            Line::from(""),
            // Sidebar Section
            Line::from(Span::styled("═══ SIDEBAR ═══", section)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("s", key),
                Span::styled("                    Show or hide the sidebar", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("Click < / >", key),
                Span::styled("          Same, on the strip beside the map", text),
            ]),
            Line::from(""),
            // Data Section
            Line::from(Span::styled("═══ DATA ═══", section)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("r", key),
                Span::styled("                    Reload the CSV files from disk", text),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Info:", Style::default().fg(theme.primary)),
                Span::styled(
                    format!(" Configuration lives in ~/.config/{APP_NAME}/config.toml"),
                    text,
                ),
            ]),
            Line::from(""),
            // System Section
            Line::from(Span::styled("═══ SYSTEM ═══", section)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("?", key),
                Span::styled("                    Toggle this help overlay", text),
            ]),
            Line::from(vec![
                Span::styled("  ", text),
                Span::styled("q / Ctrl+C", key),
                Span::styled("          Quit", text),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press '?' to close help • Press ↑↓ to scroll",
                Style::default().fg(theme.text_muted),
            )),
        ]
    }

    /// Render the overlay as a centered modal.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = overlay_rect(area);

        frame.render_widget(Clear, modal_area);

        // Content area and scrollbar column
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let title = match self.kind {
            OverlayKind::Welcome => format!(" {APP_NAME} "),
            OverlayKind::Help => " Help - Map Shortcuts ".to_string(),
        };

        let content = Self::content(self.kind, theme);

        let visible_height = content_area.height.saturating_sub(2) as usize; // Account for borders
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(title)
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.surface))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));

        let mut scrollbar_state = ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
            .position(self.scroll_offset);

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_kinds() {
        assert_eq!(Overlay::welcome().kind(), OverlayKind::Welcome);
        assert_eq!(Overlay::help().kind(), OverlayKind::Help);
        assert!(Overlay::help().is_help());
        assert!(!Overlay::welcome().is_help());
    }

    #[test]
    fn test_scroll_stays_in_bounds() {
        let mut overlay = Overlay::help();
        overlay.scroll_up();
        assert_eq!(overlay.scroll_offset, 0);

        for _ in 0..1000 {
            overlay.scroll_down();
        }
        assert_eq!(overlay.scroll_offset, overlay.total_lines - 1);
    }

    #[test]
    fn test_overlay_rect_centered() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = overlay_rect(area);
        assert_eq!(modal.width, 60);
        assert_eq!(modal.height, 35);
        assert_eq!(modal.x, 20);
        assert_eq!(modal.y, 7);
    }

    #[test]
    fn test_overlay_rect_respects_offset_area() {
        let area = Rect::new(10, 5, 100, 50);
        let modal = overlay_rect(area);
        assert_eq!(modal.x, 30);
        assert_eq!(modal.y, 12);
    }
}
