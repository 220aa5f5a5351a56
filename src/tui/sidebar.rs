//! Detail sidebar listing the items held by a place.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::map::{PanelContent, PanelSurface};
use crate::tui::Theme;

/// Sidebar state: visibility flag plus the last rendered content.
///
/// Hiding the sidebar leaves its content in place, so toggling it back
/// open shows the same place without a re-render.
#[derive(Debug, Default)]
pub struct SidebarState {
    visible: bool,
    content: Option<PanelContent>,
    scroll: u16,
}

impl SidebarState {
    /// Creates a hidden sidebar with no content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the sidebar occupies screen space.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// The content last shown, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&PanelContent> {
        self.content.as_ref()
    }

    /// Current scroll offset in lines.
    #[must_use]
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scrolls the item list up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scrolls the item list down, stopping at the last line.
    pub fn scroll_down(&mut self) {
        let max = self.line_count().saturating_sub(1);
        self.scroll = (self.scroll + 1).min(max);
    }

    fn line_count(&self) -> u16 {
        self.content
            .as_ref()
            .map_or(0, |content| (content.items.len() * 4) as u16)
    }
}

impl PanelSurface for SidebarState {
    fn show_content(&mut self, content: PanelContent) {
        self.content = Some(content);
        self.scroll = 0;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Sidebar widget.
pub struct Sidebar;

impl Sidebar {
    /// Render the sidebar into `area`.
    pub fn render(f: &mut Frame, area: Rect, state: &SidebarState, theme: &Theme) {
        let title = state
            .content()
            .map_or(" Details ".to_string(), |content| {
                format!(" {} ", content.header)
            });

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(theme.background));

        let lines = match state.content() {
            None => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Click a place on the map to list",
                    Style::default().fg(theme.text_muted),
                )),
                Line::from(Span::styled(
                    "what it holds.",
                    Style::default().fg(theme.text_muted),
                )),
            ],
            Some(content) if content.items.is_empty() => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Nothing on record here.",
                    Style::default().fg(theme.text_muted),
                )),
            ],
            Some(content) => {
                let mut lines = Vec::with_capacity(content.items.len() * 4);
                for item in &content.items {
                    lines.push(Line::from(Span::styled(
                        item.title.clone(),
                        Style::default()
                            .fg(theme.text)
                            .add_modifier(Modifier::BOLD),
                    )));
                    let detail = item.detail_line();
                    if !detail.is_empty() {
                        lines.push(Line::from(Span::styled(
                            detail,
                            Style::default().fg(theme.text_secondary),
                        )));
                    }
                    if !item.asset_path.is_empty() {
                        lines.push(Line::from(Span::styled(
                            item.asset_path.clone(),
                            Style::default().fg(theme.text_muted),
                        )));
                    }
                    lines.push(Line::from(""));
                }
                lines
            }
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((state.scroll(), 0));

        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn content(items: usize) -> PanelContent {
        PanelContent {
            header: "Somewhere".to_string(),
            items: (0..items)
                .map(|i| Item {
                    title: format!("item {i}"),
                    date: "2001".to_string(),
                    category: "Print".to_string(),
                    asset_path: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_show_content_resets_scroll() {
        let mut state = SidebarState::new();
        state.show_content(content(10));
        state.scroll_down();
        state.scroll_down();
        assert_eq!(state.scroll(), 2);

        state.show_content(content(3));
        assert_eq!(state.scroll(), 0);
    }

    #[test]
    fn test_visibility_does_not_touch_content() {
        let mut state = SidebarState::new();
        state.show_content(content(2));
        state.set_visible(true);
        state.set_visible(false);

        assert!(!state.visible());
        assert_eq!(state.content().unwrap().items.len(), 2);
    }

    #[test]
    fn test_scroll_clamps_at_both_ends() {
        let mut state = SidebarState::new();
        state.scroll_up();
        assert_eq!(state.scroll(), 0);

        state.show_content(content(1));
        for _ in 0..50 {
            state.scroll_down();
        }
        assert!(state.scroll() <= 4);
    }
}
