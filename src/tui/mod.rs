//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow clone assignment patterns - common in UI state management
#![allow(clippy::assigning_clones)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod handlers;
pub mod legend;
pub mod map_canvas;
pub mod overlay;
pub mod scene;
pub mod sidebar;
pub mod status_bar;
pub mod theme;
pub mod viewport;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::error;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::map::ViewController;
use crate::parser::load_tables;
use crate::services::DataIndex;
use crate::shortcuts::ShortcutRegistry;

// Re-export TUI components
pub use legend::Legend;
pub use map_canvas::MapCanvas;
pub use overlay::{Overlay, OverlayKind};
pub use scene::MapScene;
pub use sidebar::{Sidebar, SidebarState};
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use viewport::Viewport;

use handlers::{handle_key_event, handle_mouse_event};

/// Label of the clickable return-to-overview control.
const RETURN_LABEL: &str = " [< Overview] ";

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Application configuration
    pub config: Config,
    /// Relational index over the loaded tables
    pub index: DataIndex,

    // Map state
    /// View state machine driving markers, connectors, and the panel
    pub controller: ViewController,
    /// Markers and connector lines staged for the canvas
    pub scene: MapScene,
    /// Geographic window the canvas projects
    pub viewport: Viewport,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Sidebar visibility, content, and scroll position
    pub sidebar: SidebarState,
    /// Active modal overlay (welcome or help), if any
    pub overlay: Option<Overlay>,
    /// Keyboard shortcut registry
    pub shortcuts: ShortcutRegistry,
    /// Status bar message
    pub status_message: String,
    /// When the status message was set
    pub status_time: Option<DateTime<Local>>,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // Control flags
    /// Frame area of the last render, for mouse hit testing
    pub last_area: Rect,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from config and a built index.
    ///
    /// Starts on the overview with the sidebar hidden. The welcome
    /// overlay shows unless the config switched it off.
    #[must_use]
    pub fn new(config: Config, index: DataIndex) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let viewport = Viewport::new(config.map.center(), config.map.initial_zoom());
        let overlay = config.ui.show_welcome.then(Overlay::welcome);

        let mut state = Self {
            config,
            index,
            controller: ViewController::new(),
            scene: MapScene::new(),
            viewport,
            theme,
            sidebar: SidebarState::default(),
            overlay,
            shortcuts: ShortcutRegistry::new(),
            status_message: String::new(),
            status_time: None,
            error_message: None,
            last_area: Rect::default(),
            should_quit: false,
        };
        state.show_overview();
        state
    }

    /// Show every hub and nothing else, hiding the sidebar.
    pub fn show_overview(&mut self) {
        self.controller
            .show_overview(&self.index, &mut self.scene, &mut self.sidebar);
    }

    /// Focus one hub: its marker, its linked places, and their connectors.
    pub fn drilldown(&mut self, hub_id: &str) {
        self.controller
            .drilldown(hub_id, &self.index, &mut self.scene);
        let name = self
            .index
            .place(hub_id)
            .map_or_else(|| hub_id.to_string(), |place| place.name.clone());
        self.set_status(format!("Exploring {name}"));
    }

    /// Open an entity's records in the sidebar.
    pub fn open_panel(&mut self, entity_id: &str) {
        self.controller
            .open_panel(entity_id, &self.index, &mut self.sidebar);
    }

    /// Hide the sidebar, keeping its content for the next toggle.
    pub fn close_panel(&mut self) {
        self.controller.close_panel(&mut self.sidebar);
    }

    /// Flip sidebar visibility without re-rendering its content.
    pub fn toggle_sidebar(&mut self) {
        self.controller.toggle_panel(&mut self.sidebar);
    }

    /// Reload the CSV tables from disk and rebuild the view.
    ///
    /// A failed reload keeps the current index; the error shows in the
    /// overlay and the map stays usable.
    pub fn reload(&mut self) {
        let places = self.config.data.places_path();
        let links = self.config.data.links_path();
        let items = self.config.data.items_path();

        match load_tables(&places, &links, &items) {
            Ok(tables) => {
                self.index = DataIndex::build(&tables);
                self.show_overview();
                let count = self.index.place_count();
                self.set_status(format!("Reloaded {count} places"));
            }
            Err(err) => {
                error!("reload failed: {err:#}");
                self.set_error(format!("Reload failed: {err:#}"));
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_time = Some(Local::now());
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Rectangles of one rendered frame.
///
/// The renderer and the mouse handler derive these from the same
/// function, so a click lands on what the user saw.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar row
    pub title: Rect,
    /// Map block, borders included
    pub map: Rect,
    /// Map drawing area inside the borders
    pub map_inner: Rect,
    /// One-column strip that toggles the sidebar
    pub toggle: Rect,
    /// Sidebar block, when visible
    pub sidebar: Option<Rect>,
    /// Status bar block
    pub status: Rect,
    /// Return-to-overview control, when drilled down
    pub return_button: Option<Rect>,
}

/// Splits a frame area into the regions the UI renders into.
#[must_use]
pub fn compute_layout(state: &AppState, area: Rect) -> ScreenAreas {
    let rows = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Map and sidebar
            Constraint::Length(4), // Status bar
        ])
        .split(area);

    let sidebar_width = if state.sidebar.visible() {
        state.config.ui.sidebar_width
    } else {
        0
    };

    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),               // Map
            Constraint::Length(1),             // Sidebar toggle strip
            Constraint::Length(sidebar_width), // Sidebar, zero when hidden
        ])
        .split(rows[1]);

    let map = columns[0];
    let map_inner = map.inner(Margin::new(1, 1));

    let label_width = RETURN_LABEL.len() as u16;
    let fits = map.width > label_width + 4 && map.height > 0;
    let return_button = (state.controller.return_control_visible() && fits).then(|| Rect {
        // Sits on the map's top border like a clickable title
        x: map.x + 2,
        y: map.y,
        width: label_width,
        height: 1,
    });

    ScreenAreas {
        title: rows[0],
        map,
        map_inner,
        toggle: columns[1],
        sidebar: (sidebar_width > 0).then(|| columns[2]),
        status: rows[2],
        return_button,
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Render current state
        terminal.draw(|f| {
            state.last_area = f.area();
            render(f, state);
        })?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    handle_key_event(state, key)?;
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(state, mouse)?;
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    // This ensures consistent background regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let areas = compute_layout(state, f.area());

    render_title_bar(f, areas.title, state);
    MapCanvas::render(f, areas.map, state);
    Legend::render(f, areas.map, &state.config.ui.legend, &state.theme);
    render_return_button(f, &areas, state);
    render_toggle_strip(f, areas.toggle, state);
    if let Some(sidebar_area) = areas.sidebar {
        Sidebar::render(f, sidebar_area, &state.sidebar, &state.theme);
    }
    StatusBar::render(f, areas.status, state, &state.theme);

    // Modal overlay above the main UI
    if let Some(overlay) = &state.overlay {
        overlay.render(f, f.area(), &state.theme);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref err) = state.error_message {
        render_error_overlay(f, err, &state.theme);
    }
}

/// Render title bar with the application name and current view
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let view_label = match state.controller.drilldown_hub() {
        Some(hub_id) => state
            .index
            .place(hub_id)
            .map_or(hub_id, |place| place.name.as_str()),
        None => "all hubs",
    };
    let title = format!(" {APP_NAME} - {view_label}");

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render the one-column strip that toggles the sidebar.
///
/// The glyph points at what a click does: '<' pulls the hidden sidebar
/// out, '>' pushes the open one away.
fn render_toggle_strip(f: &mut Frame, area: Rect, state: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let glyph = if state.sidebar.visible() { ">" } else { "<" };
    let strip = Style::default().bg(state.theme.surface);

    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        if row == area.height / 2 {
            lines.push(Line::from(Span::styled(
                glyph,
                Style::default()
                    .fg(state.theme.accent)
                    .bg(state.theme.surface)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(" ", strip)));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// Render the clickable control that returns to the overview.
fn render_return_button(f: &mut Frame, areas: &ScreenAreas, state: &AppState) {
    let Some(button) = areas.return_button else {
        return;
    };

    let label = Paragraph::new(RETURN_LABEL).style(
        Style::default()
            .fg(state.theme.background)
            .bg(state.theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    f.render_widget(Clear, button);
    f.render_widget(label, button);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error_text: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    // Render opaque background
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    // Split into title and message
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(2), // Help text
        ])
        .split(area);

    // Title with error styling
    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    // Error message with word wrap
    let message = Paragraph::new(error_text)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(message, chunks[1]);

    // Help text
    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ])])
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
