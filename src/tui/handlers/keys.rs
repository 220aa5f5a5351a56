//! Keyboard input handling.
//!
//! Key events resolve to an [`Action`] through the shortcut registry and
//! a small dispatcher applies the action to the state. Which registry
//! context applies depends on whether a modal overlay is up.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::shortcuts::Action;
use crate::tui::{AppState, Overlay};

/// Handle a key event.
///
/// Returns `Ok(true)` when the event changed state.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // If error overlay is shown, allow dismissing with Enter or Esc.
    // Block all other input while it is up.
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
            return Ok(true);
        }
        return Ok(false);
    }

    let context = if state.overlay.is_some() {
        "overlay"
    } else {
        "map"
    };

    match state.shortcuts.lookup(context, key) {
        Some(action) => dispatch_action(state, action),
        None => Ok(false),
    }
}

/// Apply a resolved action to the application state.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // In the overlay context the vertical pan keys scroll the overlay
        Action::PanUp => {
            if let Some(overlay) = &mut state.overlay {
                overlay.scroll_up();
            } else {
                state.viewport.pan(0.0, 1.0);
            }
        }
        Action::PanDown => {
            if let Some(overlay) = &mut state.overlay {
                overlay.scroll_down();
            } else {
                state.viewport.pan(0.0, -1.0);
            }
        }
        Action::PanLeft => state.viewport.pan(-1.0, 0.0),
        Action::PanRight => state.viewport.pan(1.0, 0.0),
        Action::ZoomIn => state.viewport.zoom_in(),
        Action::ZoomOut => state.viewport.zoom_out(),

        Action::ShowOverview => state.show_overview(),
        Action::ToggleSidebar => state.toggle_sidebar(),
        Action::Reload => state.reload(),

        Action::ToggleHelp => {
            if state.overlay.as_ref().is_some_and(Overlay::is_help) {
                state.overlay = None;
            } else {
                state.overlay = Some(Overlay::help());
            }
        }

        Action::Quit => state.should_quit = true,

        // Escape walks back out: overlay, then sidebar, then hub focus
        Action::Cancel => {
            if state.overlay.is_some() {
                state.overlay = None;
            } else if state.controller.panel_open() {
                state.close_panel();
            } else if state.controller.drilldown_hub().is_some() {
                state.show_overview();
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::config::Config;
    use crate::models::{ItemRecord, LinkRecord, PlaceRecord};
    use crate::parser::RawTables;
    use crate::services::DataIndex;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn place(id: &str, category: &str) -> PlaceRecord {
        PlaceRecord {
            id: Some(id.to_string()),
            name: Some(format!("{id} name")),
            category: Some(category.to_string()),
            latitude: Some("48.0".to_string()),
            longitude: Some("2.0".to_string()),
            color: Some("#7678ED".to_string()),
        }
    }

    fn sample_state() -> AppState {
        let tables = RawTables {
            places: vec![place("h1", "hub"), place("e1", "entity")],
            links: vec![LinkRecord {
                hub_id: Some("h1".to_string()),
                entity_id: Some("e1".to_string()),
            }],
            items: vec![ItemRecord {
                entity_id: Some("e1".to_string()),
                title: Some("piece".to_string()),
                date: Some("2003".to_string()),
                category: Some("Print".to_string()),
                asset_path: None,
            }],
        };
        let mut state = AppState::new(Config::default(), DataIndex::build(&tables));
        state.overlay = None;
        state
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut state = sample_state();
        assert!(handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
        assert!(state.should_quit);
    }

    #[test]
    fn test_error_blocks_input_until_dismissed() {
        let mut state = sample_state();
        state.set_error("boom");

        // Blocked while the error is up
        assert!(!handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
        assert!(!state.should_quit);

        // Enter dismisses, next key works again
        assert!(handle_key_event(&mut state, key(KeyCode::Enter)).unwrap());
        assert!(state.error_message.is_none());
        assert!(handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
        assert!(state.should_quit);
    }

    #[test]
    fn test_escape_walks_back_out() {
        let mut state = sample_state();
        state.drilldown("h1");
        state.open_panel("e1");

        dispatch_action(&mut state, Action::Cancel).unwrap();
        assert!(!state.controller.panel_open());
        assert_eq!(state.controller.drilldown_hub(), Some("h1"));

        dispatch_action(&mut state, Action::Cancel).unwrap();
        assert!(state.controller.drilldown_hub().is_none());
    }

    #[test]
    fn test_help_toggles() {
        let mut state = sample_state();
        dispatch_action(&mut state, Action::ToggleHelp).unwrap();
        assert!(state.overlay.as_ref().is_some_and(Overlay::is_help));
        dispatch_action(&mut state, Action::ToggleHelp).unwrap();
        assert!(state.overlay.is_none());
    }

    #[test]
    fn test_help_replaces_welcome() {
        let mut state = sample_state();
        state.overlay = Some(Overlay::welcome());
        dispatch_action(&mut state, Action::ToggleHelp).unwrap();
        assert!(state.overlay.as_ref().is_some_and(Overlay::is_help));
    }

    #[test]
    fn test_pan_keys_scroll_open_overlay() {
        let mut state = sample_state();
        let center = state.viewport.center();
        state.overlay = Some(Overlay::help());

        dispatch_action(&mut state, Action::PanDown).unwrap();

        // The viewport never moved
        assert_eq!(state.viewport.center(), center);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut state = sample_state();
        assert!(!handle_key_event(&mut state, key(KeyCode::Char('z'))).unwrap());
    }

    #[test]
    fn test_overview_key_resets_drilldown() {
        let mut state = sample_state();
        state.drilldown("h1");
        assert!(handle_key_event(&mut state, key(KeyCode::Char('o'))).unwrap());
        assert!(state.controller.drilldown_hub().is_none());
    }
}
