//! Mouse input handling.
//!
//! Every event is resolved against the layout of the last rendered frame:
//! marker hits in the map area, the sidebar toggle strip, the return
//! control, and the sidebar itself. Clicks on a marker dispatch the
//! action attached to it when the marker was created.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::map::ClickAction;
use crate::tui::overlay::overlay_rect;
use crate::tui::{compute_layout, AppState, ScreenAreas};

/// Handle a mouse event.
///
/// Returns `Ok(true)` when the event changed state.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<bool> {
    // The error overlay is keyboard-only; see the key handler
    if state.error_message.is_some() {
        return Ok(false);
    }

    let areas = compute_layout(state, state.last_area);
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved => Ok(handle_move(state, &areas, column, row)),
        MouseEventKind::Down(MouseButton::Left) => handle_click(state, &areas, column, row),
        MouseEventKind::ScrollUp => handle_scroll(state, &areas, column, row, true),
        MouseEventKind::ScrollDown => handle_scroll(state, &areas, column, row, false),
        _ => Ok(false),
    }
}

/// Track which marker the pointer rests on.
///
/// Only markers carrying a hover label participate, so hubs never grow
/// a name tag from a stray pointer.
fn handle_move(state: &mut AppState, areas: &ScreenAreas, column: u16, row: u16) -> bool {
    if state.overlay.is_some() {
        return false;
    }

    let hovered = if contains(areas.map_inner, column, row) {
        state
            .scene
            .marker_at(&state.viewport, areas.map_inner, column, row)
            .filter(|marker| marker.hover_label.is_some())
            .map(|marker| marker.place_id.clone())
    } else {
        None
    };

    let changed = hovered.as_deref() != state.scene.hovered();
    state.scene.set_hovered(hovered);
    changed
}

fn handle_click(
    state: &mut AppState,
    areas: &ScreenAreas,
    column: u16,
    row: u16,
) -> Result<bool> {
    // A click outside the modal dismisses it; inside it is inert
    if state.overlay.is_some() {
        if contains(overlay_rect(state.last_area), column, row) {
            return Ok(false);
        }
        state.overlay = None;
        return Ok(true);
    }

    if let Some(button) = areas.return_button {
        if contains(button, column, row) {
            state.show_overview();
            return Ok(true);
        }
    }

    if contains(areas.toggle, column, row) {
        state.toggle_sidebar();
        return Ok(true);
    }

    if contains(areas.map_inner, column, row) {
        // Clone out of the scene before taking &mut state again
        let target = state
            .scene
            .marker_at(&state.viewport, areas.map_inner, column, row)
            .map(|marker| (marker.place_id.clone(), marker.action));
        if let Some((place_id, action)) = target {
            match action {
                ClickAction::Drilldown => state.drilldown(&place_id),
                ClickAction::OpenPanel => state.open_panel(&place_id),
            }
            return Ok(true);
        }
    }

    Ok(false)
}

/// The wheel scrolls whatever it is over: overlay text, sidebar content,
/// or the map zoom level.
fn handle_scroll(
    state: &mut AppState,
    areas: &ScreenAreas,
    column: u16,
    row: u16,
    up: bool,
) -> Result<bool> {
    if let Some(overlay) = &mut state.overlay {
        if up {
            overlay.scroll_up();
        } else {
            overlay.scroll_down();
        }
        return Ok(true);
    }

    if let Some(sidebar) = areas.sidebar {
        if contains(sidebar, column, row) {
            if up {
                state.sidebar.scroll_up();
            } else {
                state.sidebar.scroll_down();
            }
            return Ok(true);
        }
    }

    if contains(areas.map, column, row) {
        if up {
            state.viewport.zoom_in();
        } else {
            state.viewport.zoom_out();
        }
        return Ok(true);
    }

    Ok(false)
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}
