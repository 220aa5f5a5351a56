//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === VIEWPORT ===
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,

    // === VIEWS ===
    ShowOverview,
    ToggleSidebar,

    // === DATA ===
    Reload,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Quit,
    Cancel,
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// The key itself
    pub code: KeyCode,
    /// Held modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_map_shortcuts();
        registry.register_overlay_shortcuts();
        registry
    }

    /// Register all shortcuts for the map context.
    fn register_map_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "map";

        // === VIEWPORT ===
        self.register(ctx, K::Up, M::NONE, Action::PanUp);
        self.register(ctx, K::Down, M::NONE, Action::PanDown);
        self.register(ctx, K::Left, M::NONE, Action::PanLeft);
        self.register(ctx, K::Right, M::NONE, Action::PanRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::PanUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::PanDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::PanLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::PanRight);
        self.register(ctx, K::Char('+'), M::NONE, Action::ZoomIn);
        self.register(ctx, K::Char('='), M::NONE, Action::ZoomIn);
        self.register(ctx, K::Char('-'), M::NONE, Action::ZoomOut);

        // === VIEWS ===
        self.register(ctx, K::Char('o'), M::NONE, Action::ShowOverview);
        self.register(ctx, K::Backspace, M::NONE, Action::ShowOverview);
        self.register(ctx, K::Char('s'), M::NONE, Action::ToggleSidebar);

        // === DATA ===
        self.register(ctx, K::Char('r'), M::NONE, Action::Reload);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register all shortcuts for the overlay context (welcome and help).
    fn register_overlay_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "overlay";

        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Enter, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Up, M::NONE, Action::PanUp);
        self.register(ctx, K::Down, M::NONE, Action::PanDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::PanUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::PanDown);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        // Test panning
        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(registry.lookup("map", event), Some(Action::PanUp));

        // Test reload
        let event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(registry.lookup("map", event), Some(Action::Reload));
    }

    #[test]
    fn test_vim_panning() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(
                "map",
                KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)
            ),
            Some(Action::PanLeft)
        );
        assert_eq!(
            registry.lookup(
                "map",
                KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)
            ),
            Some(Action::PanDown)
        );
        assert_eq!(
            registry.lookup(
                "map",
                KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE)
            ),
            Some(Action::PanUp)
        );
        assert_eq!(
            registry.lookup(
                "map",
                KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)
            ),
            Some(Action::PanRight)
        );
    }

    #[test]
    fn test_zoom_keys() {
        let registry = ShortcutRegistry::new();

        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE);
        let equals = KeyEvent::new(KeyCode::Char('='), KeyModifiers::NONE);
        let minus = KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE);

        assert_eq!(registry.lookup("map", plus), Some(Action::ZoomIn));
        assert_eq!(registry.lookup("map", equals), Some(Action::ZoomIn));
        assert_eq!(registry.lookup("map", minus), Some(Action::ZoomOut));
    }

    #[test]
    fn test_overlay_context_ignores_map_keys() {
        let registry = ShortcutRegistry::new();

        // Reload is a map action, not an overlay action
        let event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(registry.lookup("map", event), Some(Action::Reload));
        assert_eq!(registry.lookup("overlay", event), None);

        // Overlay still dismisses with Esc and Enter
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(registry.lookup("overlay", esc), Some(Action::Cancel));
        assert_eq!(registry.lookup("overlay", enter), Some(Action::Cancel));
    }

    #[test]
    fn test_matches_helper() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(registry.matches("map", event, Action::Quit));
        assert!(!registry.matches("map", event, Action::Reload));
    }
}
