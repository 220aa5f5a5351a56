//! Input handler modules for the map TUI.

pub mod keys;
pub mod mouse;

// Re-export handler functions
pub use keys::{dispatch_action, handle_key_event};
pub use mouse::handle_mouse_event;
