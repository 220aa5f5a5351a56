//! The map interaction engine.
//!
//! Owns what is currently drawn (markers and connector lines), which view
//! the map is in (overview or a hub drilldown), and the detail panel flag.
//! Drawing itself is delegated through the narrow [`MapSurface`] and
//! [`PanelSurface`] traits so the engine runs identically against the
//! terminal scene and against fakes in tests.
//!
//! Registries rebuild wholesale on every transition. Nothing is patched
//! incrementally, which keeps transitions trivially correct at the cost of
//! redrawing markers that did not change.

pub mod connectors;
pub mod markers;
pub mod panel;
pub mod surface;
pub mod view;

// Re-export the engine types
pub use connectors::ConnectorRegistry;
pub use markers::MarkerRegistry;
pub use panel::PanelController;
pub use surface::{ClickAction, LineId, LineSpec, MapSurface, MarkerSpec, PanelContent, PanelSurface};
pub use view::{MapView, ViewController};
