//! Matrix table visual.
//!
//! Renders matrix-shaped report data as a table with a light/dark theme
//! toggle and a value-scaling selector, and forwards row/cell clicks to the
//! host's selection API. All host interaction goes through the ports in
//! [`host`]; the grid itself is built by `gridview-engine`.

pub mod host;
pub mod selection_bridge;
pub mod settings_controller;
pub mod view;
pub mod visual;

pub use host::{NoPersistence, NoStyleContext, PersistenceHost, SelectionHost, StyleContext};
pub use selection_bridge::SelectionBridge;
pub use settings_controller::SettingsController;
pub use view::View;
pub use visual::Visual;
