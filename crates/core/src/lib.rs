// Core types - selection identity, grid positions, highlight state

pub mod selection;

pub use selection::{GridPosition, RowPath, SelectionId, SelectionState};
