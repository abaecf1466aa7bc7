//! Forwards row and cell clicks to the host selection API.
//!
//! The identity is derived from the row's path in the row hierarchy. The
//! local highlight only moves once the host call has completed; a host
//! failure propagates to the caller and leaves the highlight untouched.

use gridview_core::{GridPosition, RowPath, SelectionId, SelectionState};
use gridview_engine::Grid;
use gridview_protocol::HostError;

use crate::host::SelectionHost;

pub struct SelectionBridge<S> {
    host: S,
    state: SelectionState,
}

impl<S: SelectionHost> SelectionBridge<S> {
    pub fn new(host: S) -> Self {
        Self {
            host,
            state: SelectionState::new(),
        }
    }

    /// Select a whole row. Returns `Ok(false)` if the grid has no such row.
    pub async fn select_row(&mut self, grid: &Grid, row: usize) -> Result<bool, HostError> {
        self.select(grid, GridPosition::row(row)).await
    }

    /// Select one cell. The identity is still the row's; the highlight is
    /// the cell.
    pub async fn select_cell(
        &mut self,
        grid: &Grid,
        row: usize,
        col: usize,
    ) -> Result<bool, HostError> {
        if col >= grid.column_count() {
            log::debug!("Ignoring click on missing column {} (grid has {})", col, grid.column_count());
            return Ok(false);
        }
        self.select(grid, GridPosition::cell(row, col)).await
    }

    async fn select(&mut self, grid: &Grid, position: GridPosition) -> Result<bool, HostError> {
        let Some(grid_row) = grid.rows.get(position.row) else {
            log::debug!("Ignoring click on missing row {} (grid has {})", position.row, grid.row_count());
            return Ok(false);
        };

        let id = self.identity_for(&RowPath::new(grid_row.path.clone()));
        let selected = self.host.select(&id, true).await?;
        log::debug!("Host selection now holds {} id(s) after selecting {}", selected.len(), id);

        self.state.select(position);
        Ok(true)
    }

    fn identity_for(&self, path: &RowPath) -> SelectionId {
        self.host.create_selection_id(path)
    }

    /// Drop the local highlight (does not touch the host's selection).
    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Keep the highlight consistent with a freshly built grid.
    pub fn sync_with(&mut self, grid: &Grid) {
        self.state.clamp_to(grid.row_count(), grid.column_count());
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn host(&self) -> &S {
        &self.host
    }
}
