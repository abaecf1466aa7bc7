use serde::{Deserialize, Serialize};

/// Opaque identity token minted by the host for a data point.
/// The visual never inspects it, only hands it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId(String);

impl SelectionId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SelectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position of a row node in the row hierarchy: child indices from the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowPath(Vec<usize>);

impl RowPath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// 0 for top-level rows
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

impl From<&[usize]> for RowPath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

/// A clicked row (col = None) or a single cell, in displayed grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub col: Option<usize>,
}

impl GridPosition {
    pub fn row(row: usize) -> Self {
        Self { row, col: None }
    }

    pub fn cell(row: usize, col: usize) -> Self {
        Self { row, col: Some(col) }
    }
}

/// Local highlight state. Only updated after the host confirmed a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<GridPosition>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, position: GridPosition) {
        self.selected = Some(position);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<GridPosition> {
        self.selected
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.selected.map(|p| p.row)
    }

    /// True when the whole row was selected (not a single cell in it).
    pub fn is_row_highlighted(&self, row: usize) -> bool {
        self.selected == Some(GridPosition::row(row))
    }

    pub fn is_cell_highlighted(&self, row: usize, col: usize) -> bool {
        match self.selected {
            Some(GridPosition { row: r, col: None }) => r == row,
            Some(GridPosition { row: r, col: Some(c) }) => r == row && c == col,
            None => false,
        }
    }

    /// Drop the highlight if it points past the end of a freshly built grid.
    pub fn clamp_to(&mut self, rows: usize, cols: usize) {
        let out_of_range = match self.selected {
            Some(GridPosition { row, col }) => row >= rows || col.is_some_and(|c| c >= cols),
            None => false,
        };
        if out_of_range {
            self.selected = None;
        }
    }
}
