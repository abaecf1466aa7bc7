// Matrix -> display grid projection.
// Straight structural walk: no aggregation, sorting, filtering or paging.

use serde::Serialize;

use crate::cell::{render_cell, CellValue, DateStyle};
use crate::matrix::Matrix;
use crate::value_format::ValueFormat;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHeader {
    pub label: String,
    /// "In Thousand" etc., only when a scaling format is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_label: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    pub label: String,
    /// 0 for top-level row nodes
    pub depth: usize,
    /// Child-index path from the row root, used to build selection identities
    pub path: Vec<usize>,
    /// Exactly one entry per column
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Grid {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<GridRow>,
}

impl Grid {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.cells.get(col).map(String::as_str)
    }

    /// Row label followed by its cells, the way the row is displayed
    pub fn display_row(&self, row: usize) -> Option<Vec<&str>> {
        let row = self.rows.get(row)?;
        let mut out = Vec::with_capacity(row.cells.len() + 1);
        out.push(row.label.as_str());
        out.extend(row.cells.iter().map(String::as_str));
        Some(out)
    }
}

/// Builds a `Grid` from a matrix with the active value format
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    format: ValueFormat,
    dates: DateStyle,
}

impl GridBuilder {
    pub fn new(format: ValueFormat, dates: DateStyle) -> Self {
        Self { format, dates }
    }

    pub fn build(&self, matrix: &Matrix) -> Grid {
        let span_label = self.format.span_label();
        let columns: Vec<ColumnHeader> = matrix
            .leaf_columns()
            .into_iter()
            .map(|column| ColumnHeader {
                label: self.render_label(column.label()),
                span_label,
            })
            .collect();

        let rows = matrix
            .row_nodes()
            .into_iter()
            .map(|(path, node)| {
                let cells = (0..columns.len())
                    .map(|i| match node.value_at(i) {
                        Some(value) => render_cell(value, self.format, &self.dates),
                        None => String::new(),
                    })
                    .collect();
                GridRow {
                    label: self.render_label(node.label()),
                    depth: path.len() - 1,
                    path,
                    cells,
                }
            })
            .collect();

        Grid { columns, rows }
    }

    // Header labels are never scaled: a year column must stay "2022"
    fn render_label(&self, value: &CellValue) -> String {
        render_cell(value, ValueFormat::Default, &self.dates)
    }
}
