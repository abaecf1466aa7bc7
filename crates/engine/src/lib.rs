pub mod cell;
pub mod grid;
pub mod matrix;
pub mod value_format;

pub use cell::{render_cell, CellValue, DateStyle};
pub use grid::{ColumnHeader, Grid, GridBuilder, GridRow};
pub use matrix::{Matrix, MatrixNode};
pub use value_format::{ValueFormat, FormatOption, FORMAT_OPTIONS};
