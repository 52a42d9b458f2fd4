//! Table model structures.

use serde::{Deserialize, Serialize};

/// A row of cell values.
///
/// Rows keep the cells in the order they were read. No padding is applied, so
/// rows of the same table may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Create a row from its cell values.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Get the cell values.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Get a cell by column index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|s| s.as_str())
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over cell values.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|s| s.as_str())
    }

    /// Consume the row and return its cells.
    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }

    pub(crate) fn push(&mut self, value: String) {
        self.cells.push(value);
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self::new(cells)
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// A table read from a spreadsheet.
///
/// Built once per read and handed to the caller; there is no way to modify it
/// afterwards other than consuming it with [`Table::into_rows`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get a cell value by row and column index.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Consume the table into plain nested vectors.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows.into_iter().map(Row::into_cells).collect()
    }

    pub(crate) fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }
}

impl From<Vec<Vec<String>>> for Table {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: rows.into_iter().map(Row::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
