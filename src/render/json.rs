//! JSON renderer implementation.

use crate::error::{Error, Result};
use crate::model::Table;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a table to JSON.
///
/// The output is an object with a single `rows` array of string arrays.
pub fn to_json(table: &Table, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(table),
        JsonFormat::Pretty => serde_json::to_string_pretty(table),
    };
    json.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
