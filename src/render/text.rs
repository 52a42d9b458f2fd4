//! Delimited text renderers.

use crate::error::{Error, Result};
use crate::model::Table;
use crate::options::CsvOptions;

/// Convert a table to tab-separated lines, one line per row.
pub fn to_text(table: &Table) -> String {
    let mut output = String::new();
    for row in table {
        output.push_str(&row.cells().join("\t"));
        output.push('\n');
    }
    output
}

/// Convert a table to CSV using the given dialect.
///
/// Rows keep their own lengths; nothing is padded.
pub fn to_csv(table: &Table, options: &CsvOptions) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .flexible(true)
        .from_writer(Vec::new());

    for row in table {
        writer.write_record(row.cells())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Render(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Render(e.to_string()))
}
