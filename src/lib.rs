//! # sheetgrid
//!
//! Read CSV and XLSX spreadsheets into plain rows of strings.
//!
//! A read returns a [`Table`]: rows in file order, each holding its cell
//! values as strings. Numbers, dates and booleans keep the raw text stored in
//! the file. Rows are not padded, so their lengths may differ.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sheetgrid::read_file;
//!
//! let table = read_file("data.xlsx")?;
//! for row in &table {
//!     println!("{:?}", row.cells());
//! }
//! # Ok::<(), sheetgrid::Error>(())
//! ```
//!
//! ## Formats
//!
//! - `.csv`: comma separated, double-quote quoted, backslash escaped.
//! - `.xlsx`: only the first worksheet (`xl/worksheets/sheet1.xml`) is read.
//!   Other sheets of a multi-sheet workbook are ignored without notice.
//! - `.xls`: recognized, but always fails with [`Error::UnsupportedFormat`].
//!
//! ## Features
//!
//! - `async`: [`read_file_async`] with Tokio
//! - `ffi`: C-ABI bindings for foreign language integration

pub mod container;
pub mod delimited;
pub mod detect;
pub mod error;
pub mod model;
pub mod options;
pub mod render;
pub mod xlsx;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports
pub use container::XlsxArchive;
pub use detect::FormatType;
pub use error::{Error, Result};
pub use model::{Row, Table};
pub use options::{CsvOptions, ReadOptions};

use std::path::Path;

/// Read a spreadsheet file into a table.
///
/// The format is chosen by the file extension, compared case-insensitively.
/// For workbooks only the first worksheet is read.
///
/// # Errors
///
/// - [`Error::UnsupportedFormat`] for unknown extensions and for `.xls`
/// - [`Error::FileNotFound`] if the file does not exist
/// - [`Error::ArchiveOpen`] if an `.xlsx` file is not a ZIP container
/// - [`Error::WorksheetMissing`] if the workbook has no first worksheet
/// - [`Error::XmlParse`] if the worksheet XML is malformed
///
/// # Example
///
/// ```no_run
/// use sheetgrid::read_file;
///
/// let table = read_file("data.csv")?;
/// println!("Rows: {}", table.row_count());
/// # Ok::<(), sheetgrid::Error>(())
/// ```
pub fn read_file(path: impl AsRef<Path>) -> Result<Table> {
    read_file_with_options(path, &ReadOptions::default())
}

/// Read a spreadsheet file into a table with options.
///
/// # Example
///
/// ```no_run
/// use sheetgrid::{read_file_with_options, CsvOptions, ReadOptions};
///
/// let options = ReadOptions::new().with_csv(CsvOptions::new().with_delimiter(b';'));
/// let table = read_file_with_options("data.csv", &options)?;
/// # Ok::<(), sheetgrid::Error>(())
/// ```
pub fn read_file_with_options(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Table> {
    let path = path.as_ref();
    let format = FormatType::from_path(path)?;
    log::debug!("reading {} as {:?}", path.display(), format);

    match format {
        FormatType::Csv => delimited::read_csv_file(path, &options.csv),
        FormatType::Xlsx => xlsx::read_xlsx_file(path),
        FormatType::Xls => Err(unsupported(format)),
    }
}

/// Read spreadsheet data already held in memory.
///
/// # Example
///
/// ```no_run
/// use sheetgrid::{read_bytes, FormatType};
///
/// let data = std::fs::read("data.xlsx")?;
/// let table = read_bytes(&data, FormatType::Xlsx)?;
/// # Ok::<(), sheetgrid::Error>(())
/// ```
pub fn read_bytes(data: &[u8], format: FormatType) -> Result<Table> {
    read_bytes_with_options(data, format, &ReadOptions::default())
}

/// Read spreadsheet data already held in memory, with options.
pub fn read_bytes_with_options(
    data: &[u8],
    format: FormatType,
    options: &ReadOptions,
) -> Result<Table> {
    match format {
        FormatType::Csv => delimited::read_csv(data, &options.csv),
        FormatType::Xlsx => xlsx::read_xlsx_bytes(data.to_vec()),
        FormatType::Xls => Err(unsupported(format)),
    }
}

/// Read a spreadsheet file without blocking the async runtime on file I/O.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> sheetgrid::Result<()> {
/// let table = sheetgrid::read_file_async("data.xlsx").await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "async")]
pub async fn read_file_async(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let format = FormatType::from_path(path)?;
    if !format.is_readable() {
        return Err(unsupported(format));
    }
    let is_file = tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| Error::from_open(e, path))?;
    read_bytes(&data, format)
}

fn unsupported(format: FormatType) -> Error {
    Error::UnsupportedFormat(format!("{} (.{})", format.name(), format.extension()))
}
