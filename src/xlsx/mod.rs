//! XLSX (Excel) workbook reader.
//!
//! Reads the first worksheet of an Office Open XML workbook into a
//! [`Table`]. The shared strings part is loaded first because worksheet
//! cells refer to it by index.
//!
//! # Example
//!
//! ```no_run
//! use sheetgrid::xlsx;
//!
//! let table = xlsx::read_xlsx_file("spreadsheet.xlsx")?;
//! for row in &table {
//!     println!("{}", row.cells().join(" | "));
//! }
//! # Ok::<(), sheetgrid::Error>(())
//! ```

mod cell;
mod shared_strings;
mod worksheet;
mod xml;

pub use shared_strings::SharedStrings;
pub use worksheet::decode_worksheet;

use crate::container::XlsxArchive;
use crate::error::{Error, Result};
use crate::model::Table;
use std::path::Path;

/// Archive path of the first worksheet.
pub const FIRST_WORKSHEET_PATH: &str = "xl/worksheets/sheet1.xml";

/// Archive path of the shared strings table.
pub const SHARED_STRINGS_PATH: &str = "xl/sharedStrings.xml";

/// Read the first worksheet of an XLSX file.
///
/// The archive is closed before this returns, whether or not reading succeeds.
pub fn read_xlsx_file(path: impl AsRef<Path>) -> Result<Table> {
    let archive = XlsxArchive::open(path)?;
    read_archive(&archive)
}

/// Read the first worksheet of an XLSX workbook held in memory.
pub fn read_xlsx_bytes(data: Vec<u8>) -> Result<Table> {
    let archive = XlsxArchive::from_bytes(data)?;
    read_archive(&archive)
}

/// Read the first worksheet from an opened archive.
pub fn read_archive(archive: &XlsxArchive) -> Result<Table> {
    if !archive.has_entry(FIRST_WORKSHEET_PATH) {
        return Err(Error::WorksheetMissing(FIRST_WORKSHEET_PATH.to_string()));
    }

    let shared_bytes = match archive.read_optional_entry(SHARED_STRINGS_PATH) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("cannot read {}: {}", SHARED_STRINGS_PATH, e);
            None
        }
    };
    let shared = SharedStrings::from_entry(shared_bytes.as_deref());

    let sheet = archive.read_entry(FIRST_WORKSHEET_PATH)?;
    decode_worksheet(&sheet, &shared)
}
