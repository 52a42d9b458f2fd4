//! Error types for the sheetgrid library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sheetgrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a spreadsheet.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The path does not name a readable file.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file extension is unknown, or names a format with no decoder.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The file could not be opened as a ZIP container.
    #[error("Cannot open archive: {0}")]
    ArchiveOpen(String),

    /// A named entry does not exist in the archive.
    #[error("Archive entry not found: {0}")]
    EntryNotFound(String),

    /// The first worksheet is not present in the workbook.
    #[error("Worksheet missing: {0}")]
    WorksheetMissing(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Error tokenizing delimited text.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    /// Map an I/O error raised while opening `path`.
    ///
    /// `NotFound` becomes [`Error::FileNotFound`]; everything else stays an I/O error.
    pub(crate) fn from_open(err: io::Error, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(path.into()),
            _ => Error::Io(err),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::EntryNotFound("file not found in archive".to_string())
            }
            other => Error::ArchiveOpen(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            if let csv::ErrorKind::Io(e) = err.into_kind() {
                return Error::Io(e);
            }
            return Error::Csv("I/O failure".to_string());
        }
        Error::Csv(err.to_string())
    }
}
