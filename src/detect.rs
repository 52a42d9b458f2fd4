//! Format detection for spreadsheet files.

use crate::error::{Error, Result};
use std::path::Path;

/// Spreadsheet format recognized from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Comma-separated values (.csv)
    Csv,
    /// Office Open XML workbook (.xlsx)
    Xlsx,
    /// Legacy binary workbook (.xls). Recognized, but there is no decoder for it.
    Xls,
}

impl FormatType {
    /// Look up a format by extension, ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(FormatType::Csv),
            "xlsx" => Some(FormatType::Xlsx),
            "xls" => Some(FormatType::Xls),
            _ => None,
        }
    }

    /// Determine the format from a path's extension.
    ///
    /// Fails with [`Error::UnsupportedFormat`] for a missing or unknown extension.
    ///
    /// # Example
    ///
    /// ```
    /// use sheetgrid::detect::FormatType;
    ///
    /// assert_eq!(FormatType::from_path("Report.XLSX")?, FormatType::Xlsx);
    /// assert!(FormatType::from_path("notes.docx").is_err());
    /// # Ok::<(), sheetgrid::Error>(())
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(format!("{}", path.display())))?;
        Self::from_extension(ext).ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
    }

    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Csv => "csv",
            FormatType::Xlsx => "xlsx",
            FormatType::Xls => "xls",
        }
    }

    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            FormatType::Csv => "Comma-Separated Values",
            FormatType::Xlsx => "Excel Workbook",
            FormatType::Xls => "Excel 97-2003 Workbook",
        }
    }

    /// Whether a decoder exists for this format.
    pub fn is_readable(&self) -> bool {
        !matches!(self, FormatType::Xls)
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
