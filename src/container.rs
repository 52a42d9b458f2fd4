//! ZIP container access for XLSX workbooks.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Upper bound on the buffer reserved up front for an entry.
///
/// The declared size comes from the archive headers and can be anything, so it
/// is only a hint; `read_to_end` grows the buffer past this as data arrives.
const MAX_ENTRY_PREALLOC: u64 = 1 << 20;

/// Read-only view over the ZIP archive of an XLSX workbook.
///
/// The archive is held in memory and released when the value is dropped, so a
/// read that returns early on error cannot leak the handle.
pub struct XlsxArchive {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl XlsxArchive {
    /// Open a workbook archive from a file path.
    ///
    /// Fails with [`Error::FileNotFound`] when the path is not a readable file
    /// and [`Error::ArchiveOpen`] when the content is not a ZIP container.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sheetgrid::container::XlsxArchive;
    ///
    /// let archive = XlsxArchive::open("data.xlsx")?;
    /// assert!(archive.has_entry("xl/worksheets/sheet1.xml"));
    /// # Ok::<(), sheetgrid::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|e| Error::from_open(e, path))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Create a workbook archive from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))
            .map_err(|e| Error::ArchiveOpen(e.to_string()))?;
        log::debug!("opened archive with {} entries", archive.len());
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Create a workbook archive from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Check if an entry exists in the archive.
    pub fn has_entry(&self, name: &str) -> bool {
        self.archive.borrow().index_for_name(name).is_some()
    }

    /// Read the raw bytes of an entry.
    ///
    /// Fails with [`Error::EntryNotFound`] if the archive has no such entry.
    pub fn read_entry(&self, name: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(name)
            .map_err(|_| Error::EntryNotFound(name.to_string()))?;

        let mut bytes = Vec::with_capacity(file.size().min(MAX_ENTRY_PREALLOC) as usize);
        file.read_to_end(&mut bytes)?;
        log::debug!("read entry {} ({} bytes)", name, bytes.len());
        Ok(bytes)
    }

    /// Read an entry if it exists.
    ///
    /// Absence is `Ok(None)`; a present but unreadable entry is still an error.
    pub fn read_optional_entry(&self, name: &str) -> Result<Option<Vec<u8>>> {
        if !self.has_entry(name) {
            return Ok(None);
        }
        self.read_entry(name).map(Some)
    }
}

impl std::fmt::Debug for XlsxArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XlsxArchive")
            .field("entries", &self.archive.borrow().len())
            .finish()
    }
}

/// Decode an XML entry to text.
///
/// Workbook parts are normally UTF-8, but a byte order mark may announce
/// UTF-8 or UTF-16 (either endianness). UTF-16 content is converted and its
/// declaration rewritten so the XML reader does not re-interpret it.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    let invalid = |e: std::string::FromUtf8Error| Error::XmlParse(format!("invalid UTF-8: {}", e));

    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8(rest.to_vec()).map_err(invalid),
        [0xFF, 0xFE, rest @ ..] => {
            decode_utf16(rest, u16::from_le_bytes).map(|s| rewrite_declared_encoding(&s))
        }
        [0xFE, 0xFF, rest @ ..] => {
            decode_utf16(rest, u16::from_be_bytes).map(|s| rewrite_declared_encoding(&s))
        }
        _ => String::from_utf8(bytes.to_vec()).map_err(invalid),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::XmlParse(format!("invalid UTF-16: {}", e)))
}

fn rewrite_declared_encoding(content: &str) -> String {
    if !content.starts_with("<?xml") {
        return content.to_string();
    }
    let Some(end) = content.find("?>") else {
        return content.to_string();
    };
    let (decl, rest) = content.split_at(end + 2);
    let decl = ["\"UTF-16\"", "'UTF-16'", "\"utf-16\"", "'utf-16'"]
        .iter()
        .fold(decl.to_string(), |d, from| d.replace(from, "\"UTF-8\""));
    format!("{}{}", decl, rest)
}
