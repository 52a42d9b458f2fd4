//! Small helpers shared by the workbook part readers.

use crate::error::{Error, Result};
use quick_xml::events::{BytesCData, BytesStart, BytesText};

/// Tracks element nesting so a truncated document is reported instead of
/// silently yielding whatever was read before the cut.
#[derive(Debug, Default)]
pub(crate) struct Nesting {
    depth: usize,
    saw_root: bool,
}

impl Nesting {
    pub(crate) fn open(&mut self) {
        self.depth += 1;
        self.saw_root = true;
    }

    pub(crate) fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn empty(&mut self) {
        self.saw_root = true;
    }

    /// Validate the state at end of input.
    pub(crate) fn finish(&self, part: &str) -> Result<()> {
        if !self.saw_root {
            return Err(Error::XmlParse(format!("{}: no root element", part)));
        }
        if self.depth > 0 {
            return Err(Error::XmlParse(format!(
                "{}: unexpected end of document ({} unclosed elements)",
                part, self.depth
            )));
        }
        Ok(())
    }
}

/// Unescaped content of a text node.
pub(crate) fn text(e: &BytesText<'_>) -> Result<String> {
    e.unescape()
        .map(|t| t.into_owned())
        .map_err(|err| Error::XmlParse(err.to_string()))
}

/// Raw content of a CDATA section.
pub(crate) fn cdata(e: &BytesCData<'_>) -> String {
    String::from_utf8_lossy(e).into_owned()
}

/// Value of the attribute with the given local name, if present.
pub(crate) fn attribute(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::XmlParse(err.to_string()))?;
        if attr.key.local_name().as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::XmlParse(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
