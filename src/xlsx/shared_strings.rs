//! XLSX shared strings parsing.

use crate::container::decode_xml_bytes;
use crate::error::{Error, Result};
use quick_xml::events::Event;

use super::xml::{self, Nesting};

/// Where a `<t>` element sits inside a string item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextSlot {
    /// `<si><t>`
    Direct,
    /// `<si><r><t>`
    Run,
}

/// Shared strings table.
///
/// Indexes are positional: every `<si>` item produces exactly one entry, even
/// when it holds no text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedStrings {
    /// All strings in order
    strings: Vec<String>,
}

impl SharedStrings {
    /// Build the table from the optional `xl/sharedStrings.xml` entry.
    ///
    /// A missing or unparsable entry yields an empty table; shared-string
    /// cells then resolve to empty strings.
    pub fn from_entry(bytes: Option<&[u8]>) -> Self {
        let Some(bytes) = bytes else {
            log::debug!("workbook has no shared strings");
            return Self::default();
        };

        match decode_xml_bytes(bytes).and_then(|xml| Self::parse(&xml)) {
            Ok(table) => {
                log::debug!("parsed {} shared strings", table.len());
                table
            }
            Err(e) => {
                log::warn!("ignoring malformed shared strings: {}", e);
                Self::default()
            }
        }
    }

    /// Parse shared strings from XML content.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut strings = Vec::new();
        let mut reader = quick_xml::Reader::from_str(xml);
        let mut nesting = Nesting::default();

        let mut in_si = false;
        // Local names of the elements open inside the current <si>.
        let mut path: Vec<Vec<u8>> = Vec::new();
        let mut slot: Option<TextSlot> = None;
        let mut direct: Option<String> = None;
        let mut runs = String::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    nesting.open();
                    let name = e.local_name();
                    let name = name.as_ref();
                    if !in_si {
                        if name == b"si" {
                            in_si = true;
                            path.clear();
                            direct = None;
                            runs.clear();
                        }
                        continue;
                    }
                    if name == b"t" {
                        slot = match path.last().map(Vec::as_slice) {
                            None => {
                                direct.get_or_insert_with(String::new);
                                Some(TextSlot::Direct)
                            }
                            Some(b"r") if path.len() == 1 => Some(TextSlot::Run),
                            _ => None,
                        };
                    }
                    path.push(name.to_vec());
                }
                Event::Empty(e) => {
                    nesting.empty();
                    if in_si && path.is_empty() && e.local_name().as_ref() == b"t" {
                        direct.get_or_insert_with(String::new);
                    } else if !in_si && e.local_name().as_ref() == b"si" {
                        strings.push(String::new());
                    }
                }
                Event::Text(e) => match slot {
                    Some(TextSlot::Direct) => {
                        if let Some(d) = direct.as_mut() {
                            d.push_str(&xml::text(&e)?);
                        }
                    }
                    Some(TextSlot::Run) => runs.push_str(&xml::text(&e)?),
                    None => {}
                },
                Event::CData(e) => match slot {
                    Some(TextSlot::Direct) => {
                        if let Some(d) = direct.as_mut() {
                            d.push_str(&xml::cdata(&e));
                        }
                    }
                    Some(TextSlot::Run) => runs.push_str(&xml::cdata(&e)),
                    None => {}
                },
                Event::End(e) => {
                    nesting.close();
                    if !in_si {
                        continue;
                    }
                    if path.pop().is_none() {
                        // Closing the <si> itself.
                        let text = direct.take().unwrap_or_else(|| std::mem::take(&mut runs));
                        strings.push(text);
                        runs.clear();
                        in_si = false;
                    } else if e.local_name().as_ref() == b"t" {
                        slot = None;
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        nesting.finish("sharedStrings")?;
        if in_si {
            return Err(Error::XmlParse("sharedStrings: unterminated <si>".to_string()));
        }

        Ok(Self { strings })
    }

    /// Get a string by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    /// Get the count of shared strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl From<Vec<String>> for SharedStrings {
    fn from(strings: Vec<String>) -> Self {
        Self { strings }
    }
}
