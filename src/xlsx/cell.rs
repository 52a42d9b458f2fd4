//! Raw worksheet cells and their resolution to text.

use super::shared_strings::SharedStrings;

/// How a cell's payload is interpreted, from its `t` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellKind {
    /// `t="s"`: the value is an index into the shared strings table.
    SharedString,
    /// `t="inlineStr"`: the text lives in an `<is>` child.
    InlineString,
    /// Anything else (numbers, booleans, dates, errors, formula results).
    Literal,
}

impl CellKind {
    pub(crate) fn from_type_attr(t: Option<&str>) -> Self {
        match t {
            Some("s") => CellKind::SharedString,
            Some("inlineStr") => CellKind::InlineString,
            _ => CellKind::Literal,
        }
    }
}

/// A cell as read from the worksheet, before shared strings are applied.
#[derive(Debug, Clone)]
pub(crate) struct RawCell {
    pub(crate) kind: CellKind,
    /// Text of `<v>`, `None` when the element is absent.
    pub(crate) value: Option<String>,
    /// Text collected from `<is>`, `None` when there is no such element.
    pub(crate) inline: Option<String>,
}

impl RawCell {
    pub(crate) fn new(kind: CellKind) -> Self {
        Self {
            kind,
            value: None,
            inline: None,
        }
    }

    /// Resolve the cell to its final text.
    pub(crate) fn resolve(self, shared: &SharedStrings) -> String {
        match self.kind {
            CellKind::SharedString => {
                let Some(raw) = self.value else {
                    return String::new();
                };
                match raw.trim().parse::<usize>() {
                    Ok(idx) => match shared.get(idx) {
                        Some(s) => s.to_string(),
                        None => {
                            log::warn!(
                                "shared string index {} out of range ({} entries)",
                                idx,
                                shared.len()
                            );
                            String::new()
                        }
                    },
                    Err(_) => {
                        log::warn!("invalid shared string index {:?}", raw);
                        String::new()
                    }
                }
            }
            CellKind::InlineString => self.inline.or(self.value).unwrap_or_default(),
            CellKind::Literal => self.value.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(kind: CellKind, value: Option<&str>) -> RawCell {
        RawCell {
            kind,
            value: value.map(String::from),
            inline: None,
        }
    }

    #[test]
    fn test_kind_from_attr() {
        assert_eq!(CellKind::from_type_attr(Some("s")), CellKind::SharedString);
        assert_eq!(
            CellKind::from_type_attr(Some("inlineStr")),
            CellKind::InlineString
        );
        for t in [None, Some("n"), Some("b"), Some("e"), Some("str"), Some("d")] {
            assert_eq!(CellKind::from_type_attr(t), CellKind::Literal);
        }
    }

    #[test]
    fn test_resolve_shared() {
        let shared = SharedStrings::from(vec!["Hi".to_string()]);
        assert_eq!(cell(CellKind::SharedString, Some("0")).resolve(&shared), "Hi");
        assert_eq!(cell(CellKind::SharedString, Some("1")).resolve(&shared), "");
        assert_eq!(cell(CellKind::SharedString, Some("x")).resolve(&shared), "");
        assert_eq!(cell(CellKind::SharedString, None).resolve(&shared), "");
    }

    #[test]
    fn test_resolve_literal_verbatim() {
        let shared = SharedStrings::default();
        assert_eq!(cell(CellKind::Literal, Some("42")).resolve(&shared), "42");
        assert_eq!(
            cell(CellKind::Literal, Some("3.1400000000000001")).resolve(&shared),
            "3.1400000000000001"
        );
        assert_eq!(cell(CellKind::Literal, Some("#DIV/0!")).resolve(&shared), "#DIV/0!");
        assert_eq!(cell(CellKind::Literal, None).resolve(&shared), "");
    }

    #[test]
    fn test_resolve_inline() {
        let shared = SharedStrings::default();
        let mut c = RawCell::new(CellKind::InlineString);
        c.inline = Some("inline".to_string());
        assert_eq!(c.resolve(&shared), "inline");
        assert_eq!(cell(CellKind::InlineString, None).resolve(&shared), "");
    }
}
