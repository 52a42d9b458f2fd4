//! Read options configuration.

/// Dialect used to tokenize delimited text.
///
/// The defaults describe plain CSV: comma separated, double-quote quoted,
/// backslash as escape character, newline terminated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field separator
    pub delimiter: u8,

    /// Quote character
    pub quote: u8,

    /// Escape character inside quoted fields (`None` means doubled quotes only)
    pub escape: Option<u8>,

    /// Trim surrounding whitespace from every field
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            escape: Some(b'\\'),
            trim: false,
        }
    }
}

impl CsvOptions {
    /// Create default CSV options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character.
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Set or clear the escape character.
    pub fn with_escape(mut self, escape: Option<u8>) -> Self {
        self.escape = escape;
        self
    }

    /// Trim whitespace around fields.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// Options for reading spreadsheet files.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Dialect for `.csv` files
    pub csv: CsvOptions,
}

impl ReadOptions {
    /// Create default read options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSV dialect.
    pub fn with_csv(mut self, csv: CsvOptions) -> Self {
        self.csv = csv;
        self
    }
}
