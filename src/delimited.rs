//! Delimited text (CSV) reader.
//!
//! Tokenizing is done by the `csv` crate. Every record becomes one row and
//! every field one cell; there is no header handling and rows may differ in
//! length. Blank lines are not records and produce no row.

use crate::error::{Error, Result};
use crate::model::{Row, Table};
use crate::options::CsvOptions;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a CSV file into a table.
///
/// Fails with [`Error::FileNotFound`] when the path is not a readable file.
pub fn read_csv_file(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Table> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| Error::from_open(e, path))?;
    read_csv(file, options)
}

/// Read CSV data from a reader into a table.
pub fn read_csv<R: Read>(reader: R, options: &CsvOptions) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .escape(options.escape)
        .double_quote(true)
        .has_headers(false)
        .flexible(true)
        .trim(if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let mut table = Table::new();
    for result in csv_reader.records() {
        let record = result?;
        table.push_row(Row::new(record.iter().map(String::from).collect()));
    }

    log::debug!("read {} CSV rows", table.row_count());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> Vec<Vec<String>> {
        read_csv(input.as_bytes(), &CsvOptions::default())
            .unwrap()
            .into_rows()
    }

    #[test]
    fn test_blank_lines_skipped() {
        assert_eq!(read("a,b\n\nc,d\n"), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_simple_rows() {
        assert_eq!(
            read("a,b,c\n1,2,3\n"),
            vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]
        );
    }

    #[test]
    fn test_first_row_is_data() {
        let rows = read("name,age\n");
        assert_eq!(rows, vec![vec!["name", "age"]]);
    }

    #[test]
    fn test_quoted_fields() {
        assert_eq!(
            read("\"x, y\",\"line\nbreak\",plain\n"),
            vec![vec!["x, y", "line\nbreak", "plain"]]
        );
    }

    #[test]
    fn test_backslash_escape() {
        assert_eq!(read("\"say \\\"hi\\\"\",z\n"), vec![vec!["say \"hi\"", "z"]]);
    }

    #[test]
    fn test_ragged_rows() {
        assert_eq!(
            read("a,b,c\nd\ne,f\n"),
            vec![vec!["a", "b", "c"], vec!["d"], vec!["e", "f"]]
        );
    }

    #[test]
    fn test_missing_trailing_newline() {
        assert_eq!(read("a,b"), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(read("").is_empty());
    }

    #[test]
    fn test_custom_delimiter_and_trim() {
        let opts = CsvOptions::new().with_delimiter(b';').with_trim(true);
        let table = read_csv(" a ; b \n".as_bytes(), &opts).unwrap();
        assert_eq!(table.into_rows(), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_missing_file() {
        let err = read_csv_file("no/such/file.csv", &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
