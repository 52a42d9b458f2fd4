//! End-to-end reads of CSV files.

use std::path::PathBuf;

use sheetgrid::{read_file, read_file_with_options, CsvOptions, Error, ReadOptions};
use tempfile::TempDir;

fn write_temp(dir: &TempDir, name: &str, data: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path
}

#[test]
fn rows_match_tokenized_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_temp(
        &dir,
        "people.csv",
        "name,city\n\"Doe, Jane\",Oslo\n\"say \\\"hi\\\"\",\"two\nlines\"\n",
    );

    let table = read_file(&path).unwrap();
    assert_eq!(
        table.into_rows(),
        vec![
            vec!["name", "city"],
            vec!["Doe, Jane", "Oslo"],
            vec!["say \"hi\"", "two\nlines"],
        ]
    );
}

#[test]
fn uppercase_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_temp(&dir, "DATA.CSV", "1,2\n");
    assert_eq!(read_file(&path).unwrap().into_rows(), vec![vec!["1", "2"]]);
}

#[test]
fn ragged_rows_are_not_padded() {
    let dir = TempDir::new().unwrap();
    let path = write_temp(&dir, "ragged.csv", "a,b,c\nd\n");

    let table = read_file(&path).unwrap();
    assert_eq!(table.max_width(), 3);
    assert_eq!(table.row(1).unwrap().len(), 1);
}

#[test]
fn custom_dialect() {
    let dir = TempDir::new().unwrap();
    let path = write_temp(&dir, "semi.csv", "a;'b;c'\n");
    let options =
        ReadOptions::new().with_csv(CsvOptions::new().with_delimiter(b';').with_quote(b'\''));

    let table = read_file_with_options(&path, &options).unwrap();
    assert_eq!(table.into_rows(), vec![vec!["a", "b;c"]]);
}

#[test]
fn missing_csv_file() {
    let dir = TempDir::new().unwrap();
    let err = read_file(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, Error::FileNotFound(_)));
}
