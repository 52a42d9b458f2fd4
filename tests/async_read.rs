//! Async reads (requires the `async` feature).

#![cfg(feature = "async")]

use sheetgrid::{read_file_async, Error};
use tempfile::TempDir;

#[tokio::test]
async fn reads_csv_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::write(&path, "a,b\n1,2\n").unwrap();

    let table = read_file_async(&path).await.unwrap();
    assert_eq!(table.into_rows(), vec![vec!["a", "b"], vec!["1", "2"]]);
}

#[tokio::test]
async fn missing_file() {
    let dir = TempDir::new().unwrap();
    let err = read_file_async(dir.path().join("absent.xlsx"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::FileNotFound(_)));
}

#[tokio::test]
async fn xls_is_unsupported() {
    let err = read_file_async("legacy.xls").await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[tokio::test]
async fn directory_reports_file_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.xlsx");
    std::fs::create_dir(&path).unwrap();

    let err = read_file_async(&path).await.unwrap_err();
    assert!(matches!(err, Error::FileNotFound(_)));
}
