//! Benchmarks for sheetgrid reading performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks read synthetic workbooks and CSV data of various sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sheetgrid::FormatType;
use std::io::Cursor;

const COLUMNS: usize = 8;

/// Creates a synthetic XLSX workbook with the given number of rows.
///
/// Even columns hold shared strings, odd columns hold numbers.
fn create_test_xlsx(row_count: usize) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let unique = 100;
    let mut sst = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );
    for i in 0..unique {
        sst.push_str(&format!("<si><t>label {}</t></si>", i));
    }
    sst.push_str("</sst>");

    zip.start_file("xl/sharedStrings.xml", options).unwrap();
    zip.write_all(sst.as_bytes()).unwrap();

    let mut sheet = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for r in 0..row_count {
        sheet.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for c in 0..COLUMNS {
            if c % 2 == 0 {
                sheet.push_str(&format!(r#"<c t="s"><v>{}</v></c>"#, (r + c) % unique));
            } else {
                sheet.push_str(&format!("<c><v>{}.5</v></c>", r * c));
            }
        }
        sheet.push_str("</row>");
    }
    sheet.push_str("</sheetData></worksheet>");

    zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
    zip.write_all(sheet.as_bytes()).unwrap();

    zip.finish().unwrap();
    buffer
}

/// Creates CSV text with the given number of rows.
fn create_test_csv(row_count: usize) -> Vec<u8> {
    let mut out = String::new();
    for r in 0..row_count {
        let fields: Vec<String> = (0..COLUMNS)
            .map(|c| {
                if c % 3 == 0 {
                    format!("\"quoted, {}\"", r)
                } else {
                    format!("{}", r * c)
                }
            })
            .collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out.into_bytes()
}

/// Benchmark XLSX reading at various sizes.
fn bench_xlsx_reading(c: &mut Criterion) {
    let mut group = c.benchmark_group("xlsx_reading");

    for row_count in [10, 100, 1000, 10000].iter() {
        let data = create_test_xlsx(*row_count);
        let size = data.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(BenchmarkId::new("rows", row_count), &data, |b, data| {
            b.iter(|| {
                let _ = sheetgrid::read_bytes(black_box(data), FormatType::Xlsx);
            });
        });
    }

    group.finish();
}

/// Benchmark CSV reading at various sizes.
fn bench_csv_reading(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_reading");

    for row_count in [10, 100, 1000, 10000].iter() {
        let data = create_test_csv(*row_count);
        let size = data.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(BenchmarkId::new("rows", row_count), &data, |b, data| {
            b.iter(|| {
                let _ = sheetgrid::read_bytes(black_box(data), FormatType::Csv);
            });
        });
    }

    group.finish();
}

/// Benchmark JSON rendering.
fn bench_json_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_rendering");

    for row_count in [100, 1000].iter() {
        let data = create_test_xlsx(*row_count);
        let table = sheetgrid::read_bytes(&data, FormatType::Xlsx).unwrap();

        group.bench_with_input(BenchmarkId::new("rows", row_count), &table, |b, table| {
            b.iter(|| {
                let _ = sheetgrid::render::to_json(
                    black_box(table),
                    sheetgrid::render::JsonFormat::Compact,
                );
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_xlsx_reading,
    bench_csv_reading,
    bench_json_rendering,
);
criterion_main!(benches);
