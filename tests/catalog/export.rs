//! CSV export of generated pages.

use crate::{params, SEED};
use catalog_export_csv::{read_export, CsvExporter, ExportRow, EXPORT_COLUMNS};
use catalog_generator::PageGenerator;
use std::fs::File;
use tempfile::TempDir;

#[test]
fn test_export_round_trip() {
    // Unseeded identifiers still round-trip: the export reads what was generated
    let generator = PageGenerator::default();
    let pages = generator
        .generate_pages(&params(SEED, 0, "de", 2.0, 2.6), 0..3)
        .unwrap();
    let records: Vec<_> = pages.into_iter().flatten().collect();

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("books.csv");
    let metrics = CsvExporter::new()
        .export_to_path(&records, &output_path)
        .unwrap();
    assert_eq!(metrics.rows_written, 60);
    assert!(metrics.file_size_bytes > 0);

    let rows = read_export(File::open(&output_path).unwrap(), true).unwrap();
    assert_eq!(rows.len(), records.len());
    for (row, record) in rows.iter().zip(&records) {
        assert_eq!(row.sequence_index, record.sequence_index);
        assert_eq!(row.identifier, record.identifier);
        assert_eq!(row.title, record.title);
        assert_eq!(row.author_name, record.author_name);
        assert_eq!(row.publisher_line, record.publisher_line);
    }
}

#[test]
fn test_export_excludes_likes_and_reviews() {
    let records = PageGenerator::default()
        .generate_page(&params(SEED, 0, "en", 5.0, 4.0))
        .unwrap();

    let mut buffer = Vec::new();
    CsvExporter::new().write_records(&records, &mut buffer).unwrap();
    let content = String::from_utf8(buffer).unwrap();

    let header = content.lines().next().unwrap();
    assert_eq!(header, EXPORT_COLUMNS.join(","));
    let first_review = &records[0].reviews[0].review_text;
    assert!(!content.contains(first_review.as_str()));
}

#[test]
fn test_append_continues_catalog() {
    let generator = PageGenerator::default();
    let request = params(SEED, 0, "en", 0.0, 0.0);
    let first = generator.generate_page(&request).unwrap();
    let second = generator.generate_page(&request.with_page(1)).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("books.csv");
    let exporter = CsvExporter::new();
    exporter.export_to_path(&first, &output_path).unwrap();
    exporter.append_to_path(&second, &output_path).unwrap();

    let rows: Vec<ExportRow> = read_export(File::open(&output_path).unwrap(), true).unwrap();
    let indices: Vec<u64> = rows.iter().map(|r| r.sequence_index).collect();
    assert_eq!(indices, (1..=40).collect::<Vec<u64>>());
}
