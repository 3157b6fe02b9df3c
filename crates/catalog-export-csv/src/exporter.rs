//! CSV exporter for generated records.

use crate::error::CsvExportError;
use catalog_core::BookRecord;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Column names of the export projection, in order.
pub const EXPORT_COLUMNS: [&str; 5] = [
    "sequence_index",
    "identifier",
    "title",
    "author_name",
    "publisher_line",
];

/// One exported row: the flattened projection of a [`BookRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub sequence_index: u64,
    pub identifier: String,
    pub title: String,
    pub author_name: String,
    pub publisher_line: String,
}

impl From<&BookRecord> for ExportRow {
    fn from(record: &BookRecord) -> Self {
        Self {
            sequence_index: record.sequence_index,
            identifier: record.identifier.clone(),
            title: record.title.clone(),
            author_name: record.author_name.clone(),
            publisher_line: record.publisher_line.clone(),
        }
    }
}

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes after the export.
    pub file_size_bytes: u64,
}

impl ExportMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes the export projection of generated records as CSV.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    include_header: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvExporter {
    /// Create an exporter that writes a header row.
    pub fn new() -> Self {
        Self {
            include_header: true,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Write `records` to `writer`, returning the number of rows written.
    pub fn write_records<'a, W, I>(&self, records: I, writer: W) -> Result<u64, CsvExportError>
    where
        W: Write,
        I: IntoIterator<Item = &'a BookRecord>,
    {
        self.write_rows(records, writer, self.include_header)
    }

    /// Export `records` to a new file at `output_path`, replacing any existing file.
    pub fn export_to_path<'a, I, P>(
        &self,
        records: I,
        output_path: P,
    ) -> Result<ExportMetrics, CsvExportError>
    where
        I: IntoIterator<Item = &'a BookRecord>,
        P: AsRef<Path>,
    {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!("Exporting catalog to CSV file '{}'", output_path.display());

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let rows_written = self.write_rows(records, buf_writer, self.include_header)?;

        let metrics = ExportMetrics {
            rows_written,
            total_duration: start_time.elapsed(),
            file_size_bytes: std::fs::metadata(output_path)?.len(),
        };

        info!(
            "CSV export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Append `records` to the file at `output_path` without a header row.
    ///
    /// The file is created if it does not exist.
    pub fn append_to_path<'a, I, P>(
        &self,
        records: I,
        output_path: P,
    ) -> Result<ExportMetrics, CsvExportError>
    where
        I: IntoIterator<Item = &'a BookRecord>,
        P: AsRef<Path>,
    {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!("Appending catalog rows to CSV file '{}'", output_path.display());

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let rows_written = self.write_rows(records, buf_writer, false)?;

        let metrics = ExportMetrics {
            rows_written,
            total_duration: start_time.elapsed(),
            file_size_bytes: std::fs::metadata(output_path)?.len(),
        };

        info!(
            "CSV append complete: {} rows in {:?}",
            metrics.rows_written, metrics.total_duration
        );

        Ok(metrics)
    }

    fn write_rows<'a, W, I>(
        &self,
        records: I,
        writer: W,
        include_header: bool,
    ) -> Result<u64, CsvExportError>
    where
        W: Write,
        I: IntoIterator<Item = &'a BookRecord>,
    {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        if include_header {
            writer.write_record(EXPORT_COLUMNS)?;
        }

        let mut rows_written = 0u64;
        for record in records {
            writer.serialize(ExportRow::from(record))?;
            rows_written += 1;

            if rows_written % 10000 == 0 {
                debug!("Written {} rows", rows_written);
            }
        }

        writer.flush()?;
        Ok(rows_written)
    }
}

/// Parse exported CSV back into projection rows.
///
/// When `has_header` is set the first row must match [`EXPORT_COLUMNS`].
pub fn read_export<R: Read>(
    reader: R,
    has_header: bool,
) -> Result<Vec<ExportRow>, CsvExportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_header)
        .from_reader(reader);

    if has_header {
        let found: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if found != EXPORT_COLUMNS {
            return Err(CsvExportError::UnexpectedHeader {
                expected: EXPORT_COLUMNS.iter().map(|c| c.to_string()).collect(),
                found,
            });
        }
    }

    let rows = reader
        .deserialize::<ExportRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
