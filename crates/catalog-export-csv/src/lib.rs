//! CSV export for generated book catalogs.
//!
//! This crate flattens [`BookRecord`](catalog_core::BookRecord)s into the
//! export projection (`sequence_index, identifier, title, author_name,
//! publisher_line`) and writes it as CSV. Likes and reviews are not part of
//! the projection.
//!
//! # Example
//!
//! ```ignore
//! use catalog_export_csv::CsvExporter;
//!
//! let records = generator.generate_page(&params)?;
//! let metrics = CsvExporter::new().export_to_path(&records, "catalog.csv")?;
//! ```

pub mod args;
mod error;
mod exporter;

pub use args::CsvExportArgs;
pub use error::CsvExportError;
pub use exporter::{read_export, CsvExporter, ExportMetrics, ExportRow, EXPORT_COLUMNS};
