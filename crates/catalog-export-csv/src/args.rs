//! CLI argument definitions for CSV export.

use clap::Args;
use std::path::PathBuf;

/// CSV-specific export arguments.
#[derive(Args, Clone, Debug)]
pub struct CsvExportArgs {
    /// Output CSV file
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Number of pages to export
    #[arg(long, default_value = "1")]
    pub pages: u64,

    /// First page to export (0-based)
    #[arg(long, default_value = "0")]
    pub start_page: u64,

    /// Omit the header row
    #[arg(long)]
    pub no_header: bool,

    /// Append to an existing file instead of replacing it (implies --no-header)
    #[arg(long)]
    pub append: bool,
}
