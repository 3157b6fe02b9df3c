//! Command-line interface for book-catalog
//!
//! # Usage Examples
//!
//! ## Single page
//! ```bash
//! # Page 0 with the default seed "42"
//! book-catalog page --page 0 --pretty
//!
//! # Page 3 in German with fractional likes and reviews
//! book-catalog page --page 3 --locale de --likes 4.5 --reviews 2.6
//! ```
//!
//! ## Stream
//! ```bash
//! # First 10 pages as JSON Lines, seed taken from the environment
//! CATALOG_SEED=demo book-catalog stream --pages 10
//! ```
//!
//! ## CSV Export
//! ```bash
//! # Pages 0..5 with a header row
//! book-catalog export --output books.csv --pages 5
//!
//! # Continue the same file with pages 5..10
//! book-catalog export --output books.csv --start-page 5 --pages 5 --append
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use anyhow::Context;
use book_catalog::{write_json, write_json_lines, CatalogOpts};
use catalog_export_csv::{CsvExportArgs, CsvExporter};
use catalog_generator::CatalogStream;
use clap::{Parser, Subcommand};
use std::io::{self, BufWriter, Write};
use tracing::info;

#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(about = "Generate reproducible, paginated synthetic book catalogs")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of books as a JSON array
    Page {
        /// Page index (0-based)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        page: i64,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        opts: CatalogOpts,
    },

    /// Print the first N pages as JSON Lines, one book per line
    Stream {
        /// Number of pages to emit
        #[arg(long, default_value = "1")]
        pages: u64,

        #[command(flatten)]
        opts: CatalogOpts,
    },

    /// Export pages of the catalog projection to CSV
    Export {
        #[command(flatten)]
        args: CsvExportArgs,

        #[command(flatten)]
        opts: CatalogOpts,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // stdout carries the catalog, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Page { page, pretty, opts } => run_page(page, pretty, &opts),
        Commands::Stream { pages, opts } => run_stream(pages, &opts),
        Commands::Export { args, opts } => run_export(args, &opts),
    }
}

fn run_page(page: i64, pretty: bool, opts: &CatalogOpts) -> anyhow::Result<()> {
    let session = opts.session(page)?;
    let records = session
        .generator
        .generate_page(&session.params)
        .with_context(|| format!("Failed to generate page {page}"))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_json(&mut out, &records, pretty)?;
    out.flush()?;
    Ok(())
}

fn run_stream(pages: u64, opts: &CatalogOpts) -> anyhow::Result<()> {
    let session = opts.session(0)?;
    let mut stream = CatalogStream::new(session.generator, session.params);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut books = 0u64;
    while stream.current_page() < pages {
        let page = stream.current_page();
        let records = stream
            .next_page()
            .with_context(|| format!("Failed to generate page {page}"))?;
        books += write_json_lines(&mut out, &records)?;
    }
    out.flush()?;

    info!("Streamed {} books across {} pages", books, pages);
    Ok(())
}

fn run_export(args: CsvExportArgs, opts: &CatalogOpts) -> anyhow::Result<()> {
    let session = opts.session(0)?;
    let end_page = args
        .start_page
        .checked_add(args.pages)
        .context("Page range overflows")?;

    info!(
        "Generating pages {}..{} for CSV export (seed='{}', locale={})",
        args.start_page, end_page, session.params.seed, session.params.locale
    );
    let pages = session
        .generator
        .generate_pages(&session.params, args.start_page..end_page)
        .context("Failed to generate catalog pages")?;
    let records = pages.iter().flatten();

    let exporter = CsvExporter::new().with_header(!args.no_header);
    let metrics = if args.append {
        exporter.append_to_path(records, &args.output)
    } else {
        exporter.export_to_path(records, &args.output)
    }
    .with_context(|| format!("Failed to write CSV to {:?}", args.output))?;

    info!(
        "Exported {} rows to {:?} ({} bytes)",
        metrics.rows_written, args.output, metrics.file_size_bytes
    );
    Ok(())
}
