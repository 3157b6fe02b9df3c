//! Book Catalog Library
//!
//! Reproducible, paginated synthetic book catalogs.
//!
//! The generation engine lives in the workspace crates:
//!
//! - `catalog_core` - parameters, records, locales and YAML configuration
//! - `catalog_generator` - seeded streams, count resolution, field synthesis,
//!   page generation and the catalog stream
//! - `catalog_export_csv` - CSV export of the catalog projection
//!
//! This crate wires them to the `book-catalog` command line.
//!
//! # CLI Usage
//!
//! ```bash
//! # First page, pretty-printed
//! book-catalog page --page 0 --pretty
//!
//! # Five pages in French as JSON Lines, 2.6 reviews per book on average
//! book-catalog stream --pages 5 --locale fr --reviews 2.6
//!
//! # Export pages 10..20 to CSV
//! book-catalog export --output books.csv --start-page 10 --pages 10
//! ```

use anyhow::Context;
use catalog_core::{CatalogConfig, GenerationParameters, IdentifierMode};
use catalog_generator::PageGenerator;
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Options shared by every subcommand.
///
/// Precedence: command-line flag, then environment variable, then the
/// config file, then built-in defaults.
#[derive(Parser, Clone, Debug, Default)]
pub struct CatalogOpts {
    /// YAML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root seed
    #[arg(long, env = "CATALOG_SEED")]
    pub seed: Option<String>,

    /// Locale code (en, fr, de); unsupported codes fall back to en
    #[arg(long, env = "CATALOG_LOCALE")]
    pub locale: Option<String>,

    /// Average likes per book (fractional values allowed)
    #[arg(long, env = "CATALOG_LIKES", allow_negative_numbers = true)]
    pub likes: Option<f64>,

    /// Average reviews per book (fractional values allowed)
    #[arg(long, env = "CATALOG_REVIEWS", allow_negative_numbers = true)]
    pub reviews: Option<f64>,

    /// Derive identifiers from the seed instead of the thread RNG
    #[arg(long)]
    pub seeded_identifiers: bool,
}

impl CatalogOpts {
    /// Load the config file, if any, and apply the command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {path:?}"))?,
            None => CatalogConfig::default(),
        };

        if let Some(seed) = &self.seed {
            config.seed = Some(seed.clone());
        }
        if let Some(locale) = &self.locale {
            config.locale = Some(locale.clone());
        }
        if let Some(likes) = self.likes {
            config.likes = Some(likes);
        }
        if let Some(reviews) = self.reviews {
            config.reviews = Some(reviews);
        }
        if self.seeded_identifiers {
            config.generator.identifiers = IdentifierMode::Seeded;
        }

        Ok(config)
    }

    /// Resolve the configuration into a ready-to-use [`CatalogSession`] at `page`.
    pub fn session(&self, page: i64) -> anyhow::Result<CatalogSession> {
        let config = self.resolve_config()?;
        CatalogSession::from_config(&config, page)
    }
}

/// A validated generator together with the parameters it runs with.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    pub generator: PageGenerator,
    pub params: GenerationParameters,
}

impl CatalogSession {
    /// Validate `config` and build the generator and parameters for `page`.
    pub fn from_config(config: &CatalogConfig, page: i64) -> anyhow::Result<Self> {
        let generator = PageGenerator::new(config.generator.clone())
            .context("Invalid generator configuration")?;
        let params = config
            .request(page)
            .validate()
            .context("Invalid generation parameters")?;

        debug!(
            "Catalog session: seed='{}', page={}, locale={}, likes={}, reviews={}, \
             page_size={}, identifiers={:?}",
            params.seed,
            params.page,
            params.locale,
            params.expected_likes,
            params.expected_reviews,
            generator.page_size(),
            generator.options().identifiers
        );

        Ok(Self { generator, params })
    }
}

/// Write `items` as one JSON array.
pub fn write_json<W, T>(mut writer: W, items: &[T], pretty: bool) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    if pretty {
        serde_json::to_writer_pretty(&mut writer, items)?;
    } else {
        serde_json::to_writer(&mut writer, items)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Write `items` as JSON Lines, one object per line.
pub fn write_json_lines<'a, W, T, I>(mut writer: W, items: I) -> anyhow::Result<u64>
where
    W: Write,
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut written = 0u64;
    for item in items {
        serde_json::to_writer(&mut writer, item)?;
        writeln!(writer)?;
        written += 1;
    }
    Ok(written)
}
