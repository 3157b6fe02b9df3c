//! Catalog configuration loaded from YAML.
//!
//! ```yaml
//! seed: "42"
//! locale: fr
//! likes: 3.5
//! reviews: 2.6
//! generator:
//!   page_size: 20
//!   identifiers: unseeded
//!   reference_date: 2025-01-01
//!   publication_window_years: 1
//! ```
//!
//! Every key is optional. Values given on the command line take precedence
//! over the file; built-in defaults apply last.

use crate::locale::Locale;
use crate::params::GenerationRequest;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Seed used when none is configured.
pub const DEFAULT_SEED: &str = "42";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Structurally valid but unusable value
    #[error("Invalid config value for '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// How book identifiers are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierMode {
    /// Drawn from a thread-local RNG; differ between runs
    #[default]
    Unseeded,
    /// Drawn from a stream derived from seed, page and record index
    Seeded,
}

/// Tuning for the page generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Records per page
    pub page_size: usize,

    /// Identifier generation mode
    pub identifiers: IdentifierMode,

    /// Publication years are drawn relative to this date
    pub reference_date: NaiveDate,

    /// How far back from `reference_date` publication dates may fall
    pub publication_window_years: u32,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            identifiers: IdentifierMode::default(),
            reference_date: default_reference_date(),
            publication_window_years: 1,
        }
    }
}

fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

impl GeneratorOptions {
    /// Check the options can drive a generator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "generator.page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.publication_window_years == 0 {
            return Err(ConfigError::InvalidValue {
                key: "generator.publication_window_years",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Top-level catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Root seed
    pub seed: Option<String>,

    /// Locale code; unsupported codes fall back to `en`
    pub locale: Option<String>,

    /// Average likes per book
    pub likes: Option<f64>,

    /// Average reviews per book
    pub reviews: Option<f64>,

    /// Generator tuning
    pub generator: GeneratorOptions,
}

impl CatalogConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = serde_yaml::from_str(yaml)?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Build a generation request for `page` from the configured values.
    pub fn request(&self, page: i64) -> GenerationRequest {
        GenerationRequest {
            seed: self.seed.clone().unwrap_or_else(|| DEFAULT_SEED.to_string()),
            page,
            locale: self
                .locale
                .clone()
                .unwrap_or_else(|| Locale::DEFAULT.code().to_string()),
            expected_likes: self.likes.unwrap_or(0.0),
            expected_reviews: self.reviews.unwrap_or(0.0),
        }
    }
}
