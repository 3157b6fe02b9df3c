//! Core types for the book-catalog generator.
//!
//! This crate provides the foundational types shared by the generator,
//! the exporters and the CLI:
//!
//! - [`BookRecord`] / [`ReviewRecord`] - generated catalog entries
//! - [`GenerationRequest`] - raw, unvalidated request as received at the boundary
//! - [`GenerationParameters`] - validated, immutable input to page generation
//! - [`Locale`] - closed set of supported locales with `en` fallback
//! - [`CatalogConfig`] - configuration loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! catalog-core (this crate)
//!    │
//!    ├─── catalog-generator   (builds pages of BookRecord)
//!    │
//!    └─── catalog-export-csv  (flattens records into CSV)
//! ```
//!
//! # Example
//!
//! ```rust
//! use catalog_core::{GenerationRequest, Locale};
//!
//! let params = GenerationRequest {
//!     seed: "42".to_string(),
//!     page: 1,
//!     locale: "xx".to_string(),
//!     expected_likes: 3.5,
//!     expected_reviews: 2.6,
//! }
//! .validate()
//! .unwrap();
//!
//! assert_eq!(params.page, 1);
//! assert_eq!(params.locale, Locale::En);
//! ```

pub mod config;
pub mod locale;
pub mod params;
pub mod record;

// Re-exports for convenience
pub use config::{CatalogConfig, ConfigError, GeneratorOptions, IdentifierMode};
pub use locale::Locale;
pub use params::{
    ExpectedCount, GenerationParameters, GenerationRequest, ParameterError, MAX_EXPECTED_COUNT,
};
pub use record::{BookRecord, ReviewRecord};
