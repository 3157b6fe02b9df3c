//! Deterministic generator for paginated synthetic book catalogs.
//!
//! Given a seed, a page index, a locale and fractional expected counts for
//! likes and reviews, the generator produces a page of [`BookRecord`]s that
//! is reproduced exactly whenever the same parameters are requested again.
//!
//! # Architecture
//!
//! ```text
//! GenerationParameters { seed, page, locale, likes, reviews }
//!        │
//!        ▼
//! ┌──────────────────┐    ┌──────────────────┐
//! │  derive_stream   │───▶│  resolve_count   │  review / like counts
//! │  [seed, page, i] │    └──────────────────┘
//! │                  │    ┌──────────────────┐
//! │                  │───▶│ field synthesis  │  title, author, publisher,
//! └──────────────────┘    │  (Lexicon)       │  reviews
//!        │                └──────────────────┘
//!        ▼
//! ┌──────────────────┐
//! │  PageGenerator   │  stateless, safe to call from many threads
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │  CatalogStream   │  cursor over pages 0, 1, 2, ...
//! └──────────────────┘
//! ```
//!
//! Every random choice comes from a stream keyed by its path
//! (`[seed, page]`, `[seed, page, i]`, `[seed, page, i, "review", j]`, ...),
//! so a record never depends on the records generated before it.
//!
//! # Example
//!
//! ```rust
//! use catalog_core::{GenerationParameters, Locale};
//! use catalog_generator::{CatalogStream, PageGenerator};
//!
//! let generator = PageGenerator::default();
//! let params = GenerationParameters::new("42", Locale::En);
//!
//! let page = generator.generate_page(&params.with_page(1)).unwrap();
//! assert_eq!(page[0].sequence_index, 21);
//!
//! let mut stream = CatalogStream::new(generator, params);
//! let first = stream.next_page().unwrap();
//! assert_eq!(first.len(), 20);
//! assert_eq!(stream.current_page(), 1);
//! ```

pub mod count;
pub mod generators;
pub mod lexicon;
pub mod page;
pub mod rng;
pub mod stream;

// Re-exports for convenience
pub use catalog_core::{BookRecord, GenerationParameters, Locale, ReviewRecord};
pub use count::resolve_count;
pub use lexicon::{LexicalSource, Lexicon};
pub use page::{generate_page, GeneratorError, PageGenerator};
pub use rng::{derive_stream, PathSegment, RandomStream};
pub use stream::CatalogStream;
