//! Page generator for producing book records.

use crate::count::resolve_count;
use crate::generators::{generate_identifier, FieldSynthesizer, PublicationWindow};
use crate::lexicon::{LexicalSource, Lexicon};
use crate::rng::{derivation_key, derive_stream, secondary_stream, PathSegment, RandomStream};
use catalog_core::config::DEFAULT_PAGE_SIZE;
use catalog_core::{
    BookRecord, ConfigError, GenerationParameters, GeneratorOptions, IdentifierMode, ReviewRecord,
};
use rand::RngCore;
use rayon::prelude::*;
use std::ops::Range;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Page size of zero
    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    /// Sequence indices of the page do not fit in a u64
    #[error("Page {page} is out of range for page size {page_size}")]
    PageOutOfRange { page: u64, page_size: usize },

    /// Generator options rejected
    #[error("Invalid generator options: {0}")]
    InvalidOptions(#[from] ConfigError),
}

/// Stateless generator of catalog pages.
///
/// Each page is a pure function of the [`GenerationParameters`] and the
/// generator options, so pages can be generated in any order and from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct PageGenerator {
    options: GeneratorOptions,
    window: PublicationWindow,
}

impl Default for PageGenerator {
    fn default() -> Self {
        let options = GeneratorOptions::default();
        let window =
            PublicationWindow::new(options.reference_date, options.publication_window_years);
        Self { options, window }
    }
}

impl PageGenerator {
    /// Create a generator with the given options.
    pub fn new(options: GeneratorOptions) -> Result<Self, GeneratorError> {
        options.validate()?;
        let window =
            PublicationWindow::new(options.reference_date, options.publication_window_years);
        Ok(Self { options, window })
    }

    /// Generator with default options and the given page size.
    pub fn with_page_size(page_size: usize) -> Result<Self, GeneratorError> {
        if page_size == 0 {
            return Err(GeneratorError::InvalidPageSize(page_size));
        }
        Self::new(GeneratorOptions {
            page_size,
            ..GeneratorOptions::default()
        })
    }

    /// Use the given identifier mode.
    pub fn with_identifiers(mut self, mode: IdentifierMode) -> Self {
        self.options.identifiers = mode;
        self
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.options.page_size
    }

    /// Get a reference to the options.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the page addressed by `params.page`.
    pub fn generate_page(
        &self,
        params: &GenerationParameters,
    ) -> Result<Vec<BookRecord>, GeneratorError> {
        self.generate_page_with(Lexicon::for_locale(params.locale), params)
    }

    /// Generate a page drawing words and names from `lexicon`.
    ///
    /// `params.locale` is ignored in favor of the supplied source.
    pub fn generate_page_with<L: LexicalSource>(
        &self,
        lexicon: &L,
        params: &GenerationParameters,
    ) -> Result<Vec<BookRecord>, GeneratorError> {
        let page_size = self.options.page_size;
        let page = params.page;

        // Reject before producing anything so a page is never partially built
        BookRecord::sequence_index_for(page, page_size, page_size - 1)
            .ok_or(GeneratorError::PageOutOfRange { page, page_size })?;

        let seed = params.seed.as_str();
        let mut page_stream = derive_stream(seed, &[PathSegment::from(page)]);
        let lexical_salt = page_stream.next_u32();
        let synthesizer = FieldSynthesizer::new(lexicon, self.window);

        let records = (0..page_size)
            .map(|offset| {
                let mut record_stream =
                    derive_stream(seed, &[PathSegment::from(page), offset.into()]);
                let review_count = resolve_count(params.expected_reviews, &mut record_stream);
                let like_count = resolve_count(params.expected_likes, &mut record_stream);

                let mut lexical = secondary_stream(lexical_salt, record_stream.next_u32());
                let fields = synthesizer.book(&mut lexical);

                let reviews = (0..review_count)
                    .map(|review| {
                        let mut name =
                            lexical_stream(seed, page, offset, "name", review, lexical_salt);
                        let mut text =
                            lexical_stream(seed, page, offset, "review", review, lexical_salt);
                        synthesizer.review(&mut name, &mut text)
                    })
                    .collect::<Vec<ReviewRecord>>();

                BookRecord {
                    // Checked above for the last offset of the page
                    sequence_index: page * page_size as u64 + offset as u64 + 1,
                    identifier: self.identifier(seed, page, offset),
                    title: fields.title,
                    author_name: fields.author_name,
                    publisher_line: fields.publisher_line,
                    like_count,
                    reviews,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "Generated page {} ({} records, key='{}', locale={}, likes={}, reviews={})",
            page,
            records.len(),
            derivation_key(seed, &[PathSegment::from(page)]),
            params.locale,
            params.expected_likes,
            params.expected_reviews
        );

        Ok(records)
    }

    /// Generate several pages concurrently.
    ///
    /// Output is identical to generating each page in turn; `params.page`
    /// is replaced by each page of `pages`.
    pub fn generate_pages(
        &self,
        params: &GenerationParameters,
        pages: Range<u64>,
    ) -> Result<Vec<Vec<BookRecord>>, GeneratorError> {
        pages
            .into_par_iter()
            .map(|page| self.generate_page(&params.with_page(page)))
            .collect()
    }

    fn identifier(&self, seed: &str, page: u64, offset: usize) -> String {
        match self.options.identifiers {
            IdentifierMode::Unseeded => generate_identifier(&mut rand::rng()),
            IdentifierMode::Seeded => {
                let path: [PathSegment<'_>; 3] = [page.into(), offset.into(), "isbn".into()];
                generate_identifier(&mut derive_stream(seed, &path))
            }
        }
    }
}

/// Secondary stream for one review field, keyed by `[seed, page, offset, label, review]`.
fn lexical_stream(
    seed: &str,
    page: u64,
    offset: usize,
    label: &str,
    review: u64,
    salt: u32,
) -> RandomStream {
    let path: [PathSegment<'_>; 4] = [page.into(), offset.into(), label.into(), review.into()];
    secondary_stream(salt, derive_stream(seed, &path).next_u32())
}

/// Generate one page with default options and the given page size.
pub fn generate_page(
    params: &GenerationParameters,
    page_size: usize,
) -> Result<Vec<BookRecord>, GeneratorError> {
    if page_size == DEFAULT_PAGE_SIZE {
        PageGenerator::default().generate_page(params)
    } else {
        PageGenerator::with_page_size(page_size)?.generate_page(params)
    }
}
