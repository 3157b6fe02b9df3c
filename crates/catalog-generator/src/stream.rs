//! Cursor over an infinite sequence of catalog pages.

use crate::page::{GeneratorError, PageGenerator};
use catalog_core::{BookRecord, GenerationParameters};
use tracing::debug;

/// Infinite, restartable stream of catalog pages.
///
/// The stream holds only the current parameters and a page cursor; every
/// page is regenerated from [`PageGenerator`]. The cursor is single-owner
/// state (`&mut self`): share a stream across threads behind a mutex, or
/// call [`PageGenerator::generate_page`] directly for specific pages.
///
/// The `page` field of the parameters is ignored; the cursor decides which
/// page comes next, starting at 0.
#[derive(Debug, Clone)]
pub struct CatalogStream {
    generator: PageGenerator,
    params: GenerationParameters,
    current_page: u64,
}

impl CatalogStream {
    /// Create a stream positioned at page 0.
    pub fn new(generator: PageGenerator, params: GenerationParameters) -> Self {
        Self {
            generator,
            params: params.with_page(0),
            current_page: 0,
        }
    }

    /// Replace the parameters and restart at page 0.
    ///
    /// Pages produced under the old parameters are no longer valid and
    /// should be discarded by the consumer.
    pub fn reset(&mut self, params: GenerationParameters) {
        debug!(
            "Resetting catalog stream at page {} (seed='{}', locale={})",
            self.current_page, params.seed, params.locale
        );
        self.params = params.with_page(0);
        self.current_page = 0;
    }

    /// Reset only if `params` describe a different catalog.
    ///
    /// Returns `true` when the stream was reset.
    pub fn update(&mut self, params: GenerationParameters) -> bool {
        if self.params.same_catalog(&params) {
            return false;
        }
        self.reset(params);
        true
    }

    /// Generate the page under the cursor and advance.
    ///
    /// The cursor does not move when generation fails.
    pub fn next_page(&mut self) -> Result<Vec<BookRecord>, GeneratorError> {
        let records = self
            .generator
            .generate_page(&self.params.with_page(self.current_page))?;
        self.current_page += 1;
        Ok(records)
    }

    /// Index of the page the next call to [`next_page`](Self::next_page) returns.
    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Always `true`; termination is the consumer's decision.
    pub fn has_more(&self) -> bool {
        true
    }

    /// Current parameters.
    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }
}

impl Iterator for CatalogStream {
    type Item = Result<Vec<BookRecord>, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_page())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
