//! Lexical field synthesis for books and reviews.
//!
//! Draw order for a book is part of the reproducibility contract:
//!
//! 1. title words
//! 2. author name
//! 3. publisher company name
//! 4. publisher year
//!
//! Reviews draw the reviewer name and the review text from two separate
//! streams, so neither depends on the other.

use super::capitalize_first;
use super::year::PublicationWindow;
use crate::lexicon::LexicalSource;
use catalog_core::ReviewRecord;
use rand::Rng;

/// Number of words in a title.
pub const TITLE_WORDS: usize = 3;

/// Smallest number of words in a review text.
pub const REVIEW_MIN_WORDS: usize = 6;

/// Largest number of words in a review text.
pub const REVIEW_MAX_WORDS: usize = 15;

/// Lexical fields of one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author_name: String,
    pub publisher_line: String,
}

/// Produces lexical fields from a lexical source.
#[derive(Debug)]
pub struct FieldSynthesizer<'a, L> {
    lexicon: &'a L,
    window: PublicationWindow,
}

impl<'a, L: LexicalSource> FieldSynthesizer<'a, L> {
    pub fn new(lexicon: &'a L, window: PublicationWindow) -> Self {
        Self { lexicon, window }
    }

    /// Synthesize title, author and publisher line.
    pub fn book<R: Rng + ?Sized>(&self, rng: &mut R) -> BookFields {
        let title = capitalize_first(&self.lexicon.words(rng, TITLE_WORDS));
        let author_name = self.lexicon.person_name(rng);
        let company = self.lexicon.company_name(rng);
        let year = self.window.sample_year(rng);

        BookFields {
            title,
            author_name,
            publisher_line: format!("{company}, {year}"),
        }
    }

    /// Synthesize one review from its name and text streams.
    pub fn review<N, T>(&self, name_rng: &mut N, text_rng: &mut T) -> ReviewRecord
    where
        N: Rng + ?Sized,
        T: Rng + ?Sized,
    {
        let reviewer_name = self.lexicon.person_name(name_rng);
        let word_count = text_rng.random_range(REVIEW_MIN_WORDS..=REVIEW_MAX_WORDS);
        let review_text = capitalize_first(&self.lexicon.words(text_rng, word_count));

        ReviewRecord {
            reviewer_name,
            review_text,
        }
    }
}
