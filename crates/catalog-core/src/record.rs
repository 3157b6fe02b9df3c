//! Generated catalog records.
//!
//! Records are produced on demand per page request and are immutable after
//! creation. The consumer owns their retention; nothing here is shared across
//! pages or generation calls.

use serde::{Deserialize, Serialize};

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// 1-based position in the overall catalog
    pub sequence_index: u64,

    /// Synthetic ISBN-like identifier (`978-D-DDDD-DDDD-D`)
    pub identifier: String,

    /// Localized title, first character uppercased
    pub title: String,

    /// Localized author full name
    pub author_name: String,

    /// `"<company>, <year>"`
    pub publisher_line: String,

    /// Resolved number of likes
    pub like_count: u64,

    /// Reviews owned by this record
    pub reviews: Vec<ReviewRecord>,
}

impl BookRecord {
    /// Compute the sequence index of the record at `offset` within `page`.
    ///
    /// Depends only on the page coordinates. Returns `None` when the index
    /// does not fit in a `u64`.
    pub fn sequence_index_for(page: u64, page_size: usize, offset: usize) -> Option<u64> {
        page.checked_mul(page_size as u64)?
            .checked_add(offset as u64)?
            .checked_add(1)
    }

    /// Number of reviews attached to this record.
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

/// A review, owned by exactly one [`BookRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Localized reviewer name
    pub reviewer_name: String,

    /// Localized phrase of 6-15 words, first letter capitalized
    pub review_text: String,
}
