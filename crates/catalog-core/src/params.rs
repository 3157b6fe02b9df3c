//! Generation parameters and boundary validation.
//!
//! [`GenerationRequest`] is what a caller hands over (CLI flags, a JSON
//! request body, a config file). It is validated once into
//! [`GenerationParameters`], which the generator trusts unconditionally.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// Largest accepted expected count for likes or reviews per book.
///
/// Keeps the work for one page bounded by the page size.
pub const MAX_EXPECTED_COUNT: f64 = 1000.0;

/// Error type for rejected generation parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// Page index below zero
    #[error("Invalid parameter: page must be >= 0, got {0}")]
    NegativePage(i64),

    /// Expected count that is negative, NaN, infinite or above [`MAX_EXPECTED_COUNT`]
    #[error(
        "Invalid parameter: {field} must be between 0 and {max}, got {value}",
        max = MAX_EXPECTED_COUNT
    )]
    InvalidExpectation { field: &'static str, value: f64 },
}

/// A validated expected count in `[0, MAX_EXPECTED_COUNT]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct ExpectedCount(f64);

impl ExpectedCount {
    /// Expectation of zero.
    pub const ZERO: ExpectedCount = ExpectedCount(0.0);

    /// Validate a raw expectation. `field` names the parameter in errors.
    pub fn new(field: &'static str, value: f64) -> Result<Self, ParameterError> {
        if (0.0..=MAX_EXPECTED_COUNT).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParameterError::InvalidExpectation { field, value })
        }
    }

    /// The underlying value.
    pub fn get(&self) -> f64 {
        self.0
    }

    /// Integer part of the expectation.
    pub fn whole(&self) -> u64 {
        self.0.floor() as u64
    }

    /// Fractional part of the expectation, in `[0, 1)`.
    pub fn fraction(&self) -> f64 {
        self.0 - self.0.floor()
    }
}

impl std::fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw generation request as received from a collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub seed: String,
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_locale_code")]
    pub locale: String,
    #[serde(default)]
    pub expected_likes: f64,
    #[serde(default)]
    pub expected_reviews: f64,
}

fn default_locale_code() -> String {
    Locale::DEFAULT.code().to_string()
}

impl GenerationRequest {
    /// Validate the request. Fails on the first invalid field.
    ///
    /// Unsupported locales are resolved to the default locale rather than
    /// rejected.
    pub fn validate(&self) -> Result<GenerationParameters, ParameterError> {
        if self.page < 0 {
            return Err(ParameterError::NegativePage(self.page));
        }

        Ok(GenerationParameters {
            seed: self.seed.clone(),
            page: self.page as u64,
            locale: Locale::resolve(&self.locale),
            expected_likes: ExpectedCount::new("expected_likes", self.expected_likes)?,
            expected_reviews: ExpectedCount::new("expected_reviews", self.expected_reviews)?,
        })
    }
}

impl TryFrom<GenerationRequest> for GenerationParameters {
    type Error = ParameterError;

    fn try_from(request: GenerationRequest) -> Result<Self, Self::Error> {
        request.validate()
    }
}

/// Complete, validated input to one page generation.
///
/// Identical parameters always produce identical pages (identifiers aside,
/// see `IdentifierMode`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParameters {
    /// Root string of the reproducible output
    pub seed: String,
    /// 0-based page index
    pub page: u64,
    /// Lexical source selector
    pub locale: Locale,
    /// Average likes per book
    pub expected_likes: ExpectedCount,
    /// Average reviews per book
    pub expected_reviews: ExpectedCount,
}

impl GenerationParameters {
    /// Parameters for page 0 with zero likes and reviews.
    pub fn new(seed: impl Into<String>, locale: Locale) -> Self {
        Self {
            seed: seed.into(),
            page: 0,
            locale,
            expected_likes: ExpectedCount::ZERO,
            expected_reviews: ExpectedCount::ZERO,
        }
    }

    /// Same parameters addressed at a different page.
    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Set the expected likes per book.
    pub fn with_expected_likes(mut self, likes: ExpectedCount) -> Self {
        self.expected_likes = likes;
        self
    }

    /// Set the expected reviews per book.
    pub fn with_expected_reviews(mut self, reviews: ExpectedCount) -> Self {
        self.expected_reviews = reviews;
        self
    }

    /// Whether two parameter sets describe the same catalog, ignoring the page.
    pub fn same_catalog(&self, other: &GenerationParameters) -> bool {
        self.seed == other.seed
            && self.locale == other.locale
            && self.expected_likes == other.expected_likes
            && self.expected_reviews == other.expected_reviews
    }
}
