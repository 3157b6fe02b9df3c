//! Localized lexical source.
//!
//! [`LexicalSource`] is the capability the field synthesizer draws words and
//! names from. [`Lexicon`] is the built-in implementation backed by static
//! word lists, one per [`Locale`].

mod de;
mod en;
mod fr;

use catalog_core::Locale;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Source of localized words and names.
///
/// Implementations must draw only from the supplied RNG so that output is
/// reproducible from the stream alone.
pub trait LexicalSource {
    /// `count` words separated by single spaces, in natural casing.
    fn words<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> String;

    /// A full person name.
    fn person_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// A company name.
    fn company_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
}

/// Static word lists for one locale.
#[derive(Debug)]
pub struct Lexicon {
    words: &'static [&'static str],
    first_names: &'static [&'static str],
    last_names: &'static [&'static str],
    company_suffixes: &'static [&'static str],
    conjunction: &'static str,
}

impl Lexicon {
    /// Lexicon for `locale`.
    pub fn for_locale(locale: Locale) -> &'static Lexicon {
        match locale {
            Locale::En => &en::LEXICON,
            Locale::Fr => &fr::LEXICON,
            Locale::De => &de::LEXICON,
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &'static [&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

impl LexicalSource for Lexicon {
    fn words<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> String {
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            words.push(pick(rng, self.words));
        }
        words.join(" ")
    }

    fn person_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let first = pick(rng, self.first_names);
        let last = pick(rng, self.last_names);
        format!("{first} {last}")
    }

    fn company_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match rng.random_range(0..3) {
            0 => {
                let name = pick(rng, self.last_names);
                let suffix = pick(rng, self.company_suffixes);
                format!("{name} {suffix}")
            }
            1 => {
                let first = pick(rng, self.last_names);
                let second = pick(rng, self.last_names);
                format!("{first} - {second}")
            }
            _ => {
                let first = pick(rng, self.last_names);
                let second = pick(rng, self.last_names);
                let third = pick(rng, self.last_names);
                format!("{first}, {second} {} {third}", self.conjunction)
            }
        }
    }
}
