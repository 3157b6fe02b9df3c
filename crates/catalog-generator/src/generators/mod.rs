//! Field generators for book and review records.
//!
//! This module provides the per-field generation logic. Each generator draws
//! from the RNG it is handed and nothing else, in a fixed order.

pub mod book;
pub mod identifier;
pub mod year;

pub use book::{BookFields, FieldSynthesizer};
pub use identifier::generate_identifier;
pub use year::PublicationWindow;

/// Uppercase the first character, leaving the rest unchanged.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
