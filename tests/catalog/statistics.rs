//! Fractional expectation realization across many records.

use crate::{params, seeded_generator, SEED};

const PAGES: u64 = 150; // 3000 records

fn mean(values: impl Iterator<Item = u64>) -> f64 {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), v| (sum + v, count + 1));
    sum as f64 / count as f64
}

#[test]
fn test_review_mean_converges() {
    let pages = seeded_generator()
        .generate_pages(&params(SEED, 0, "en", 0.0, 2.6), 0..PAGES)
        .unwrap();

    let average = mean(pages.iter().flatten().map(|r| r.review_count() as u64));
    assert!((average - 2.6).abs() < 0.1, "mean review count {average}");
}

#[test]
fn test_like_mean_converges() {
    let pages = seeded_generator()
        .generate_pages(&params("likes", 0, "de", 4.25, 0.0), 0..PAGES)
        .unwrap();

    let average = mean(pages.iter().flatten().map(|r| r.like_count));
    assert!((average - 4.25).abs() < 0.1, "mean like count {average}");
}

#[test]
fn test_counts_bracket_expectation() {
    let pages = seeded_generator()
        .generate_pages(&params(SEED, 0, "fr", 0.3, 2.6), 0..20)
        .unwrap();

    let mut saw_low = false;
    let mut saw_high = false;
    for record in pages.iter().flatten() {
        let reviews = record.review_count();
        assert!(reviews == 2 || reviews == 3, "review count {reviews}");
        saw_low |= reviews == 2;
        saw_high |= reviews == 3;
        assert!(record.like_count <= 1);
    }
    assert!(saw_low && saw_high);
}

#[test]
fn test_whole_expectations_are_exact() {
    let records = seeded_generator()
        .generate_page(&params(SEED, 9, "en", 3.0, 2.0))
        .unwrap();

    for record in &records {
        assert_eq!(record.like_count, 3);
        assert_eq!(record.review_count(), 2);
        for review in &record.reviews {
            assert!(!review.reviewer_name.is_empty());
            assert!(!review.review_text.is_empty());
        }
    }
}
