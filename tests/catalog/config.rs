//! Configuration loading and CLI option merging.

use book_catalog::{CatalogOpts, CatalogSession};
use catalog_core::{CatalogConfig, IdentifierMode, Locale, MAX_EXPECTED_COUNT};
use std::path::PathBuf;

const FIXTURE: &str = "tests/fixtures/catalog.yaml";

#[test]
fn test_fixture_config() {
    let config = CatalogConfig::from_file(FIXTURE).expect("Failed to load test config");

    assert_eq!(config.seed.as_deref(), Some("integration"));
    assert_eq!(config.generator.page_size, 10);
    assert_eq!(config.generator.identifiers, IdentifierMode::Seeded);

    let session = CatalogSession::from_config(&config, 2).unwrap();
    assert_eq!(session.params.locale, Locale::Fr);
    assert_eq!(session.params.page, 2);

    let records = session.generator.generate_page(&session.params).unwrap();
    let indices: Vec<u64> = records.iter().map(|r| r.sequence_index).collect();
    assert_eq!(indices, (21..=30).collect::<Vec<u64>>());
    for record in &records {
        let year: i32 = record
            .publisher_line
            .rsplit(", ")
            .next()
            .and_then(|year| year.parse().ok())
            .unwrap();
        assert!((2021..=2024).contains(&year), "{}", record.publisher_line);
    }
}

#[test]
fn test_opts_override_fixture() {
    let opts = CatalogOpts {
        config: Some(PathBuf::from(FIXTURE)),
        seed: Some("override".to_string()),
        reviews: Some(0.0),
        ..Default::default()
    };
    let session = opts.session(0).unwrap();

    assert_eq!(session.params.seed, "override");
    assert_eq!(session.params.locale, Locale::Fr);
    assert_eq!(session.params.expected_reviews.get(), 0.0);
    assert_eq!(session.params.expected_likes.get(), 1.5);
    assert_eq!(session.generator.page_size(), 10);
}

#[test]
fn test_invalid_request_fails_before_generation() {
    let negative_page = CatalogOpts::default().session(-3);
    assert!(negative_page.is_err());

    let negative_likes = CatalogOpts {
        likes: Some(-0.5),
        ..Default::default()
    }
    .session(0);
    assert!(negative_likes.is_err());
}

#[test]
fn test_expectation_cap_enforced_before_generation() {
    let at_cap = CatalogOpts {
        likes: Some(MAX_EXPECTED_COUNT),
        ..Default::default()
    }
    .session(0);
    assert!(at_cap.is_ok());

    let huge_reviews = CatalogOpts {
        reviews: Some(1e12),
        ..Default::default()
    }
    .session(0);
    let err = huge_reviews.unwrap_err();
    assert!(format!("{err:#}").contains("expected_reviews"), "{err:#}");

    let config = CatalogConfig::from_yaml("likes: 1.0e30\n").unwrap();
    assert!(CatalogSession::from_config(&config, 0).is_err());
}

#[test]
fn test_session_carries_identifier_mode() {
    let opts = CatalogOpts {
        config: Some(PathBuf::from(FIXTURE)),
        ..Default::default()
    };
    let session = opts.session(0).unwrap();
    assert_eq!(session.generator.options().identifiers, IdentifierMode::Seeded);

    let session = CatalogOpts::default().session(0).unwrap();
    assert_eq!(session.generator.options().identifiers, IdentifierMode::Unseeded);
}

#[test]
fn test_invalid_generator_options_rejected() {
    let result = CatalogConfig::from_yaml("generator:\n  page_size: 0\n");
    assert!(result.is_err());
}
