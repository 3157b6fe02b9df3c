//! Catalog stream cursor behavior.

use crate::{params, seeded_generator, SEED};
use catalog_generator::CatalogStream;

#[test]
fn test_stream_matches_direct_pages() {
    let generator = seeded_generator();
    let request = params(SEED, 0, "en", 1.5, 2.6);
    let mut stream = CatalogStream::new(generator.clone(), request.clone());

    for page in 0..5 {
        assert_eq!(stream.current_page(), page);
        let from_stream = stream.next_page().unwrap();
        assert_eq!(from_stream, generator.generate_page(&request.with_page(page)).unwrap());
    }
}

#[test]
fn test_reset_on_locale_change() {
    let generator = seeded_generator();
    let mut stream = CatalogStream::new(generator.clone(), params(SEED, 0, "en", 0.0, 0.0));
    for _ in 0..3 {
        stream.next_page().unwrap();
    }

    let french = params(SEED, 0, "fr", 0.0, 0.0);
    assert!(stream.update(french.clone()));
    assert_eq!(stream.current_page(), 0);

    let page = stream.next_page().unwrap();
    assert_eq!(page[0].sequence_index, 1);
    assert_eq!(page, generator.generate_page(&french).unwrap());
}

#[test]
fn test_reset_with_same_parameters_restarts() {
    let request = params(SEED, 0, "de", 0.0, 1.0);
    let mut stream = CatalogStream::new(seeded_generator(), request.clone());
    let first = stream.next_page().unwrap();
    stream.next_page().unwrap();

    stream.reset(request);
    assert_eq!(stream.next_page().unwrap(), first);
}

#[test]
fn test_stream_is_unbounded() {
    let mut stream = CatalogStream::new(seeded_generator(), params(SEED, 0, "en", 0.0, 0.0));
    assert!(stream.has_more());

    let last = stream.nth(49).unwrap().unwrap();
    assert_eq!(last.last().unwrap().sequence_index, 50 * 20);
}
