//! Out-of-order page responses
//!
//! Page fetches run concurrently on the API worker. If the user pages from
//! 3 to 4 before page 3 answers, the page 3 response can arrive last. Every
//! fetch is tagged with a generation number and only the newest generation
//! may touch the screen, so the late response is dropped.

use artview::api::{Artwork, ArtworkId, ArtworksPage, Pagination};
use artview::model::{Model, PageOutcome, SelectionSet};

fn page_of(ids: std::ops::RangeInclusive<ArtworkId>) -> ArtworksPage {
    ArtworksPage {
        data: ids.map(Artwork::bare).collect(),
        pagination: Some(Pagination {
            total_pages: Some(10),
            ..Default::default()
        }),
    }
}

#[test]
fn test_late_page_three_does_not_overwrite_page_four() {
    let mut model = Model::new(false);

    let page3 = model.begin_page_load(3);
    let page4 = model.begin_page_load(4);
    assert!(page4.generation > page3.generation);
    assert_eq!(model.target_page(), 4);

    // Page 4 answers first
    let outcome = model.apply_page_response(page4.generation, 4, Ok(page_of(37..=48)));
    assert_eq!(outcome, PageOutcome::Applied { page: 4, rows: 12 });

    model.catalog.cursor = Some(0);
    model.toggle_cursor_row();
    let expected: SelectionSet = [37].into_iter().collect();
    assert_eq!(model.selection, expected);

    // Page 3 straggles in
    let outcome = model.apply_page_response(page3.generation, 3, Ok(page_of(25..=36)));
    assert_eq!(
        outcome,
        PageOutcome::Stale {
            generation: page3.generation,
            page: 3
        }
    );

    assert_eq!(model.catalog.page, 4);
    assert_eq!(model.catalog.items.first().map(|a| a.id), Some(37));
    assert_eq!(model.selection, expected);
    assert!(!model.is_loading());
}

#[test]
fn test_late_response_is_dropped_while_newer_fetch_pending() {
    let mut model = Model::new(false);

    let page3 = model.begin_page_load(3);
    let _page4 = model.begin_page_load(4);

    let outcome = model.apply_page_response(page3.generation, 3, Ok(page_of(25..=36)));
    assert!(matches!(outcome, PageOutcome::Stale { .. }));

    // Still waiting on page 4; nothing from page 3 is shown
    assert!(model.is_loading());
    assert!(model.catalog.items.is_empty());
    assert_eq!(model.target_page(), 4);
}

#[test]
fn test_late_error_does_not_clear_current_page() {
    let mut model = Model::new(false);

    let page3 = model.begin_page_load(3);
    let page4 = model.begin_page_load(4);
    model.apply_page_response(page4.generation, 4, Ok(page_of(37..=48)));

    let outcome = model.apply_page_response(
        page3.generation,
        3,
        Err(anyhow::anyhow!("request timed out")),
    );

    assert!(matches!(outcome, PageOutcome::Stale { .. }));
    assert_eq!(model.catalog.items.len(), 12);
    assert!(!model.catalog.load_failed);
}
