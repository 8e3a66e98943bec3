//! Cross-page selection tests
//!
//! Checked rows must survive page changes. Each page only edits its own ids;
//! ids that belong to other pages stay in the set untouched until their page
//! is visible again.
//!
//! Flow exercised here goes through `Model`, the same path the key handlers
//! use: issue a fetch, apply the response, toggle rows under the cursor.

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

/// Issue a fetch for `page` and answer it immediately
fn load(model: &mut Model, page: u32, ids: std::ops::RangeInclusive<ArtworkId>) {
    let ticket = model.begin_page_load(page);
    let outcome = model.apply_page_response(ticket.generation, ticket.page, Ok(page_of(ids)));
    assert!(matches!(outcome, PageOutcome::Applied { .. }), "got {:?}", outcome);
}

/// Put the cursor on the row with `id` and toggle it
fn toggle_id(model: &mut Model, id: ArtworkId) {
    let idx = model
        .catalog
        .items
        .iter()
        .position(|a| a.id == id)
        .expect("id not on page");
    model.catalog.cursor = Some(idx);
    model.toggle_cursor_row().expect("toggle failed");
}

fn visible_ids(model: &Model) -> Vec<ArtworkId> {
    model.visible_selection().iter().map(|a| a.id).collect()
}

#[test]
fn test_selection_survives_page_round_trip() {
    let mut model = Model::new(false);

    load(&mut model, 1, 1..=12);
    toggle_id(&mut model, 2);
    toggle_id(&mut model, 5);
    let expected: SelectionSet = [2, 5].into_iter().collect();
    assert_eq!(model.selection, expected);

    load(&mut model, 2, 13..=24);
    assert!(visible_ids(&model).is_empty(), "page 2 starts with nothing checked");
    toggle_id(&mut model, 13);
    let expected: SelectionSet = [2, 5, 13].into_iter().collect();
    assert_eq!(model.selection, expected);

    load(&mut model, 1, 1..=12);
    assert_eq!(visible_ids(&model), vec![2, 5]);
    assert!(!visible_ids(&model).contains(&13));
}

#[test]
fn test_unchecking_on_one_page_keeps_other_pages() {
    let mut model = Model::new(false);

    load(&mut model, 2, 13..=24);
    toggle_id(&mut model, 13);

    load(&mut model, 1, 1..=12);
    toggle_id(&mut model, 2);
    toggle_id(&mut model, 5);
    toggle_id(&mut model, 5);

    let expected: SelectionSet = [2, 13].into_iter().collect();
    assert_eq!(model.selection, expected);
}

#[test]
fn test_page_toggle_only_touches_visible_ids() {
    let mut model = Model::new(false);

    load(&mut model, 2, 13..=24);
    toggle_id(&mut model, 20);

    load(&mut model, 1, 1..=12);
    model.toggle_current_page();
    assert_eq!(model.selection.len(), 13);

    // Second press clears page 1 only
    model.toggle_current_page();
    let expected: SelectionSet = [20].into_iter().collect();
    assert_eq!(model.selection, expected);
}

#[test]
fn test_failed_page_keeps_selection() {
    let mut model = Model::new(false);

    load(&mut model, 1, 1..=12);
    toggle_id(&mut model, 3);

    let ticket = model.begin_page_load(2);
    let outcome = model.apply_page_response(
        ticket.generation,
        ticket.page,
        Err(anyhow::anyhow!("API error (500 Internal Server Error): boom")),
    );

    assert!(matches!(outcome, PageOutcome::Failed { page: 2, .. }), "got {:?}", outcome);
    assert!(model.catalog.items.is_empty());
    assert!(model.selection.contains(3));
}
