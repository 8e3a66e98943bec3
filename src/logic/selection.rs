//! Cross-page selection reconciliation
//!
//! The Selection Set is global across pages, but the table only ever sees the
//! rows of the page currently loaded. These functions merge per-page checkbox
//! state back into the global set and project the set onto the visible page.
//! All of them are pure: they take the old set and return a new one.

use std::collections::HashSet;

use thiserror::Error;

use crate::api::{Artwork, ArtworkId};
use crate::model::SelectionSet;

/// Why a bulk "select first N" request was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Data is still loading")]
    StillLoading,
    #[error("Please enter a positive number")]
    NotPositive,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("There are only {available} rows on this page")]
    ExceedsPage { requested: i64, available: usize },
}

/// Identifiers of the loaded page, in display order
pub fn page_ids(items: &[Artwork]) -> Vec<ArtworkId> {
    items.iter().map(|item| item.id).collect()
}

/// Merge the checked rows of the visible page into the global set
///
/// Result is `(selection \ current_page_ids) ∪ new_selection_on_page`, so ids
/// from other pages are never touched.
///
/// # Examples
/// ```
/// use artview::logic::selection::toggle_visible;
/// use artview::model::SelectionSet;
///
/// let selection: SelectionSet = [2, 5, 13].into_iter().collect();
/// let page_one = [1, 2, 3, 4, 5];
///
/// // Uncheck 5, check 3 on page one; 13 lives on another page and survives
/// let updated = toggle_visible(&selection, &[2, 3], &page_one);
/// let expected: SelectionSet = [2, 3, 13].into_iter().collect();
/// assert_eq!(updated, expected);
/// ```
pub fn toggle_visible(
    selection: &SelectionSet,
    new_selection_on_page: &[ArtworkId],
    current_page_ids: &[ArtworkId],
) -> SelectionSet {
    let on_page: HashSet<ArtworkId> = current_page_ids.iter().copied().collect();

    selection
        .iter()
        .filter(|id| !on_page.contains(id))
        .chain(new_selection_on_page.iter().copied())
        .collect()
}

/// Parse the bulk-select input field
pub fn parse_count(input: &str) -> Result<i64, SelectionError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))
}

/// Add the first `n` visible rows to the selection
///
/// Rejected while a fetch is in flight, for `n <= 0`, and for `n` larger than
/// the page. Running it again with the same arguments changes nothing.
///
/// # Examples
/// ```
/// use artview::api::Artwork;
/// use artview::logic::selection::{select_first_n, SelectionError};
/// use artview::model::SelectionSet;
///
/// let items: Vec<Artwork> = (1..=12).map(Artwork::bare).collect();
/// let selection = SelectionSet::new();
///
/// let updated = select_first_n(&selection, 5, &items, false).unwrap();
/// let expected: SelectionSet = (1..=5).collect();
/// assert_eq!(updated, expected);
///
/// assert_eq!(select_first_n(&selection, 0, &items, false), Err(SelectionError::NotPositive));
/// assert!(select_first_n(&selection, 20, &items, false).is_err());
/// ```
pub fn select_first_n(
    selection: &SelectionSet,
    n: i64,
    visible_items: &[Artwork],
    loading: bool,
) -> Result<SelectionSet, SelectionError> {
    if loading {
        return Err(SelectionError::StillLoading);
    }
    if n <= 0 {
        return Err(SelectionError::NotPositive);
    }

    let available = visible_items.len();
    let count = usize::try_from(n).map_err(|_| SelectionError::ExceedsPage {
        requested: n,
        available,
    })?;
    if count > available {
        return Err(SelectionError::ExceedsPage {
            requested: n,
            available,
        });
    }

    Ok(selection
        .iter()
        .chain(visible_items[..count].iter().map(|item| item.id))
        .collect())
}

/// Loaded rows whose id is in the selection, in page order
pub fn visible_selection<'a>(page_items: &'a [Artwork], selection: &SelectionSet) -> Vec<&'a Artwork> {
    page_items
        .iter()
        .filter(|item| selection.contains(item.id))
        .collect()
}

/// Number of loaded rows that are selected
pub fn selected_on_page(page_items: &[Artwork], selection: &SelectionSet) -> usize {
    page_items
        .iter()
        .filter(|item| selection.contains(item.id))
        .count()
}

/// Flip the checkbox of one visible row
///
/// Returns `None` if `index` is outside the page.
pub fn toggle_row(
    selection: &SelectionSet,
    page_items: &[Artwork],
    index: usize,
) -> Option<SelectionSet> {
    let target = page_items.get(index)?.id;

    let mut checked: Vec<ArtworkId> = visible_selection(page_items, selection)
        .into_iter()
        .map(|item| item.id)
        .collect();

    if let Some(pos) = checked.iter().position(|id| *id == target) {
        checked.remove(pos);
    } else {
        checked.push(target);
    }

    Some(toggle_visible(selection, &checked, &page_ids(page_items)))
}

/// Header checkbox: check every row of the page, or clear them all if they
/// are already all checked
pub fn toggle_page(selection: &SelectionSet, page_items: &[Artwork]) -> SelectionSet {
    let ids = page_ids(page_items);
    let all_checked = !page_items.is_empty() && selected_on_page(page_items, selection) == page_items.len();

    if all_checked {
        toggle_visible(selection, &[], &ids)
    } else {
        toggle_visible(selection, &ids, &ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: std::ops::RangeInclusive<ArtworkId>) -> Vec<Artwork> {
        ids.map(Artwork::bare).collect()
    }

    fn set(ids: &[ArtworkId]) -> SelectionSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_toggle_visible_keeps_other_pages() {
        let selection = set(&[2, 5, 13]);
        let page_two = page_ids(&page(13..=24));

        let updated = toggle_visible(&selection, &[], &page_two);
        assert_eq!(updated, set(&[2, 5]));
    }

    #[test]
    fn test_toggle_visible_from_empty() {
        let updated = toggle_visible(&SelectionSet::new(), &[2, 5], &page_ids(&page(1..=12)));
        assert_eq!(updated, set(&[2, 5]));
    }

    #[test]
    fn test_toggle_visible_does_not_mutate_input() {
        let selection = set(&[1]);
        let _ = toggle_visible(&selection, &[], &[1]);
        assert_eq!(selection, set(&[1]));
    }

    #[test]
    fn test_cross_page_scenario() {
        let page_one = page(1..=12);
        let page_two = page(13..=24);

        let selection = toggle_visible(&SelectionSet::new(), &[2, 5], &page_ids(&page_one));
        assert_eq!(selection, set(&[2, 5]));

        let selection = toggle_visible(&selection, &[13], &page_ids(&page_two));
        assert_eq!(selection, set(&[2, 5, 13]));

        let visible: Vec<ArtworkId> = visible_selection(&page_one, &selection)
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(visible, vec![2, 5]);
    }

    #[test]
    fn test_select_first_n_selects_display_order() {
        let items = vec![Artwork::bare(40), Artwork::bare(7), Artwork::bare(99)];
        let updated = select_first_n(&SelectionSet::new(), 2, &items, false).unwrap();
        assert_eq!(updated, set(&[40, 7]));
    }

    #[test]
    fn test_select_first_n_is_idempotent() {
        let items = page(1..=12);
        let selection = set(&[100]);

        let once = select_first_n(&selection, 5, &items, false).unwrap();
        let twice = select_first_n(&once, 5, &items, false).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, set(&[1, 2, 3, 4, 5, 100]));
    }

    #[test]
    fn test_select_first_n_keeps_existing_page_selection() {
        let items = page(1..=12);
        let selection = set(&[9]);
        let updated = select_first_n(&selection, 3, &items, false).unwrap();
        assert_eq!(updated, set(&[1, 2, 3, 9]));
    }

    #[test]
    fn test_select_first_n_whole_page() {
        let items = page(1..=12);
        let updated = select_first_n(&SelectionSet::new(), 12, &items, false).unwrap();
        assert_eq!(updated.len(), 12);
    }

    #[test]
    fn test_select_first_n_rejections() {
        let items = page(1..=12);
        let selection = set(&[2]);

        assert_eq!(
            select_first_n(&selection, 0, &items, false),
            Err(SelectionError::NotPositive)
        );
        assert_eq!(
            select_first_n(&selection, -3, &items, false),
            Err(SelectionError::NotPositive)
        );
        assert_eq!(
            select_first_n(&selection, 20, &items, false),
            Err(SelectionError::ExceedsPage {
                requested: 20,
                available: 12
            })
        );
        assert_eq!(
            select_first_n(&selection, 5, &items, true),
            Err(SelectionError::StillLoading)
        );
        assert_eq!(selection, set(&[2]));
    }

    #[test]
    fn test_select_first_n_empty_page() {
        assert!(matches!(
            select_first_n(&SelectionSet::new(), 1, &[], false),
            Err(SelectionError::ExceedsPage { available: 0, .. })
        ));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(" 5 "), Ok(5));
        assert_eq!(parse_count("-2"), Ok(-2));
        assert_eq!(
            parse_count("five"),
            Err(SelectionError::NotANumber("five".to_string()))
        );
        assert!(parse_count("").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SelectionError::ExceedsPage {
            requested: 20,
            available: 12,
        };
        assert_eq!(err.to_string(), "There are only 12 rows on this page");
        assert_eq!(SelectionError::StillLoading.to_string(), "Data is still loading");
    }

    #[test]
    fn test_visible_selection_is_pure() {
        let items = page(1..=12);
        let selection = set(&[3, 8, 50]);

        let first = visible_selection(&items, &selection);
        let second = visible_selection(&items, &selection);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(selected_on_page(&items, &selection), 2);
    }

    #[test]
    fn test_toggle_row() {
        let items = page(1..=12);
        let selection = set(&[30]);

        let checked = toggle_row(&selection, &items, 1).unwrap();
        assert_eq!(checked, set(&[2, 30]));

        let unchecked = toggle_row(&checked, &items, 1).unwrap();
        assert_eq!(unchecked, set(&[30]));

        assert!(toggle_row(&selection, &items, 12).is_none());
    }

    #[test]
    fn test_toggle_page() {
        let items = page(1..=3);
        let selection = set(&[2, 40]);

        let all = toggle_page(&selection, &items);
        assert_eq!(all, set(&[1, 2, 3, 40]));

        let none = toggle_page(&all, &items);
        assert_eq!(none, set(&[40]));
    }

    #[test]
    fn test_toggle_page_empty() {
        let selection = set(&[1]);
        assert_eq!(toggle_page(&selection, &[]), selection);
    }
}
