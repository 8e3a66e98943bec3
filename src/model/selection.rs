//! Selection Set
//!
//! Global set of selected artwork ids. Ids from pages that are not loaded
//! stay in the set until the user deselects them on their own page.

use std::collections::BTreeSet;

use crate::api::ArtworkId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<ArtworkId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<ArtworkId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ArtworkId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_deduplicates() {
        let set: SelectionSet = [3, 1, 3, 2].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty() {
        let set = SelectionSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(1));
    }
}
