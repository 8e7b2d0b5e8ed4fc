//! Tag projections over the catalog.

use std::collections::HashSet;

use crate::models::LegoSet;
use crate::repository::Repository;

// ---------------------------------------------------------------------------
// TagQuery
// ---------------------------------------------------------------------------

/// Query interface for the tags attached to LEGO sets.
pub struct TagQuery<'a> {
    store: &'a Repository<LegoSet>,
}

impl<'a> TagQuery<'a> {
    /// Create a new `TagQuery` bound to the given record store.
    pub fn new(store: &'a Repository<LegoSet>) -> Self {
        Self { store }
    }

    /// Unique tags across the whole catalog, in first-occurrence order.
    ///
    /// The iterator is lazy and can be re-created by calling this method
    /// again. Sets without tags contribute nothing.
    pub fn distinct(&self) -> impl Iterator<Item = &'a str> + 'a {
        let mut seen = HashSet::new();
        self.store
            .all()
            .iter()
            .filter_map(|set| set.tags.as_deref())
            .flatten()
            .map(String::as_str)
            .filter(move |tag| seen.insert(*tag))
    }

    /// Number of unique tags across the whole catalog.
    pub fn count_distinct(&self) -> usize {
        self.distinct().count()
    }
}
