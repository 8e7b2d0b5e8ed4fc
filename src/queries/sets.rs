//! Record-level filters and projections over the catalog.

use crate::models::LegoSet;
use crate::repository::Repository;

// ---------------------------------------------------------------------------
// SetQuery
// ---------------------------------------------------------------------------

/// Query interface for counting and listing LEGO sets.
pub struct SetQuery<'a> {
    store: &'a Repository<LegoSet>,
}

impl<'a> SetQuery<'a> {
    /// Create a new `SetQuery` bound to the given record store.
    pub fn new(store: &'a Repository<LegoSet>) -> Self {
        Self { store }
    }

    /// Total number of sets in the catalog.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Count the sets whose theme contains the given fragment.
    ///
    /// Sets without a theme are excluded.
    pub fn count_with_theme(&self, theme: &str) -> usize {
        self.store
            .all()
            .iter()
            .filter(|set| {
                set.theme
                    .as_deref()
                    .map(|t| t.contains(theme))
                    .unwrap_or(false)
            })
            .count()
    }

    /// Count the sets with strictly more than `threshold` pieces.
    pub fn count_with_pieces_over(&self, threshold: u32) -> usize {
        self.store
            .all()
            .iter()
            .filter(|set| set.pieces > threshold)
            .count()
    }

    /// All set names in ascending order, unnamed sets first.
    ///
    /// `Option` ordering places `None` before any `Some`, which gives the
    /// nulls-first listing.
    pub fn names_alphabetical(&self) -> Vec<Option<&'a str>> {
        let mut names: Vec<Option<&str>> = self
            .store
            .all()
            .iter()
            .map(|set| set.name.as_deref())
            .collect();
        names.sort();
        names
    }

    /// The first `n` set names in catalog order (not sorted).
    ///
    /// Returns all names when the catalog holds fewer than `n` sets.
    pub fn first_names(&self, n: usize) -> Vec<Option<&'a str>> {
        self.store
            .all()
            .iter()
            .take(n)
            .map(|set| set.name.as_deref())
            .collect()
    }

    /// Whether any set has exactly `pieces` pieces.
    ///
    /// Stops at the first match.
    pub fn any_with_pieces(&self, pieces: u32) -> bool {
        self.store.all().iter().any(|set| set.pieces == pieces)
    }
}
