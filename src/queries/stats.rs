//! Reductions and grouped summaries over the catalog.

use std::collections::{BTreeSet, HashMap};

use crate::error::{BricksetError, Result};
use crate::models::{LegoSet, PackagingType};
use crate::repository::Repository;

// ---------------------------------------------------------------------------
// StatsQuery
// ---------------------------------------------------------------------------

/// Query interface for reductions and grouped summaries.
pub struct StatsQuery<'a> {
    store: &'a Repository<LegoSet>,
}

impl<'a> StatsQuery<'a> {
    /// Create a new `StatsQuery` bound to the given record store.
    pub fn new(store: &'a Repository<LegoSet>) -> Self {
        Self { store }
    }

    /// Arithmetic mean of the piece counts across the whole catalog.
    ///
    /// Fails with [`BricksetError::EmptyDataset`] when the catalog holds no
    /// records. Contrast with [`max_pieces`](Self::max_pieces), which reports
    /// absence as `None` instead.
    pub fn average_pieces(&self) -> Result<f64> {
        let records = self.store.all();
        if records.is_empty() {
            return Err(BricksetError::EmptyDataset(
                "cannot average pieces over zero sets".to_string(),
            ));
        }
        let total: u64 = records.iter().map(|set| u64::from(set.pieces)).sum();
        Ok(total as f64 / records.len() as f64)
    }

    /// Largest piece count in the catalog, or `None` when the catalog is
    /// empty.
    pub fn max_pieces(&self) -> Option<u32> {
        self.store.all().iter().map(|set| set.pieces).max()
    }

    /// Number of sets per packaging type.
    ///
    /// Sets without a packaging type are counted under the `None` key, so
    /// the values always sum to the total record count.
    pub fn packaging_type_frequency(&self) -> HashMap<Option<PackagingType>, usize> {
        let mut freq = HashMap::new();
        for set in self.store.all() {
            *freq.entry(set.packaging_type).or_insert(0) += 1;
        }
        freq
    }

    /// Distinct packaging types observed for each theme.
    ///
    /// Value sets contain only non-null packaging types; a theme whose sets
    /// all lack one still appears, mapped to an empty set. Sets without a
    /// theme are skipped.
    pub fn themes_with_packaging_types(&self) -> HashMap<&'a str, BTreeSet<PackagingType>> {
        let mut map: HashMap<&str, BTreeSet<PackagingType>> = HashMap::new();
        for set in self.store.all() {
            if let Some(theme) = set.theme.as_deref() {
                let entry = map.entry(theme).or_default();
                if let Some(packaging) = set.packaging_type {
                    entry.insert(packaging);
                }
            }
        }
        map
    }
}
