//! Brickset SDK for Rust.
//!
//! Provides a high-level client for querying a catalog of LEGO set records.
//! The catalog is bundled with the crate as a static JSON file, loaded once
//! into an in-memory record store at construction, and queried through small,
//! independent aggregation interfaces.
//!
//! # Quick start
//!
//! ```
//! use brickset_sdk::BricksetSdk;
//!
//! let sdk = BricksetSdk::builder().build().unwrap();
//!
//! // Count sets by theme fragment
//! let city_sets = sdk.sets().count_with_theme("City");
//! assert!(city_sets > 0);
//!
//! // Grouped summaries
//! let by_packaging = sdk.stats().packaging_type_frequency();
//! assert_eq!(by_packaging.values().sum::<usize>(), sdk.sets().count());
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod report;
pub mod repository;

pub use error::{BricksetError, Result};
pub use models::{LegoSet, PackagingType};
pub use repository::Repository;

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// BricksetSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BricksetSdk`] instance.
///
/// Use [`BricksetSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](BricksetSdkBuilder::build) to create the SDK.
#[derive(Default)]
pub struct BricksetSdkBuilder {
    data_path: Option<PathBuf>,
}

impl BricksetSdkBuilder {
    /// Load the catalog from a custom JSON file instead of the bundled
    /// dataset.
    ///
    /// The file must contain a JSON array of set objects, or an object
    /// wrapping the array under a `"data"` key.
    pub fn data_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the SDK, loading and deserializing the catalog eagerly.
    ///
    /// A malformed document or record fails here, before any query runs.
    pub fn build(self) -> Result<BricksetSdk> {
        let (store, source) = match self.data_path {
            Some(path) => {
                let store = Repository::from_path(&path)?;
                (store, path.display().to_string())
            }
            None => {
                let store = Repository::from_json(config::BUNDLED_DATA)?;
                (store, config::DATA_FILE.to_string())
            }
        };
        Ok(BricksetSdk { store, source })
    }
}

// ---------------------------------------------------------------------------
// BricksetSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Brickset SDK.
///
/// Owns the loaded [`Repository`] of [`LegoSet`] records and exposes the
/// query interfaces as lightweight borrowing wrappers. The record sequence
/// is read-only for the lifetime of the SDK; no query mutates it.
///
/// Created via [`BricksetSdk::builder()`].
#[derive(Debug)]
pub struct BricksetSdk {
    store: Repository<LegoSet>,
    source: String,
}

impl BricksetSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> BricksetSdkBuilder {
        BricksetSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access record-level filters and projections (counts, name listings).
    pub fn sets(&self) -> queries::sets::SetQuery<'_> {
        queries::sets::SetQuery::new(&self.store)
    }

    /// Access reductions and grouped summaries (average, max, frequency
    /// tables).
    pub fn stats(&self) -> queries::stats::StatsQuery<'_> {
        queries::stats::StatsQuery::new(&self.store)
    }

    /// Access tag projections (distinct tag listing).
    pub fn tags(&self) -> queries::tags::TagQuery<'_> {
        queries::tags::TagQuery::new(&self.store)
    }

    // -- Utility methods ---------------------------------------------------

    /// Return a reference to the underlying record store.
    pub fn store(&self) -> &Repository<LegoSet> {
        &self.store
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for BricksetSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BricksetSdk(source={}, records={})",
            self.source,
            self.store.len()
        )
    }
}
