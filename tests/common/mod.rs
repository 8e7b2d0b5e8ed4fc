//! Shared test fixtures for the Brickset SDK integration tests.
//!
//! Provides `sample_sdk()`, which writes a small sample catalog to a JSON
//! temp file and builds a `BricksetSdk` from it, plus `empty_sdk()` for the
//! zero-record edge cases.

use brickset_sdk::BricksetSdk;
use std::io::Write;
use tempfile::NamedTempFile;

/// Build a `BricksetSdk` from the given JSON rows via a temp file.
///
/// The temp file only needs to live through `build()`; the catalog is
/// deserialized eagerly into memory.
pub fn sdk_from_rows(rows: &[serde_json::Value]) -> BricksetSdk {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::Value::Array(rows.to_vec())).unwrap();
    file.flush().unwrap();

    BricksetSdk::builder()
        .data_path(file.path())
        .build()
        .unwrap()
}

/// Sample catalog rows: eight sets across four themes, with null themes,
/// names, tags, and packaging types all represented.
pub fn sample_rows() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "name": "Ramses Return",
            "pieces": 189,
            "theme": "Games",
            "tags": ["Board Game", "Egypt"],
            "packagingType": "BOX"
        }),
        serde_json::json!({
            "name": "Lunar Command",
            "pieces": 481,
            "theme": "Games",
            "tags": ["Board Game", "Space"],
            "packagingType": "BOX"
        }),
        serde_json::json!({
            "name": "Fire Station",
            "pieces": 668,
            "theme": "City",
            "tags": ["Fire", "Vehicles"],
            "packagingType": "BOX"
        }),
        serde_json::json!({
            "name": "Street Sweeper",
            "pieces": 91,
            "theme": "City",
            "tags": ["Vehicles"],
            "packagingType": "POLYBAG"
        }),
        serde_json::json!({
            "name": null,
            "pieces": 42,
            "theme": "Duplo",
            "tags": null,
            "packagingType": null
        }),
        serde_json::json!({
            "name": "Giant House Set",
            "pieces": 120,
            "theme": "Duplo",
            "tags": ["House"],
            "packagingType": null
        }),
        serde_json::json!({
            "name": "Promo Racer",
            "pieces": 28,
            "theme": null,
            "tags": null,
            "packagingType": "POLYBAG"
        }),
        serde_json::json!({
            "name": "Winter Toy Shop",
            "pieces": 898,
            "theme": "Creator Expert",
            "tags": ["Winter", "House"],
            "packagingType": "BOX"
        }),
    ]
}

/// An SDK over the sample catalog.
pub fn sample_sdk() -> BricksetSdk {
    sdk_from_rows(&sample_rows())
}

/// An SDK over zero records.
pub fn empty_sdk() -> BricksetSdk {
    sdk_from_rows(&[])
}
