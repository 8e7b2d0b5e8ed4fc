use serde::{Deserialize, Serialize};

use super::packaging::PackagingType;

// ---------------------------------------------------------------------------
// LegoSet — a single catalog record
// ---------------------------------------------------------------------------

/// A LEGO set record as stored in the catalog.
///
/// Every field other than `pieces` may be null in the source data. Records
/// carry no identity; the queries treat the catalog purely as a sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoSet {
    pub theme: Option<String>,
    pub pieces: u32,
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub packaging_type: Option<PackagingType>,
}
