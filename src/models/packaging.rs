use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PackagingType
// ---------------------------------------------------------------------------

/// Packaging category of a LEGO set.
///
/// A closed enumeration used purely as a grouping key. Serialized as the
/// SCREAMING_SNAKE_CASE constants found in the dataset (`"BOX"`,
/// `"BLISTER_PACK"`, ...); an unrecognized constant fails at load time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackagingType {
    Bag,
    BlisterPack,
    Box,
    Bucket,
    Canister,
    FoilPack,
    PlasticBox,
    Polybag,
    ShrinkWrapped,
    Tub,
    Other,
    None,
}
