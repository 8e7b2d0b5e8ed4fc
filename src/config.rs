/// File name of the bundled dataset, used in diagnostics and `Display` output.
pub const DATA_FILE: &str = "brickset.json";

/// The bundled LEGO set catalog, embedded at compile time.
///
/// A JSON array of set objects with the fields `name`, `pieces`, `theme`,
/// `tags`, and `packagingType`.
pub const BUNDLED_DATA: &str = include_str!("../data/brickset.json");
