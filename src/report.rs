//! Line-oriented text reports.
//!
//! Renders the sequence-producing and scalar queries as human-readable text:
//! one value per line for sequences, a single line for scalars. Output goes
//! to any [`std::io::Write`], so callers can print to stdout or capture the
//! text in tests.

use std::io::Write;

use crate::error::Result;
use crate::BricksetSdk;

/// Write every set name in ascending order, one per line, unnamed sets
/// first.
///
/// Unnamed sets render as the literal `null`.
pub fn write_names_alphabetical<W: Write>(sdk: &BricksetSdk, out: &mut W) -> Result<()> {
    for name in sdk.sets().names_alphabetical() {
        writeln!(out, "{}", name.unwrap_or("null"))?;
    }
    Ok(())
}

/// Write the first `n` set names in catalog order, one per line.
pub fn write_first_names<W: Write>(sdk: &BricksetSdk, n: usize, out: &mut W) -> Result<()> {
    for name in sdk.sets().first_names(n) {
        writeln!(out, "{}", name.unwrap_or("null"))?;
    }
    Ok(())
}

/// Write every distinct tag in first-occurrence order, one per line.
pub fn write_distinct_tags<W: Write>(sdk: &BricksetSdk, out: &mut W) -> Result<()> {
    for tag in sdk.tags().distinct() {
        writeln!(out, "{}", tag)?;
    }
    Ok(())
}

/// Write the largest piece count as a single line.
///
/// Writes nothing when the catalog is empty.
pub fn write_max_pieces<W: Write>(sdk: &BricksetSdk, out: &mut W) -> Result<()> {
    if let Some(max) = sdk.stats().max_pieces() {
        writeln!(out, "{}", max)?;
    }
    Ok(())
}
