//! Query modules for the Brickset SDK.
//!
//! Each module provides a query struct that borrows the loaded
//! [`Repository`](crate::repository::Repository) and exposes pure,
//! independent aggregation methods. No query mutates the store, and no query
//! depends on another's result.

pub mod sets;
pub mod stats;
pub mod tags;

pub use sets::SetQuery;
pub use stats::StatsQuery;
pub use tags::TagQuery;
