//! Dashboard aggregation: one progress card per project plus the quantity
//! counter.

pub mod summary;

pub use summary::*;
