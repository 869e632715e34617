//! Domain utilities

pub mod dates;
pub mod values;
