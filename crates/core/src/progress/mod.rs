//! Milestone-weighted progress scoring

pub mod engine;

pub use engine::*;
