//! # ProjBoard Domain
//!
//! Business domain types and models for ProjBoard.
//!
//! This crate contains:
//! - Project and checklist records as persisted by the record stores
//! - Progress vocabulary (milestones, weights, tiers, counting policy)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Lenient date parsing for untrusted store data
//!
//! ## Architecture
//! - No dependencies on other ProjBoard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::dates::{format_date, parse_date_lenient};
