//! # ProjBoard Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The SQLite record store (pooled, migrated on open)
//! - The JSON-document record store
//! - Configuration loading (environment, JSON and TOML files)
//! - Conversions from infrastructure errors into `ProjBoardError`
//!
//! ## Architecture
//! - Implements traits defined in `projboard-core`
//! - Depends on `projboard-common` for connection pooling
//! - Contains all "impure" code (file and database I/O)

pub mod config;
pub mod database;
pub mod errors;
pub mod file_store;

// Re-export commonly used items
pub use database::{DbManager, SqliteProjectRepository};
pub use errors::InfraError;
pub use file_store::JsonFileStore;
