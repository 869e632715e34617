//! Common infrastructure shared across ProjBoard crates.
//!
//! Currently a single module: pooled SQLite storage used by the infra
//! record store.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod storage;

pub use storage::{
    apply_connection_pragmas, HealthStatus, SqliteConnection, SqlitePool, SqlitePoolConfig,
    StorageError, StorageResult,
};
