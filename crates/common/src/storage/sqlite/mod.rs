//! SQLite backend implementation
//!
//! Provides an r2d2-based connection pool for SQLite databases.

pub mod config;
pub mod connection;
pub mod pool;
pub mod pragmas;

pub use config::SqlitePoolConfig;
pub use connection::SqliteConnection;
pub use pool::{HealthStatus, SqlitePool};
pub use pragmas::apply_connection_pragmas;
