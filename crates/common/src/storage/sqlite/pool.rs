//! SQLite connection pool
//!
//! r2d2-based connection pooling with per-connection pragmas.

use std::path::Path;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use tracing::{debug, info, instrument, warn};

use super::config::SqlitePoolConfig;
use super::connection::SqliteConnection;
use super::pragmas::apply_connection_pragmas;
use crate::storage::error::{StorageError, StorageResult};

/// Pool health snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub healthy: bool,
    pub connections: u32,
    pub idle_connections: u32,
    pub max_connections: u32,
    pub message: Option<String>,
}

/// SQLite connection pool
///
/// Cheap to clone; clones share the same underlying pool.
#[derive(Debug, Clone)]
pub struct SqlitePool {
    pool: Pool<SqliteConnectionManager>,
    config: SqlitePoolConfig,
}

impl SqlitePool {
    /// Open (creating if needed) the database at `path` and build a pool.
    ///
    /// # Errors
    /// Returns an error if the file can't be opened or pragmas fail.
    #[instrument(fields(db_path = ?path, pool_size = config.max_size))]
    pub fn open(path: &Path, config: SqlitePoolConfig) -> StorageResult<Self> {
        info!("Creating SQLite connection pool");
        Self::build(SqliteConnectionManager::file(path), config)
    }

    /// Pool over a private in-memory database.
    ///
    /// Limited to one connection: every connection to `:memory:` is a
    /// separate database.
    pub fn in_memory() -> StorageResult<Self> {
        let config = SqlitePoolConfig { max_size: 1, enable_wal: false, ..SqlitePoolConfig::default() };
        Self::build(SqliteConnectionManager::memory(), config)
    }

    fn build(manager: SqliteConnectionManager, config: SqlitePoolConfig) -> StorageResult<Self> {
        let pragma_config = config.clone();
        let manager = manager.with_init(move |conn| {
            apply_connection_pragmas(conn, &pragma_config)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
        });

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .map_err(|e| {
                warn!("Failed to create connection pool: {}", e);
                StorageError::Connection(format!("Failed to create pool: {}", e))
            })?;

        debug!("SQLite pool created with {} connections", config.max_size);
        Ok(Self { pool, config })
    }

    /// Get a connection from the pool
    pub fn get_connection(&self) -> StorageResult<SqliteConnection> {
        match self.pool.get() {
            Ok(conn) => Ok(SqliteConnection::new(conn)),
            Err(e) => {
                let err_str = e.to_string().to_lowercase();
                if err_str.contains("timed out") || err_str.contains("timeout") {
                    warn!("Connection timeout after {:?}", self.config.connection_timeout);
                    Err(StorageError::Timeout(self.config.connection_timeout.as_secs()))
                } else {
                    warn!("Connection error: {}", e);
                    Err(StorageError::Connection(format!("Failed to get connection: {}", e)))
                }
            }
        }
    }

    /// Report pool state and whether a connection can be checked out
    pub fn health_check(&self) -> HealthStatus {
        let state = self.pool.state();
        let mut status = HealthStatus {
            healthy: true,
            connections: state.connections,
            idle_connections: state.idle_connections,
            max_connections: self.config.max_size,
            message: None,
        };

        if let Err(e) = self.pool.get() {
            status.healthy = false;
            status.message = Some(format!("Pool unhealthy: {}", e));
        }
        status
    }

    /// Pool configuration
    pub fn config(&self) -> &SqlitePoolConfig {
        &self.config
    }
}
