//! Database connection manager backed by the shared SQLite pool.

use std::path::{Path, PathBuf};

use projboard_common::storage::{SqliteConnection, SqlitePool, SqlitePoolConfig};
use projboard_domain::{ProjBoardError, Result};
use rusqlite::params;
use tracing::{debug, info};

use crate::errors::InfraError;

pub(crate) const SCHEMA_VERSION: i32 = 1;
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Database manager that wraps a [`SqlitePool`].
pub struct DbManager {
    pool: SqlitePool,
    path: Option<PathBuf>,
}

impl DbManager {
    /// Open the database at `db_path` with the given pool size.
    pub fn new<P: AsRef<Path>>(db_path: P, pool_size: u32) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ProjBoardError::from(InfraError::from(e)))?;
        }

        let pool = SqlitePool::open(&path, SqlitePoolConfig::with_max_size(pool_size))
            .map_err(|e| ProjBoardError::from(InfraError::from(e)))?;

        info!(
            db_path = %path.display(),
            max_connections = pool.config().max_size,
            "sqlite pool initialised"
        );

        Ok(Self { pool, path: Some(path) })
    }

    /// Private in-memory database, mostly for tests.
    pub fn in_memory() -> Result<Self> {
        let pool = SqlitePool::in_memory().map_err(|e| ProjBoardError::from(InfraError::from(e)))?;
        Ok(Self { pool, path: None })
    }

    /// Open the database and apply the schema.
    pub fn open_and_migrate<P: AsRef<Path>>(db_path: P, pool_size: u32) -> Result<Self> {
        let manager = Self::new(db_path, pool_size)?;
        manager.run_migrations()?;
        Ok(manager)
    }

    /// Acquire a connection from the pool.
    pub fn get_connection(&self) -> Result<SqliteConnection> {
        self.pool.get_connection().map_err(|e| InfraError::from(e).into())
    }

    /// Ensure the full schema exists on the current database.
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.get_connection()?;
        create_schema(&conn)?;
        debug!(version = SCHEMA_VERSION, "schema up to date");
        Ok(())
    }

    /// Return the configured database path (`None` for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Perform a health check to verify database connectivity.
    pub fn health_check(&self) -> Result<()> {
        let status = self.pool.health_check();
        if !status.healthy {
            return Err(ProjBoardError::Database(
                status.message.unwrap_or_else(|| "pool unhealthy".into()),
            ));
        }
        let conn = self.get_connection()?;
        conn.query_optional("SELECT 1", params![], |row| row.get::<_, i32>(0))
            .map_err(|e| ProjBoardError::from(InfraError::from(e)))?;
        Ok(())
    }
}

fn create_schema(conn: &SqliteConnection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL).map_err(map_sql_error)?;
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, CAST(strftime('%s','now') AS INTEGER))",
        params![SCHEMA_VERSION],
    )
    .map_err(|e| ProjBoardError::from(InfraError::from(e)))?;
    Ok(())
}

fn map_sql_error(err: rusqlite::Error) -> ProjBoardError {
    ProjBoardError::from(InfraError::from(err))
}
