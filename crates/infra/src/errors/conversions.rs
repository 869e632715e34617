//! Conversions from external infrastructure errors into domain errors.

use projboard_common::storage::StorageError;
use projboard_domain::ProjBoardError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ProjBoardError);

impl From<InfraError> for ProjBoardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ProjBoardError> for InfraError {
    fn from(value: ProjBoardError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoProjBoardError {
    fn into_projboard(self) -> ProjBoardError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → ProjBoardError */
/* -------------------------------------------------------------------------- */

impl IntoProjBoardError for SqlError {
    fn into_projboard(self) -> ProjBoardError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        ProjBoardError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        ProjBoardError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067 | 1555) => {
                        ProjBoardError::Conflict("unique constraint violation".into())
                    }
                    (ErrorCode::ConstraintViolation, 787) => {
                        ProjBoardError::Database("foreign key constraint violation".into())
                    }
                    _ => ProjBoardError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => ProjBoardError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                ProjBoardError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                ProjBoardError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => ProjBoardError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => ProjBoardError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_projboard())
    }
}

/* -------------------------------------------------------------------------- */
/* StorageError → ProjBoardError */
/* -------------------------------------------------------------------------- */

impl IntoProjBoardError for StorageError {
    fn into_projboard(self) -> ProjBoardError {
        match self {
            StorageError::Rusqlite(err) => err.into_projboard(),
            StorageError::Io(err) => err.into_projboard(),
            StorageError::InvalidConfig(msg) => ProjBoardError::Config(msg),
            StorageError::Timeout(secs) => {
                ProjBoardError::Database(format!("timed out waiting {secs}s for a connection"))
            }
            other => ProjBoardError::Database(other.to_string()),
        }
    }
}

impl From<StorageError> for InfraError {
    fn from(value: StorageError) -> Self {
        InfraError(value.into_projboard())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ProjBoardError */
/* -------------------------------------------------------------------------- */

impl IntoProjBoardError for serde_json::Error {
    fn into_projboard(self) -> ProjBoardError {
        ProjBoardError::Serialization(format!(
            "{} at line {} column {}",
            self,
            self.line(),
            self.column()
        ))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_projboard())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → ProjBoardError */
/* -------------------------------------------------------------------------- */

impl IntoProjBoardError for std::io::Error {
    fn into_projboard(self) -> ProjBoardError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => ProjBoardError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                ProjBoardError::Database(format!("permission denied: {self}"))
            }
            _ => ProjBoardError::Database(format!("i/o error: {self}")),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_projboard())
    }
}

/// Convert a failed `spawn_blocking` join into a domain error.
pub fn map_join_error(err: JoinError) -> ProjBoardError {
    if err.is_cancelled() {
        ProjBoardError::Internal("blocking store task was cancelled".into())
    } else {
        ProjBoardError::Internal(format!("blocking store task panicked: {err}"))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
