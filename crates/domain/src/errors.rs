//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ProjBoard
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ProjBoardError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProjBoardError {
    /// Error raised when a project name is already taken in the store.
    pub fn duplicate_project(name: &str) -> Self {
        Self::Conflict(format!("project name '{name}' already exists"))
    }

    /// Error raised when no project with the given name exists.
    pub fn project_not_found(name: &str) -> Self {
        Self::NotFound(format!("project '{name}'"))
    }

    /// Stable label for logging and exit-code mapping.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Database(_) => "database",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::InvalidInput(_) => "invalid_input",
            Self::Serialization(_) => "serialization",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for ProjBoard operations
pub type Result<T> = std::result::Result<T, ProjBoardError>;
