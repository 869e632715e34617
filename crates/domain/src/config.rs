//! Configuration structures
//!
//! Loading lives in `projboard-infra::config`; this module only defines the
//! shape and the defaults.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_JSON_PATH, DEFAULT_POOL_SIZE, DEFAULT_SQLITE_PATH};
use crate::types::CountingPolicy;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

/// Which record store backs the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    Sqlite,
    JsonFile,
}

crate::impl_domain_status_conversions!(StoreBackend {
    Sqlite => "sqlite",
    JsonFile => "json_file",
});

impl StoreBackend {
    /// Default file path for this backend.
    pub const fn default_path(self) -> &'static str {
        match self {
            Self::Sqlite => DEFAULT_SQLITE_PATH,
            Self::JsonFile => DEFAULT_JSON_PATH,
        }
    }
}

/// Record store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Database or JSON document path; empty means the backend default.
    #[serde(default)]
    pub path: String,
    /// Connection pool size (SQLite only).
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl StoreConfig {
    /// Store config for `backend` at its default path.
    pub fn for_backend(backend: StoreBackend) -> Self {
        Self { backend, path: backend.default_path().to_string(), pool_size: DEFAULT_POOL_SIZE }
    }

    /// Configured path, or the backend's default when none was given.
    pub fn resolved_path(&self) -> &str {
        if self.path.trim().is_empty() {
            self.backend.default_path()
        } else {
            &self.path
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::for_backend(StoreBackend::default())
    }
}

const fn default_pool_size() -> u32 {
    DEFAULT_POOL_SIZE
}

/// Progress computation configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    #[serde(default)]
    pub policy: CountingPolicy,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: Config = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert_eq!(config.store.path, DEFAULT_SQLITE_PATH);
        assert_eq!(config.progress.policy, CountingPolicy::WhenSet);
    }

    #[test]
    fn partial_store_section_fills_pool_size() {
        let config: Config = serde_json::from_value(json!({
            "store": { "backend": "json_file", "path": "/tmp/board.json" },
            "progress": { "policy": "when_passed" }
        }))
        .unwrap();
        assert_eq!(config.store.backend, StoreBackend::JsonFile);
        assert_eq!(config.store.path, "/tmp/board.json");
        assert_eq!(config.store.pool_size, DEFAULT_POOL_SIZE);
        assert_eq!(config.progress.policy, CountingPolicy::WhenPassed);
    }

    #[test]
    fn missing_path_falls_back_to_backend_default() {
        let config: Config =
            serde_json::from_value(json!({ "store": { "backend": "json_file" } })).unwrap();
        assert!(config.store.path.is_empty());
        assert_eq!(config.store.resolved_path(), DEFAULT_JSON_PATH);
    }
}
