//! Configuration loader
//!
//! ## Loading Strategy
//! 1. An explicit config file, when one is given
//! 2. Environment variables, when the store is configured there
//! 3. The first config file found by [`probe_config_paths`]
//! 4. Built-in defaults
//!
//! JSON and TOML files are supported, detected by extension.
//!
//! ## Environment Variables
//! - `PROJBOARD_STORE_BACKEND`: `sqlite` or `json_file`
//! - `PROJBOARD_STORE_PATH`: database or JSON document path
//! - `PROJBOARD_STORE_POOL_SIZE`: SQLite connection pool size
//! - `PROJBOARD_PROGRESS_POLICY`: `when_set` or `when_passed`
//!
//! At least one of the two `PROJBOARD_STORE_*` location variables must be
//! set for the environment to count as a source.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./projboard.toml`, `./projboard.json` (current working directory)
//! 2. `./config.toml`, `./config.json`
//! 3. The same names in the parent directory
//! 4. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use projboard_domain::{Config, CountingPolicy, ProjBoardError, Result, StoreBackend, StoreConfig};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["projboard.toml", "projboard.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ProjBoardError::Config` if an explicit file is missing or any
/// source that is present is invalid.
pub fn load(explicit: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_from_file(Some(path));
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(ProjBoardError::NotFound(reason)) => {
            tracing::debug!(%reason, "Store not configured in environment, trying files");
        }
        Err(err) => return Err(err),
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ProjBoardError::NotFound` if neither `PROJBOARD_STORE_BACKEND`
/// nor `PROJBOARD_STORE_PATH` is set, and `ProjBoardError::Config` if a
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let backend = optional_env("PROJBOARD_STORE_BACKEND");
    let path = optional_env("PROJBOARD_STORE_PATH");
    if backend.is_none() && path.is_none() {
        return Err(ProjBoardError::NotFound(
            "PROJBOARD_STORE_BACKEND / PROJBOARD_STORE_PATH".into(),
        ));
    }

    let backend = backend
        .map(|raw| parse_env::<StoreBackend>("PROJBOARD_STORE_BACKEND", &raw))
        .transpose()?
        .unwrap_or_default();

    let mut store = StoreConfig::for_backend(backend);
    if let Some(path) = path {
        store.path = path;
    }
    if let Some(raw) = optional_env("PROJBOARD_STORE_POOL_SIZE") {
        store.pool_size = raw.parse::<u32>().map_err(|e| {
            ProjBoardError::Config(format!("Invalid PROJBOARD_STORE_POOL_SIZE '{raw}': {e}"))
        })?;
    }

    let mut config = Config { store, ..Config::default() };
    if let Some(raw) = optional_env("PROJBOARD_PROGRESS_POLICY") {
        config.progress.policy = parse_env::<CountingPolicy>("PROJBOARD_PROGRESS_POLICY", &raw)?;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `ProjBoardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ProjBoardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ProjBoardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ProjBoardError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format chosen by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ProjBoardError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ProjBoardError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ProjBoardError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Non-empty environment variable value
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_env<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    raw.parse::<T>().map_err(|e| ProjBoardError::Config(format!("Invalid {key}: {e}")))
}
