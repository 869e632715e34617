//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::path::PathBuf;

use projboard_domain::{CountingPolicy, StoreBackend};
use projboard_infra::config;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write config file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "projboard.json",
        r#"{
            "store": { "backend": "json_file", "path": "/srv/board/projboard.json" },
            "progress": { "policy": "when_passed" }
        }"#,
    );

    let config = config::load_from_file(Some(path)).expect("Failed to load config from JSON file");

    assert_eq!(config.store.backend, StoreBackend::JsonFile);
    assert_eq!(config.store.resolved_path(), "/srv/board/projboard.json");
    assert_eq!(config.progress.policy, CountingPolicy::WhenPassed);
}

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "projboard.toml",
        r#"
[store]
backend = "sqlite"
pool_size = 6
"#,
    );

    let config = config::load(Some(path)).expect("Failed to load config from TOML file");

    assert_eq!(config.store.backend, StoreBackend::Sqlite);
    assert_eq!(config.store.pool_size, 6);
    assert_eq!(config.store.resolved_path(), "projboard.db");
    assert_eq!(config.progress.policy, CountingPolicy::WhenSet);
}

#[test]
fn test_invalid_toml_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "projboard.toml", "[store\nbackend = ");

    let err = config::load(Some(path)).expect_err("Invalid TOML should fail");
    assert!(err.to_string().contains("Invalid TOML"), "unexpected error: {err}");
}

#[test]
fn test_unknown_backend_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "projboard.json", r#"{ "store": { "backend": "postgres" } }"#);

    let err = config::load_from_file(Some(path)).expect_err("Unknown backend should fail");
    assert!(err.to_string().contains("Invalid JSON"), "unexpected error: {err}");
}
