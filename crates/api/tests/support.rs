//! Shared fixtures for command integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use clap::Parser;
use projboard_domain::{Config, CountingPolicy, ProgressConfig, StoreBackend, StoreConfig};
use projboard_lib::cli::Cli;
use projboard_lib::commands::execute;
use projboard_lib::AppContext;
use tempfile::TempDir;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// An application context over a store in a temporary directory.
pub struct TestApp {
    pub ctx: AppContext,
    /// Keep the temporary directory alive for the lifetime of the app.
    _temp_dir: TempDir,
}

impl TestApp {
    pub fn new(backend: StoreBackend) -> Self {
        Self::with_policy(backend, CountingPolicy::default())
    }

    pub fn with_policy(backend: StoreBackend, policy: CountingPolicy) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temporary store directory");
        let file_name = match backend {
            StoreBackend::Sqlite => "projboard.db",
            StoreBackend::JsonFile => "projboard.json",
        };
        let mut store = StoreConfig::for_backend(backend);
        store.path = temp_dir.path().join(file_name).to_string_lossy().into_owned();

        let ctx = AppContext::new(Config { store, progress: ProgressConfig { policy } })
            .expect("failed to initialise application context");
        Self { ctx, _temp_dir: temp_dir }
    }

    /// Parse `args` like the binary would and run the command.
    pub async fn run(&self, args: &[&str]) -> projboard_domain::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("projboard").chain(args.iter().copied()))
            .expect("test arguments should parse");
        let as_of = cli.as_of.unwrap_or_else(|| date(2024, 6, 1));
        execute(&self.ctx, cli.command, as_of, cli.format).await
    }

    /// Like [`TestApp::run`] with `--format json`, parsed into a JSON value.
    pub async fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full: Vec<&str> = args.to_vec();
        full.extend(["--format", "json"]);
        let output = self.run(&full).await.expect("command should succeed");
        serde_json::from_str(&output).expect("command should emit JSON")
    }
}
