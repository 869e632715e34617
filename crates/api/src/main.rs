//! ProjBoard - project progress dashboard
//!
//! Main entry point for the `projboard` command-line tool.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use projboard_domain::ProjBoardError;
use projboard_infra::config::loader;
use projboard_lib::cli::{Cli, LogFormatArg};
use projboard_lib::commands::{execute, exit_code};
use projboard_lib::utils::logging::{init_logging, LogConfig, LogFormat};
use projboard_lib::AppContext;
use tracing::{debug, error, warn};

fn main() -> ExitCode {
    // Load .env before logging so RUST_LOG from the file is honoured
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(err) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "could not load .env file"),
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            let code = err.downcast_ref::<ProjBoardError>().map_or(1, exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config = loader::load(cli.config.clone()).context("failed to load configuration")?;
    cli.apply_overrides(&mut config);

    let ctx = AppContext::new(config).context("failed to open the record store")?;
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    Ok(execute(&ctx, cli.command, as_of, cli.format).await?)
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: LogConfig::level_for(cli.verbose, cli.quiet),
        use_env_filter: cli.verbose == 0 && !cli.quiet,
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: cli.log_file.is_none() && io::stderr().is_terminal(),
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    }
}
