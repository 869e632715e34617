//! Development automation tasks for the `ProjBoard` workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! Output here is for the developer at the terminal, so `println!` and
//! `eprintln!` are used instead of structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::{bail, Context};

/// Steps run by `cargo xtask ci`, in order.
const CI_STEPS: [(&str, fn() -> anyhow::Result<()>); 4] = [
    ("Checking Rust format", run_fmt),
    ("Running Clippy", run_clippy),
    ("Checking the CLI crate (projboard-app)", check_app),
    ("Running tests", run_test),
];

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("bench") => run_bench(),
        Some("deny") => run_optional_tool("deny", &["check"]),
        Some("audit") => run_optional_tool("audit", &[]),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("ProjBoard Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci      Run fmt, clippy, the app check and tests");
    println!("    fmt     Check Rust code formatting");
    println!("    clippy  Run Clippy lints");
    println!("    test    Run all tests");
    println!("    bench   Run the progress engine benchmark");
    println!("    deny    Check dependencies with cargo-deny");
    println!("    audit   Audit dependencies for security vulnerabilities");
    println!("    help    Show this help message");
}

fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    let total = CI_STEPS.len();
    for (index, (label, step)) in CI_STEPS.iter().enumerate() {
        println!("==> Step {}/{total}: {label}...", index + 1);
        step().with_context(|| format!("CI step failed: {label}"))?;
        println!();
    }

    println!("✓ All CI checks passed!");
    Ok(())
}

fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

fn run_clippy() -> anyhow::Result<()> {
    cargo(
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        "Clippy run failed. See output above.",
    )
}

fn check_app() -> anyhow::Result<()> {
    cargo(&["check", "-p", "projboard-app", "--bins"], "projboard-app check failed")?;
    println!("✓ projboard-app compiles successfully");
    Ok(())
}

fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace"], "Tests failed")
}

fn run_bench() -> anyhow::Result<()> {
    cargo(&["bench", "-p", "projboard-core", "--bench", "progress_engine"], "Benchmark failed")
}

/// Run a cargo subcommand provided by a separately installed tool.
fn run_optional_tool(tool: &str, args: &[&str]) -> anyhow::Result<()> {
    let installed = Command::new("cargo")
        .args([tool, "--version"])
        .output()
        .is_ok_and(|output| output.status.success());

    if !installed {
        eprintln!("cargo-{tool} is not installed.");
        eprintln!("Install it with: cargo install cargo-{tool}");
        bail!("cargo-{tool} not found");
    }

    let mut full = vec![tool];
    full.extend_from_slice(args);
    cargo(&full, &format!("cargo-{tool} reported problems"))
}

fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("failed to spawn cargo {}", args.join(" ")))?;

    if !status.success() {
        bail!("{failure}");
    }
    Ok(())
}
