//! CLI argument definitions for the project dashboard.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use projboard_domain::{parse_date_lenient, Config, CountingPolicy, Milestone, ProjectType};

#[derive(Debug, Parser)]
#[command(
    name = "projboard",
    version,
    about = "Project progress dashboard - milestones, checklists and unit counts",
    long_about = "Track manufacturing projects through five weighted milestones.\n\n\
                  Progress is the sum of the weights of recorded milestones \
                  (parts arrival 30, installation 40, testing 10, cleaning 10, \
                  delivery 10) and is shown as a colored status tier."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (JSON or TOML). Overrides environment and probed files.
    #[arg(long, value_name = "PATH", global = true, env = "PROJBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reference date for progress (default: today).
    #[arg(long = "as-of", value_name = "DATE", value_parser = parse_cli_date, global = true)]
    pub as_of: Option<NaiveDate>,

    /// Milestone counting policy (when_set, when_passed). Overrides the config.
    #[arg(long, value_name = "POLICY", global = true)]
    pub policy: Option<CountingPolicy>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(policy) = self.policy {
            config.progress.policy = policy;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new project.
    Add(AddArgs),

    /// Edit an existing project. Only the given fields change.
    Edit(EditArgs),

    /// Delete a project and its checklist.
    Delete {
        /// Project name.
        name: String,
    },

    /// Show one project with its progress and checklist.
    Show {
        /// Project name.
        name: String,
    },

    /// List all projects.
    List,

    /// Progress cards for every project plus the unit counter.
    Summary,

    /// Manage purchase and drawing checklists.
    #[command(subcommand)]
    Checklist(ChecklistCommand),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Project name (unique).
    pub name: String,

    /// Project type (enclosure, open set, scania, marine, k50g3).
    #[arg(long = "type", value_name = "TYPE", value_parser = parse_project_type)]
    pub project_type: ProjectType,

    /// Project year.
    #[arg(long)]
    pub year: i32,

    /// Number of units.
    #[arg(long)]
    pub quantity: u32,

    #[command(flatten)]
    pub details: DetailArgs,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Name of the project to edit.
    pub name: String,

    /// New project type.
    #[arg(long = "type", value_name = "TYPE", value_parser = parse_project_type)]
    pub project_type: Option<ProjectType>,

    /// New project year.
    #[arg(long)]
    pub year: Option<i32>,

    /// New number of units.
    #[arg(long)]
    pub quantity: Option<u32>,

    #[command(flatten)]
    pub details: DetailArgs,

    /// Clear a milestone date (repeatable).
    #[arg(long = "clear", value_name = "MILESTONE")]
    pub clear: Vec<Milestone>,

    /// Clear the lead time.
    #[arg(long = "clear-lead-time", conflicts_with = "lead_time")]
    pub clear_lead_time: bool,

    /// Clear the reminder text.
    #[arg(long = "clear-reminder", conflicts_with = "reminder")]
    pub clear_reminder: bool,
}

/// Optional project fields shared by `add` and `edit`.
#[derive(Debug, Default, Args)]
pub struct DetailArgs {
    /// Promised delivery date.
    #[arg(long = "lead-time", value_name = "DATE", value_parser = parse_cli_date)]
    pub lead_time: Option<NaiveDate>,

    #[arg(long)]
    pub customer: Option<String>,

    #[arg(long)]
    pub supervisor: Option<String>,

    #[arg(long)]
    pub specification: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Free-text reminder shown on the card.
    #[arg(long)]
    pub reminder: Option<String>,

    #[arg(long = "parts-arrival", value_name = "DATE", value_parser = parse_cli_date)]
    pub parts_arrival: Option<NaiveDate>,

    #[arg(long = "installation-complete", value_name = "DATE", value_parser = parse_cli_date)]
    pub installation_complete: Option<NaiveDate>,

    #[arg(long = "testing-complete", value_name = "DATE", value_parser = parse_cli_date)]
    pub testing_complete: Option<NaiveDate>,

    #[arg(long = "cleaning-complete", value_name = "DATE", value_parser = parse_cli_date)]
    pub cleaning_complete: Option<NaiveDate>,

    #[arg(long = "delivery-complete", value_name = "DATE", value_parser = parse_cli_date)]
    pub delivery_complete: Option<NaiveDate>,
}

impl DetailArgs {
    /// Milestone dates given on the command line, in milestone order.
    pub fn milestone_dates(&self) -> [(Milestone, Option<NaiveDate>); 5] {
        [
            (Milestone::PartsArrival, self.parts_arrival),
            (Milestone::InstallationComplete, self.installation_complete),
            (Milestone::TestingComplete, self.testing_complete),
            (Milestone::CleaningComplete, self.cleaning_complete),
            (Milestone::DeliveryComplete, self.delivery_complete),
        ]
    }
}

#[derive(Debug, Subcommand)]
pub enum ChecklistCommand {
    /// Replace a project's checklist.
    Set(ChecklistSetArgs),

    /// Show a project's checklist and its completion status.
    Show {
        /// Project name.
        name: String,
    },
}

#[derive(Debug, Args)]
pub struct ChecklistSetArgs {
    /// Project name.
    pub name: String,

    /// Purchase item (repeatable).
    #[arg(long = "purchase", value_name = "ITEM")]
    pub purchase_items: Vec<String>,

    /// Purchase item already done (repeatable).
    #[arg(long = "purchase-done", value_name = "ITEM")]
    pub purchase_done: Vec<String>,

    /// Drawing item (repeatable).
    #[arg(long = "drawing", value_name = "ITEM")]
    pub drawing_items: Vec<String>,

    /// Drawing item already done (repeatable).
    #[arg(long = "drawing-done", value_name = "ITEM")]
    pub drawing_done: Vec<String>,
}

/// CLI log format choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// CLI output format choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

fn parse_cli_date(raw: &str) -> Result<NaiveDate, String> {
    parse_date_lenient(raw).ok_or_else(|| format!("'{raw}' is not a date (expected YYYY-MM-DD)"))
}

fn parse_project_type(raw: &str) -> Result<ProjectType, String> {
    ProjectType::try_from(raw.to_string())
}
