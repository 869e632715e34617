//! CLI command handlers
//!
//! Each handler drives the [`ProjectService`](projboard_core::ProjectService)
//! held by the [`AppContext`] and returns the rendered output; printing is
//! left to the binary.

pub mod checklists;
pub mod dashboard;
pub mod projects;

use chrono::NaiveDate;
use projboard_domain::{ProjBoardError, Result};

use crate::cli::{ChecklistCommand, Command, OutputFormatArg};
use crate::context::AppContext;

/// Run one parsed command against the context.
pub async fn execute(
    ctx: &AppContext,
    command: Command,
    as_of: NaiveDate,
    format: OutputFormatArg,
) -> Result<String> {
    match command {
        Command::Add(args) => projects::add_project(ctx, args, format).await,
        Command::Edit(args) => projects::edit_project(ctx, args, format).await,
        Command::Delete { name } => projects::delete_project(ctx, &name, format).await,
        Command::Show { name } => projects::show_project(ctx, &name, as_of, format).await,
        Command::List => projects::list_projects(ctx, format).await,
        Command::Summary => dashboard::summary(ctx, as_of, format).await,
        Command::Checklist(ChecklistCommand::Set(args)) => {
            checklists::set_checklist(ctx, args, format).await
        }
        Command::Checklist(ChecklistCommand::Show { name }) => {
            checklists::show_checklist(ctx, &name, format).await
        }
    }
}

/// Process exit code for a failed command.
pub fn exit_code(error: &ProjBoardError) -> i32 {
    match error {
        ProjBoardError::InvalidInput(_) => 2,
        ProjBoardError::NotFound(_) => 3,
        ProjBoardError::Conflict(_) => 4,
        ProjBoardError::Config(_) => 5,
        ProjBoardError::Database(_)
        | ProjBoardError::Serialization(_)
        | ProjBoardError::Internal(_) => 1,
    }
}
