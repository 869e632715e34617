//! Project management commands

use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment};
use projboard_core::ProjectProgress;
use projboard_domain::{ChecklistStatus, Milestone, Project, Result};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::cli::{AddArgs, DetailArgs, EditArgs, OutputFormatArg};
use crate::context::AppContext;
use crate::utils::command_helpers::execute_timed;
use crate::utils::output::{
    align_column, checklist_cell, date_cell, progress_cell, styled_table, text_cell, tier_cell,
    to_json,
};

/// One project with its evaluated progress and checklist status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub progress: ProjectProgress,
    pub checklist: ChecklistStatus,
}

/// Build a new project record from `add` arguments.
pub fn build_project(args: &AddArgs) -> Project {
    let mut project = Project::new(&args.name, args.project_type, args.year, args.quantity);
    apply_details(&mut project, &args.details);
    project
}

/// Overlay `edit` arguments onto an existing record.
pub fn apply_edits(project: &mut Project, args: &EditArgs) {
    if let Some(project_type) = args.project_type {
        project.project_type = project_type;
    }
    if let Some(year) = args.year {
        project.year = year;
    }
    if let Some(quantity) = args.quantity {
        project.quantity = quantity;
    }
    apply_details(project, &args.details);

    for milestone in &args.clear {
        project.milestones.set(*milestone, None);
    }
    if args.clear_lead_time {
        project.lead_time = None;
    }
    if args.clear_reminder {
        project.reminder_text = None;
    }
}

fn apply_details(project: &mut Project, details: &DetailArgs) {
    if let Some(lead_time) = details.lead_time {
        project.lead_time = Some(lead_time);
    }
    if let Some(customer) = &details.customer {
        project.customer.clone_from(customer);
    }
    if let Some(supervisor) = &details.supervisor {
        project.supervisor.clone_from(supervisor);
    }
    if let Some(specification) = &details.specification {
        project.specification.clone_from(specification);
    }
    if let Some(description) = &details.description {
        project.description.clone_from(description);
    }
    if let Some(reminder) = &details.reminder {
        project.reminder_text = Some(reminder.clone()).filter(|text| !text.trim().is_empty());
    }
    for (milestone, date) in details.milestone_dates() {
        if date.is_some() {
            project.milestones.set(milestone, date);
        }
    }
}

pub async fn add_project(ctx: &AppContext, args: AddArgs, format: OutputFormatArg) -> Result<String> {
    let project = build_project(&args);
    let name = project.name.clone();

    execute_timed("projects::add", || ctx.projects.add_project(project.clone())).await?;

    match format {
        OutputFormatArg::Json => to_json(&project),
        OutputFormatArg::Table => Ok(format!("Added project '{name}'")),
    }
}

pub async fn edit_project(ctx: &AppContext, args: EditArgs, format: OutputFormatArg) -> Result<String> {
    let updated = execute_timed("projects::edit", || async {
        let mut project = ctx.projects.get_project(&args.name).await?;
        apply_edits(&mut project, &args);
        debug!(project = %args.name, "applying edits");
        ctx.projects.edit_project(&args.name, project.clone()).await?;
        Ok(project)
    })
    .await?;

    match format {
        OutputFormatArg::Json => to_json(&updated),
        OutputFormatArg::Table => Ok(format!("Updated project '{}'", updated.name)),
    }
}

pub async fn delete_project(ctx: &AppContext, name: &str, format: OutputFormatArg) -> Result<String> {
    execute_timed("projects::delete", || ctx.projects.delete_project(name)).await?;

    match format {
        OutputFormatArg::Json => to_json(&json!({ "deleted": name })),
        OutputFormatArg::Table => Ok(format!("Deleted project '{name}'")),
    }
}

pub async fn show_project(
    ctx: &AppContext,
    name: &str,
    as_of: NaiveDate,
    format: OutputFormatArg,
) -> Result<String> {
    let detail = execute_timed("projects::show", || async {
        let project = ctx.projects.get_project(name).await?;
        let progress = ctx.projects.engine().evaluate(&project, as_of);
        let checklist = ctx.projects.checklist_status(name).await?;
        Ok(ProjectDetail { project, progress, checklist })
    })
    .await?;

    match format {
        OutputFormatArg::Json => to_json(&detail),
        OutputFormatArg::Table => Ok(render_detail(&detail)),
    }
}

pub async fn list_projects(ctx: &AppContext, format: OutputFormatArg) -> Result<String> {
    let projects = execute_timed("projects::list", || ctx.projects.list_projects()).await?;

    match format {
        OutputFormatArg::Json => to_json(&projects),
        OutputFormatArg::Table => Ok(render_list(&projects)),
    }
}

fn render_detail(detail: &ProjectDetail) -> String {
    let project = &detail.project;
    let mut table = styled_table(&["Field", "Value"]);
    table.add_row(vec![Cell::new("Name"), Cell::new(&project.name)]);
    table.add_row(vec![Cell::new("Type"), Cell::new(project.project_type.label())]);
    table.add_row(vec![Cell::new("Year"), Cell::new(project.year)]);
    table.add_row(vec![Cell::new("Quantity"), Cell::new(project.quantity)]);
    table.add_row(vec![Cell::new("Customer"), text_cell(&project.customer)]);
    table.add_row(vec![Cell::new("Supervisor"), text_cell(&project.supervisor)]);
    table.add_row(vec![Cell::new("Specification"), text_cell(&project.specification)]);
    table.add_row(vec![Cell::new("Description"), text_cell(&project.description)]);
    table.add_row(vec![Cell::new("Lead time"), date_cell(project.lead_time)]);
    table.add_row(vec![
        Cell::new("Reminder"),
        text_cell(project.reminder_text.as_deref().unwrap_or_default()),
    ]);
    for milestone in Milestone::ALL {
        table.add_row(vec![
            Cell::new(format!("{} ({}%)", milestone.label(), milestone.weight())),
            date_cell(project.milestones.get(milestone)),
        ]);
    }
    table.add_row(vec![Cell::new("Progress"), progress_cell(&detail.progress)]);
    table.add_row(vec![Cell::new("Status"), tier_cell(&detail.progress)]);
    table.add_row(vec![Cell::new("Checklist"), checklist_cell(detail.checklist)]);
    table.to_string()
}

fn render_list(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects".to_string();
    }
    let mut table =
        styled_table(&["Name", "Type", "Year", "Qty", "Customer", "Supervisor", "Lead time"]);
    for project in projects {
        table.add_row(vec![
            Cell::new(&project.name),
            Cell::new(project.project_type.label()),
            Cell::new(project.year),
            Cell::new(project.quantity),
            text_cell(&project.customer),
            text_cell(&project.supervisor),
            date_cell(project.lead_time),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.to_string()
}
