//! Purchase / drawing checklist commands

use comfy_table::Cell;
use projboard_core::{checklist_status, missing_items};
use projboard_domain::{ChecklistEntry, ChecklistStatus, Result};
use serde::Serialize;

use crate::cli::{ChecklistSetArgs, OutputFormatArg};
use crate::context::AppContext;
use crate::utils::command_helpers::execute_timed;
use crate::utils::output::{checklist_cell, styled_table, to_json};

/// A project's checklist with its evaluated status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistView {
    pub name: String,
    #[serde(flatten)]
    pub entry: ChecklistEntry,
    pub status: ChecklistStatus,
    pub missing: Vec<String>,
}

impl ChecklistView {
    pub fn new(name: &str, entry: ChecklistEntry) -> Self {
        Self {
            name: name.to_string(),
            status: checklist_status(&entry),
            missing: missing_items(&entry),
            entry,
        }
    }
}

pub fn build_entry(args: &ChecklistSetArgs) -> ChecklistEntry {
    ChecklistEntry {
        purchase_items: args.purchase_items.clone(),
        purchase_done: args.purchase_done.clone(),
        drawing_items: args.drawing_items.clone(),
        drawing_done: args.drawing_done.clone(),
    }
}

pub async fn set_checklist(
    ctx: &AppContext,
    args: ChecklistSetArgs,
    format: OutputFormatArg,
) -> Result<String> {
    let entry = build_entry(&args);
    execute_timed("checklists::set", || ctx.projects.save_checklist(&args.name, entry.clone()))
        .await?;

    let view = ChecklistView::new(&args.name, entry);
    match format {
        OutputFormatArg::Json => to_json(&view),
        OutputFormatArg::Table => {
            Ok(format!("Saved checklist for '{}' ({})", view.name, view.status))
        }
    }
}

pub async fn show_checklist(ctx: &AppContext, name: &str, format: OutputFormatArg) -> Result<String> {
    let entry = execute_timed("checklists::show", || ctx.projects.get_checklist(name)).await?;
    let view = ChecklistView::new(name, entry);

    match format {
        OutputFormatArg::Json => to_json(&view),
        OutputFormatArg::Table => Ok(render_view(&view)),
    }
}

fn render_view(view: &ChecklistView) -> String {
    let mut table = styled_table(&["List", "Item", "Done"]);
    let lists = [("Purchase", &view.entry.purchase_items), ("Drawing", &view.entry.drawing_items)];
    for (list, items) in lists {
        for item in items.iter().filter(|item| !item.trim().is_empty()) {
            let done = !view.missing.iter().any(|missing| missing == item.trim());
            table.add_row(vec![
                Cell::new(list),
                Cell::new(item),
                Cell::new(if done { "yes" } else { "no" }),
            ]);
        }
    }
    table.add_row(vec![Cell::new("Status"), Cell::new(""), checklist_cell(view.status)]);
    table.to_string()
}
