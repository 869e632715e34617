//! Dashboard summary command

use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, CellAlignment};
use projboard_core::{Dashboard, QuantitySummary};
use projboard_domain::{format_date, Result};

use crate::cli::OutputFormatArg;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_timed;
use crate::utils::output::{
    align_column, checklist_cell, date_cell, progress_cell, styled_table, text_cell, tier_cell,
    to_json,
};

pub async fn summary(ctx: &AppContext, as_of: NaiveDate, format: OutputFormatArg) -> Result<String> {
    let dashboard = execute_timed("dashboard::summary", || ctx.projects.dashboard(as_of)).await?;

    match format {
        OutputFormatArg::Json => to_json(&dashboard),
        OutputFormatArg::Table => Ok(render_dashboard(&dashboard)),
    }
}

/// Progress cards followed by the unit counter.
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = format!("Progress as of {}\n", format_date(dashboard.as_of));

    if dashboard.cards.is_empty() {
        out.push_str("No projects\n");
    } else {
        let mut cards = styled_table(&[
            "Name",
            "Type",
            "Qty",
            "Customer",
            "Supervisor",
            "Lead time",
            "Progress",
            "Status",
            "Checklist",
            "Reminder",
        ]);
        for card in &dashboard.cards {
            cards.add_row(vec![
                Cell::new(&card.name).add_attribute(Attribute::Bold),
                Cell::new(card.project_type.label()),
                Cell::new(card.quantity),
                text_cell(&card.customer),
                text_cell(&card.supervisor),
                date_cell(card.lead_time),
                progress_cell(&card.progress),
                tier_cell(&card.progress),
                checklist_cell(card.checklist),
                text_cell(card.reminder_text.as_deref().unwrap_or_default()),
            ]);
        }
        align_column(&mut cards, 2, CellAlignment::Right);
        align_column(&mut cards, 6, CellAlignment::Right);
        out.push_str(&cards.to_string());
        out.push('\n');
    }

    out.push_str(&render_quantities(&dashboard.quantities));
    out
}

fn render_quantities(quantities: &QuantitySummary) -> String {
    let mut table = styled_table(&["Type", "Units"]);
    for (label, units) in &quantities.by_type {
        table.add_row(vec![Cell::new(label), Cell::new(units)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(quantities.total).add_attribute(Attribute::Bold),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.to_string()
}
