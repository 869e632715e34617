//! Table and JSON rendering for command results.

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use projboard_core::ProjectProgress;
use projboard_domain::{format_date, ChecklistStatus, ProjBoardError, Result};
use serde::Serialize;

/// Pretty-printed JSON for any serialisable result.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| ProjBoardError::Serialization(e.to_string()))
}

/// Empty table with the shared style and a bold header row.
pub fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    table
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold).fg(Color::Cyan)
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

/// Date cell; absent dates render as a dimmed dash.
pub fn date_cell(date: Option<NaiveDate>) -> Cell {
    match date {
        Some(date) => Cell::new(format_date(date)),
        None => dim_cell("-"),
    }
}

pub fn text_cell(text: &str) -> Cell {
    if text.trim().is_empty() {
        dim_cell("-")
    } else {
        Cell::new(text)
    }
}

/// Percentage cell colored by its tier.
pub fn progress_cell(progress: &ProjectProgress) -> Cell {
    let cell = Cell::new(format!("{}%", progress.percentage));
    match hex_color(progress.color_hex()) {
        Some(color) => cell.fg(color),
        None => cell,
    }
}

pub fn tier_cell(progress: &ProjectProgress) -> Cell {
    let cell = Cell::new(progress.tier.label());
    match hex_color(progress.color_hex()) {
        Some(color) => cell.fg(color),
        None => cell,
    }
}

pub fn checklist_cell(status: ChecklistStatus) -> Cell {
    match status {
        ChecklistStatus::Empty => dim_cell("empty"),
        ChecklistStatus::AllDone => Cell::new("all done").fg(Color::Green),
        ChecklistStatus::Missing => Cell::new("missing items").fg(Color::Red),
    }
}

/// Parse `#RRGGBB` into a terminal color.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some(Color::Rgb { r: channel(0..2)?, g: channel(2..4)?, b: channel(4..6)? })
}
