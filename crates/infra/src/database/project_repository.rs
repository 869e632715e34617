//! Project and checklist repositories backed by SQLite
//!
//! Dates are stored as ISO `TEXT` (or `NULL`); checklist lists are stored as
//! JSON arrays. Projects keep their insertion order through a `position`
//! column.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use projboard_common::storage::{SqliteConnection, StorageError};
use projboard_core::{ChecklistRepository, ProjectRepository};
use projboard_domain::utils::dates::parse_date_lenient;
use projboard_domain::{
    format_date, ChecklistEntry, MilestoneDates, ProjBoardError, Project, ProjectType,
    Result as DomainResult,
};
use rusqlite::{params, Row, ToSql};
use tokio::task;
use tracing::{debug, warn};

use super::manager::DbManager;
use crate::errors::{map_join_error, InfraError};

const PROJECT_COLUMNS: &str = "name, project_type, year, lead_time, customer, supervisor, quantity,
        specification, description, reminder_text, parts_arrival, installation_complete,
        testing_complete, cleaning_complete, delivery_complete";

/// SQLite-backed implementation of the project and checklist ports
#[derive(Clone)]
pub struct SqliteProjectRepository {
    db: Arc<DbManager>,
}

impl SqliteProjectRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    async fn list_projects(&self) -> DomainResult<Vec<Project>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Project>> {
            let conn = db.get_connection()?;
            let rows = conn
                .query_map(
                    &format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY position ASC"),
                    [],
                    map_project_row,
                )
                .map_err(map_storage_error)?;
            debug!(count = rows.len(), "listed projects");
            Ok(rows.into_iter().flatten().collect())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get_project(&self, name: &str) -> DomainResult<Option<Project>> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Project>> {
            let conn = db.get_connection()?;
            let row = conn
                .query_optional(
                    &format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE name = ?1"),
                    params![&name],
                    map_project_row,
                )
                .map_err(map_storage_error)?;
            Ok(row.flatten())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn create_project(&self, project: Project) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            match insert_project(&conn, &project) {
                Ok(_) => {
                    debug!(project = %project.name, "project row inserted");
                    Ok(())
                }
                Err(err) if err.is_unique_violation() => {
                    Err(ProjBoardError::duplicate_project(&project.name))
                }
                Err(err) => Err(map_storage_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update_project(&self, project: Project) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let changed = update_project_row(&conn, &project).map_err(map_storage_error)?;
            if changed == 0 {
                return Err(ProjBoardError::project_not_found(&project.name));
            }
            debug!(project = %project.name, "project row updated");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete_project(&self, name: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let changed = conn
                .execute("DELETE FROM projects WHERE name = ?1", params![&name])
                .map_err(map_storage_error)?;
            if changed == 0 {
                return Err(ProjBoardError::project_not_found(&name));
            }
            debug!(project = %name, "project row deleted");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl ChecklistRepository for SqliteProjectRepository {
    async fn get_checklist(&self, project_name: &str) -> DomainResult<Option<ChecklistEntry>> {
        let db = Arc::clone(&self.db);
        let name = project_name.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<ChecklistEntry>> {
            let conn = db.get_connection()?;
            let row = conn
                .query_optional(
                    "SELECT project_name, purchase_items, purchase_done, drawing_items, drawing_done
                     FROM checklists WHERE project_name = ?1",
                    params![&name],
                    map_checklist_row,
                )
                .map_err(map_storage_error)?;
            Ok(row.map(|(_, entry)| entry))
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_checklists(&self) -> DomainResult<HashMap<String, ChecklistEntry>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<HashMap<String, ChecklistEntry>> {
            let conn = db.get_connection()?;
            let rows = conn
                .query_map(
                    "SELECT project_name, purchase_items, purchase_done, drawing_items, drawing_done
                     FROM checklists",
                    [],
                    map_checklist_row,
                )
                .map_err(map_storage_error)?;
            Ok(rows.into_iter().collect())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save_checklist(&self, project_name: &str, entry: ChecklistEntry) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let name = project_name.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            upsert_checklist(&conn, &name, &entry)?;
            debug!(project = %name, "checklist row saved");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete_checklist(&self, project_name: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let name = project_name.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute("DELETE FROM checklists WHERE project_name = ?1", params![&name])
                .map_err(map_storage_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Map a row to a Project.
///
/// Rows with an unrecognised type are skipped (`None`) with a warning rather
/// than failing the whole listing.
fn map_project_row(row: &Row<'_>) -> rusqlite::Result<Option<Project>> {
    let name: String = row.get(0)?;
    let raw_type: String = row.get(1)?;
    let project_type = match raw_type.parse::<ProjectType>() {
        Ok(project_type) => project_type,
        Err(err) => {
            warn!(project = %name, error = %err, "skipping project with unknown type");
            return Ok(None);
        }
    };
    let quantity: i64 = row.get(6)?;

    Ok(Some(Project {
        project_type,
        name,
        year: row.get(2)?,
        lead_time: date_column(row, 3)?,
        customer: row.get(4)?,
        supervisor: row.get(5)?,
        quantity: u32::try_from(quantity).unwrap_or_default(),
        specification: row.get(7)?,
        description: row.get(8)?,
        reminder_text: row.get(9)?,
        milestones: MilestoneDates {
            parts_arrival: date_column(row, 10)?,
            installation_complete: date_column(row, 11)?,
            testing_complete: date_column(row, 12)?,
            cleaning_complete: date_column(row, 13)?,
            delivery_complete: date_column(row, 14)?,
        },
    }))
}

fn map_checklist_row(row: &Row<'_>) -> rusqlite::Result<(String, ChecklistEntry)> {
    let name: String = row.get(0)?;
    let entry = ChecklistEntry {
        purchase_items: list_column(row, 1)?,
        purchase_done: list_column(row, 2)?,
        drawing_items: list_column(row, 3)?,
        drawing_done: list_column(row, 4)?,
    };
    Ok((name, entry))
}

/// Read a nullable TEXT date column; unparseable text is treated as absent.
fn date_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(idx)?;
    Ok(raw.as_deref().and_then(parse_date_lenient))
}

/// Read a JSON-array TEXT column; malformed JSON is treated as an empty list.
fn list_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    Ok(serde_json::from_str::<Vec<Option<String>>>(&raw)
        .map(|items| items.into_iter().flatten().collect())
        .unwrap_or_else(|err| {
            warn!(column = idx, error = %err, "malformed checklist column, treating as empty");
            Vec::new()
        }))
}

fn date_param(date: Option<NaiveDate>) -> Option<String> {
    date.map(format_date)
}

fn project_params(project: &Project) -> [Box<dyn ToSql>; 15] {
    let m = &project.milestones;
    [
        Box::new(project.name.clone()),
        Box::new(project.project_type.as_str()),
        Box::new(project.year),
        Box::new(date_param(project.lead_time)),
        Box::new(project.customer.clone()),
        Box::new(project.supervisor.clone()),
        Box::new(i64::from(project.quantity)),
        Box::new(project.specification.clone()),
        Box::new(project.description.clone()),
        Box::new(project.reminder_text.clone()),
        Box::new(date_param(m.parts_arrival)),
        Box::new(date_param(m.installation_complete)),
        Box::new(date_param(m.testing_complete)),
        Box::new(date_param(m.cleaning_complete)),
        Box::new(date_param(m.delivery_complete)),
    ]
}

/// Insert a project at the end of the store order
fn insert_project(conn: &SqliteConnection, project: &Project) -> Result<usize, StorageError> {
    let params = project_params(project);
    let refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();

    conn.execute(
        &format!(
            "INSERT INTO projects (position, {PROJECT_COLUMNS})
             VALUES ((SELECT COALESCE(MAX(position), 0) + 1 FROM projects),
                     ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)"
        ),
        refs.as_slice(),
    )
}

/// Update every column of an existing project, keeping its position
fn update_project_row(conn: &SqliteConnection, project: &Project) -> Result<usize, StorageError> {
    let params = project_params(project);
    let refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();

    conn.execute(
        "UPDATE projects SET
            project_type = ?2, year = ?3, lead_time = ?4, customer = ?5, supervisor = ?6,
            quantity = ?7, specification = ?8, description = ?9, reminder_text = ?10,
            parts_arrival = ?11, installation_complete = ?12, testing_complete = ?13,
            cleaning_complete = ?14, delivery_complete = ?15
         WHERE name = ?1",
        refs.as_slice(),
    )
}

fn upsert_checklist(
    conn: &SqliteConnection,
    name: &str,
    entry: &ChecklistEntry,
) -> DomainResult<()> {
    let encode = |items: &Vec<String>| -> DomainResult<String> {
        serde_json::to_string(items).map_err(|e| InfraError::from(e).into())
    };
    let purchase_items = encode(&entry.purchase_items)?;
    let purchase_done = encode(&entry.purchase_done)?;
    let drawing_items = encode(&entry.drawing_items)?;
    let drawing_done = encode(&entry.drawing_done)?;

    conn.execute(
        "INSERT INTO checklists
            (project_name, purchase_items, purchase_done, drawing_items, drawing_done)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(project_name) DO UPDATE SET
            purchase_items = excluded.purchase_items,
            purchase_done = excluded.purchase_done,
            drawing_items = excluded.drawing_items,
            drawing_done = excluded.drawing_done",
        params![name, purchase_items, purchase_done, drawing_items, drawing_done],
    )
    .map_err(map_storage_error)?;
    Ok(())
}

fn map_storage_error(err: StorageError) -> ProjBoardError {
    ProjBoardError::from(InfraError::from(err))
}
