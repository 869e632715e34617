//! Port interfaces for the record store
//!
//! Projects are keyed by name. Checklists are stored apart from projects,
//! under the same name.

use std::collections::HashMap;

use async_trait::async_trait;
use projboard_domain::{ChecklistEntry, Project, Result};

/// Trait for project persistence and retrieval
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, in store order
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Get a project by name
    async fn get_project(&self, name: &str) -> Result<Option<Project>>;

    /// Insert a new project; `Conflict` if the name is taken
    async fn create_project(&self, project: Project) -> Result<()>;

    /// Replace the project named `project.name`; `NotFound` if absent
    async fn update_project(&self, project: Project) -> Result<()>;

    /// Delete a project by name; `NotFound` if absent
    async fn delete_project(&self, name: &str) -> Result<()>;
}

/// Trait for checklist persistence and retrieval
#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    /// Get the checklist stored for a project
    async fn get_checklist(&self, project_name: &str) -> Result<Option<ChecklistEntry>>;

    /// Every stored checklist, keyed by project name
    async fn list_checklists(&self) -> Result<HashMap<String, ChecklistEntry>>;

    /// Insert or replace the checklist for a project
    async fn save_checklist(&self, project_name: &str, entry: ChecklistEntry) -> Result<()>;

    /// Remove the checklist for a project; no-op when absent
    async fn delete_checklist(&self, project_name: &str) -> Result<()>;
}
