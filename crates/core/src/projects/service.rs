//! Project service - core business logic over the record store

use std::sync::Arc;

use chrono::NaiveDate;
use projboard_domain::{ChecklistEntry, ChecklistStatus, ProjBoardError, Project, Result};
use tracing::{debug, info};

use super::ports::{ChecklistRepository, ProjectRepository};
use crate::checklist::checklist_status_or_empty;
use crate::dashboard::Dashboard;
use crate::progress::{ProgressEngine, ProjectProgress};

/// Project service
pub struct ProjectService {
    projects: Arc<dyn ProjectRepository>,
    checklists: Arc<dyn ChecklistRepository>,
    engine: ProgressEngine,
}

impl ProjectService {
    /// Create a new project service with the default progress engine
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        checklists: Arc<dyn ChecklistRepository>,
    ) -> Self {
        Self { projects, checklists, engine: ProgressEngine::default() }
    }

    /// Use a specific progress engine (counting policy)
    pub fn with_engine(mut self, engine: ProgressEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Progress engine used for cards and per-project progress
    pub fn engine(&self) -> &ProgressEngine {
        &self.engine
    }

    /// Validate and insert a new project. Surrounding whitespace is stripped
    /// from the name.
    ///
    /// # Errors
    /// `InvalidInput` for an invalid record, `Conflict` for a taken name.
    pub async fn add_project(&self, mut project: Project) -> Result<()> {
        project.name = project_key(&project.name).to_string();
        project.validate()?;
        let name = project.name.clone();
        self.projects.create_project(project).await?;
        info!(project = %name, "project added");
        Ok(())
    }

    /// Replace the project called `name` with `replacement`.
    ///
    /// Renaming is not supported: `replacement.name` must equal `name`.
    pub async fn edit_project(&self, name: &str, mut replacement: Project) -> Result<()> {
        let name = project_key(name);
        if project_key(&replacement.name) != name {
            return Err(ProjBoardError::InvalidInput(format!(
                "cannot rename project '{name}' to '{}'",
                replacement.name
            )));
        }
        replacement.name = name.to_string();
        replacement.validate()?;
        self.projects.update_project(replacement).await?;
        info!(project = %name, "project updated");
        Ok(())
    }

    /// Delete a project and its checklist.
    pub async fn delete_project(&self, name: &str) -> Result<()> {
        let name = project_key(name);
        self.projects.delete_project(name).await?;
        self.checklists.delete_checklist(name).await?;
        info!(project = %name, "project deleted");
        Ok(())
    }

    /// Get a project by name; `NotFound` if absent.
    pub async fn get_project(&self, name: &str) -> Result<Project> {
        let name = project_key(name);
        self.projects
            .get_project(name)
            .await?
            .ok_or_else(|| ProjBoardError::project_not_found(name))
    }

    /// All readable projects in store order.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.projects.list_projects().await
    }

    /// Store the checklist for an existing project.
    pub async fn save_checklist(&self, name: &str, entry: ChecklistEntry) -> Result<()> {
        let name = project_key(name);
        self.ensure_exists(name).await?;
        self.checklists.save_checklist(name, entry).await?;
        info!(project = %name, "checklist saved");
        Ok(())
    }

    /// Stored checklist for a project (empty if none was saved).
    pub async fn get_checklist(&self, name: &str) -> Result<ChecklistEntry> {
        let name = project_key(name);
        self.ensure_exists(name).await?;
        Ok(self.checklists.get_checklist(name).await?.unwrap_or_default())
    }

    /// Completion status of a project's checklist; a missing checklist is `Empty`.
    pub async fn checklist_status(&self, name: &str) -> Result<ChecklistStatus> {
        let entry = self.checklists.get_checklist(project_key(name)).await?;
        Ok(checklist_status_or_empty(entry.as_ref()))
    }

    /// Percentage and tier for one project.
    pub async fn project_progress(&self, name: &str, as_of: NaiveDate) -> Result<ProjectProgress> {
        let project = self.get_project(name).await?;
        Ok(self.engine.evaluate(&project, as_of))
    }

    /// All progress cards plus the quantity counter.
    pub async fn dashboard(&self, as_of: NaiveDate) -> Result<Dashboard> {
        let projects = self.projects.list_projects().await?;
        let checklists = self.checklists.list_checklists().await?;
        debug!(projects = projects.len(), checklists = checklists.len(), %as_of, "building dashboard");
        Ok(Dashboard::build(&projects, &checklists, as_of, &self.engine))
    }

    async fn ensure_exists(&self, name: &str) -> Result<()> {
        match self.projects.get_project(name).await? {
            Some(_) => Ok(()),
            None => Err(ProjBoardError::project_not_found(name)),
        }
    }
}

/// Names are compared without surrounding whitespace.
fn project_key(name: &str) -> &str {
    name.trim()
}
