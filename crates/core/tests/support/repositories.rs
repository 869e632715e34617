//! Mock repository implementations for testing
//!
//! In-memory mocks for the store ports, enabling deterministic service tests
//! without a database or file system.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use projboard_core::{ChecklistRepository, ProjectRepository};
use projboard_domain::{ChecklistEntry, ProjBoardError, Project, Result as DomainResult};
use tokio::sync::Mutex;

/// In-memory mock for both store ports.
///
/// Projects keep insertion order. Clones share state, so one instance can be
/// handed to the service as both ports.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    projects: Arc<Mutex<Vec<Project>>>,
    checklists: Arc<Mutex<HashMap<String, ChecklistEntry>>>,
}

impl InMemoryStore {
    /// Create a mock seeded with the provided projects.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self { projects: Arc::new(Mutex::new(projects)), ..Self::default() }
    }

    /// Number of stored checklists.
    pub async fn checklist_count(&self) -> usize {
        self.checklists.lock().await.len()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn list_projects(&self) -> DomainResult<Vec<Project>> {
        Ok(self.projects.lock().await.clone())
    }

    async fn get_project(&self, name: &str) -> DomainResult<Option<Project>> {
        Ok(self.projects.lock().await.iter().find(|p| p.name == name).cloned())
    }

    async fn create_project(&self, project: Project) -> DomainResult<()> {
        let mut projects = self.projects.lock().await;
        if projects.iter().any(|p| p.name == project.name) {
            return Err(ProjBoardError::duplicate_project(&project.name));
        }
        projects.push(project);
        Ok(())
    }

    async fn update_project(&self, project: Project) -> DomainResult<()> {
        let mut projects = self.projects.lock().await;
        let slot = projects
            .iter_mut()
            .find(|p| p.name == project.name)
            .ok_or_else(|| ProjBoardError::project_not_found(&project.name))?;
        *slot = project;
        Ok(())
    }

    async fn delete_project(&self, name: &str) -> DomainResult<()> {
        let mut projects = self.projects.lock().await;
        let before = projects.len();
        projects.retain(|p| p.name != name);
        if projects.len() == before {
            return Err(ProjBoardError::project_not_found(name));
        }
        Ok(())
    }
}

#[async_trait]
impl ChecklistRepository for InMemoryStore {
    async fn get_checklist(&self, project_name: &str) -> DomainResult<Option<ChecklistEntry>> {
        Ok(self.checklists.lock().await.get(project_name).cloned())
    }

    async fn list_checklists(&self) -> DomainResult<HashMap<String, ChecklistEntry>> {
        Ok(self.checklists.lock().await.clone())
    }

    async fn save_checklist(&self, project_name: &str, entry: ChecklistEntry) -> DomainResult<()> {
        self.checklists.lock().await.insert(project_name.to_string(), entry);
        Ok(())
    }

    async fn delete_checklist(&self, project_name: &str) -> DomainResult<()> {
        self.checklists.lock().await.remove(project_name);
        Ok(())
    }
}
