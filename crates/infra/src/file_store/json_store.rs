//! Whole-document JSON record store
//!
//! The store is one JSON document:
//!
//! ```json
//! { "projects": [ { "type": "marine", "name": "M-1", ... } ],
//!   "checklists": { "M-1": { "purchaseItems": [], ... } } }
//! ```
//!
//! Every mutation is a read-modify-write of the whole document. Writers in
//! one process are serialised by a mutex; the new document is written to a
//! sibling temp file and renamed into place. Across processes the last
//! writer wins.
//!
//! Records are kept as raw JSON until they are read, so a record this
//! version cannot parse is skipped on read but survives unrelated writes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use projboard_core::{ChecklistRepository, ProjectRepository};
use projboard_domain::{ChecklistEntry, ProjBoardError, Project, Result as DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::errors::InfraError;

/// On-disk document shape
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    projects: Vec<Value>,
    #[serde(default)]
    checklists: Map<String, Value>,
    /// Unknown top-level keys, written back untouched.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl StoreDocument {
    fn position(&self, name: &str) -> Option<usize> {
        self.projects.iter().position(|value| record_name(value) == Some(name))
    }
}

fn record_name(value: &Value) -> Option<&str> {
    value.get("name").and_then(Value::as_str)
}

fn parse_project(value: &Value) -> Option<Project> {
    match Project::deserialize(value) {
        Ok(project) => Some(project),
        Err(err) => {
            warn!(
                project = record_name(value).unwrap_or("<unnamed>"),
                error = %err,
                "skipping unreadable project record"
            );
            None
        }
    }
}

fn parse_checklist(name: &str, value: &Value) -> Option<ChecklistEntry> {
    match ChecklistEntry::deserialize(value) {
        Ok(entry) => Some(entry),
        Err(err) => {
            warn!(project = %name, error = %err, "skipping unreadable checklist record");
            None
        }
    }
}

fn to_value<T: Serialize>(record: &T) -> DomainResult<Value> {
    serde_json::to_value(record).map_err(|e| InfraError::from(e).into())
}

/// Record store persisted as a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store backed by the document at `path`. The file is created on the
    /// first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> DomainResult<StoreDocument> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file missing, starting empty");
                return Ok(StoreDocument::default());
            }
            Err(err) => return Err(InfraError::from(err).into()),
        };

        if contents.trim().is_empty() {
            return Ok(StoreDocument::default());
        }

        let document: StoreDocument =
            serde_json::from_str(&contents).map_err(|e| ProjBoardError::from(InfraError::from(e)))?;
        debug!(
            path = %self.path.display(),
            projects = document.projects.len(),
            checklists = document.checklists.len(),
            "store document read"
        );
        Ok(document)
    }

    async fn write_document(&self, document: &StoreDocument) -> DomainResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| ProjBoardError::from(InfraError::from(e)))?;
        }

        let mut contents = serde_json::to_string_pretty(document)
            .map_err(|e| ProjBoardError::from(InfraError::from(e)))?;
        contents.push('\n');

        let tmp_path = self.temp_path();
        fs::write(&tmp_path, contents).await.map_err(|e| ProjBoardError::from(InfraError::from(e)))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| ProjBoardError::from(InfraError::from(e)))?;

        debug!(path = %self.path.display(), "store document written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Apply `mutate` to the current document and persist the result.
    async fn modify<T, F>(&self, mutate: F) -> DomainResult<T>
    where
        F: FnOnce(&mut StoreDocument) -> DomainResult<T> + Send,
        T: Send,
    {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        let output = mutate(&mut document)?;
        self.write_document(&document).await?;
        Ok(output)
    }
}

#[async_trait]
impl ProjectRepository for JsonFileStore {
    async fn list_projects(&self) -> DomainResult<Vec<Project>> {
        let document = self.read_document().await?;
        Ok(document.projects.iter().filter_map(parse_project).collect())
    }

    async fn get_project(&self, name: &str) -> DomainResult<Option<Project>> {
        let document = self.read_document().await?;
        Ok(document.position(name).and_then(|idx| parse_project(&document.projects[idx])))
    }

    async fn create_project(&self, project: Project) -> DomainResult<()> {
        let value = to_value(&project)?;
        self.modify(move |document| {
            if document.position(&project.name).is_some() {
                return Err(ProjBoardError::duplicate_project(&project.name));
            }
            document.projects.push(value);
            Ok(())
        })
        .await
    }

    async fn update_project(&self, project: Project) -> DomainResult<()> {
        let value = to_value(&project)?;
        self.modify(move |document| {
            let idx = document
                .position(&project.name)
                .ok_or_else(|| ProjBoardError::project_not_found(&project.name))?;
            document.projects[idx] = value;
            Ok(())
        })
        .await
    }

    async fn delete_project(&self, name: &str) -> DomainResult<()> {
        self.modify(|document| {
            let idx =
                document.position(name).ok_or_else(|| ProjBoardError::project_not_found(name))?;
            document.projects.remove(idx);
            document.checklists.remove(name);
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl ChecklistRepository for JsonFileStore {
    async fn get_checklist(&self, project_name: &str) -> DomainResult<Option<ChecklistEntry>> {
        let document = self.read_document().await?;
        Ok(document
            .checklists
            .get(project_name)
            .and_then(|value| parse_checklist(project_name, value)))
    }

    async fn list_checklists(&self) -> DomainResult<HashMap<String, ChecklistEntry>> {
        let document = self.read_document().await?;
        Ok(document
            .checklists
            .iter()
            .filter_map(|(name, value)| parse_checklist(name, value).map(|e| (name.clone(), e)))
            .collect())
    }

    async fn save_checklist(&self, project_name: &str, entry: ChecklistEntry) -> DomainResult<()> {
        let value = to_value(&entry)?;
        self.modify(|document| {
            document.checklists.insert(project_name.to_string(), value);
            Ok(())
        })
        .await
    }

    async fn delete_checklist(&self, project_name: &str) -> DomainResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        if document.checklists.remove(project_name).is_some() {
            self.write_document(&document).await?;
        }
        Ok(())
    }
}
