//! Application context - dependency injection container

use std::sync::Arc;

use projboard_core::{ChecklistRepository, ProgressEngine, ProjectRepository, ProjectService};
use projboard_domain::{Config, Result, StoreBackend};
use projboard_infra::{DbManager, JsonFileStore, SqliteProjectRepository};
use tracing::info;

/// Application context - holds the configured store and services
pub struct AppContext {
    pub config: Config,
    pub projects: Arc<ProjectService>,
    /// Present only for the SQLite backend.
    pub db: Option<Arc<DbManager>>,
}

impl AppContext {
    /// Open the configured record store and wire the project service.
    ///
    /// # Errors
    /// Fails if the SQLite database cannot be opened or migrated.
    pub fn new(config: Config) -> Result<Self> {
        let path = config.store.resolved_path().to_string();

        let (projects, checklists, db): (
            Arc<dyn ProjectRepository>,
            Arc<dyn ChecklistRepository>,
            Option<Arc<DbManager>>,
        ) = match config.store.backend {
            StoreBackend::Sqlite => {
                let db = Arc::new(DbManager::open_and_migrate(&path, config.store.pool_size)?);
                let repo = Arc::new(SqliteProjectRepository::new(Arc::clone(&db)));
                let projects: Arc<dyn ProjectRepository> = repo.clone();
                let checklists: Arc<dyn ChecklistRepository> = repo;
                (projects, checklists, Some(db))
            }
            StoreBackend::JsonFile => {
                let store = Arc::new(JsonFileStore::new(&path));
                let projects: Arc<dyn ProjectRepository> = store.clone();
                let checklists: Arc<dyn ChecklistRepository> = store;
                (projects, checklists, None)
            }
        };

        let service = ProjectService::new(projects, checklists)
            .with_engine(ProgressEngine::new(config.progress.policy));

        info!(
            backend = %config.store.backend,
            path = %path,
            policy = %config.progress.policy,
            "application context initialised"
        );

        Ok(Self { config, projects: Arc::new(service), db })
    }

    /// Verify the underlying store is reachable.
    pub fn health_check(&self) -> Result<()> {
        match &self.db {
            Some(db) => db.health_check(),
            None => Ok(()),
        }
    }
}
