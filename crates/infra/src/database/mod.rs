//! SQLite record store

pub mod manager;
pub mod project_repository;

pub use manager::DbManager;
pub use project_repository::SqliteProjectRepository;
