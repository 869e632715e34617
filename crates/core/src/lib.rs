//! # ProjBoard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The progress engine (milestone dates -> percentage -> tier)
//! - The checklist completion rule
//! - Dashboard aggregation (progress cards, quantity counter)
//! - Record store port interfaces (traits) and the project service
//!
//! ## Architecture Principles
//! - Only depends on `projboard-domain`
//! - No database, file or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod checklist;
pub mod dashboard;
pub mod progress;
pub mod projects;

// Re-export specific items to avoid ambiguity
pub use checklist::{checklist_status, checklist_status_or_empty, missing_items};
pub use dashboard::{build_card, build_cards, summarize_quantities, Dashboard, ProjectCard, QuantitySummary};
pub use progress::{compute_progress, progress_tier, ProgressEngine, ProjectProgress};
pub use projects::ports::{ChecklistRepository, ProjectRepository};
pub use projects::ProjectService;
