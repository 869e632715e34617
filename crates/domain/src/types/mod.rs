//! Domain types and models

pub mod checklist;
pub mod progress;
pub mod project;

pub use checklist::ChecklistEntry;
pub use progress::{ChecklistStatus, CountingPolicy, Milestone, ProgressTier};
pub use project::{MilestoneDates, Project, ProjectType};
