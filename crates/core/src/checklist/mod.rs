//! Purchase / drawing checklist completion

pub mod rule;

pub use rule::{checklist_status, checklist_status_or_empty, missing_items};
