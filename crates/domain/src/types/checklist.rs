//! Purchase / drawing checklists
//!
//! A checklist belongs to a project by name and is stored separately from
//! it. Items have no IDs: an item is done when its exact (trimmed) text
//! appears in the matching done list.

use serde::{Deserialize, Serialize};

use crate::utils::dates::lenient_strings;

/// Checklist attached to one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistEntry {
    #[serde(default, deserialize_with = "lenient_strings::deserialize")]
    pub purchase_items: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings::deserialize")]
    pub purchase_done: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings::deserialize")]
    pub drawing_items: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings::deserialize")]
    pub drawing_done: Vec<String>,
}

impl ChecklistEntry {
    /// Build a checklist from purchase and drawing item lists with nothing
    /// marked done.
    pub fn new<P, D>(purchase_items: P, drawing_items: D) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            purchase_items: purchase_items.into_iter().map(Into::into).collect(),
            drawing_items: drawing_items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Mark a purchase item done (by text).
    #[must_use]
    pub fn with_purchase_done(mut self, item: impl Into<String>) -> Self {
        self.purchase_done.push(item.into());
        self
    }

    /// Mark a drawing item done (by text).
    #[must_use]
    pub fn with_drawing_done(mut self, item: impl Into<String>) -> Self {
        self.drawing_done.push(item.into());
        self
    }
}
