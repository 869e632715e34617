//! Checklist completion rule
//!
//! Items are matched by trimmed text. Two items with the same text are the
//! same item as far as completion goes.

use std::collections::HashSet;

use projboard_domain::{ChecklistEntry, ChecklistStatus};

/// Completion status of a checklist.
///
/// Blank items are ignored. A checklist with no items is `Empty`; one whose
/// every item appears in either done list is `AllDone`; anything else is
/// `Missing`.
pub fn checklist_status(entry: &ChecklistEntry) -> ChecklistStatus {
    let mut items = required_items(entry).peekable();
    if items.peek().is_none() {
        return ChecklistStatus::Empty;
    }

    let done = done_items(entry);
    if items.all(|item| done.contains(item)) {
        ChecklistStatus::AllDone
    } else {
        ChecklistStatus::Missing
    }
}

/// Same as [`checklist_status`], treating an absent checklist as empty.
pub fn checklist_status_or_empty(entry: Option<&ChecklistEntry>) -> ChecklistStatus {
    entry.map_or(ChecklistStatus::Empty, checklist_status)
}

/// Required items not yet marked done, purchase items first, in list order.
pub fn missing_items(entry: &ChecklistEntry) -> Vec<String> {
    let done = done_items(entry);
    required_items(entry).filter(|item| !done.contains(item)).map(str::to_owned).collect()
}

fn required_items(entry: &ChecklistEntry) -> impl Iterator<Item = &str> {
    entry
        .purchase_items
        .iter()
        .chain(&entry.drawing_items)
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
}

fn done_items(entry: &ChecklistEntry) -> HashSet<&str> {
    entry.purchase_done.iter().chain(&entry.drawing_done).map(|item| item.trim()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_items_is_empty() {
        assert_eq!(checklist_status(&ChecklistEntry::default()), ChecklistStatus::Empty);
    }

    #[test]
    fn blank_items_are_ignored() {
        let entry = ChecklistEntry::new(["  ", ""], ["\t"]);
        assert_eq!(checklist_status(&entry), ChecklistStatus::Empty);
    }

    #[test]
    fn all_items_done_across_both_lists() {
        let entry = ChecklistEntry::new(["Radiator", "Canopy"], ["GA drawing"])
            .with_purchase_done("Radiator")
            .with_drawing_done("Canopy")
            .with_purchase_done("GA drawing");
        assert_eq!(checklist_status(&entry), ChecklistStatus::AllDone);
    }

    #[test]
    fn one_outstanding_item_is_missing() {
        let entry = ChecklistEntry::new(["Radiator", "Canopy"], Vec::<String>::new())
            .with_purchase_done("Radiator");
        assert_eq!(checklist_status(&entry), ChecklistStatus::Missing);
        assert_eq!(missing_items(&entry), vec!["Canopy".to_string()]);
    }

    #[test]
    fn matching_trims_whitespace() {
        let entry = ChecklistEntry::new([" Radiator "], Vec::<String>::new())
            .with_purchase_done("Radiator\n");
        assert_eq!(checklist_status(&entry), ChecklistStatus::AllDone);
    }

    #[test]
    fn duplicate_texts_are_satisfied_together() {
        let entry =
            ChecklistEntry::new(["Bolt", "Bolt"], Vec::<String>::new()).with_purchase_done("Bolt");
        assert_eq!(checklist_status(&entry), ChecklistStatus::AllDone);
    }

    #[test]
    fn done_entries_without_items_do_not_count() {
        let entry = ChecklistEntry::default().with_purchase_done("Radiator");
        assert_eq!(checklist_status(&entry), ChecklistStatus::Empty);
    }

    #[test]
    fn absent_checklist_is_empty() {
        assert_eq!(checklist_status_or_empty(None), ChecklistStatus::Empty);
    }
}
