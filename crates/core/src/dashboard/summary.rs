use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use projboard_domain::utils::dates::lenient_date;
use projboard_domain::{ChecklistEntry, ChecklistStatus, Project, ProjectType};
use serde::Serialize;

use crate::checklist::checklist_status_or_empty;
use crate::progress::{ProgressEngine, ProjectProgress};

/// Display-ready row for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    /// Project name.
    pub name: String,
    /// Product family.
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    /// Customer name.
    pub customer: String,
    /// Responsible supervisor.
    pub supervisor: String,
    /// Units ordered.
    pub quantity: u32,
    /// Promised delivery date.
    #[serde(serialize_with = "lenient_date::serialize")]
    pub lead_time: Option<NaiveDate>,
    /// Percentage and tier on the reference date.
    pub progress: ProjectProgress,
    /// Purchase/drawing checklist completion.
    pub checklist: ChecklistStatus,
    /// Free-text reminder shown under the card.
    pub reminder_text: Option<String>,
}

/// Build the card for one project.
pub fn build_card(
    project: &Project,
    checklist: Option<&ChecklistEntry>,
    as_of: NaiveDate,
    engine: &ProgressEngine,
) -> ProjectCard {
    ProjectCard {
        name: project.name.clone(),
        project_type: project.project_type,
        customer: project.customer.clone(),
        supervisor: project.supervisor.clone(),
        quantity: project.quantity,
        lead_time: project.lead_time,
        progress: engine.evaluate(project, as_of),
        checklist: checklist_status_or_empty(checklist),
        reminder_text: project.reminder_text.clone(),
    }
}

/// Cards for every project, in the order given. Checklists are looked up by
/// project name; projects without one get `Empty`.
pub fn build_cards(
    projects: &[Project],
    checklists: &HashMap<String, ChecklistEntry>,
    as_of: NaiveDate,
    engine: &ProgressEngine,
) -> Vec<ProjectCard> {
    projects
        .iter()
        .map(|project| build_card(project, checklists.get(&project.name), as_of, engine))
        .collect()
}

/// Total unit count, overall and per project type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitySummary {
    /// Units across all projects.
    pub total: u64,
    /// Keyed by type label, so iteration is sorted by label.
    pub by_type: BTreeMap<String, u64>,
}

/// Sum quantities overall and per type label; empty input gives a zero total.
pub fn summarize_quantities(projects: &[Project]) -> QuantitySummary {
    projects.iter().fold(QuantitySummary::default(), |mut summary, project| {
        let quantity = u64::from(project.quantity);
        summary.total += quantity;
        *summary.by_type.entry(project.project_type.label().to_string()).or_default() += quantity;
        summary
    })
}

/// Everything the summary view shows for one reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Reference date progress was computed for.
    pub as_of: NaiveDate,
    /// One card per project, in store order.
    pub cards: Vec<ProjectCard>,
    /// Unit counter.
    pub quantities: QuantitySummary,
}

impl Dashboard {
    /// Build cards and quantity totals for `projects` as of `as_of`.
    pub fn build(
        projects: &[Project],
        checklists: &HashMap<String, ChecklistEntry>,
        as_of: NaiveDate,
        engine: &ProgressEngine,
    ) -> Self {
        Self {
            as_of,
            cards: build_cards(projects, checklists, as_of, engine),
            quantities: summarize_quantities(projects),
        }
    }
}

#[cfg(test)]
mod tests {
    use projboard_domain::{Milestone, ProgressTier};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input_has_zero_total() {
        let summary = summarize_quantities(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.by_type.is_empty());
    }

    #[test]
    fn quantities_group_by_type_label() {
        let projects = vec![
            Project::new("A", ProjectType::Marine, 2024, 2),
            Project::new("B", ProjectType::Enclosure, 2024, 5),
            Project::new("C", ProjectType::Marine, 2025, 1),
        ];
        let summary = summarize_quantities(&projects);

        assert_eq!(summary.total, 8);
        let keys: Vec<&str> = summary.by_type.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Enclosure", "Marine"]);
        assert_eq!(summary.by_type["Marine"], 3);
    }

    #[test]
    fn cards_follow_store_order_and_default_checklists() {
        let today = date(2024, 6, 1);
        let mut first = Project::new("Z-1", ProjectType::OpenSet, 2024, 1);
        first.milestones.set(Milestone::PartsArrival, Some(today));
        let second = Project::new("A-1", ProjectType::Scania, 2024, 1);

        let mut checklists = HashMap::new();
        checklists.insert("A-1".to_string(), ChecklistEntry::new(["Radiator"], Vec::<String>::new()));

        let cards =
            build_cards(&[first, second], &checklists, today, &ProgressEngine::default());

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Z-1");
        assert_eq!(cards[0].progress.tier, ProgressTier::AtRisk);
        assert_eq!(cards[0].checklist, ChecklistStatus::Empty);
        assert_eq!(cards[1].checklist, ChecklistStatus::Missing);
        assert_eq!(cards[1].progress.percentage, 0);
    }
}
