//! Shared fixtures for infra integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use projboard_core::{ChecklistRepository, ProjectRepository};
use projboard_domain::{ChecklistEntry, Milestone, ProjBoardError, Project, ProjectType};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Install a test-writer subscriber so store `debug!`/`warn!` events show up
/// under `--nocapture`.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("projboard_infra=debug")
        .with_test_writer()
        .try_init();
}

/// A fully populated project with some milestones left unset.
pub fn sample_project(name: &str) -> Project {
    let mut project = Project::new(name, ProjectType::OpenSet, 2024, 3);
    project.lead_time = Some(date(2024, 9, 30));
    project.customer = "Harbour Power".into();
    project.supervisor = "K. Lam".into();
    project.specification = "500kVA".into();
    project.description = "Containerised set".into();
    project.reminder_text = Some("Chase radiator supplier".into());
    project.milestones.set(Milestone::PartsArrival, Some(date(2024, 6, 1)));
    project.milestones.set(Milestone::TestingComplete, Some(date(2024, 8, 20)));
    project
}

/// Behaviour every record store must share.
pub async fn assert_store_contract<S>(store: &S)
where
    S: ProjectRepository + ChecklistRepository,
{
    assert!(store.list_projects().await.expect("list should succeed").is_empty());

    let first = sample_project("YS-001");
    store.create_project(first.clone()).await.expect("create should succeed");
    store
        .create_project(Project::new("YS-002", ProjectType::Marine, 2025, 1))
        .await
        .expect("second create should succeed");

    // Round trip keeps absent dates absent.
    let fetched = store.get_project("YS-001").await.expect("get").expect("project exists");
    assert_eq!(fetched, first);
    assert_eq!(fetched.milestones.get(Milestone::InstallationComplete), None);

    // Store order is insertion order.
    let names: Vec<String> = store
        .list_projects()
        .await
        .expect("list should succeed")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["YS-001".to_string(), "YS-002".to_string()]);

    // Duplicate name.
    let err = store
        .create_project(Project::new("YS-001", ProjectType::Scania, 2024, 9))
        .await
        .expect_err("duplicate should fail");
    assert_eq!(err, ProjBoardError::Conflict("project name 'YS-001' already exists".into()));

    // Update.
    let mut edited = first.clone();
    edited.quantity = 7;
    edited.milestones.set(Milestone::PartsArrival, None);
    store.update_project(edited.clone()).await.expect("update should succeed");
    assert_eq!(store.get_project("YS-001").await.expect("get"), Some(edited));

    let err = store
        .update_project(Project::new("ghost", ProjectType::Marine, 2024, 1))
        .await
        .expect_err("update of unknown project should fail");
    assert!(matches!(err, ProjBoardError::NotFound(_)));

    // Checklists upsert and cascade.
    assert_eq!(store.get_checklist("YS-001").await.expect("get checklist"), None);
    let entry = ChecklistEntry::new(["Radiator", "Canopy"], ["GA drawing"])
        .with_purchase_done("Radiator");
    store.save_checklist("YS-001", entry.clone()).await.expect("save checklist");
    let replaced = entry.with_purchase_done("Canopy");
    store.save_checklist("YS-001", replaced.clone()).await.expect("upsert checklist");
    assert_eq!(store.get_checklist("YS-001").await.expect("get checklist"), Some(replaced));
    assert_eq!(store.list_checklists().await.expect("list checklists").len(), 1);

    store.delete_project("YS-001").await.expect("delete should succeed");
    assert_eq!(store.get_project("YS-001").await.expect("get"), None);
    assert_eq!(store.get_checklist("YS-001").await.expect("get checklist"), None);

    let err = store.delete_project("YS-001").await.expect_err("second delete should fail");
    assert!(matches!(err, ProjBoardError::NotFound(_)));

    // Deleting an absent checklist is a no-op.
    store.delete_checklist("YS-002").await.expect("no-op delete should succeed");
}
