//! End-to-end coverage for the JSON-document record store.

mod support;

use std::sync::Arc;

use projboard_core::{ChecklistRepository, ProjectRepository};
use projboard_domain::{ChecklistEntry, Milestone, ProjBoardError, Project, ProjectType};
use projboard_infra::JsonFileStore;
use serde_json::{json, Value};
use support::{assert_store_contract, date, init_test_logging, sample_project};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonFileStore {
    init_test_logging();
    JsonFileStore::new(dir.path().join("board").join("projboard.json"))
}

fn read_json(store: &JsonFileStore) -> Value {
    let contents = std::fs::read_to_string(store.path()).expect("store file should exist");
    serde_json::from_str(&contents).expect("store file should be valid JSON")
}

#[tokio::test(flavor = "multi_thread")]
async fn json_store_satisfies_contract() {
    let dir = TempDir::new().expect("temp dir");
    assert_store_contract(&store_in(&dir)).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_file_is_an_empty_store() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);

    assert!(store.list_projects().await.expect("list").is_empty());
    assert!(store.list_checklists().await.expect("list").is_empty());
    assert!(!store.path().exists(), "reads should not create the file");

    store.delete_checklist("nobody").await.expect("no-op delete");
    assert!(!store.path().exists(), "no-op delete should not create the file");
}

#[tokio::test(flavor = "multi_thread")]
async fn document_has_documented_shape() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);
    store.create_project(sample_project("S-1")).await.expect("create");
    store
        .save_checklist("S-1", ChecklistEntry::new(["Radiator"], ["GA"]))
        .await
        .expect("save checklist");

    let document = read_json(&store);
    assert_eq!(document["projects"][0]["name"], "S-1");
    assert_eq!(document["projects"][0]["type"], "openset");
    assert_eq!(document["projects"][0]["partsArrival"], "2024-06-01");
    assert_eq!(document["projects"][0]["installationComplete"], Value::Null);
    assert_eq!(
        document["checklists"]["S-1"],
        json!({
            "purchaseItems": ["Radiator"],
            "purchaseDone": [],
            "drawingItems": ["GA"],
            "drawingDone": []
        })
    );
    let tmp = store.path().with_file_name("projboard.json.tmp");
    assert!(!tmp.exists(), "temp file should be renamed into place");
}

#[tokio::test(flavor = "multi_thread")]
async fn hand_edited_document_is_read_leniently_and_preserved() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
    std::fs::write(
        store.path(),
        json!({
            "projects": [
                {
                    "type": "Open Set",
                    "name": "H-1",
                    "year": 2024,
                    "quantity": 2,
                    "partsArrival": "2024-06-01 00:00:00",
                    "testingComplete": "NaT"
                },
                { "type": "Hovercraft", "name": "H-2", "year": 2024, "quantity": 1 }
            ],
            "checklists": {
                "H-1": { "purchaseItems": ["Radiator", null], "drawingDone": null }
            },
            "owner": "planning office"
        })
        .to_string(),
    )
    .expect("seed store file");

    let projects = store.list_projects().await.expect("list");
    assert_eq!(projects.len(), 1, "unreadable record is skipped");
    assert_eq!(projects[0].milestones.get(Milestone::PartsArrival), Some(date(2024, 6, 1)));
    assert_eq!(projects[0].milestones.get(Milestone::TestingComplete), None);

    let checklist = store.get_checklist("H-1").await.expect("get").expect("checklist");
    assert_eq!(checklist.purchase_items, vec!["Radiator".to_string()]);

    // The unreadable record still blocks its name and survives writes.
    let err = store
        .create_project(Project::new("H-2", ProjectType::Marine, 2024, 1))
        .await
        .expect_err("name is taken by the raw record");
    assert!(matches!(err, ProjBoardError::Conflict(_)));
    store.create_project(Project::new("H-3", ProjectType::Marine, 2024, 1)).await.expect("create");

    let document = read_json(&store);
    assert_eq!(document["projects"].as_array().expect("array").len(), 3);
    assert_eq!(document["projects"][1]["type"], "Hovercraft");
    assert_eq!(document["owner"], "planning office");
}

#[tokio::test(flavor = "multi_thread")]
async fn spreadsheet_numbers_stay_listed() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
    std::fs::write(
        store.path(),
        json!({
            "projects": [
                { "type": "Marine", "name": "A", "year": 2024, "quantity": 1 },
                { "type": "Marine", "name": "B", "year": 2024.0, "quantity": 2 },
                { "type": "Scania", "name": "C", "year": 2024, "quantity": "3", "reminderText": 5 }
            ]
        })
        .to_string(),
    )
    .expect("seed store file");

    let projects = store.list_projects().await.expect("list");
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(projects[1].year, 2024);
    assert_eq!(projects[2].quantity, 3);
    assert_eq!(projects[2].reminder_text, None);

    let err = store
        .create_project(Project::new("B", ProjectType::Marine, 2024, 1))
        .await
        .expect_err("B is listed and taken");
    assert!(matches!(err, ProjBoardError::Conflict(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_in_one_process_are_all_kept() {
    let dir = TempDir::new().expect("temp dir");
    let store = Arc::new(store_in(&dir));

    let handles: Vec<_> = (0..8)
        .map(|idx| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .create_project(Project::new(format!("C-{idx}"), ProjectType::Enclosure, 2024, 1))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.expect("task should join").expect("create should succeed");
    }

    assert_eq!(store.list_projects().await.expect("list").len(), 8);
}

#[tokio::test(flavor = "multi_thread")]
async fn corrupt_document_is_a_serialization_error() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
    std::fs::write(store.path(), "{ \"projects\": [").expect("seed store file");

    let err = store.list_projects().await.expect_err("corrupt file should fail");
    assert!(matches!(err, ProjBoardError::Serialization(_)), "got {err:?}");
}
