//! Integration tests for epmtrack
//!
//! Exercise the full derivation pipeline (store -> filters -> metrics) and
//! the export/import adapters against a real on-disk store.

use epmtrack::domain::{AppData, STRATEGIES, Status, Task};
use epmtrack::export::{import_json, tasks_from_csv, tasks_to_csv};
use epmtrack::filter::Filters;
use epmtrack::metrics::Metrics;
use epmtrack::store::TaskStore;
use tempfile::TempDir;

fn two_task_document() -> AppData {
    AppData {
        cycle: "Q4-2025".to_string(),
        tasks: vec![
            Task::with_id("T-A", STRATEGIES[0], "Ship the audit")
                .with_owner("Head Ops")
                .with_due("2025-01-01")
                .with_status(Status::Done)
                .with_progress(100),
            Task::with_id("T-B", STRATEGIES[1], "Unblock the rollout")
                .with_owner("PMO")
                .with_status(Status::Blocked)
                .with_progress(25),
        ],
        okrs: vec![],
    }
}

// =============================================================================
// Derivation pipeline
// =============================================================================

#[test]
fn test_filter_then_metrics_pipeline() {
    let temp = TempDir::new().unwrap();
    let mut store = TaskStore::open(temp.path().join("epmData_v1.json")).unwrap();
    store.replace_all(two_task_document()).unwrap();

    let filters = Filters {
        status: "Blocked".to_string(),
        ..Default::default()
    };
    let visible = filters.apply(&store.current().tasks);
    let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["T-B"]);

    let metrics = Metrics::compute(&visible, "2025-01-10");
    assert_eq!(metrics.total, 1);
    assert_eq!(metrics.blocked, 1);
    assert_eq!(metrics.avg_progress, 25);
    // T-B has no due date, so it is never overdue
    assert_eq!(metrics.overdue, 0);
}

#[test]
fn test_metrics_follow_the_filtered_subset() {
    let temp = TempDir::new().unwrap();
    let mut store = TaskStore::open(temp.path().join("epmData_v1.json")).unwrap();
    store.replace_all(two_task_document()).unwrap();

    let all = Metrics::compute(&store.current().tasks, "2025-01-10");
    assert_eq!(all.total, 2);
    assert_eq!(all.done + all.in_progress + all.blocked + all.not_started, all.total);

    let done_only = Filters {
        status: "Done".to_string(),
        ..Default::default()
    };
    let visible = done_only.apply(&store.current().tasks);
    let m = Metrics::compute(&visible, "2025-01-10");
    assert_eq!(m.total, 1);
    assert_eq!(m.avg_progress, 100);
}

// =============================================================================
// Export / import
// =============================================================================

#[test]
fn test_csv_export_covers_all_tasks_not_the_filtered_subset() {
    let data = two_task_document();
    let csv = tasks_to_csv(&data.tasks);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 1 + data.tasks.len());
    assert!(lines[0].starts_with("\"ID\",\"Strategi\""));
}

#[test]
fn test_csv_round_trip_through_store() {
    let temp = TempDir::new().unwrap();
    let mut store = TaskStore::open(temp.path().join("epmData_v1.json")).unwrap();
    let mut data = two_task_document();
    data.tasks[1].notes = "first\nsecond".to_string();
    store.replace_all(data).unwrap();

    let parsed = tasks_from_csv(&tasks_to_csv(&store.current().tasks)).unwrap();
    assert_eq!(parsed[0], store.current().tasks[0]);
    assert_eq!(parsed[1].notes, "first second");
}

#[test]
fn test_import_replaces_document_wholesale() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("epmData_v1.json");
    let mut store = TaskStore::open(&path).unwrap();

    let raw = serde_json::to_string(&two_task_document()).unwrap();
    let imported = import_json(&raw).unwrap();
    store.replace_all(imported).unwrap();
    assert_eq!(store.current().tasks.len(), 2);

    // Survives reopen
    let reopened = TaskStore::open(&path).unwrap();
    assert_eq!(reopened.current(), store.current());
}

#[test]
fn test_failed_import_leaves_store_unchanged() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("epmData_v1.json");
    let mut store = TaskStore::open(&path).unwrap();
    store.replace_all(two_task_document()).unwrap();
    let before_file = std::fs::read_to_string(&path).unwrap();

    assert!(import_json(r#"{"cycle": "Q9", "okrs": []}"#).is_err());
    assert!(import_json("{broken").is_err());

    // Store untouched on failure, byte for byte
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before_file);
    assert_eq!(store.current().tasks.len(), 2);
}

// =============================================================================
// Store lifecycle
// =============================================================================

#[test]
fn test_add_remove_restores_pre_add_content() {
    let temp = TempDir::new().unwrap();
    let mut store = TaskStore::open(temp.path().join("epmData_v1.json")).unwrap();
    store.replace_all(two_task_document()).unwrap();
    let before = store.current().tasks.clone();

    let task = Task::new(STRATEGIES[5], "Temporary");
    let id = task.id.clone();
    store.add(task).unwrap();
    store.remove(&id).unwrap();

    assert_eq!(store.current().tasks, before);
}

#[test]
fn test_cycle_label_is_display_only() {
    let temp = TempDir::new().unwrap();
    let mut store = TaskStore::open(temp.path().join("epmData_v1.json")).unwrap();
    store.replace_all(two_task_document()).unwrap();

    store.set_cycle("Q1-2026").unwrap();
    assert_eq!(store.current().cycle, "Q1-2026");

    // Changing the cycle never affects which tasks filters select
    let visible = Filters::default().apply(&store.current().tasks);
    assert_eq!(visible.len(), 2);
}
