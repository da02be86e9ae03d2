//! Integration tests for host startup: open, migrate, use, reopen.

use lockedin_core::{
    build_month_grid, tasks_for_date, CoreError, Priority, SchemaMigrator, Store, TaskInput,
    TaskRepository, MIGRATIONS,
};
use tempfile::TempDir;

#[test]
fn test_full_startup_workflow() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.db");

    let mut store = Store::open(&path).unwrap();
    let migrator = SchemaMigrator::new();
    assert_eq!(migrator.pending(&store).unwrap().len(), MIGRATIONS.len());
    let version = migrator.run(&mut store).unwrap();
    assert_eq!(version, migrator.latest_version());

    let repo = TaskRepository::new(&store);
    let rent = repo
        .create(&TaskInput::new("rent", "Pay rent").due("2024-02-29").priority("high"))
        .unwrap();
    assert!(!rent.completed);
    assert!(rent.tags.is_empty());
    assert_eq!(rent.priority, Priority::High);

    let tasks = repo.get_all().unwrap();
    let grid = build_month_grid(2024, 2, &tasks).unwrap();
    let cell = grid
        .cells
        .iter()
        .find(|c| c.date_key == "2024-02-29")
        .unwrap();
    assert!(cell.is_current_month);
    assert_eq!(cell.tasks, vec![rent.clone()]);
    assert_eq!(tasks_for_date("2024-02-29", &tasks), vec![rent]);
}

#[test]
fn test_reopened_store_keeps_version_and_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.db");

    {
        let mut store = Store::open(&path).unwrap();
        SchemaMigrator::new().run(&mut store).unwrap();
        TaskRepository::new(&store)
            .create(&TaskInput::new("a", "Persisted").tags(["x", "y"]))
            .unwrap();
    }

    let mut store = Store::open(&path).unwrap();
    assert_eq!(SchemaMigrator::current_version(&store).unwrap(), 1);
    assert!(SchemaMigrator::new().pending(&store).unwrap().is_empty());

    // A fresh handle still has to go through the migrator once.
    assert!(matches!(
        TaskRepository::new(&store).get_all(),
        Err(CoreError::NotInitialized)
    ));
    assert_eq!(SchemaMigrator::new().run(&mut store).unwrap(), 1);

    let task = TaskRepository::new(&store).get_by_id("a").unwrap().unwrap();
    assert_eq!(task.title, "Persisted");
    assert_eq!(task.tags, vec!["x", "y"]);
}

#[test]
fn test_crud_round_trip() {
    let mut store = Store::open_in_memory().unwrap();
    SchemaMigrator::new().run(&mut store).unwrap();
    let repo = TaskRepository::new(&store);

    let created = repo
        .create(
            &TaskInput::new("t1", "Write report")
                .description("quarterly")
                .due("2024-06-30")
                .tags(["work"]),
        )
        .unwrap();
    assert_eq!(repo.get_by_id("t1").unwrap(), Some(created.clone()));

    let mut input = TaskInput::from(&created);
    input.priority = Some("urgent".into());
    let updated = repo.update(&input).unwrap();
    assert_eq!(updated.priority, Priority::Urgent);
    assert_eq!(updated.description, "quarterly");
    assert!(updated.updated_at > created.updated_at);

    assert_eq!(
        repo.get_by_date_range("2024-06-30", "2024-06-30").unwrap(),
        vec![updated]
    );

    repo.delete("t1").unwrap();
    assert_eq!(repo.get_by_id("t1").unwrap(), None);
    repo.delete("t1").unwrap();
}
