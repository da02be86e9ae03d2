//! Task repository: the only read/write path for task records.
//!
//! Every operation first checks that the store has been migrated. Each write
//! runs in its own transaction and reads the stored row back before commit,
//! so callers always receive exactly what was persisted.

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{CoreError, DatabaseError, Result, ValidationError};
use crate::storage::Store;
use crate::task::{is_date_key, tags_from_storage, tags_to_storage, Priority, Task, TaskFilter, TaskInput};

const TASK_COLUMNS: &str =
    "id, title, description, due_date, priority, tags, completed, created_at, updated_at";

const SQLITE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Mutable fields after defaults are applied and contracts checked.
struct ValidatedFields {
    title: String,
    description: String,
    due_date: Option<String>,
    priority: Priority,
    tags: String,
    completed: bool,
}

fn validate(input: &TaskInput) -> Result<ValidatedFields, ValidationError> {
    if input.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let priority = match input.priority.as_deref() {
        Some(raw) => raw.parse::<Priority>()?,
        None => Priority::default(),
    };

    let due_date = match input.due_date.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(check_date_key("due_date", raw)?.to_string()),
    };

    if let Some(tags) = input.tags.as_deref() {
        check_tags(tags)?;
    }

    Ok(ValidatedFields {
        title: input.title.clone(),
        description: input.description.clone().unwrap_or_default(),
        due_date,
        priority,
        tags: input.tags.as_deref().map(tags_to_storage).unwrap_or_default(),
        completed: input.completed.unwrap_or(false),
    })
}

/// Tags must split back out of the joined form exactly as given.
fn check_tags(tags: &[String]) -> Result<(), ValidationError> {
    if let Some(bad) = tags.iter().find(|t| t.contains(',')) {
        return Err(ValidationError::InvalidTag(bad.clone()));
    }
    // `[""]` joins to "", which reads back as no tags.
    if let [only] = tags {
        if only.is_empty() {
            return Err(ValidationError::InvalidTag(String::new()));
        }
    }
    Ok(())
}

fn check_date_key<'v>(field: &str, value: &'v str) -> Result<&'v str, ValidationError> {
    if is_date_key(value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidDateKey {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

/// Current time at the precision timestamps are stored with.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Fixed-width RFC 3339, so string order in SQL is chronological order.
fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Reads RFC 3339, or SQLite's `datetime('now')` form (UTC, no zone) that
/// rows written by earlier builds of the app carry.
fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|e| {
            NaiveDateTime::parse_from_str(raw, SQLITE_DATETIME_FORMAT)
                .map(|naive| naive.and_utc())
                .map_err(|_| e)
        })
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Build a Task from a row selected with `TASK_COLUMNS`.
fn row_to_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    let priority_str: Option<String> = row.get(4)?;
    let priority = match priority_str {
        Some(raw) => raw
            .parse::<Priority>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?,
        None => Priority::default(),
    };

    let tags_str: Option<String> = row.get(5)?;
    let completed: Option<i64> = row.get(6)?;
    let created_at_str: String = row.get(7)?;
    let updated_at_str: String = row.get(8)?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        due_date: row.get(3)?,
        priority,
        tags: tags_from_storage(tags_str.as_deref().unwrap_or("")),
        completed: completed.unwrap_or(0) != 0,
        created_at: parse_timestamp(7, &created_at_str)?,
        updated_at: parse_timestamp(8, &updated_at_str)?,
    })
}

fn fetch(conn: &Connection, id: &str) -> rusqlite::Result<Option<Task>> {
    conn.query_row(
        &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
        params![id],
        row_to_task,
    )
    .optional()
}

/// Primary-key collisions become a uniqueness violation for `id`.
fn map_insert_error(err: rusqlite::Error, id: &str) -> CoreError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            DatabaseError::UniquenessViolation { id: id.to_string() }.into()
        }
        _ => err.into(),
    }
}

/// Repository over a migrated [`Store`].
pub struct TaskRepository<'a> {
    store: &'a Store,
}

impl<'a> TaskRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    fn conn(&self) -> Result<&'a Connection> {
        self.store.require_initialized()
    }

    /// All tasks, newest first. An empty store yields an empty list.
    ///
    /// Ordered on the parsed `created_at`, since stored text may mix
    /// timestamp formats; ties keep the latest insert first.
    pub fn get_all(&self) -> Result<Vec<Task>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY rowid DESC"
        ))?;
        let mut tasks = stmt
            .query_map([], row_to_task)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// The task with `id`, or `None`. A missing id is not an error.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Task>> {
        let conn = self.conn()?;
        Ok(fetch(conn, id)?)
    }

    /// Insert a new task and return the stored record.
    ///
    /// # Errors
    /// - [`ValidationError`] for an empty title, unknown priority or a
    ///   malformed due date; nothing is written.
    /// - [`DatabaseError::UniquenessViolation`] if `id` is already taken.
    pub fn create(&self, input: &TaskInput) -> Result<Task> {
        let conn = self.conn()?;
        let fields = validate(input)?;
        let stamp = format_timestamp(now());

        let tx = conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO tasks (id, title, description, due_date, priority, tags, completed, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                input.id,
                fields.title,
                fields.description,
                fields.due_date,
                fields.priority.as_str(),
                fields.tags,
                fields.completed,
                stamp,
                stamp,
            ],
        )
        .map_err(|e| map_insert_error(e, &input.id))?;
        let task = fetch(&tx, &input.id)?.ok_or_else(|| CoreError::NotFound {
            id: input.id.clone(),
        })?;
        tx.commit()?;

        debug!(id = %task.id, "created task");
        Ok(task)
    }

    /// Replace every mutable field of an existing task.
    ///
    /// Fields left out of `input` are reset to their defaults; this is not a
    /// patch. `updated_at` always moves strictly forward.
    ///
    /// # Errors
    /// - [`ValidationError`] as for [`create`](Self::create).
    /// - [`CoreError::NotFound`] if no task has `input.id`.
    pub fn update(&self, input: &TaskInput) -> Result<Task> {
        let conn = self.conn()?;
        let fields = validate(input)?;

        let tx = conn.unchecked_transaction()?;
        let previous: Option<String> = tx
            .query_row(
                "SELECT updated_at FROM tasks WHERE id = ?1",
                params![input.id],
                |row| row.get(0),
            )
            .optional()?;
        let previous = match previous {
            Some(raw) => parse_timestamp(0, &raw)?,
            None => {
                return Err(CoreError::NotFound {
                    id: input.id.clone(),
                })
            }
        };

        tx.execute(
            "UPDATE tasks
             SET title = ?1, description = ?2, due_date = ?3, priority = ?4, tags = ?5,
                 completed = ?6, updated_at = ?7
             WHERE id = ?8",
            params![
                fields.title,
                fields.description,
                fields.due_date,
                fields.priority.as_str(),
                fields.tags,
                fields.completed,
                format_timestamp(next_update_stamp(previous)),
                input.id,
            ],
        )?;
        let task = fetch(&tx, &input.id)?.ok_or_else(|| CoreError::NotFound {
            id: input.id.clone(),
        })?;
        tx.commit()?;

        debug!(id = %task.id, "updated task");
        Ok(task)
    }

    /// Flip the completion flag of an existing task.
    pub fn toggle_completed(&self, id: &str) -> Result<Task> {
        let conn = self.conn()?;

        let tx = conn.unchecked_transaction()?;
        let current = fetch(&tx, id)?.ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
        tx.execute(
            "UPDATE tasks SET completed = ?1, updated_at = ?2 WHERE id = ?3",
            params![
                !current.completed,
                format_timestamp(next_update_stamp(current.updated_at)),
                id
            ],
        )?;
        let task = fetch(&tx, id)?.ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
        tx.commit()?;

        debug!(id, completed = task.completed, "toggled task");
        Ok(task)
    }

    /// Remove a task. Deleting an unknown id succeeds.
    pub fn delete(&self, id: &str) -> Result<()> {
        let conn = self.conn()?;
        let tx = conn.unchecked_transaction()?;
        let removed = tx.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        tx.commit()?;
        debug!(id, removed, "deleted task");
        Ok(())
    }

    /// Tasks due within `[start, end]`, ascending by due date.
    ///
    /// Bounds are date keys and compared as strings. Tasks without a due date
    /// are never returned.
    pub fn get_by_date_range(&self, start: &str, end: &str) -> Result<Vec<Task>> {
        let conn = self.conn()?;
        check_date_key("start", start)?;
        check_date_key("end", end)?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks
             WHERE due_date IS NOT NULL AND due_date >= ?1 AND due_date <= ?2
             ORDER BY due_date ASC, rowid ASC"
        ))?;
        let tasks = stmt
            .query_map(params![start, end], row_to_task)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(start, end, count = tasks.len(), "queried date range");
        Ok(tasks)
    }

    /// List view: newest first, narrowed by completion state and title search.
    pub fn list(&self, filter: TaskFilter, search: &str) -> Result<Vec<Task>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| filter.matches(t) && t.matches_search(search))
            .collect())
    }
}

fn next_update_stamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let current = now();
    if current > previous {
        current
    } else {
        previous + Duration::microseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SchemaMigrator;

    fn migrated() -> Store {
        let mut store = Store::open_in_memory().unwrap();
        SchemaMigrator::new().run(&mut store).unwrap();
        store
    }

    #[test]
    fn operations_require_migration() {
        let store = Store::open_in_memory().unwrap();
        let repo = TaskRepository::new(&store);
        assert!(matches!(repo.get_all(), Err(CoreError::NotInitialized)));
        assert!(matches!(repo.get_by_id("a"), Err(CoreError::NotInitialized)));
        assert!(matches!(
            repo.create(&TaskInput::new("a", "Title")),
            Err(CoreError::NotInitialized)
        ));
        assert!(matches!(repo.delete("a"), Err(CoreError::NotInitialized)));
        assert!(matches!(
            repo.get_by_date_range("2024-01-01", "2024-12-31"),
            Err(CoreError::NotInitialized)
        ));
    }

    #[test]
    fn create_fills_defaults_and_timestamps() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        let before = now();

        let task = repo
            .create(&TaskInput::new("t1", "Pay rent").due("2024-02-29").priority("high"))
            .unwrap();
        assert_eq!(task.id, "t1");
        assert_eq!(task.description, "");
        assert_eq!(task.due_date.as_deref(), Some("2024-02-29"));
        assert_eq!(task.priority, Priority::High);
        assert!(task.tags.is_empty());
        assert!(!task.completed);
        assert!(task.created_at >= before);
        assert_eq!(task.created_at, task.updated_at);

        assert_eq!(repo.get_by_id("t1").unwrap(), Some(task));

        let raw_tags: String = store
            .conn()
            .query_row("SELECT tags FROM tasks WHERE id = 't1'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(raw_tags, "");
    }

    #[test]
    fn create_defaults_priority_to_medium() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        let task = repo.create(&TaskInput::new("t1", "Plain")).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn create_rejects_invalid_input_without_writing() {
        let store = migrated();
        let repo = TaskRepository::new(&store);

        let err = repo.create(&TaskInput::new("t1", "")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::EmptyTitle)));
        let err = repo.create(&TaskInput::new("t1", "   ")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::EmptyTitle)));

        let err = repo
            .create(&TaskInput::new("t1", "x").priority("critical"))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidPriority(_))
        ));

        let err = repo.create(&TaskInput::new("t1", "x").due("29/02/2024")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidDateKey { .. })
        ));

        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn empty_due_date_means_none() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        let task = repo.create(&TaskInput::new("t1", "x").due("")).unwrap();
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn duplicate_id_is_a_uniqueness_violation() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        repo.create(&TaskInput::new("t1", "First")).unwrap();

        let err = repo.create(&TaskInput::new("t1", "Second")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Database(DatabaseError::UniquenessViolation { ref id }) if id == "t1"
        ));
        assert_eq!(repo.get_by_id("t1").unwrap().unwrap().title, "First");
    }

    #[test]
    fn tags_are_stored_verbatim() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        let task = repo
            .create(&TaskInput::new("t1", "x").tags(["work", " home ", "work"]))
            .unwrap();
        assert_eq!(task.tags, vec!["work", " home ", "work"]);
        assert_eq!(task.display_tags(), vec!["work", "home", "work"]);

        let raw: String = store
            .conn()
            .query_row("SELECT tags FROM tasks WHERE id = 't1'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(raw, "work, home ,work");
    }

    #[test]
    fn tags_that_would_not_read_back_are_rejected() {
        let store = migrated();
        let repo = TaskRepository::new(&store);

        let err = repo
            .create(&TaskInput::new("t1", "x").tags(["a,b", "c"]))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidTag(ref tag)) if tag == "a,b"
        ));

        let err = repo.create(&TaskInput::new("t1", "x").tags([""])).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidTag(_))
        ));
        assert!(repo.get_all().unwrap().is_empty());

        // Empty tags next to others survive the join.
        let task = repo
            .create(&TaskInput::new("t2", "x").tags(["a", "", "b"]))
            .unwrap();
        assert_eq!(task.tags, vec!["a", "", "b"]);
        assert_eq!(repo.get_by_id("t2").unwrap().unwrap().tags, task.tags);

        repo.create(&TaskInput::new("t3", "x")).unwrap();
        let err = repo
            .update(&TaskInput::new("t3", "x").tags(["x,y"]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::InvalidTag(_))));
    }

    #[test]
    fn rows_with_sqlite_datetime_stamps_are_readable() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        repo.create(&TaskInput::new("new", "Recent")).unwrap();
        store
            .conn()
            .execute(
                "INSERT INTO tasks (id, title, due_date, created_at, updated_at)
                 VALUES ('legacy', 'Old row', '2024-03-05', datetime('now', '-1 day'), datetime('now', '-1 day'))",
                [],
            )
            .unwrap();
        store
            .conn()
            .execute(
                "INSERT INTO tasks (id, title, created_at, updated_at)
                 VALUES ('future', 'Clock skew', '2999-01-01 00:00:00', '2999-01-01 00:00:00')",
                [],
            )
            .unwrap();

        let ids: Vec<_> = repo.get_all().unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["future", "new", "legacy"]);

        let legacy = repo.get_by_id("legacy").unwrap().unwrap();
        assert_eq!(legacy.priority, Priority::Medium);
        assert!(!legacy.completed);
        assert_eq!(
            repo.get_by_date_range("2024-03-01", "2024-03-31").unwrap(),
            vec![legacy.clone()]
        );

        let updated = repo.update(&TaskInput::from(&legacy)).unwrap();
        assert!(updated.updated_at > legacy.updated_at);
        assert_eq!(updated.created_at, legacy.created_at);
        assert!(repo.toggle_completed("legacy").unwrap().completed);

        let future = repo.get_by_id("future").unwrap().unwrap();
        assert_eq!(
            future.created_at,
            NaiveDateTime::parse_from_str("2999-01-01 00:00:00", SQLITE_DATETIME_FORMAT)
                .unwrap()
                .and_utc()
        );
    }

    #[test]
    fn update_is_a_full_replace() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        let created = repo
            .create(
                &TaskInput::new("t1", "Original")
                    .description("details")
                    .due("2024-05-01")
                    .priority("urgent")
                    .tags(["a"]),
            )
            .unwrap();

        let updated = repo.update(&TaskInput::new("t1", "Renamed")).unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "");
        assert_eq!(updated.due_date, None);
        assert_eq!(updated.priority, Priority::Medium);
        assert!(updated.tags.is_empty());
        assert!(!updated.completed);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(repo.get_by_id("t1").unwrap(), Some(updated));
    }

    #[test]
    fn update_reflects_changes_and_moves_timestamp_forward() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        let created = repo.create(&TaskInput::new("t1", "x")).unwrap();

        let mut input = TaskInput::from(&created);
        input.title = "y".into();
        input.completed = Some(true);
        input.due_date = Some("2025-01-31".into());
        let first = repo.update(&input).unwrap();
        let second = repo.update(&input).unwrap();

        assert_eq!(first.title, "y");
        assert!(first.completed);
        assert_eq!(first.due_date.as_deref(), Some("2025-01-31"));
        assert!(second.updated_at > first.updated_at);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        let err = repo.update(&TaskInput::new("ghost", "x")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { ref id } if id == "ghost"));
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn update_validates_before_lookup() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        repo.create(&TaskInput::new("t1", "x")).unwrap();
        let err = repo
            .update(&TaskInput::new("t1", "x").priority("someday"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(repo.get_by_id("t1").unwrap().unwrap().priority, Priority::Medium);
    }

    #[test]
    fn delete_is_idempotent() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        repo.create(&TaskInput::new("t1", "x")).unwrap();

        repo.delete("t1").unwrap();
        assert_eq!(repo.get_by_id("t1").unwrap(), None);
        repo.delete("t1").unwrap();
        repo.delete("never-existed").unwrap();
    }

    #[test]
    fn get_all_is_newest_first() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        for id in ["a", "b", "c"] {
            repo.create(&TaskInput::new(id, id)).unwrap();
        }
        let ids: Vec<_> = repo.get_all().unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn date_range_is_inclusive_and_ascending() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        repo.create(&TaskInput::new("end", "x").due("2024-03-31")).unwrap();
        repo.create(&TaskInput::new("before", "x").due("2024-02-29")).unwrap();
        repo.create(&TaskInput::new("start", "x").due("2024-03-01")).unwrap();
        repo.create(&TaskInput::new("mid", "x").due("2024-03-15")).unwrap();
        repo.create(&TaskInput::new("after", "x").due("2024-04-01")).unwrap();
        repo.create(&TaskInput::new("undated", "x")).unwrap();

        let ids: Vec<_> = repo
            .get_by_date_range("2024-03-01", "2024-03-31")
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["start", "mid", "end"]);

        assert!(repo
            .get_by_date_range("2024-04-02", "2024-04-01")
            .unwrap()
            .is_empty());
        assert!(matches!(
            repo.get_by_date_range("2024-3-1", "2024-03-31"),
            Err(CoreError::Validation(ValidationError::InvalidDateKey { .. }))
        ));
    }

    #[test]
    fn toggle_flips_completion() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        let created = repo.create(&TaskInput::new("t1", "x").priority("low")).unwrap();

        let done = repo.toggle_completed("t1").unwrap();
        assert!(done.completed);
        assert_eq!(done.priority, Priority::Low);
        assert!(done.updated_at > created.updated_at);
        assert!(!repo.toggle_completed("t1").unwrap().completed);
        assert!(matches!(
            repo.toggle_completed("ghost"),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn list_filters_and_searches() {
        let store = migrated();
        let repo = TaskRepository::new(&store);
        repo.create(&TaskInput::new("a", "Pay rent")).unwrap();
        repo.create(&TaskInput::new("b", "Buy groceries").completed(true)).unwrap();
        repo.create(&TaskInput::new("c", "Rent a car")).unwrap();

        let active: Vec<_> = repo
            .list(TaskFilter::Active, "RENT")
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(active, vec!["c", "a"]);
        assert_eq!(repo.list(TaskFilter::Completed, "").unwrap().len(), 1);
        assert_eq!(repo.list(TaskFilter::All, "").unwrap().len(), 3);
    }
}
