//! # LockedIn Core Library
//!
//! Persistence and calendar projection for a personal task list. Hosts (the
//! `lockedin` CLI, or any GUI shell) open a [`Store`], run the
//! [`SchemaMigrator`] once, and from then on go through [`TaskRepository`]
//! for every read and write. The calendar functions are pure and work on any
//! task list.
//!
//! ## Key Components
//!
//! - [`Store`]: explicit SQLite handle, passed to everything that needs it
//! - [`SchemaMigrator`]: transactional, idempotent versioned migrations
//! - [`TaskRepository`]: validated CRUD and date-range queries
//! - [`build_month_grid`] / [`tasks_for_date`]: month view and day lookup
//! - [`Config`]: TOML configuration for hosts

pub mod calendar;
pub mod error;
pub mod repository;
pub mod storage;
pub mod task;

pub use calendar::{
    build_month_grid, days_in_month, tasks_for_date, CalendarCell, MonthGrid, YearMonth,
    GRID_CELLS, WEEKDAY_LABELS,
};
pub use error::{ConfigError, CoreError, DatabaseError, Result, ValidationError};
pub use repository::TaskRepository;
pub use storage::{Config, Migration, SchemaMigrator, Store, MIGRATIONS};
pub use task::{date_key, is_date_key, Priority, Task, TaskFilter, TaskInput};
