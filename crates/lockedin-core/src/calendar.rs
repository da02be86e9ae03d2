//! Month grid and day lookup over a task list.
//!
//! Pure functions: no storage access and no wall clock. A month grid is
//! always 6 weeks of 7 days starting on a Sunday, padded with the tail of the
//! previous month and the head of the next.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::task::{date_key, Task};

/// Cells in a month grid.
pub const GRID_CELLS: usize = 42;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One day in a month grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub date_key: String,
    /// Day of month, 1..=31.
    pub day: u32,
    pub is_current_month: bool,
    /// Every task due on this date, in input order.
    pub tasks: Vec<Task>,
}

/// A year and month, used for navigating the month view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// # Errors
    /// Returns [`ValidationError::InvalidMonth`] if the month has no first day
    /// representable by chrono.
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        first_of_month(year, month)?;
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month as usize).saturating_sub(1) % 12]
    }
}

/// A 6x7 month view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Rows of seven cells, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.cells.iter().find(|c| c.date == date)
    }

    /// Title such as "February 2024".
    pub fn title(&self) -> String {
        let ym = YearMonth {
            year: self.year,
            month: self.month,
        };
        format!("{} {}", ym.month_name(), self.year)
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ValidationError::InvalidMonth { year, month })
}

/// Number of days in a month, from the calendar itself.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, ValidationError> {
    let first = first_of_month(year, month)?;
    let next = YearMonth { year, month }.next();
    let last = match first_of_month(next.year, next.month) {
        Ok(next_first) => next_first.pred_opt(),
        // Last representable month: walk forward from the 28th instead.
        Err(_) => (28..=31)
            .filter_map(|d| NaiveDate::from_ymd_opt(year, month, d))
            .last(),
    };
    Ok(last.map(|d| d.day()).unwrap_or_else(|| first.day()))
}

/// Tasks grouped by due date, each bucket in input order.
fn bucket_by_date(tasks: &[Task]) -> HashMap<&str, Vec<&Task>> {
    let mut buckets: HashMap<&str, Vec<&Task>> = HashMap::new();
    for task in tasks {
        if let Some(due) = task.due_date.as_deref() {
            buckets.entry(due).or_default().push(task);
        }
    }
    buckets
}

/// Build the 42-cell grid for `year`/`month` (1-based) with tasks bucketed
/// by exact due-date match.
///
/// # Errors
/// Returns [`ValidationError::InvalidMonth`] if `month` is not 1..=12 or the
/// grid would leave chrono's date range.
pub fn build_month_grid(
    year: i32,
    month: u32,
    tasks: &[Task],
) -> Result<MonthGrid, ValidationError> {
    let invalid = || ValidationError::InvalidMonth { year, month };
    let first = first_of_month(year, month)?;
    let leading = i64::from(first.weekday().num_days_from_sunday());
    let start = first
        .checked_sub_signed(Duration::days(leading))
        .ok_or_else(invalid)?;

    let buckets = bucket_by_date(tasks);
    let mut cells = Vec::with_capacity(GRID_CELLS);
    for offset in 0..GRID_CELLS as i64 {
        let date = start
            .checked_add_signed(Duration::days(offset))
            .ok_or_else(invalid)?;
        let key = date_key(date);
        let tasks = buckets
            .get(key.as_str())
            .map(|bucket| bucket.iter().map(|t| (*t).clone()).collect())
            .unwrap_or_default();
        cells.push(CalendarCell {
            date,
            day: date.day(),
            is_current_month: date.year() == year && date.month() == month,
            date_key: key,
            tasks,
        });
    }

    Ok(MonthGrid { year, month, cells })
}

/// Tasks due exactly on `date_key`, in input order.
pub fn tasks_for_date(date_key: &str, tasks: &[Task]) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.due_date.as_deref() == Some(date_key))
        .cloned()
        .collect()
}
