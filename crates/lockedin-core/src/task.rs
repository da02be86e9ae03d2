//! Task types and the conversions applied at the storage boundary.
//!
//! Tags are persisted as a single comma-joined string. In memory they are an
//! ordered `Vec<String>` kept verbatim; trimming only happens for display.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Task priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Storage form, matching the CHECK constraint on `tasks.priority`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            other => Err(ValidationError::InvalidPriority(other.to_string())),
        }
    }
}

/// A stored task, as returned by the repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`, no time component.
    pub due_date: Option<String>,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Tags as shown to a user: trimmed, blanks dropped, order kept.
    pub fn display_tags(&self) -> Vec<&str> {
        self.tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Case-insensitive substring match on the title. An empty query matches.
    pub fn matches_search(&self, query: &str) -> bool {
        query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
    }

    /// Open task whose due date has already passed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.completed {
            return false;
        }
        match &self.due_date {
            Some(due) => due.as_str() < date_key(today).as_str(),
            None => false,
        }
    }
}

/// Caller-supplied task fields for `create` and `update`.
///
/// Everything except `id` and `title` may be left out; the repository fills
/// defaults. `priority` stays a raw string so the repository is the one place
/// that rejects values outside the enum.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskInput {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl TaskInput {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn due(mut self, date: impl Into<String>) -> Self {
        self.due_date = Some(date.into());
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

impl From<&Task> for TaskInput {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: Some(task.description.clone()),
            due_date: task.due_date.clone(),
            priority: Some(task.priority.as_str().to_string()),
            tags: Some(task.tags.clone()),
            completed: Some(task.completed),
        }
    }
}

/// List-view filter on completion state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TaskFilter::All),
            "active" => Ok(TaskFilter::Active),
            "completed" => Ok(TaskFilter::Completed),
            other => Err(format!("unknown filter '{other}': expected all, active or completed")),
        }
    }
}

/// Join tags into the on-disk form.
pub fn tags_to_storage(tags: &[String]) -> String {
    tags.join(",")
}

/// Split the on-disk form back into tags without trimming.
pub fn tags_from_storage(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        Vec::new()
    } else {
        raw.split(',').map(str::to_string).collect()
    }
}

/// Fixed-width `YYYY-MM-DD` check. Calendar validity is not checked.
pub fn is_date_key(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Canonical zero-padded key for a date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
