//! Task management commands for CLI.

use clap::Subcommand;
use lockedin_core::{TaskFilter, TaskInput, TaskRepository};
use serde_json::json;
use uuid::Uuid;

use super::{CliResult, Context};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Create {
        /// Task title
        title: String,
        /// Task ID (a new UUID when omitted)
        #[arg(long)]
        id: Option<String>,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
        /// Priority: low, medium, high or urgent
        #[arg(long)]
        priority: Option<String>,
        /// Comma-separated tags, stored as given
        #[arg(long)]
        tags: Option<String>,
        /// Create the task already completed
        #[arg(long)]
        completed: bool,
    },
    /// List tasks, newest first
    List {
        /// all, active or completed (default from config)
        #[arg(long)]
        filter: Option<TaskFilter>,
        /// Case-insensitive title search
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Replace a task; omitted fields are reset to defaults
    Update {
        /// Task ID
        id: String,
        /// New title
        #[arg(long)]
        title: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
        /// Priority: low, medium, high or urgent
        #[arg(long)]
        priority: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
        /// Completion status
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Flip a task between open and completed
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task (succeeds for unknown IDs)
    Delete {
        /// Task ID
        id: String,
    },
    /// Tasks due between two dates, inclusive
    Range {
        /// Start date, YYYY-MM-DD
        start: String,
        /// End date, YYYY-MM-DD
        end: String,
    },
}

/// Split the flag value the same way the store does.
fn split_tags(raw: Option<String>) -> Option<Vec<String>> {
    raw.map(|t| lockedin_core::task::tags_from_storage(&t))
}

pub fn run(ctx: &Context, action: TaskAction) -> CliResult {
    let store = ctx.open_store()?;
    let repo = TaskRepository::new(&store);

    match action {
        TaskAction::Create {
            title,
            id,
            description,
            due,
            priority,
            tags,
            completed,
        } => {
            let input = TaskInput {
                id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                title,
                description,
                due_date: due,
                priority,
                tags: split_tags(tags),
                completed: Some(completed),
            };
            let task = repo.create(&input)?;
            eprintln!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { filter, search } => {
            let filter = filter.unwrap_or(ctx.config.tasks.default_filter);
            let tasks = repo.list(filter, &search)?;
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Get { id } => match repo.get_by_id(&id)? {
            Some(task) => println!("{}", serde_json::to_string_pretty(&task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Update {
            id,
            title,
            description,
            due,
            priority,
            tags,
            completed,
        } => {
            let input = TaskInput {
                id,
                title,
                description,
                due_date: due,
                priority,
                tags: split_tags(tags),
                completed,
            };
            let task = repo.update(&input)?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Toggle { id } => {
            let task = repo.toggle_completed(&id)?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Delete { id } => {
            repo.delete(&id)?;
            println!("{}", json!({ "success": true }));
        }
        TaskAction::Range { start, end } => {
            let tasks = repo.get_by_date_range(&start, &end)?;
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
    }
    Ok(())
}
