//! Month and day views over the task list.

use chrono::Local;
use clap::Subcommand;
use lockedin_core::{
    build_month_grid, is_date_key, tasks_for_date, CalendarCell, MonthGrid, Task, TaskRepository,
    YearMonth, WEEKDAY_LABELS,
};
use lockedin_core::storage::CalendarConfig;

use super::{CliResult, Context};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Month grid (current month when YEAR and MONTH are omitted)
    Month {
        /// Year, e.g. 2024
        #[arg(requires = "month")]
        year: Option<i32>,
        /// Month, 1-12
        month: Option<u32>,
        /// Print the full grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// Tasks due on one day
    Day {
        /// Date, YYYY-MM-DD
        date: String,
    },
}

pub fn run(ctx: &Context, action: CalendarAction) -> CliResult {
    let store = ctx.open_store()?;
    let tasks = TaskRepository::new(&store).get_all()?;

    match action {
        CalendarAction::Month { year, month, json } => {
            let target = match (year, month) {
                (Some(year), Some(month)) => YearMonth::new(year, month)?,
                _ => YearMonth::of(Local::now().date_naive()),
            };
            let grid = build_month_grid(target.year, target.month, &tasks)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                print!("{}", render_month(&grid, &ctx.config.calendar));
            }
        }
        CalendarAction::Day { date } => {
            if !is_date_key(&date) {
                return Err(format!("invalid date '{date}': expected YYYY-MM-DD").into());
            }
            let day = tasks_for_date(&date, &tasks);
            println!("{}", serde_json::to_string_pretty(&day)?);
        }
    }
    Ok(())
}

fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() > max_chars {
        let head: String = title.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

fn render_cell_day(cell: &CalendarCell) -> String {
    if cell.is_current_month {
        format!("{:>4}", cell.day)
    } else {
        format!("{:>4}", format!("({})", cell.day))
    }
}

fn render_task_line(task: &Task, limits: &CalendarConfig) -> String {
    let mark = if task.completed { "x" } else { " " };
    format!(
        "    [{mark}] {:<6} {}",
        task.priority.as_str(),
        truncate_title(&task.title, limits.title_max_chars)
    )
}

/// Text month view. Truncation here is presentation only.
fn render_month(grid: &MonthGrid, limits: &CalendarConfig) -> String {
    let mut out = format!("{}\n", grid.title());
    for label in WEEKDAY_LABELS {
        out.push_str(&format!("{label:>4}"));
    }
    out.push('\n');
    for week in grid.weeks() {
        for cell in week {
            out.push_str(&render_cell_day(cell));
        }
        out.push('\n');
    }

    for cell in grid.cells.iter().filter(|c| !c.tasks.is_empty()) {
        out.push_str(&format!("\n{}\n", cell.date_key));
        for task in cell.tasks.iter().take(limits.max_tasks_per_cell) {
            out.push_str(&render_task_line(task, limits));
            out.push('\n');
        }
        if cell.tasks.len() > limits.max_tasks_per_cell {
            out.push_str(&format!(
                "    +{} more\n",
                cell.tasks.len() - limits.max_tasks_per_cell
            ));
        }
    }
    out
}
