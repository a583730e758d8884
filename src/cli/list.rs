//! `wl list` command implementation

use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use clap::Args;
use serde::Serialize;

use crate::store::{Storage, TaskFilter};
use crate::task::{Category, Task};

const TABLE_COL_TITLE: usize = 32;
const TABLE_COL_CATEGORY: usize = 6;
const TABLE_COL_PRIORITY: usize = 8;
const TABLE_COL_DUE: usize = 12;
const TABLE_COL_ID_DISPLAY: usize = 8;

#[derive(Args)]
pub struct ListArgs {
    /// Filter by category (work, life)
    #[arg(short, long)]
    category: Option<String>,

    /// Show completed tasks only
    #[arg(long)]
    done: bool,

    /// Show open tasks only
    #[arg(long, conflicts_with = "done")]
    open: bool,

    /// Show overdue tasks only
    #[arg(long)]
    overdue: bool,

    /// Show tasks due today
    #[arg(long)]
    today: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson {
    id: String,
    title: String,
    category: String,
    priority: String,
    completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    due: Option<NaiveDate>,
    created_at: chrono::DateTime<Utc>,
}

fn print_table_header() {
    println!(
        "{:<width_title$} {:<width_cat$} {:<width_prio$} {:<width_due$} ID",
        "TITLE",
        "LIST",
        "PRIORITY",
        "DUE",
        width_title = TABLE_COL_TITLE,
        width_cat = TABLE_COL_CATEGORY,
        width_prio = TABLE_COL_PRIORITY,
        width_due = TABLE_COL_DUE
    );
    println!(
        "{}",
        "-".repeat(
            TABLE_COL_TITLE
                + TABLE_COL_CATEGORY
                + TABLE_COL_PRIORITY
                + TABLE_COL_DUE
                + TABLE_COL_ID_DISPLAY
                + 4
        )
    );
}

fn print_table_row(task: &Task, today: NaiveDate) {
    let title = super::truncate(&task.title, TABLE_COL_TITLE);
    let due = match &task.due {
        Some(date) if task.is_overdue(today) => format!("{} !", date.format("%Y-%m-%d")),
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    };
    let id_display = super::truncate_id(&task.id, TABLE_COL_ID_DISPLAY);
    println!(
        "{:<width_title$} {:<width_cat$} {:<width_prio$} {:<width_due$} {}",
        title,
        task.category.label(),
        task.priority.label(),
        due,
        id_display,
        width_title = TABLE_COL_TITLE,
        width_cat = TABLE_COL_CATEGORY,
        width_prio = TABLE_COL_PRIORITY,
        width_due = TABLE_COL_DUE
    );
}

pub async fn run(profile: &str, args: ListArgs) -> Result<()> {
    let storage = Storage::new(profile)?;
    let today = Utc::now().date_naive();

    let category = match &args.category {
        Some(s) => match Category::parse(s) {
            Some(c) => Some(c),
            None => bail!("Unknown category: {} (expected work or life)", s),
        },
        None => None,
    };

    let filter = TaskFilter {
        category,
        completed: if args.done {
            Some(true)
        } else if args.open {
            Some(false)
        } else {
            None
        },
        overdue_as_of: args.overdue.then_some(today),
        due_on: args.today.then_some(today),
    };

    let tasks = storage.list(&filter)?;

    if tasks.is_empty() {
        println!("No tasks found in profile '{}'.", storage.profile());
        return Ok(());
    }

    if args.json {
        let entries: Vec<TaskJson> = tasks
            .iter()
            .map(|task| TaskJson {
                id: task.id.clone(),
                title: task.title.clone(),
                category: task.category.label().to_string(),
                priority: task.priority.label().to_string(),
                completed: task.completed,
                due: task.due,
                created_at: task.created_at,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    print_table_header();
    for task in &tasks {
        print_table_row(task, today);
    }

    Ok(())
}

/// Bare `wl` invocation: both lists with counts, open tasks first.
pub async fn run_overview(profile: &str) -> Result<()> {
    let storage = Storage::new(profile)?;
    let tasks = storage.load()?;

    if tasks.is_empty() {
        println!(
            "No tasks yet in profile '{}'. Add one with 'wl add' or capture one with 'wl sms'.",
            storage.profile()
        );
        return Ok(());
    }

    let today = Utc::now().date_naive();

    for category in [Category::Work, Category::Life] {
        let group: Vec<&Task> = tasks.iter().filter(|t| t.category == category).collect();
        println!("{} {} ({})", category.emoji(), category.heading(), group.len());

        for task in group.iter().filter(|t| !t.completed) {
            let overdue = if task.is_overdue(today) { "  ⚠️ overdue" } else { "" };
            println!("  {}{}", task.to_line(), overdue);
        }
        for task in group.iter().filter(|t| t.completed) {
            println!("  {}", task.to_line());
        }

        println!();
    }

    Ok(())
}
