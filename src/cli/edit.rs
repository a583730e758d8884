//! `wl edit` command implementation

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::store::Storage;
use crate::task::{Category, Priority};

#[derive(Args)]
pub struct EditArgs {
    /// Task ID, ID prefix, or exact title
    task: String,

    /// New title
    #[arg(short, long)]
    title: Option<String>,

    /// New category (work, life)
    #[arg(short, long)]
    category: Option<String>,

    /// New priority (low, medium, high)
    #[arg(long)]
    priority: Option<String>,

    /// New due date (YYYY-MM-DD)
    #[arg(short, long)]
    due: Option<String>,

    /// Clear the due date
    #[arg(long, conflicts_with = "due")]
    clear_due: bool,
}

pub async fn run(profile: &str, args: EditArgs) -> Result<()> {
    // Validate everything before touching the store.
    let title = match &args.title {
        Some(t) => {
            let trimmed = t.trim();
            if trimmed.is_empty() {
                bail!("Task title cannot be empty");
            }
            Some(trimmed.to_string())
        }
        None => None,
    };

    let category = match &args.category {
        Some(s) => Some(Category::parse(s).ok_or_else(|| {
            anyhow::anyhow!("Unknown category: {} (expected work or life)", s)
        })?),
        None => None,
    };

    let priority = match &args.priority {
        Some(s) => Some(Priority::parse(s).ok_or_else(|| {
            anyhow::anyhow!("Unknown priority: {} (expected low, medium, or high)", s)
        })?),
        None => None,
    };

    let due = match &args.due {
        Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => bail!("Invalid due date: {} (expected YYYY-MM-DD)", s),
        },
        None => None,
    };

    if title.is_none() && category.is_none() && priority.is_none() && due.is_none() && !args.clear_due
    {
        bail!("Nothing to change");
    }

    let storage = Storage::new(profile)?;
    let tasks = storage.load()?;
    let id = super::resolve_task(&args.task, &tasks)?.id.clone();

    let updated = storage.update(&id, |task| {
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(category) = category {
            task.category = category;
        }
        if let Some(priority) = priority {
            task.priority = priority;
        }
        if let Some(due) = due {
            task.due = Some(due);
        }
        if args.clear_due {
            task.due = None;
        }
        task.touch();
    })?;

    println!("Updated: {}", updated.to_line());

    Ok(())
}
