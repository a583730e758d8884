//! `wl add` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::config::Config;
use crate::store::Storage;
use crate::task::{Category, Priority, Task};

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Category (work, life); defaults to the configured default category
    #[arg(short, long)]
    category: Option<String>,

    /// Priority (low, medium, high)
    #[arg(long, default_value = "medium")]
    priority: String,

    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    due: Option<String>,
}

pub async fn run(profile: &str, args: AddArgs) -> Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        bail!("Task title cannot be empty");
    }

    let category = match &args.category {
        Some(s) => Category::parse(s)
            .ok_or_else(|| anyhow::anyhow!("Unknown category: {} (expected work or life)", s))?,
        None => Config::load()?.default_category,
    };

    let priority = Priority::parse(&args.priority).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown priority: {} (expected low, medium, or high)",
            args.priority
        )
    })?;

    let mut task = Task::new(title, category, priority);

    if let Some(due_str) = &args.due {
        match chrono::NaiveDate::parse_from_str(due_str, "%Y-%m-%d") {
            Ok(date) => task.due = Some(date),
            Err(_) => bail!("Invalid due date: {} (expected YYYY-MM-DD)", due_str),
        }
    }

    let storage = Storage::new(profile)?;
    let task = storage.create(task)?;

    println!("Added to your {} list:", task.category.label());
    println!("  {}", task.to_line());

    Ok(())
}
