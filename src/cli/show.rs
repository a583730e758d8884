//! `wl show` command implementation

use anyhow::Result;
use chrono::Utc;
use clap::Args;

use crate::store::Storage;

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID, ID prefix, or exact title
    task: String,
}

pub async fn run(profile: &str, args: ShowArgs) -> Result<()> {
    let storage = Storage::new(profile)?;
    let tasks = storage.load()?;
    let task = super::resolve_task(&args.task, &tasks)?;

    println!("{}", task.to_line());
    println!("  ID: {}", task.id);
    println!("  List: {} {}", task.category.emoji(), task.category.label());
    println!("  Priority: {}", task.priority.label());

    if let Some(due) = &task.due {
        let today = Utc::now().date_naive();
        println!(
            "  Due: {}{}",
            due.format("%Y-%m-%d"),
            if task.is_overdue(today) { " ⚠️ OVERDUE" } else { "" }
        );
    }

    println!("  Created: {}", task.created_at.format("%Y-%m-%d %H:%M"));

    if let Some(completed_at) = &task.completed_at {
        println!("  Completed: {}", completed_at.format("%Y-%m-%d %H:%M"));
    }

    Ok(())
}
