//! `wl remove` command implementation

use anyhow::Result;
use clap::Args;

use crate::store::Storage;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task ID, ID prefix, or exact title
    task: String,
}

pub async fn run(profile: &str, args: RemoveArgs) -> Result<()> {
    let storage = Storage::new(profile)?;
    let tasks = storage.load()?;
    let task = super::resolve_task(&args.task, &tasks)?;
    let id = task.id.clone();
    let title = task.title.clone();

    storage.delete(&id)?;
    println!("Deleted: {}", title);

    Ok(())
}
