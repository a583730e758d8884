//! `wl done` and `wl reopen` command implementations

use anyhow::Result;
use clap::Args;

use crate::store::Storage;

#[derive(Args)]
pub struct DoneArgs {
    /// Task ID, ID prefix, or exact title
    task: String,
}

#[derive(Args)]
pub struct ReopenArgs {
    /// Task ID, ID prefix, or exact title
    task: String,
}

pub async fn run_done(profile: &str, args: DoneArgs) -> Result<()> {
    let storage = Storage::new(profile)?;
    let tasks = storage.load()?;
    let id = super::resolve_task(&args.task, &tasks)?.id.clone();

    let updated = storage.update(&id, |t| t.complete())?;
    println!("Completed: {}", updated.to_line());

    Ok(())
}

pub async fn run_reopen(profile: &str, args: ReopenArgs) -> Result<()> {
    let storage = Storage::new(profile)?;
    let tasks = storage.load()?;
    let id = super::resolve_task(&args.task, &tasks)?.id.clone();

    let updated = storage.update(&id, |t| t.reopen())?;
    println!("Reopened: {}", updated.to_line());

    Ok(())
}
