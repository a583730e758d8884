//! Top-level CLI definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::add::AddArgs;
use super::done::{DoneArgs, ReopenArgs};
use super::edit::EditArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;
use super::show::ShowArgs;
use super::sms::SmsArgs;

#[derive(Parser)]
#[command(
    name = "wl",
    version,
    about = "Personal work/life task manager with SMS-style quick capture"
)]
pub struct Cli {
    /// Profile to use (defaults to the configured default profile)
    #[arg(short, long, global = true, env = "WORKLIFE_PROFILE")]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// List tasks
    List(ListArgs),

    /// Show task details
    Show(ShowArgs),

    /// Mark a task as done
    Done(DoneArgs),

    /// Put a completed task back on the list
    Reopen(ReopenArgs),

    /// Edit a task's fields
    Edit(EditArgs),

    /// Delete a task
    Remove(RemoveArgs),

    /// Simulate receiving a task over SMS
    Sms(SmsArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
