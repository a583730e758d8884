//! CLI command implementations

pub mod add;
pub mod definition;
pub mod done;
pub mod edit;
pub mod list;
pub mod remove;
pub mod show;
pub mod sms;

pub use definition::{Cli, Commands};

use crate::task::Task;
use anyhow::{bail, Result};

/// Resolve a user-supplied identifier to a task.
pub fn resolve_task<'a>(identifier: &str, tasks: &'a [Task]) -> Result<&'a Task> {
    // Try exact ID match
    if let Some(task) = tasks.iter().find(|t| t.id == identifier) {
        return Ok(task);
    }

    // Try ID prefix match
    if let Some(task) = tasks.iter().find(|t| t.id.starts_with(identifier)) {
        return Ok(task);
    }

    // Try exact title match
    if let Some(task) = tasks.iter().find(|t| t.title == identifier) {
        return Ok(task);
    }

    bail!("Task not found: {}", identifier)
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else if max <= 3 {
        s[..max].to_string()
    } else {
        format!("{}...", &s[..max - 3])
    }
}

pub fn truncate_id(id: &str, max_len: usize) -> &str {
    if id.len() > max_len {
        &id[..max_len]
    } else {
        id
    }
}
