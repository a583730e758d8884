//! Task storage - JSON file persistence
//!
//! Tasks live in a single `tasks.json` per profile. Writes replace the whole
//! file after copying the previous contents to a `.bak` sibling; a failed
//! update therefore leaves the stored tasks untouched.

mod error;

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::warn;

use crate::task::{Category, Task};

pub use error::{Result, StoreError};

pub const DEFAULT_PROFILE: &str = "default";

/// Application data directory, created on first use.
pub fn get_app_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?.join("worklife");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Per-profile directory under the app dir.
pub fn get_profile_dir(profile: &str) -> Result<PathBuf> {
    let dir = get_app_dir()?.join("profiles").join(profile);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Selection criteria for [`Storage::list`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFilter {
    pub category: Option<Category>,
    pub completed: Option<bool>,

    /// Only tasks overdue as of this date.
    pub overdue_as_of: Option<NaiveDate>,

    /// Only tasks due on exactly this date.
    pub due_on: Option<NaiveDate>,
}

impl TaskFilter {
    fn matches(&self, task: &Task) -> bool {
        if let Some(category) = self.category {
            if task.category != category {
                return false;
            }
        }
        if let Some(completed) = self.completed {
            if task.completed != completed {
                return false;
            }
        }
        if let Some(today) = self.overdue_as_of {
            if !task.is_overdue(today) {
                return false;
            }
        }
        if let Some(date) = self.due_on {
            if !task.is_due_on(date) {
                return false;
            }
        }
        true
    }
}

pub struct Storage {
    profile: String,
    tasks_path: PathBuf,
}

impl Storage {
    pub fn new(profile: &str) -> Result<Self> {
        let profile_name = if profile.is_empty() {
            DEFAULT_PROFILE.to_string()
        } else {
            profile.to_string()
        };

        let profile_dir = get_profile_dir(&profile_name)?;
        let tasks_path = profile_dir.join("tasks.json");

        Ok(Self {
            profile: profile_name,
            tasks_path,
        })
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.tasks_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.tasks_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        // Create backup
        if self.tasks_path.exists() {
            let backup_path = self.tasks_path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.tasks_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.tasks_path, content)?;
        Ok(())
    }

    /// Append a task and persist the list.
    pub fn create(&self, task: Task) -> Result<Task> {
        let mut tasks = self.load()?;
        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    /// Apply a change to the task with the given ID and persist the list.
    pub fn update(&self, id: &str, apply: impl FnOnce(&mut Task)) -> Result<Task> {
        let mut tasks = self.load()?;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::TaskNotFound(id.to_string()))?;

        apply(task);
        let updated = task.clone();

        self.save(&tasks)?;
        Ok(updated)
    }

    /// Remove the task with the given ID and persist the list.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut tasks = self.load()?;

        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::TaskNotFound(id.to_string()))?;

        tasks.remove(index);
        self.save(&tasks)?;
        Ok(())
    }

    /// Load tasks matching the filter.
    pub fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut tasks = self.load()?;
        tasks.retain(|t| filter.matches(t));
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use serial_test::serial;
    use tempfile::tempdir;

    fn isolated_storage(profile: &str) -> (tempfile::TempDir, Storage) {
        let temp = tempdir().unwrap();
        std::env::set_var("HOME", temp.path());
        std::env::set_var("XDG_DATA_HOME", temp.path().join("data"));
        let storage = Storage::new(profile).unwrap();
        (temp, storage)
    }

    #[test]
    #[serial]
    fn test_storage_roundtrip() -> Result<()> {
        let (_temp, storage) = isolated_storage("test-profile");

        let tasks = vec![
            Task::new("write report", Category::Work, Priority::High),
            Task::new("buy flowers", Category::Life, Priority::Low),
        ];

        storage.save(&tasks)?;
        let loaded = storage.load()?;

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].title, "write report");
        assert_eq!(loaded[1].category, Category::Life);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_load_missing_file_is_empty() -> Result<()> {
        let (_temp, storage) = isolated_storage("empty-profile");
        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    #[serial]
    fn test_create_update_delete() -> Result<()> {
        let (_temp, storage) = isolated_storage("crud-profile");

        let task = storage.create(Task::new("call plumber", Category::Life, Priority::Medium))?;

        let updated = storage.update(&task.id, |t| t.complete())?;
        assert!(updated.completed);
        assert!(storage.load()?[0].completed);

        storage.delete(&task.id)?;
        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    #[serial]
    fn test_update_unknown_id_fails() {
        let (_temp, storage) = isolated_storage("missing-profile");

        let result = storage.update("no-such-id", |t| t.complete());
        assert!(matches!(result, Err(StoreError::TaskNotFound(_))));
    }

    #[test]
    #[serial]
    fn test_list_filters() -> Result<()> {
        let (_temp, storage) = isolated_storage("filter-profile");
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

        let mut overdue = Task::new("expense report", Category::Work, Priority::High);
        overdue.due = NaiveDate::from_ymd_opt(2026, 3, 10);

        let mut due_today = Task::new("water plants", Category::Life, Priority::Low);
        due_today.due = Some(today);

        let mut done = Task::new("old chore", Category::Life, Priority::Medium);
        done.complete();

        storage.save(&[overdue, due_today, done])?;

        let work = storage.list(&TaskFilter {
            category: Some(Category::Work),
            ..Default::default()
        })?;
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].title, "expense report");

        let open = storage.list(&TaskFilter {
            completed: Some(false),
            ..Default::default()
        })?;
        assert_eq!(open.len(), 2);

        let late = storage.list(&TaskFilter {
            overdue_as_of: Some(today),
            ..Default::default()
        })?;
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].title, "expense report");

        let todays = storage.list(&TaskFilter {
            due_on: Some(today),
            ..Default::default()
        })?;
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].title, "water plants");
        Ok(())
    }
}
