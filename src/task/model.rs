//! Task data model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Task category: which of the two lists a task lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Life,
}

impl Category {
    /// Parse a category from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "work" | "w" => Some(Self::Work),
            "life" | "l" | "personal" => Some(Self::Life),
            _ => None,
        }
    }

    /// Get the emoji for this category
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Work => "💼",
            Self::Life => "🏠",
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Life => "life",
        }
    }

    /// Get the capitalized heading used in list output
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Life => "Life",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parse priority from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "p3" => Some(Self::Low),
            "medium" | "med" | "p2" => Some(Self::Medium),
            "high" | "p1" | "urgent" => Some(Self::High),
            _ => None,
        }
    }

    /// Get the emoji for this priority
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🔴",
        }
    }

    /// Get the label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

/// A task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    pub id: String,

    /// Task title
    pub title: String,

    /// Which list the task belongs to
    #[serde(default)]
    pub category: Category,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,

    /// Due date (if any)
    #[serde(default)]
    pub due: Option<NaiveDate>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the task was completed
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new open task with a fresh ID
    pub fn new(title: impl Into<String>, category: Category, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            category,
            priority,
            completed: false,
            due: None,
            created_at: Utc::now(),
            updated_at: None,
            completed_at: None,
        }
    }

    /// Check if the task is overdue relative to the given date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due {
            Some(due) => due < today && !self.completed,
            None => false,
        }
    }

    /// Check if the task is due on the given date
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due == Some(date)
    }

    /// Mark the task as done
    pub fn complete(&mut self) {
        self.completed = true;
        self.completed_at = Some(Utc::now());
        self.touch();
    }

    /// Put a completed task back on the list
    pub fn reopen(&mut self) {
        self.completed = false;
        self.completed_at = None;
        self.touch();
    }

    /// Record that the task was modified
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    /// Format as a one-line console summary
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "[{}] {} {}",
            if self.completed { "x" } else { " " },
            self.priority.emoji(),
            self.title
        );

        if let Some(due) = &self.due {
            line.push_str(&format!(" (due: {})", due.format("%Y-%m-%d")));
        }

        line
    }
}
