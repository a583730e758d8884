//! Task model and free-text extraction
//!
//! This module provides the core task types:
//! - Task data model with category, priority, and due-date tracking
//! - SMS-style extraction of structured task fields from free text

pub mod extract;
pub mod model;

pub use extract::{extract, Extraction};
pub use model::{Category, Priority, Task};
