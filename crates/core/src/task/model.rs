//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::Category;
use crate::patch::Patch;

/// Priority given to tasks created without one
pub const DEFAULT_PRIORITY: u8 = 5;

/// A task, optionally filed under a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_done: bool,
    pub priority: u8,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    /// Referenced category, filled in on read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task from validated input
    pub fn new(input: NewTask) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            is_done: input.is_done,
            priority: input.priority,
            category_id: input.category_id,
            category: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a validated partial update
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        patch.description.apply(&mut self.description);
        if let Some(is_done) = patch.is_done {
            self.is_done = is_done;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if !patch.category_id.is_unchanged() {
            patch.category_id.apply(&mut self.category_id);
            self.category = None;
        }
        self.updated_at = Utc::now();
    }
}

/// Validated input for creating a task, with defaults filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub is_done: bool,
    pub priority: u8,
    pub category_id: Option<Uuid>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_done: false,
            priority: DEFAULT_PRIORITY,
            category_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn done(mut self) -> Self {
        self.is_done = true;
        self
    }
}

/// Validated partial update; absent fields are left untouched
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Patch<String>,
    pub is_done: Option<bool>,
    pub priority: Option<u8>,
    pub category_id: Patch<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task() {
        let task = Task::new(NewTask::new("Test task"));
        assert_eq!(task.title, "Test task");
        assert!(!task.is_done);
        assert_eq!(task.priority, DEFAULT_PRIORITY);
        assert!(task.description.is_none());
        assert!(task.category_id.is_none());
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_task_with_description_and_priority() {
        let task = Task::new(
            NewTask::new("Test task")
                .with_description("This is a test")
                .with_priority(9),
        );
        assert_eq!(task.description, Some("This is a test".to_string()));
        assert_eq!(task.priority, 9);
    }

    #[test]
    fn test_apply_leaves_absent_fields() {
        let mut task = Task::new(NewTask::new("Keep me").with_description("Old"));
        task.apply(TaskPatch {
            is_done: Some(true),
            ..TaskPatch::default()
        });

        assert_eq!(task.title, "Keep me");
        assert_eq!(task.description, Some("Old".to_string()));
        assert!(task.is_done);
    }

    #[test]
    fn test_apply_distinguishes_false_and_clear() {
        let category_id = Uuid::new_v4();
        let mut task = Task::new(
            NewTask::new("Flagged")
                .with_description("Text")
                .with_category(category_id)
                .done(),
        );

        task.apply(TaskPatch {
            is_done: Some(false),
            description: Patch::Clear,
            ..TaskPatch::default()
        });

        assert!(!task.is_done);
        assert!(task.description.is_none());
        assert_eq!(task.category_id, Some(category_id));
    }
}
