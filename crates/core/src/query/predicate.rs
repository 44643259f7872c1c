//! Where clauses over tasks

use uuid::Uuid;

use crate::task::Task;

/// Text columns covered by search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Description,
}

/// A single predicate on a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCondition {
    /// Done flag equals the value
    Done(bool),
    /// Category reference equals the id
    Category(Uuid),
    /// Case-insensitive substring match; `needle` is stored lowercased
    Contains { field: TextField, needle: String },
    /// Inclusive bounds, either of which may be open
    Priority { gte: Option<i64>, lte: Option<i64> },
    /// At least one of the nested conditions holds
    AnyOf(Vec<TaskCondition>),
}

impl TaskCondition {
    pub fn contains(field: TextField, needle: &str) -> Self {
        Self::Contains {
            field,
            needle: needle.to_lowercase(),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Done(done) => task.is_done == *done,
            Self::Category(id) => task.category_id == Some(*id),
            Self::Contains { field, needle } => {
                let haystack = match field {
                    TextField::Title => Some(task.title.as_str()),
                    TextField::Description => task.description.as_deref(),
                };
                haystack.is_some_and(|text| text.to_lowercase().contains(needle.as_str()))
            }
            Self::Priority { gte, lte } => {
                let priority = i64::from(task.priority);
                gte.map_or(true, |min| priority >= min) && lte.map_or(true, |max| priority <= max)
            }
            Self::AnyOf(conditions) => conditions.iter().any(|c| c.matches(task)),
        }
    }
}

/// Conjunction of conditions; empty matches every task
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskWhere {
    pub conditions: Vec<TaskCondition>,
}

impl TaskWhere {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.conditions.iter().all(|c| c.matches(task))
    }
}
