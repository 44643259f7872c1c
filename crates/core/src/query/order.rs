//! Task ordering

use std::cmp::Ordering;

use serde::Deserialize;

use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskOrderField {
    CreatedAt,
    UpdatedAt,
    Title,
    Description,
    Priority,
    IsDone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort key and direction; defaults to newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OrderBy {
    pub field: TaskOrderField,
    pub direction: SortDirection,
}

impl Default for OrderBy {
    fn default() -> Self {
        Self {
            field: TaskOrderField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

/// Missing values sort after present ones in ascending order
fn cmp_nulls_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl OrderBy {
    pub fn new(field: TaskOrderField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Total order over tasks. Equal keys fall back to ascending id so a
    /// listing never depends on storage iteration order.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let by_field = match self.field {
            TaskOrderField::CreatedAt => a.created_at.cmp(&b.created_at),
            TaskOrderField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            TaskOrderField::Title => a.title.cmp(&b.title),
            TaskOrderField::Description => {
                cmp_nulls_last(a.description.as_deref(), b.description.as_deref())
            }
            TaskOrderField::Priority => a.priority.cmp(&b.priority),
            TaskOrderField::IsDone => a.is_done.cmp(&b.is_done),
        };
        let by_field = match self.direction {
            SortDirection::Asc => by_field,
            SortDirection::Desc => by_field.reverse(),
        };
        by_field.then_with(|| a.id.cmp(&b.id))
    }
}
