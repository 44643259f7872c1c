//! Task listing queries
//!
//! Clients describe a listing with [`GetTasksArgs`]. [`build_query`] turns
//! that into a [`TaskQuery`]: a where clause, an order and pagination that
//! repositories can execute without further interpretation.

mod builder;
mod order;
mod predicate;

use serde::Deserialize;
use uuid::Uuid;

pub use builder::{build_filter, build_order, build_query};
pub use order::{OrderBy, SortDirection, TaskOrderField};
pub use predicate::{TaskCondition, TaskWhere, TextField};

/// Done-flag selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Done,
    Undone,
}

/// Inclusive priority bounds; a missing or `null` bound is not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PriorityRange {
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

/// Loosely structured listing filter as sent by clients
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    #[serde(default)]
    pub status: Option<StatusFilter>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub priority: Option<PriorityRange>,
}

/// Arguments of a task listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTasksArgs {
    #[serde(default)]
    pub filter: Option<TaskFilter>,
    #[serde(default)]
    pub order_by: Option<OrderBy>,
    #[serde(default)]
    pub skip: Option<usize>,
    #[serde(default)]
    pub take: Option<usize>,
}

/// Fully resolved listing handed to a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    pub filter: TaskWhere,
    pub order: OrderBy,
    pub skip: Option<usize>,
    pub take: Option<usize>,
}
