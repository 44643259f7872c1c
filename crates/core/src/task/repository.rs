//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{NewTask, Task, TaskPatch};
use crate::guard::FindById;
use crate::query::{OrderBy, TaskWhere};
use crate::Result;

/// Repository interface for task CRUD operations.
///
/// Tasks returned from any method carry their category, if they have one.
#[async_trait]
pub trait TaskRepository: FindById<Entity = Task> {
    /// Create a new task
    async fn create(&self, data: NewTask) -> Result<Task>;

    /// Update an existing task
    async fn update(&self, id: Uuid, data: TaskPatch) -> Result<Task>;

    /// Delete a task by ID, returning its last state
    async fn delete(&self, id: Uuid) -> Result<Task>;

    /// Tasks matching `filter`, sorted by `order`, then offset by `skip` and
    /// truncated to `take`
    async fn find_many_with_filters(
        &self,
        filter: &TaskWhere,
        order: OrderBy,
        skip: Option<usize>,
        take: Option<usize>,
    ) -> Result<Vec<Task>>;
}
