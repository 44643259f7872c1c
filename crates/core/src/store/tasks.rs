//! Task repository over the file store

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::file_store::{StoreData, StoreInner};
use crate::api_error::ApiError;
use crate::guard::FindById;
use crate::query::{OrderBy, TaskWhere};
use crate::task::{NewTask, Task, TaskPatch, TaskRepository};
use crate::Result;

fn ensure_category(data: &StoreData, category_id: Option<&Uuid>) -> Result<()> {
    match category_id {
        Some(id) if !data.categories.contains_key(id) => Err(ApiError::unprocessable_entity(
            format!("Category {} does not exist", id),
        )
        .into()),
        _ => Ok(()),
    }
}

#[derive(Clone)]
pub struct FileTaskStore {
    inner: Arc<StoreInner>,
}

impl FileTaskStore {
    pub(super) fn new(inner: Arc<StoreInner>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl FindById for FileTaskStore {
    type Entity = Task;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        let data = self.inner.data.read().await;
        Ok(data.tasks.get(&id).map(|t| data.hydrate(t)))
    }
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn create(&self, input: NewTask) -> Result<Task> {
        let mut data = self.inner.data.write().await;
        ensure_category(&data, input.category_id.as_ref())?;

        let task = Task::new(input);
        let mut next = data.clone();
        next.tasks.insert(task.id, task.clone());

        self.inner.commit(&mut data, next).await?;
        Ok(data.hydrate(&task))
    }

    async fn update(&self, id: Uuid, patch: TaskPatch) -> Result<Task> {
        let mut data = self.inner.data.write().await;
        ensure_category(&data, patch.category_id.as_set())?;

        let mut next = data.clone();
        let task = next
            .tasks
            .get_mut(&id)
            .ok_or_else(|| ApiError::not_found(format!("Task {} not found", id)))?;
        task.apply(patch);
        let task = task.clone();

        self.inner.commit(&mut data, next).await?;
        Ok(data.hydrate(&task))
    }

    async fn delete(&self, id: Uuid) -> Result<Task> {
        let mut data = self.inner.data.write().await;
        let mut next = data.clone();
        let task = next
            .tasks
            .remove(&id)
            .ok_or_else(|| ApiError::not_found(format!("Task {} not found", id)))?;
        let task = next.hydrate(&task);

        self.inner.commit(&mut data, next).await?;
        Ok(task)
    }

    async fn find_many_with_filters(
        &self,
        filter: &TaskWhere,
        order: OrderBy,
        skip: Option<usize>,
        take: Option<usize>,
    ) -> Result<Vec<Task>> {
        let data = self.inner.data.read().await;
        let mut tasks: Vec<&Task> = data.tasks.values().filter(|t| filter.matches(t)).collect();
        tasks.sort_by(|a, b| order.compare(a, b));

        Ok(tasks
            .into_iter()
            .skip(skip.unwrap_or(0))
            .take(take.unwrap_or(usize::MAX))
            .map(|t| data.hydrate(t))
            .collect())
    }
}
