//! Task operations

use serde_json::Value;
use std::sync::Arc;

use super::TASK_NOT_FOUND;
use crate::guard::get_entity_or_fail;
use crate::query::{build_query, GetTasksArgs};
use crate::task::{Task, TaskRepository};
use crate::validation::{validate, validate_id, TaskCreateSchema, TaskUpdateSchema};
use crate::Result;

#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn get_task(&self, task_id: &str) -> Result<Task> {
        let id = validate_id(task_id)?;
        get_entity_or_fail(&*self.tasks, id, TASK_NOT_FOUND).await
    }

    /// Lists tasks; an empty match is an empty list, not an error
    pub async fn get_tasks(&self, args: &GetTasksArgs) -> Result<Vec<Task>> {
        let query = build_query(args);
        tracing::debug!(?query, "Listing tasks");
        self.tasks
            .find_many_with_filters(&query.filter, query.order, query.skip, query.take)
            .await
    }

    pub async fn create_task(&self, input: &Value) -> Result<Task> {
        let data = validate(&TaskCreateSchema, input)?;
        let task = self.tasks.create(data).await?;
        tracing::info!(task_id = %task.id, "Created task");
        Ok(task)
    }

    pub async fn update_task(&self, task_id: &str, input: &Value) -> Result<Task> {
        let id = validate_id(task_id)?;
        get_entity_or_fail(&*self.tasks, id, TASK_NOT_FOUND).await?;

        let patch = validate(&TaskUpdateSchema, input)?;
        let task = self.tasks.update(id, patch).await?;
        tracing::info!(task_id = %task.id, "Updated task");
        Ok(task)
    }

    /// Deletes a task, returning its state before deletion
    pub async fn delete_task(&self, task_id: &str) -> Result<Task> {
        let id = validate_id(task_id)?;
        get_entity_or_fail(&*self.tasks, id, TASK_NOT_FOUND).await?;

        let task = self.tasks.delete(id).await?;
        tracing::info!(task_id = %task.id, "Deleted task");
        Ok(task)
    }

    /// Same path as [`TaskService::update_task`]; used for toggling `isDone`
    pub async fn mark_task_done(&self, task_id: &str, input: &Value) -> Result<Task> {
        self.update_task(task_id, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_error::{format_error, ErrorCode};
    use crate::guard::FindById;
    use crate::query::{OrderBy, TaskFilter, TaskWhere};
    use crate::service::CategoryService;
    use crate::store::FileStore;
    use crate::task::{NewTask, TaskPatch};
    use crate::Error;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashSet;
    use tempfile::TempDir;
    use uuid::Uuid;

    async fn create_services() -> (TaskService, CategoryService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("store.json"))
            .await
            .unwrap();
        (
            TaskService::new(Arc::new(store.tasks())),
            CategoryService::new(Arc::new(store.categories())),
            temp_dir,
        )
    }

    fn code_of(err: &Error) -> ErrorCode {
        err.as_api().expect("taxonomy error").code()
    }

    fn ids(tasks: &[Task]) -> HashSet<Uuid> {
        tasks.iter().map(|t| t.id).collect()
    }

    fn args(value: serde_json::Value) -> GetTasksArgs {
        serde_json::from_value(value).unwrap()
    }

    /// Repository whose storage is unreachable
    struct UnreachableRepository;

    #[async_trait]
    impl FindById for UnreachableRepository {
        type Entity = Task;

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Task>> {
            Err(Error::Storage("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl TaskRepository for UnreachableRepository {
        async fn create(&self, _data: NewTask) -> Result<Task> {
            Err(Error::Storage("connection refused".to_string()))
        }

        async fn update(&self, _id: Uuid, _data: TaskPatch) -> Result<Task> {
            Err(Error::Storage("connection refused".to_string()))
        }

        async fn delete(&self, _id: Uuid) -> Result<Task> {
            Err(Error::Storage("connection refused".to_string()))
        }

        async fn find_many_with_filters(
            &self,
            _filter: &TaskWhere,
            _order: OrderBy,
            _skip: Option<usize>,
            _take: Option<usize>,
        ) -> Result<Vec<Task>> {
            Err(Error::Storage("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_create_task_fills_defaults() {
        let (tasks, _, _temp) = create_services().await;

        let task = tasks
            .create_task(&json!({ "title": "Write docs" }))
            .await
            .unwrap();
        assert_eq!(task.title, "Write docs");
        assert_eq!(task.priority, 5);
        assert!(!task.is_done);
        assert!(task.description.is_none());
    }

    #[tokio::test]
    async fn test_create_task_with_short_title() {
        let (tasks, _, _temp) = create_services().await;

        let err = tasks
            .create_task(&json!({ "title": "ab" }))
            .await
            .unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.code(), ErrorCode::BadRequest);
        assert!(api.field_errors().unwrap()["title"]
            .iter()
            .any(|m| m.contains("at least 3 characters")));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (tasks, _, _temp) = create_services().await;
        let unknown = Uuid::new_v4().to_string();
        let input = json!({ "isDone": true });

        assert_eq!(code_of(&tasks.get_task(&unknown).await.unwrap_err()), ErrorCode::NotFound);
        assert_eq!(
            code_of(&tasks.update_task(&unknown, &input).await.unwrap_err()),
            ErrorCode::NotFound
        );
        assert_eq!(
            code_of(&tasks.delete_task(&unknown).await.unwrap_err()),
            ErrorCode::NotFound
        );
        assert_eq!(
            code_of(&tasks.mark_task_done(&unknown, &input).await.unwrap_err()),
            ErrorCode::NotFound
        );
    }

    #[tokio::test]
    async fn test_existence_is_checked_before_input() {
        let (tasks, _, _temp) = create_services().await;
        let unknown = Uuid::new_v4().to_string();

        let err = tasks
            .update_task(&unknown, &json!({ "title": "x" }))
            .await
            .unwrap_err();
        assert_eq!(code_of(&err), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_malformed_id_never_reaches_repository() {
        let tasks = TaskService::new(Arc::new(UnreachableRepository));

        let err = tasks.delete_task("42").await.unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.code(), ErrorCode::BadRequest);
        assert!(api.field_errors().unwrap().contains_key("id"));
    }

    #[tokio::test]
    async fn test_repository_failure_becomes_internal_at_boundary() {
        let tasks = TaskService::new(Arc::new(UnreachableRepository));

        let err = tasks.get_tasks(&GetTasksArgs::default()).await.unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(format_error(&err).code(), ErrorCode::InternalServerError);
    }

    #[tokio::test]
    async fn test_delete_unknown_does_not_mutate() {
        let (tasks, _, _temp) = create_services().await;
        tasks
            .create_task(&json!({ "title": "Keep me" }))
            .await
            .unwrap();
        let before = tasks.get_tasks(&GetTasksArgs::default()).await.unwrap();

        let err = tasks
            .delete_task(&Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert_eq!(code_of(&err), ErrorCode::NotFound);

        let after = tasks.get_tasks(&GetTasksArgs::default()).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_delete_returns_prior_state() {
        let (tasks, _, _temp) = create_services().await;
        let task = tasks
            .create_task(&json!({ "title": "Short lived", "priority": 2 }))
            .await
            .unwrap();

        let deleted = tasks.delete_task(&task.id.to_string()).await.unwrap();
        assert_eq!(deleted, task);
        assert_eq!(
            code_of(&tasks.get_task(&task.id.to_string()).await.unwrap_err()),
            ErrorCode::NotFound
        );
    }

    #[tokio::test]
    async fn test_mark_task_done_round_trip() {
        let (tasks, _, _temp) = create_services().await;
        let task = tasks
            .create_task(&json!({ "title": "Toggle me" }))
            .await
            .unwrap();
        let id = task.id.to_string();

        let done = tasks
            .mark_task_done(&id, &json!({ "isDone": true }))
            .await
            .unwrap();
        assert!(done.is_done);
        assert_eq!(done.title, "Toggle me");

        let undone = tasks
            .mark_task_done(&id, &json!({ "isDone": false }))
            .await
            .unwrap();
        assert!(!undone.is_done);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_input() {
        let (tasks, _, _temp) = create_services().await;
        let task = tasks
            .create_task(&json!({ "title": "Valid" }))
            .await
            .unwrap();

        let err = tasks
            .update_task(&task.id.to_string(), &json!({ "priority": 0 }))
            .await
            .unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.code(), ErrorCode::BadRequest);
        assert!(api.field_errors().unwrap().contains_key("priority"));

        let unchanged = tasks.get_task(&task.id.to_string()).await.unwrap();
        assert_eq!(unchanged.priority, 5);
    }

    #[tokio::test]
    async fn test_filters_intersect() {
        let (tasks, categories, _temp) = create_services().await;
        let work = categories
            .create_category(&json!({ "name": "Work" }))
            .await
            .unwrap();
        let home = categories
            .create_category(&json!({ "name": "Home" }))
            .await
            .unwrap();

        for (title, done, category) in [
            ("Done work", true, work.id),
            ("Open work", false, work.id),
            ("Done home", true, home.id),
            ("Open home", false, home.id),
        ] {
            tasks
                .create_task(&json!({ "title": title, "isDone": done, "categoryId": category }))
                .await
                .unwrap();
        }

        let done = tasks
            .get_tasks(&args(json!({ "filter": { "status": "done" } })))
            .await
            .unwrap();
        let at_work = tasks
            .get_tasks(&args(json!({ "filter": { "categoryId": work.id } })))
            .await
            .unwrap();
        let both = tasks
            .get_tasks(&args(json!({ "filter": { "status": "done", "categoryId": work.id } })))
            .await
            .unwrap();

        let expected: HashSet<Uuid> = ids(&done).intersection(&ids(&at_work)).copied().collect();
        assert_eq!(ids(&both), expected);
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].title, "Done work");
    }

    #[tokio::test]
    async fn test_priority_range() {
        let (tasks, _, _temp) = create_services().await;
        for priority in 1..=6 {
            tasks
                .create_task(&json!({
                    "title": format!("Priority {}", priority),
                    "priority": priority,
                }))
                .await
                .unwrap();
        }

        let exact = tasks
            .get_tasks(&args(json!({ "filter": { "priority": { "min": 3, "max": 3 } } })))
            .await
            .unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].priority, 3);

        let unbounded = tasks
            .get_tasks(&args(json!({ "filter": { "priority": { "min": null, "max": null } } })))
            .await
            .unwrap();
        assert_eq!(unbounded.len(), 6);
    }

    #[tokio::test]
    async fn test_search_matches_title_or_description() {
        let (tasks, _, _temp) = create_services().await;
        tasks
            .create_task(&json!({ "title": "Buy groceries", "description": "Milk and bread" }))
            .await
            .unwrap();
        tasks
            .create_task(&json!({ "title": "Workout", "description": "Cardio then MILKSHAKE" }))
            .await
            .unwrap();
        tasks
            .create_task(&json!({ "title": "Read" }))
            .await
            .unwrap();

        let filter = TaskFilter {
            search: Some("milk".to_string()),
            ..TaskFilter::default()
        };
        let found = tasks
            .get_tasks(&GetTasksArgs {
                filter: Some(filter),
                ..GetTasksArgs::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_default_order_is_stable() {
        let (tasks, _, _temp) = create_services().await;
        for title in ["First", "Second", "Third", "Fourth"] {
            tasks.create_task(&json!({ "title": title })).await.unwrap();
        }

        let first = tasks.get_tasks(&GetTasksArgs::default()).await.unwrap();
        let second = tasks.get_tasks(&GetTasksArgs::default()).await.unwrap();
        assert_eq!(first, second);
        assert!(first
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[tokio::test]
    async fn test_pagination_passes_through() {
        let (tasks, _, _temp) = create_services().await;
        for priority in 1..=5 {
            tasks
                .create_task(&json!({
                    "title": format!("Task {}", priority),
                    "priority": priority,
                }))
                .await
                .unwrap();
        }

        let page = tasks
            .get_tasks(&args(json!({
                "orderBy": { "field": "priority", "direction": "desc" },
                "skip": 1,
                "take": 2,
            })))
            .await
            .unwrap();
        let priorities: Vec<u8> = page.iter().map(|t| t.priority).collect();
        assert_eq!(priorities, vec![4, 3]);

        let none = tasks.get_tasks(&args(json!({ "take": 0 }))).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_category_scenario() {
        let (tasks, categories, _temp) = create_services().await;
        let work = categories
            .create_category(&json!({ "name": "Work" }))
            .await
            .unwrap();
        tasks
            .create_task(&json!({ "title": "Ship", "priority": 7, "categoryId": work.id }))
            .await
            .unwrap();
        tasks
            .create_task(&json!({ "title": "Unfiled" }))
            .await
            .unwrap();

        let found = tasks
            .get_tasks(&args(json!({ "filter": { "categoryId": work.id } })))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Ship");
        assert_eq!(found[0].priority, 7);
        assert_eq!(found[0].category.as_ref().unwrap().name, "Work");
    }

    #[tokio::test]
    async fn test_failed_persist_is_not_visible() {
        let (service, _categories, temp_dir) = create_services().await;
        let existing = service
            .create_task(&json!({ "title": "Existing" }))
            .await
            .unwrap();

        let path = temp_dir.path().join("store.json");
        tokio::fs::remove_file(&path).await.unwrap();
        tokio::fs::create_dir(&path).await.unwrap();

        let err = service
            .create_task(&json!({ "title": "Ghost" }))
            .await
            .unwrap_err();
        assert_eq!(format_error(&err), crate::ApiError::internal());
        assert!(service.delete_task(&existing.id.to_string()).await.is_err());

        let titles: Vec<String> = service
            .get_tasks(&GetTasksArgs::default())
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Existing"]);
    }
}
