//! Task API endpoints
//!
//! RESTful API for task CRUD operations.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use taskboard_core::query::{
    GetTasksArgs, OrderBy, PriorityRange, SortDirection, StatusFilter, TaskFilter,
    TaskOrderField,
};
use taskboard_core::task::Task;

use super::error::RouteResult;
use crate::state::AppState;

// ============================================================================
// Request types
// ============================================================================

/// Flat query-string form of [`GetTasksArgs`].
///
/// A sort direction without a field sorts by creation time; a field without
/// a direction sorts descending.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksParams {
    #[serde(default)]
    pub status: Option<StatusFilter>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub priority_min: Option<i64>,
    #[serde(default)]
    pub priority_max: Option<i64>,
    #[serde(default)]
    pub order_field: Option<TaskOrderField>,
    #[serde(default)]
    pub order_direction: Option<SortDirection>,
    #[serde(default)]
    pub skip: Option<usize>,
    #[serde(default)]
    pub take: Option<usize>,
}

impl From<ListTasksParams> for GetTasksArgs {
    fn from(params: ListTasksParams) -> Self {
        let priority = (params.priority_min.is_some() || params.priority_max.is_some()).then_some(
            PriorityRange {
                min: params.priority_min,
                max: params.priority_max,
            },
        );
        let has_filter = params.status.is_some()
            || params.category_id.is_some()
            || params.search.is_some()
            || priority.is_some();
        let filter = has_filter.then(|| TaskFilter {
            status: params.status,
            category_id: params.category_id,
            search: params.search,
            priority,
        });

        let order_by = match (params.order_field, params.order_direction) {
            (None, None) => None,
            (field, direction) => Some(OrderBy::new(
                field.unwrap_or(TaskOrderField::CreatedAt),
                direction.unwrap_or(SortDirection::Desc),
            )),
        };

        Self {
            filter,
            order_by,
            skip: params.skip,
            take: params.take,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - List tasks
async fn list_tasks(
    State(state): State<AppState>,
    params: Result<Query<ListTasksParams>, QueryRejection>,
) -> RouteResult<Json<Vec<Task>>> {
    let Query(params) = params?;
    let tasks = state.task_service().get_tasks(&params.into()).await?;
    Ok(Json(tasks))
}

/// POST /api/tasks/query - List tasks with a structured filter
async fn query_tasks(
    State(state): State<AppState>,
    payload: Result<Json<GetTasksArgs>, JsonRejection>,
) -> RouteResult<Json<Vec<Task>>> {
    let Json(args) = payload?;
    let tasks = state.task_service().get_tasks(&args).await?;
    Ok(Json(tasks))
}

/// POST /api/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> RouteResult<(StatusCode, Json<Task>)> {
    let Json(input) = payload?;
    let task = state.task_service().create_task(&input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks/:id - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> RouteResult<Json<Task>> {
    Ok(Json(state.task_service().get_task(&id).await?))
}

/// PATCH /api/tasks/:id - Update a task
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> RouteResult<Json<Task>> {
    let Json(input) = payload?;
    Ok(Json(state.task_service().update_task(&id, &input).await?))
}

/// PATCH /api/tasks/:id/done - Set the done flag
async fn mark_task_done(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> RouteResult<Json<Task>> {
    let Json(input) = payload?;
    Ok(Json(state.task_service().mark_task_done(&id, &input).await?))
}

/// DELETE /api/tasks/:id - Delete a task, returning it
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> RouteResult<Json<Task>> {
    Ok(Json(state.task_service().delete_task(&id).await?))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/query", post(query_tasks))
        .route(
            "/api/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .route("/api/tasks/{id}/done", patch(mark_task_done))
}
