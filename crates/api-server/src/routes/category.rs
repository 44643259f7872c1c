//! Category API endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use taskboard_core::category::Category;

use super::error::RouteResult;
use crate::state::AppState;

/// GET /api/categories - List all categories
async fn list_categories(State(state): State<AppState>) -> RouteResult<Json<Vec<Category>>> {
    Ok(Json(state.category_service().get_categories().await?))
}

/// POST /api/categories - Create a category
async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> RouteResult<(StatusCode, Json<Category>)> {
    let Json(input) = payload?;
    let category = state.category_service().create_category(&input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories/:id - Get a single category
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> RouteResult<Json<Category>> {
    Ok(Json(state.category_service().get_category(&id).await?))
}

/// PATCH /api/categories/:id - Rename a category
async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> RouteResult<Json<Category>> {
    let Json(input) = payload?;
    Ok(Json(state.category_service().update_category(&id, &input).await?))
}

/// DELETE /api/categories/:id - Delete a category, returning it
async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> RouteResult<Json<Category>> {
    Ok(Json(state.category_service().delete_category(&id).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(list_categories).post(create_category))
        .route(
            "/api/categories/{id}",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
}
