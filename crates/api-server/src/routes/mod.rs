//! Route handlers

pub mod category;
pub mod error;
pub mod health;
pub mod task;

use axum::Router;
use taskboard_core::ApiError;

use crate::state::AppState;
use error::RouteError;

async fn fallback() -> RouteError {
    ApiError::not_found("Route not found").into()
}

/// All REST routes
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(task::router())
        .merge(category::router())
        .fallback(fallback)
}
