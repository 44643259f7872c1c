//! Error responses
//!
//! Every failing handler returns a [`RouteError`]. Core errors are turned
//! into the wire shape here, once, by [`format_error`].

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use taskboard_core::api_error::format_error;
use taskboard_core::ApiError;

#[derive(Debug)]
pub struct RouteError(ApiError);

pub type RouteResult<T> = Result<T, RouteError>;

impl From<taskboard_core::Error> for RouteError {
    fn from(error: taskboard_core::Error) -> Self {
        Self(format_error(&error))
    }
}

impl From<ApiError> for RouteError {
    fn from(error: ApiError) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for RouteError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ApiError::bad_request(rejection.body_text()))
    }
}

impl From<QueryRejection> for RouteError {
    fn from(rejection: QueryRejection) -> Self {
        Self(ApiError::bad_request(rejection.body_text()))
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_client_error() {
            tracing::warn!(code = %self.0.code(), "{}", self.0.message());
        }
        (status, Json(self.0)).into_response()
    }
}
