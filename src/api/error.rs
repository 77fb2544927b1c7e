//! Error types for the service and HTTP layers.
//!
//! [`ServiceError`] is what the orchestration service returns. Handlers
//! translate it into [`ApiError`], which knows how to render itself as a
//! response via [`IntoResponse`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::types::NotFoundBody;
use crate::core::CoreError;

/// Failures of the orchestration service
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// Lookup or update of a name outside the fixed station set
    #[error(transparent)]
    UnknownStation(#[from] CoreError),

    /// Wrong number of readings or a missing distance
    #[error("position unresolved from {readings} readings")]
    PositionUnresolved { readings: usize },
}

/// Errors rendered to HTTP clients
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Plain-text 400
    #[error("{0}")]
    BadRequest(String),

    /// 404 with the standard not-found body
    #[error("not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::NotFound => (StatusCode::NOT_FOUND, Json(NotFoundBody::default())).into_response(),
        }
    }
}
