//! HTTP handlers for the combined and split endpoints.
//!
//! Handlers only translate between wire types and [`TopSecretService`];
//! status codes follow the contract of each endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::service::{Located, TopSecretService};
use crate::api::types::{SplitReport, TopSecretRequest, TopSecretResponse};
use crate::core::StationName;

impl From<Located> for TopSecretResponse {
    fn from(located: Located) -> Self {
        Self {
            position: located.position.into(),
            message: located.message.text(),
        }
    }
}

// ---------------------------------------------------------------------------
// POST /topsecret
// ---------------------------------------------------------------------------

/// Locate the transmitter from three reports sent together.
/// Anything short of a resolved position is a 404.
pub async fn post_topsecret(
    State(service): State<Arc<TopSecretService>>,
    Json(request): Json<TopSecretRequest>,
) -> Result<Json<TopSecretResponse>, ApiError> {
    let reports = request.into_reports();
    let located = service
        .locate(&reports)
        .await
        .map_err(|_| ApiError::NotFound)?;

    Ok(Json(located.into()))
}

// ---------------------------------------------------------------------------
// POST /topsecret_split/{name}
// ---------------------------------------------------------------------------

/// Store one station's report. Unknown stations are a 400 whatever the body,
/// and so is a body that does not parse.
pub async fn post_topsecret_split(
    State(service): State<Arc<TopSecretService>>,
    Path(name): Path<String>,
    body: Result<Json<SplitReport>, JsonRejection>,
) -> Result<String, ApiError> {
    let station = name
        .parse::<StationName>()
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    let Json(report) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let station = service
        .update(station.as_str(), report.distance, report.message)
        .await
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    Ok(format!("Data for satellite {station} updated successfully."))
}

// ---------------------------------------------------------------------------
// GET /topsecret_split/{name}
// ---------------------------------------------------------------------------

/// A station's own origin and fragment. Gaps in the fragment are reported
/// in the message, still with a 200.
pub async fn get_topsecret_split(
    State(service): State<Arc<TopSecretService>>,
    Path(name): Path<String>,
) -> Result<Json<TopSecretResponse>, ApiError> {
    let view = service.query(&name).await.map_err(|_| ApiError::NotFound)?;

    Ok(Json(TopSecretResponse {
        position: view.origin.into(),
        message: view.message,
    }))
}

// ---------------------------------------------------------------------------
// GET /topsecret_split
// ---------------------------------------------------------------------------

/// Locate the transmitter from the reports stored so far
pub async fn get_topsecret_split_combined(
    State(service): State<Arc<TopSecretService>>,
) -> Result<Json<TopSecretResponse>, ApiError> {
    let located = service
        .locate_from_registry()
        .await
        .map_err(|_| ApiError::NotFound)?;

    Ok(Json(located.into()))
}
