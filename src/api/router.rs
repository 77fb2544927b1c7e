//! Axum router construction.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::service::TopSecretService;

/// Build the router:
/// - `POST /topsecret` -- combined request with all three reports
/// - `GET /topsecret_split` -- combined result from stored reports
/// - `POST /topsecret_split/{name}` -- store one station's report
/// - `GET /topsecret_split/{name}` -- one station's own view
pub fn build_router(service: Arc<TopSecretService>) -> Router {
    Router::new()
        .route("/topsecret", post(handlers::post_topsecret))
        .route("/topsecret_split", get(handlers::get_topsecret_split_combined))
        .route(
            "/topsecret_split/{name}",
            get(handlers::get_topsecret_split).post(handlers::post_topsecret_split),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
