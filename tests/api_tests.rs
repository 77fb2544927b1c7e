//! Integration tests for the HTTP endpoints.
//!
//! Requests go straight through the axum `Router` via `tower::ServiceExt`,
//! without binding a TCP listener.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use topsecret::{build_router, ServiceConfig, TopSecretService};
use tower::ServiceExt;

const INSUFFICIENT_INFORMATION: &str =
    "Error: no hay suficiente información para mostrar el mensaje completo";

fn make_router() -> Router {
    build_router(Arc::new(TopSecretService::new(&ServiceConfig::default())))
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn reference_reports() -> Value {
    json!([
        {"name": "Kenobi", "distance": 100.0, "message": ["message1", "", "message3"]},
        {"name": "Skywalker", "distance": 150.0, "message": ["", "message2", "message3"]},
        {"name": "Sato", "distance": 200.0, "message": ["message1", "message2", ""]}
    ])
}

#[tokio::test]
async fn test_topsecret_locates_and_merges() {
    let response = make_router()
        .oneshot(json_request("POST", "/topsecret", &reference_reports()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["position"]["x"], -492.1875);
    assert_eq!(json["position"]["y"], 1540.625);
    assert_eq!(json["message"], "message1 message2 message3");
}

#[tokio::test]
async fn test_topsecret_accepts_satellites_wrapper() {
    let body = json!({ "satellites": reference_reports() });
    let response = make_router()
        .oneshot(json_request("POST", "/topsecret", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["message"], "message1 message2 message3");
}

#[tokio::test]
async fn test_topsecret_with_two_reports_is_not_found() {
    let mut reports = reference_reports();
    reports.as_array_mut().unwrap().pop();

    let response = make_router()
        .oneshot(json_request("POST", "/topsecret", &reports))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, json!({"message": "RESPONSE CODE: 404"}));
}

#[tokio::test]
async fn test_topsecret_with_missing_distance_is_not_found() {
    let body = json!([
        {"name": "kenobi", "distance": 100.0, "message": ["a"]},
        {"name": "skywalker", "message": ["a"]},
        {"name": "sato", "distance": 200.0, "message": ["a"]}
    ]);

    let response = make_router()
        .oneshot(json_request("POST", "/topsecret", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_split_update_confirms() {
    let body = json!({"distance": 100.0, "message": ["message1", "", "message3"]});
    let response = make_router()
        .oneshot(json_request("POST", "/topsecret_split/Kenobi", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_to_string(response.into_body()).await,
        "Data for satellite kenobi updated successfully."
    );
}

#[tokio::test]
async fn test_split_update_unknown_station_is_bad_request() {
    let body = json!({"distance": 100.0, "message": ["hola"]});
    let response = make_router()
        .oneshot(json_request("POST", "/topsecret_split/Vader", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_to_string(response.into_body()).await, "Satellite vader not found.");
}

#[tokio::test]
async fn test_split_update_unknown_station_wins_over_bad_body() {
    let body = json!({"message": ["a"]});
    let response = make_router()
        .oneshot(json_request("POST", "/topsecret_split/vader", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_to_string(response.into_body()).await, "Satellite vader not found.");
}

#[tokio::test]
async fn test_split_update_missing_distance_is_bad_request() {
    let body = json!({"message": ["a"]});
    let response = make_router()
        .oneshot(json_request("POST", "/topsecret_split/kenobi", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_split_query_seeded_station_reports_gaps() {
    let response = make_router().oneshot(get("/topsecret_split/kenobi")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["position"], json!({"x": -500.0, "y": -200.0}));
    assert_eq!(json["message"], INSUFFICIENT_INFORMATION);
}

#[tokio::test]
async fn test_split_query_unknown_station_is_not_found() {
    let response = make_router().oneshot(get("/topsecret_split/yoda")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["message"], "RESPONSE CODE: 404");
}

#[tokio::test]
async fn test_split_update_then_query_any_case() {
    let router = make_router();
    let body = json!({"distance": 80.0, "message": ["este", "es", "un", "mensaje"]});

    let response = router
        .clone()
        .oneshot(json_request("POST", "/topsecret_split/SATO", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    for name in ["Sato", "sato", "SATO"] {
        let response = router
            .clone()
            .oneshot(get(&format!("/topsecret_split/{name}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_to_json(response.into_body()).await;
        assert_eq!(json["position"], json!({"x": 500.0, "y": 100.0}));
        assert_eq!(json["message"], "este es un mensaje");
    }
}

#[tokio::test]
async fn test_combined_request_updates_split_state() {
    let router = make_router();
    let response = router
        .clone()
        .oneshot(json_request("POST", "/topsecret", &reference_reports()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.oneshot(get("/topsecret_split/skywalker")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["message"], INSUFFICIENT_INFORMATION);
}

#[tokio::test]
async fn test_split_combined_uses_stored_reports() {
    let router = make_router();
    let updates = [
        ("kenobi", json!({"distance": 100.0, "message": ["message1", "", "message3"]})),
        ("skywalker", json!({"distance": 150.0, "message": ["", "message2", "message3"]})),
        ("sato", json!({"distance": 200.0, "message": ["message1", "message2", ""]})),
    ];
    for (name, body) in &updates {
        let uri = format!("/topsecret_split/{name}");
        let response = router
            .clone()
            .oneshot(json_request("POST", &uri, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router.oneshot(get("/topsecret_split")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["position"]["x"], -492.1875);
    assert_eq!(json["position"]["y"], 1540.625);
    assert_eq!(json["message"], "message1 message2 message3");
}

#[tokio::test]
async fn test_split_combined_without_distances_is_not_found() {
    let mut config = ServiceConfig::default();
    for station in &mut config.stations {
        station.distance = None;
    }
    let router = build_router(Arc::new(TopSecretService::new(&config)));

    let response = router.oneshot(get("/topsecret_split")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
