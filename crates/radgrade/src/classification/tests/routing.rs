use super::common::*;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use axum::body::Body;
use axum::response::IntoResponse;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::classification::router::{evaluate_handler, system_handler};
use crate::classification::{classification_router, EvaluationRequest};
use crate::config::DEFAULT_DISCLAIMER;

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn catalog_route_lists_every_category() {
    let router = classification_router(service());

    let response = router.oneshot(get("/api/v1/catalog")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let menu = body.as_array().expect("menu array");
    assert_eq!(menu.len(), 7);
    assert_eq!(menu[0]["category"], "NEURO");
    assert_eq!(menu[6]["category"], "-RADS SYSTEMS");
    assert_eq!(menu[6]["systems"].as_array().map(Vec::len), Some(7));
}

#[tokio::test]
async fn category_route_decodes_names_and_tolerates_unknown_ones() {
    let router = classification_router(service());

    let response = router
        .clone()
        .oneshot(get("/api/v1/catalog/HEAD%20%26%20NECK"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["category"], "HEAD & NECK");
    assert_eq!(body["systems"].as_array().map(Vec::len), Some(3));

    let response = router
        .oneshot(get("/api/v1/catalog/DERMATOLOGY"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["systems"], json!([]));
}

#[tokio::test]
async fn system_route_describes_fields() {
    let router = classification_router(service());

    let response = router.oneshot(get("/api/v1/systems/qanadli")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["category"], "CARDIOTHORACIC");
    assert_eq!(body["fields"][0]["name"], "partial_occlusions");
    assert_eq!(body["fields"][0]["kind"], "bounded_int");
    assert_eq!(body["fields"][0]["max"], 20);
    assert_eq!(body["fields"][0]["default"], 0);
}

#[tokio::test]
async fn system_handler_returns_not_found_for_unknown_id() {
    let response = system_handler(State(service()), Path("nope".to_string()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn evaluate_route_returns_assessment_with_disclaimer() {
    let router = classification_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/systems/qanadli/evaluate",
            json!({ "inputs": { "partial_occlusions": 3, "complete_occlusions": 5 } }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["system"]["id"], "qanadli");
    assert_eq!(body["assessment"]["label"], "13/40");
    assert_eq!(body["assessment"]["components"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["disclaimer"], DEFAULT_DISCLAIMER);
    assert!(body["summary"].as_str().unwrap().starts_with("13/40:"));
    assert!(body["evaluated_at"].is_string());
}

#[tokio::test]
async fn evaluate_route_accepts_selection_arrays() {
    let router = classification_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/systems/li-rads/evaluate",
            json!({ "inputs": { "features": ["Washout", "Arterial Phase Hyperenhancement"] } }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["assessment"]["label"], "LR-4");
}

#[tokio::test]
async fn evaluate_route_rejects_invalid_option_with_unprocessable() {
    let router = classification_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/systems/bosniak/evaluate",
            json!({ "inputs": { "category": "V" } }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["field"], "category");
    assert!(body["error"].as_str().unwrap().contains("'V'"));
}

#[tokio::test]
async fn evaluate_handler_fills_defaults_on_request() {
    let request = EvaluationRequest {
        inputs: inputs(&[("balthazar_grade", choice("D"))]),
        use_defaults: true,
    };

    let response = evaluate_handler(
        State(service()),
        Path("ctsi".to_string()),
        axum::Json(request),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["assessment"]["label"], "CTSI 3");
}

#[tokio::test]
async fn evaluate_handler_without_defaults_reports_missing_field() {
    let request = EvaluationRequest {
        inputs: inputs(&[("balthazar_grade", choice("D"))]),
        use_defaults: false,
    };

    let response = evaluate_handler(
        State(service()),
        Path("ctsi".to_string()),
        axum::Json(request),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["field"], "necrosis_percent");
}

#[tokio::test]
async fn evaluate_route_returns_not_found_for_unknown_id() {
    let router = classification_router(service());

    let response = router
        .oneshot(post_json("/api/v1/systems/nope/evaluate", json!({ "inputs": {} })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
