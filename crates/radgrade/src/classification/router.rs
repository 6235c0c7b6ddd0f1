use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use super::catalog::CategoryListing;
use super::domain::SystemId;
use super::service::{ClassificationService, EvaluationReport, EvaluationRequest};
use crate::error::AppError;

/// Router exposing the catalog menu, system descriptions, and evaluation.
pub fn classification_router(service: Arc<ClassificationService>) -> Router {
    Router::new()
        .route("/api/v1/catalog", get(menu_handler))
        .route("/api/v1/catalog/:category", get(category_handler))
        .route("/api/v1/systems/:system_id", get(system_handler))
        .route("/api/v1/systems/:system_id/evaluate", post(evaluate_handler))
        .with_state(service)
}

pub(crate) async fn menu_handler(State(service): State<Arc<ClassificationService>>) -> Response {
    (StatusCode::OK, axum::Json(service.catalog().menu())).into_response()
}

pub(crate) async fn category_handler(
    State(service): State<Arc<ClassificationService>>,
    Path(category): Path<String>,
) -> Response {
    let systems = service.catalog().systems_in(&category);
    let listing = CategoryListing { category, systems };
    (StatusCode::OK, axum::Json(listing)).into_response()
}

pub(crate) async fn system_handler(
    State(service): State<Arc<ClassificationService>>,
    Path(system_id): Path<String>,
) -> Result<Response, AppError> {
    let id = SystemId(system_id);
    let detail = service.describe(&id)?;
    Ok((StatusCode::OK, axum::Json(detail)).into_response())
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<ClassificationService>>,
    Path(system_id): Path<String>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Result<axum::Json<EvaluationReport>, AppError> {
    let id = SystemId(system_id);
    let report = service.evaluate(&id, request)?;
    Ok(axum::Json(report))
}
