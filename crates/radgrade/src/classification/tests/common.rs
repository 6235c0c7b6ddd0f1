use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::classification::domain::{FieldInputs, FieldValue, SystemId};
use crate::classification::{Assessment, Catalog, ClassificationService, EvaluationError};
use crate::config::ReportingConfig;

pub(super) fn catalog() -> &'static Catalog {
    Catalog::global()
}

pub(super) fn service() -> Arc<ClassificationService> {
    Arc::new(ClassificationService::new(
        Arc::new(Catalog::standard().expect("built-in catalog builds")),
        ReportingConfig::default(),
    ))
}

pub(super) fn choice(value: &str) -> FieldValue {
    FieldValue::choice(value)
}

pub(super) fn inputs(pairs: &[(&str, FieldValue)]) -> FieldInputs {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

pub(super) fn evaluate(id: &str, pairs: &[(&str, FieldValue)]) -> Result<Assessment, EvaluationError> {
    catalog().evaluate(&SystemId::from(id), &inputs(pairs))
}

pub(super) fn assess(id: &str, pairs: &[(&str, FieldValue)]) -> Assessment {
    evaluate(id, pairs).expect("inputs are valid")
}

pub(super) fn qanadli(partial: i64, complete: i64) -> Assessment {
    assess(
        "qanadli",
        &[
            ("partial_occlusions", FieldValue::Integer(partial)),
            ("complete_occlusions", FieldValue::Integer(complete)),
        ],
    )
}

pub(super) fn ctsi(grade: &str, necrosis: f64) -> Assessment {
    assess(
        "ctsi",
        &[
            ("balthazar_grade", choice(grade)),
            ("necrosis_percent", FieldValue::Decimal(necrosis)),
        ],
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}
