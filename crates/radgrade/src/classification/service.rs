use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{Catalog, CatalogError, EvaluationError};
use super::domain::{Assessment, FieldInputs, FieldSchema, SystemId};
use super::evaluation::SystemSummary;
use crate::config::ReportingConfig;

/// Evaluation payload accepted by the HTTP and CLI front ends.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub inputs: FieldInputs,
    /// Fill fields absent from `inputs` with their declared defaults.
    #[serde(default)]
    pub use_defaults: bool,
}

/// Assessment wrapped with the context every presentation layer shows.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub system: SystemSummary,
    pub assessment: Assessment,
    pub summary: String,
    pub disclaimer: String,
    pub evaluated_at: DateTime<Utc>,
}

/// Full description of one classification system.
#[derive(Debug, Clone, Serialize)]
pub struct SystemDetail<'a> {
    pub id: &'a SystemId,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'a [FieldSchema],
}

/// Read-only facade over a [`Catalog`] shared by the router, CLI, and batch runner.
#[derive(Debug, Clone)]
pub struct ClassificationService {
    catalog: Arc<Catalog>,
    reporting: ReportingConfig,
}

impl ClassificationService {
    pub fn new(catalog: Arc<Catalog>, reporting: ReportingConfig) -> Self {
        Self { catalog, reporting }
    }

    /// Service over the built-in catalog.
    pub fn standard(reporting: ReportingConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::standard()?;
        info!(systems = catalog.len(), "classification catalog loaded");
        Ok(Self::new(Arc::new(catalog), reporting))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn disclaimer(&self) -> &str {
        &self.reporting.disclaimer
    }

    pub fn describe(&self, id: &SystemId) -> Result<SystemDetail<'_>, CatalogError> {
        let definition = self.catalog.lookup(id)?;
        Ok(SystemDetail {
            id: definition.id(),
            category: definition.category(),
            title: definition.title(),
            description: definition.description(),
            fields: definition.fields(),
        })
    }

    pub fn evaluate(
        &self,
        id: &SystemId,
        request: EvaluationRequest,
    ) -> Result<EvaluationReport, EvaluationError> {
        let definition = self.catalog.lookup(id)?;

        let inputs = if request.use_defaults {
            let mut merged = definition.default_inputs();
            merged.extend(request.inputs);
            merged
        } else {
            request.inputs
        };

        let assessment = self.catalog.evaluate(id, &inputs)?;
        Ok(EvaluationReport {
            system: definition.summary(),
            summary: assessment.summary(),
            assessment,
            disclaimer: self.reporting.disclaimer.clone(),
            evaluated_at: Utc::now(),
        })
    }
}
