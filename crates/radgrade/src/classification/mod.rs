//! Decision-table engine for radiologic classification systems.
//!
//! Each system is a [`ClassificationDefinition`]: an ordered list of typed
//! input fields plus a total rule that maps every in-domain combination of
//! inputs to an [`Assessment`]. Definitions live in a read-only [`Catalog`]
//! grouped by anatomical category; presentation layers (HTTP, CLI, CSV batch)
//! only ever go through the catalog.

pub mod batch;
pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod router;
pub mod service;
mod systems;

#[cfg(test)]
mod tests;

pub use batch::{evaluate_csv, BatchError, BatchSummary};
pub use catalog::{Catalog, CatalogError, CategoryListing, EvaluationError};
pub use domain::{
    Assessment, DomainError, FieldDomain, FieldInputs, FieldSchema, FieldValue, ScoreComponent,
    SystemId,
};
pub use evaluation::{
    ClassificationDefinition, DefinitionError, FieldValues, LookupTable, Rule, RuleFn,
    SystemSummary, ValidationError,
};
pub use router::classification_router;
pub use service::{ClassificationService, EvaluationReport, EvaluationRequest, SystemDetail};
pub use systems::{
    ABDOMINOPELVIC, CARDIOTHORACIC, HEAD_AND_NECK, MUSCULOSKELETAL, NEURO, RADS, VASCULAR,
};
