use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde::Serialize;
use tracing::debug;

use super::domain::{Assessment, FieldInputs, FieldSchema, SystemId};
use super::evaluation::{ClassificationDefinition, DefinitionError, SystemSummary, ValidationError};
use super::systems;

/// Registry misuse. Raised while building the catalog these are programming
/// defects and abort startup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("classification '{0}' is already registered")]
    DuplicateId(SystemId),
    #[error("classification '{0}' not found")]
    NotFound(SystemId),
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

/// Failure of an evaluation routed through the catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Menu group: a category and the systems listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListing {
    pub category: String,
    pub systems: Vec<SystemSummary>,
}

/// Static registry of classification definitions grouped by category.
///
/// Built once, then shared read-only; every lookup and evaluation borrows.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    categories: Vec<(String, Vec<SystemId>)>,
    definitions: HashMap<SystemId, Arc<ClassificationDefinition>>,
    order: Vec<SystemId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog of radiologic classification systems.
    pub fn standard() -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        systems::register_all(&mut catalog)?;
        debug!(
            categories = catalog.categories.len(),
            systems = catalog.definitions.len(),
            "classification catalog built"
        );
        Ok(catalog)
    }

    /// Process-wide frozen instance of [`Catalog::standard`].
    ///
    /// # Panics
    ///
    /// Panics on first use if a built-in definition is invalid.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| match Catalog::standard() {
            Ok(catalog) => catalog,
            Err(err) => panic!("built-in classification catalog is invalid: {err}"),
        })
    }

    /// Add a definition under its own category.
    pub fn register(&mut self, definition: ClassificationDefinition) -> Result<(), CatalogError> {
        let id = definition.id().clone();
        if self.definitions.contains_key(&id) {
            return Err(CatalogError::DuplicateId(id));
        }

        let category = definition.category();
        self.category_entry(category).push(id.clone());
        self.order.push(id.clone());
        self.definitions.insert(id, Arc::new(definition));
        Ok(())
    }

    /// Cross-list an already registered definition under another category.
    pub fn link(&mut self, category: &str, id: &SystemId) -> Result<(), CatalogError> {
        if !self.definitions.contains_key(id) {
            return Err(CatalogError::NotFound(id.clone()));
        }

        let entries = self.category_entry(category);
        if entries.contains(id) {
            return Err(CatalogError::DuplicateId(id.clone()));
        }
        entries.push(id.clone());
        Ok(())
    }

    fn category_entry(&mut self, category: &str) -> &mut Vec<SystemId> {
        let position = match self
            .categories
            .iter()
            .position(|(name, _)| name == category)
        {
            Some(position) => position,
            None => {
                self.categories.push((category.to_string(), Vec::new()));
                self.categories.len() - 1
            }
        };
        &mut self.categories[position].1
    }

    pub fn lookup(&self, id: &SystemId) -> Result<&ClassificationDefinition, CatalogError> {
        self.definitions
            .get(id)
            .map(Arc::as_ref)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    /// Definitions listed under `category`, in registration order. Unknown
    /// categories yield an empty list.
    pub fn list(&self, category: &str) -> Vec<&ClassificationDefinition> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, ids)| {
                ids.iter()
                    .filter_map(|id| self.definitions.get(id).map(Arc::as_ref))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn systems_in(&self, category: &str) -> Vec<SystemSummary> {
        self.list(category)
            .into_iter()
            .map(ClassificationDefinition::summary)
            .collect()
    }

    /// Full menu tree in display order.
    pub fn menu(&self) -> Vec<CategoryListing> {
        self.categories()
            .into_iter()
            .map(|category| CategoryListing {
                category: category.to_string(),
                systems: self.systems_in(category),
            })
            .collect()
    }

    pub fn fields_of(&self, id: &SystemId) -> Result<&[FieldSchema], CatalogError> {
        Ok(self.lookup(id)?.fields())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Every registered definition once, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassificationDefinition> {
        self.order
            .iter()
            .filter_map(|id| self.definitions.get(id).map(Arc::as_ref))
    }

    pub fn evaluate(
        &self,
        id: &SystemId,
        inputs: &FieldInputs,
    ) -> Result<Assessment, EvaluationError> {
        let definition = self.lookup(id)?;
        match definition.evaluate(inputs) {
            Ok(assessment) => {
                debug!(system = %id, label = %assessment.label, "classification evaluated");
                Ok(assessment)
            }
            Err(err) => {
                debug!(system = %id, field = err.field(), error = %err, "classification input rejected");
                Err(err.into())
            }
        }
    }
}
