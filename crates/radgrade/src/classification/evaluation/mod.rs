mod inputs;
mod lookup;
mod rules;

pub use inputs::FieldValues;
pub use lookup::{LookupRow, LookupTable};
pub use rules::{band_for, roman, ScoreBand};

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;

use super::domain::{Assessment, DomainError, FieldInputs, FieldSchema, SystemId};

/// Pure decision function over validated inputs.
pub type RuleFn = fn(&FieldValues<'_>) -> Result<Assessment, ValidationError>;

/// How a definition maps validated inputs to an assessment.
#[derive(Clone)]
pub enum Rule {
    /// One enum field mapped row-by-row to a fixed outcome.
    Lookup(LookupTable),
    /// Explicit decision tree or weighted point sum.
    Computed(RuleFn),
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Lookup(table) => f
                .debug_struct("Lookup")
                .field("field", &table.field)
                .field("rows", &table.rows.len())
                .finish(),
            Rule::Computed(_) => f.write_str("Computed"),
        }
    }
}

/// Rejection raised before any rule code runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing value for field '{field}'")]
    MissingField { field: String },
    #[error("field '{field}' is not declared by this classification")]
    UnexpectedField { field: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ValidationError {
    /// Name of the offending field, for user-facing messages.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field } | ValidationError::UnexpectedField { field } => {
                field
            }
            ValidationError::Domain(error) => error.field(),
        }
    }
}

/// Defects in a definition detected while the catalog is being built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    #[error("{system}: field '{field}' declared more than once")]
    DuplicateField { system: String, field: String },
    #[error("{system}: default for field '{field}' is outside its domain ({source})")]
    DefaultOutsideDomain {
        system: String,
        field: String,
        source: DomainError,
    },
    #[error("{system}: lookup field '{field}' is not a declared enum field")]
    LookupFieldMissing { system: String, field: String },
    #[error("{system}: lookup on '{field}' has no row for option '{option}'")]
    LookupIncomplete {
        system: String,
        field: String,
        option: String,
    },
    #[error("{system}: lookup on '{field}' has a row for undeclared option '{option}'")]
    LookupUnknownOption {
        system: String,
        field: String,
        option: String,
    },
}

/// A named classification system: ordered fields plus a total rule.
#[derive(Debug, Clone)]
pub struct ClassificationDefinition {
    id: SystemId,
    category: &'static str,
    title: &'static str,
    description: &'static str,
    fields: Vec<FieldSchema>,
    rule: Rule,
}

impl ClassificationDefinition {
    /// Build a definition, rejecting duplicate field names, defaults outside
    /// their domain, and lookup tables that do not cover their field.
    pub fn new(
        id: &str,
        category: &'static str,
        title: &'static str,
        description: &'static str,
        fields: Vec<FieldSchema>,
        rule: Rule,
    ) -> Result<Self, DefinitionError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name) {
                return Err(DefinitionError::DuplicateField {
                    system: id.to_string(),
                    field: field.name.to_string(),
                });
            }

            field
                .validate(&field.default)
                .map_err(|source| DefinitionError::DefaultOutsideDomain {
                    system: id.to_string(),
                    field: field.name.to_string(),
                    source,
                })?;
        }

        if let Rule::Lookup(table) = &rule {
            table.check_coverage(id, &fields)?;
        }

        Ok(Self {
            id: SystemId::new(id),
            category,
            title,
            description,
            fields,
            rule,
        })
    }

    pub fn id(&self) -> &SystemId {
        &self.id
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Every field mapped to its declared default.
    pub fn default_inputs(&self) -> FieldInputs {
        self.fields
            .iter()
            .map(|field| (field.name.to_string(), field.default.clone()))
            .collect()
    }

    /// Check that `inputs` holds exactly the declared fields with in-domain values.
    pub fn validate<'a>(&'a self, inputs: &'a FieldInputs) -> Result<FieldValues<'a>, ValidationError> {
        let declared: BTreeSet<&str> = self.fields.iter().map(|field| field.name).collect();
        if let Some(extra) = inputs.keys().find(|name| !declared.contains(name.as_str())) {
            return Err(ValidationError::UnexpectedField {
                field: extra.clone(),
            });
        }

        for field in &self.fields {
            let value = inputs
                .get(field.name)
                .ok_or_else(|| ValidationError::MissingField {
                    field: field.name.to_string(),
                })?;
            field.validate(value)?;
        }

        Ok(FieldValues::new(&self.fields, inputs))
    }

    /// Validate then apply the rule. Pure: identical inputs give identical results.
    pub fn evaluate(&self, inputs: &FieldInputs) -> Result<Assessment, ValidationError> {
        let values = self.validate(inputs)?;
        match &self.rule {
            Rule::Lookup(table) => table.apply(&values),
            Rule::Computed(rule) => rule(&values),
        }
    }

    pub fn summary(&self) -> SystemSummary {
        SystemSummary {
            id: self.id.clone(),
            title: self.title,
        }
    }
}

/// Menu entry for a classification system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemSummary {
    pub id: SystemId,
    pub title: &'static str,
}
