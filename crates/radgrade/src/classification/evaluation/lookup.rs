use super::super::domain::{Assessment, DomainError, FieldDomain, FieldSchema};
use super::{DefinitionError, FieldValues, ValidationError};

/// Fixed outcome for one option of a lookup field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupRow {
    pub option: &'static str,
    pub label: &'static str,
    pub interpretation: &'static str,
    pub recommendation: &'static str,
}

/// Decision table keyed by a single enum field.
#[derive(Debug, Clone)]
pub struct LookupTable {
    pub field: &'static str,
    pub rows: Vec<LookupRow>,
}

impl LookupTable {
    /// Rows are `(option, label, interpretation, recommendation)`.
    pub fn new(
        field: &'static str,
        rows: &[(&'static str, &'static str, &'static str, &'static str)],
    ) -> Self {
        Self {
            field,
            rows: rows
                .iter()
                .map(|&(option, label, interpretation, recommendation)| LookupRow {
                    option,
                    label,
                    interpretation,
                    recommendation,
                })
                .collect(),
        }
    }

    /// Option list in row order, for the matching field declaration.
    pub fn options(&self) -> Vec<&'static str> {
        self.rows.iter().map(|row| row.option).collect()
    }

    /// Enum field whose options are exactly this table's rows, defaulting to the first.
    pub fn field_schema(&self, label: &'static str) -> FieldSchema {
        FieldSchema::first_of(self.field, label, &self.options())
    }

    pub(super) fn check_coverage(
        &self,
        system: &str,
        fields: &[FieldSchema],
    ) -> Result<(), DefinitionError> {
        let options = fields
            .iter()
            .find(|field| field.name == self.field)
            .and_then(|field| match &field.domain {
                FieldDomain::Enum { options } => Some(options),
                _ => None,
            })
            .ok_or_else(|| DefinitionError::LookupFieldMissing {
                system: system.to_string(),
                field: self.field.to_string(),
            })?;

        for &option in options {
            if !self.rows.iter().any(|row| row.option == option) {
                return Err(DefinitionError::LookupIncomplete {
                    system: system.to_string(),
                    field: self.field.to_string(),
                    option: option.to_string(),
                });
            }
        }

        if let Some(row) = self.rows.iter().find(|row| !options.contains(&row.option)) {
            return Err(DefinitionError::LookupUnknownOption {
                system: system.to_string(),
                field: self.field.to_string(),
                option: row.option.to_string(),
            });
        }

        Ok(())
    }

    pub(super) fn apply(&self, values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
        let selected = values.choice(self.field)?;
        let row = self
            .rows
            .iter()
            .find(|row| row.option == selected)
            .ok_or_else(|| {
                ValidationError::Domain(DomainError::UnknownOption {
                    field: self.field.to_string(),
                    value: selected.to_string(),
                })
            })?;

        Ok(Assessment::new(
            row.label,
            row.interpretation,
            row.recommendation,
        ))
    }
}
