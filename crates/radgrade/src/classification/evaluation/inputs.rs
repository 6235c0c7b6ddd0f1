use std::collections::BTreeSet;

use super::super::domain::{DomainError, FieldDomain, FieldInputs, FieldSchema, FieldValue};
use super::ValidationError;

/// Read-only view over inputs that already passed validation.
///
/// Accessors stay fallible so a rule that asks for the wrong field or kind
/// surfaces as an error rather than a panic.
#[derive(Debug, Clone, Copy)]
pub struct FieldValues<'a> {
    fields: &'a [FieldSchema],
    inputs: &'a FieldInputs,
}

impl<'a> FieldValues<'a> {
    pub(crate) fn new(fields: &'a [FieldSchema], inputs: &'a FieldInputs) -> Self {
        Self { fields, inputs }
    }

    fn raw(&self, name: &str) -> Result<(&'a FieldSchema, &'a FieldValue), ValidationError> {
        let schema = self
            .fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| ValidationError::UnexpectedField {
                field: name.to_string(),
            })?;
        let value = self
            .inputs
            .get(name)
            .ok_or_else(|| ValidationError::MissingField {
                field: name.to_string(),
            })?;
        Ok((schema, value))
    }

    fn mismatch(schema: &FieldSchema, value: &FieldValue) -> ValidationError {
        ValidationError::Domain(DomainError::KindMismatch {
            field: schema.name.to_string(),
            expected: schema.domain.kind_label(),
            found: value.kind_label(),
        })
    }

    pub fn choice(&self, name: &str) -> Result<&'a str, ValidationError> {
        match self.raw(name)? {
            (_, FieldValue::Choice(choice)) => Ok(choice.as_str()),
            (schema, other) => Err(Self::mismatch(schema, other)),
        }
    }

    pub fn integer(&self, name: &str) -> Result<i64, ValidationError> {
        match self.raw(name)? {
            (_, FieldValue::Integer(number)) => Ok(*number),
            (schema, other) => Err(Self::mismatch(schema, other)),
        }
    }

    /// Decimal fields also accept integer literals, widened exactly.
    pub fn decimal(&self, name: &str) -> Result<f64, ValidationError> {
        match self.raw(name)? {
            (_, FieldValue::Decimal(number)) => Ok(*number),
            (schema, FieldValue::Integer(number))
                if matches!(schema.domain, FieldDomain::BoundedFloat { .. }) =>
            {
                Ok(*number as f64)
            }
            (schema, other) => Err(Self::mismatch(schema, other)),
        }
    }

    pub fn flag(&self, name: &str) -> Result<bool, ValidationError> {
        match self.raw(name)? {
            (_, FieldValue::Flag(flag)) => Ok(*flag),
            (schema, other) => Err(Self::mismatch(schema, other)),
        }
    }

    pub fn selection(&self, name: &str) -> Result<&'a BTreeSet<String>, ValidationError> {
        match self.raw(name)? {
            (_, FieldValue::Selection(selected)) => Ok(selected),
            (schema, other) => Err(Self::mismatch(schema, other)),
        }
    }

    /// Set-membership predicate over a multi-selection field.
    pub fn contains(&self, name: &str, feature: &str) -> Result<bool, ValidationError> {
        Ok(self.selection(name)?.contains(feature))
    }
}
