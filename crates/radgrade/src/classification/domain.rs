use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered classification systems.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SystemId(pub String);

impl SystemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for SystemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single value supplied for a field.
///
/// The JSON form is untagged so presentation layers can post plain values:
/// `true`, `3`, `4.5`, `"Burst"` or `["Washout"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Integer(i64),
    Decimal(f64),
    Choice(String),
    Selection(BTreeSet<String>),
}

impl FieldValue {
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    pub fn selection<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selection(values.into_iter().map(Into::into).collect())
    }

    pub const fn kind_label(&self) -> &'static str {
        match self {
            FieldValue::Flag(_) => "bool",
            FieldValue::Integer(_) => "integer",
            FieldValue::Decimal(_) => "decimal",
            FieldValue::Choice(_) => "choice",
            FieldValue::Selection(_) => "selection",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Flag(value) => write!(f, "{}", if *value { "Yes" } else { "No" }),
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Decimal(value) => write!(f, "{value}"),
            FieldValue::Choice(value) => f.write_str(value),
            FieldValue::Selection(values) => {
                if values.is_empty() {
                    f.write_str("(none)")
                } else {
                    let joined = values.iter().map(String::as_str).collect::<Vec<_>>();
                    f.write_str(&joined.join("; "))
                }
            }
        }
    }
}

/// Raw inputs keyed by field name, as collected by a presentation layer.
pub type FieldInputs = BTreeMap<String, FieldValue>;

/// Declared value domain for a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDomain {
    Enum { options: Vec<&'static str> },
    BoundedInt { min: i64, max: i64 },
    BoundedFloat { min: f64, max: f64 },
    Bool,
    MultiEnum { options: Vec<&'static str> },
}

impl FieldDomain {
    pub const fn kind_label(&self) -> &'static str {
        match self {
            FieldDomain::Enum { .. } => "enum",
            FieldDomain::BoundedInt { .. } => "bounded_int",
            FieldDomain::BoundedFloat { .. } => "bounded_float",
            FieldDomain::Bool => "bool",
            FieldDomain::MultiEnum { .. } => "multi_enum",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            FieldDomain::Enum { options } => format!("one of: {}", options.join(", ")),
            FieldDomain::MultiEnum { options } => {
                format!("any of: {} (separate with ';')", options.join(", "))
            }
            FieldDomain::BoundedInt { min, max } => format!("integer {min}..={max}"),
            FieldDomain::BoundedFloat { min, max } => format!("number {min}..={max}"),
            FieldDomain::Bool => "yes/no".to_string(),
        }
    }
}

/// Errors raised when a value falls outside a field's declared domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("field '{field}' expects a {expected} value, got {found}")]
    KindMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("field '{field}' does not accept '{value}'")]
    UnknownOption { field: String, value: String },
    #[error("field '{field}' must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },
    #[error("field '{field}' could not parse '{raw}' as {expected}")]
    Unparseable {
        field: String,
        raw: String,
        expected: &'static str,
    },
}

impl DomainError {
    pub fn field(&self) -> &str {
        match self {
            DomainError::KindMismatch { field, .. }
            | DomainError::UnknownOption { field, .. }
            | DomainError::OutOfRange { field, .. }
            | DomainError::Unparseable { field, .. } => field,
        }
    }
}

/// Declares one input field: its name, label, domain, and default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub domain: FieldDomain,
    pub default: FieldValue,
}

impl FieldSchema {
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &[&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            domain: FieldDomain::Enum {
                options: options.to_vec(),
            },
            default: FieldValue::choice(default),
        }
    }

    /// Single choice defaulting to the first option.
    pub fn first_of(name: &'static str, label: &'static str, options: &[&'static str]) -> Self {
        Self::choice(name, label, options, options.first().copied().unwrap_or_default())
    }

    pub fn integer(name: &'static str, label: &'static str, min: i64, max: i64, default: i64) -> Self {
        Self {
            name,
            label,
            domain: FieldDomain::BoundedInt { min, max },
            default: FieldValue::Integer(default),
        }
    }

    pub fn decimal(name: &'static str, label: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            name,
            label,
            domain: FieldDomain::BoundedFloat { min, max },
            default: FieldValue::Decimal(default),
        }
    }

    pub fn flag(name: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            name,
            label,
            domain: FieldDomain::Bool,
            default: FieldValue::Flag(default),
        }
    }

    pub fn selection(name: &'static str, label: &'static str, options: &[&'static str]) -> Self {
        Self {
            name,
            label,
            domain: FieldDomain::MultiEnum {
                options: options.to_vec(),
            },
            default: FieldValue::Selection(BTreeSet::new()),
        }
    }

    pub fn accepts(&self, value: &FieldValue) -> bool {
        self.validate(value).is_ok()
    }

    /// Check a candidate value against the declared domain. Bounds are closed.
    pub fn validate(&self, value: &FieldValue) -> Result<(), DomainError> {
        match (&self.domain, value) {
            (FieldDomain::Enum { options }, FieldValue::Choice(choice)) => {
                if options.contains(&choice.as_str()) {
                    Ok(())
                } else {
                    Err(self.unknown_option(choice))
                }
            }
            (FieldDomain::MultiEnum { options }, FieldValue::Selection(selected)) => {
                match selected
                    .iter()
                    .find(|item| !options.contains(&item.as_str()))
                {
                    Some(item) => Err(self.unknown_option(item)),
                    None => Ok(()),
                }
            }
            (FieldDomain::BoundedInt { min, max }, FieldValue::Integer(number)) => {
                if (*min..=*max).contains(number) {
                    Ok(())
                } else {
                    Err(DomainError::OutOfRange {
                        field: self.name.to_string(),
                        value: number.to_string(),
                        min: min.to_string(),
                        max: max.to_string(),
                    })
                }
            }
            (FieldDomain::BoundedFloat { min, max }, FieldValue::Decimal(number)) => {
                self.check_float(*number, *min, *max)
            }
            (FieldDomain::BoundedFloat { min, max }, FieldValue::Integer(number)) => {
                self.check_float(*number as f64, *min, *max)
            }
            (FieldDomain::Bool, FieldValue::Flag(_)) => Ok(()),
            (domain, other) => Err(DomainError::KindMismatch {
                field: self.name.to_string(),
                expected: domain.kind_label(),
                found: other.kind_label(),
            }),
        }
    }

    /// Convert textual input (command line pairs, CSV cells) into a value of
    /// this field's kind, then validate it.
    pub fn parse_text(&self, raw: &str) -> Result<FieldValue, DomainError> {
        let trimmed = raw.trim();
        let value = match &self.domain {
            FieldDomain::Enum { .. } => FieldValue::Choice(trimmed.to_string()),
            FieldDomain::MultiEnum { .. } => FieldValue::Selection(
                trimmed
                    .split(';')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            FieldDomain::BoundedInt { .. } => trimmed
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| self.unparseable(raw, "an integer"))?,
            FieldDomain::BoundedFloat { .. } => trimmed
                .parse::<f64>()
                .map(FieldValue::Decimal)
                .map_err(|_| self.unparseable(raw, "a number"))?,
            FieldDomain::Bool => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => FieldValue::Flag(true),
                "false" | "no" | "n" | "0" => FieldValue::Flag(false),
                _ => return Err(self.unparseable(raw, "yes/no")),
            },
        };

        self.validate(&value)?;
        Ok(value)
    }

    fn check_float(&self, number: f64, min: f64, max: f64) -> Result<(), DomainError> {
        if number.is_finite() && number >= min && number <= max {
            Ok(())
        } else {
            Err(DomainError::OutOfRange {
                field: self.name.to_string(),
                value: number.to_string(),
                min: min.to_string(),
                max: max.to_string(),
            })
        }
    }

    fn unknown_option(&self, value: &str) -> DomainError {
        DomainError::UnknownOption {
            field: self.name.to_string(),
            value: value.to_string(),
        }
    }

    fn unparseable(&self, raw: &str, expected: &'static str) -> DomainError {
        DomainError::Unparseable {
            field: self.name.to_string(),
            raw: raw.to_string(),
            expected,
        }
    }
}

/// Discrete point contribution, kept so point-sum results can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub field: String,
    pub points: i32,
    pub notes: String,
}

impl ScoreComponent {
    pub fn new(field: &str, points: i32, notes: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            points,
            notes: notes.into(),
        }
    }
}

/// Computed category/score plus its interpretive and recommendation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub label: String,
    pub interpretation: String,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ScoreComponent>,
}

impl Assessment {
    pub fn new(
        label: impl Into<String>,
        interpretation: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            interpretation: interpretation.into(),
            recommendation: recommendation.into(),
            components: Vec::new(),
        }
    }

    pub fn with_components(mut self, components: Vec<ScoreComponent>) -> Self {
        self.components = components;
        self
    }

    pub fn total_points(&self) -> Option<i32> {
        if self.components.is_empty() {
            None
        } else {
            Some(self.components.iter().map(|component| component.points).sum())
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} Recommendation: {}",
            self.label, self.interpretation, self.recommendation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_json_values_map_to_field_values() {
        let inputs: FieldInputs = serde_json::from_value(json!({
            "flag": true,
            "count": 3,
            "ratio": 0.45,
            "grade": "IIF",
            "features": ["Washout", "Washout", "Capsule Appearance"],
        }))
        .expect("inputs deserialize");

        assert_eq!(inputs["flag"], FieldValue::Flag(true));
        assert_eq!(inputs["count"], FieldValue::Integer(3));
        assert_eq!(inputs["ratio"], FieldValue::Decimal(0.45));
        assert_eq!(inputs["grade"], FieldValue::choice("IIF"));
        assert_eq!(
            inputs["features"],
            FieldValue::selection(["Capsule Appearance", "Washout"])
        );
    }

    #[test]
    fn schema_serializes_domain_inline() {
        let schema = FieldSchema::integer("count", "Count", 0, 20, 0);
        let value = serde_json::to_value(&schema).expect("schema serializes");
        assert_eq!(
            value,
            json!({
                "name": "count",
                "label": "Count",
                "kind": "bounded_int",
                "min": 0,
                "max": 20,
                "default": 0,
            })
        );

        let flag = serde_json::to_value(FieldSchema::flag("present", "Present", false))
            .expect("schema serializes");
        assert_eq!(flag["kind"], "bool");
    }

    #[test]
    fn bounds_are_closed() {
        let schema = FieldSchema::decimal("ratio", "Ratio", 0.0, 5.0, 1.0);
        assert!(schema.accepts(&FieldValue::Decimal(0.0)));
        assert!(schema.accepts(&FieldValue::Decimal(5.0)));
        assert!(schema.accepts(&FieldValue::Integer(5)));
        assert!(!schema.accepts(&FieldValue::Decimal(5.01)));
        assert!(!schema.accepts(&FieldValue::Decimal(f64::INFINITY)));
    }

    #[test]
    fn assessment_summary_and_points() {
        let assessment = Assessment::new("CTSI 5", "moderate severity.", "Monitor.")
            .with_components(vec![
                ScoreComponent::new("balthazar_grade", 3, "Balthazar D"),
                ScoreComponent::new("necrosis_percent", 2, "40% necrosis"),
            ]);

        assert_eq!(assessment.total_points(), Some(5));
        assert_eq!(
            assessment.summary(),
            "CTSI 5: moderate severity. Recommendation: Monitor."
        );
    }

    #[test]
    fn system_id_display_honours_width() {
        assert_eq!(format!("{:<6}|", SystemId::from("mrs")), "mrs   |");
    }
}
