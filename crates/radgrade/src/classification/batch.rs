use std::io::{Read, Write};

use serde::Serialize;
use tracing::{debug, info};

use super::domain::{FieldInputs, FieldSchema};
use super::evaluation::{ClassificationDefinition, ValidationError};

const OUTPUT_COLUMNS: [&str; 6] = [
    "row",
    "system",
    "label",
    "interpretation",
    "recommendation",
    "error",
];

#[derive(Debug)]
pub enum BatchError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownColumn { system: String, column: String },
    MissingColumn { system: String, column: String },
    DuplicateColumn { system: String, column: String },
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Io(err) => write!(f, "failed to read or write batch data: {}", err),
            BatchError::Csv(err) => write!(f, "invalid batch CSV data: {}", err),
            BatchError::UnknownColumn { system, column } => {
                write!(f, "column '{}' is not a field of {}", column, system)
            }
            BatchError::MissingColumn { system, column } => {
                write!(f, "{} requires a '{}' column", system, column)
            }
            BatchError::DuplicateColumn { system, column } => {
                write!(f, "column '{}' appears more than once for {}", column, system)
            }
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(err) => Some(err),
            BatchError::Csv(err) => Some(err),
            BatchError::UnknownColumn { .. }
            | BatchError::MissingColumn { .. }
            | BatchError::DuplicateColumn { .. } => None,
        }
    }
}

impl From<std::io::Error> for BatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Row counts for a completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub evaluated: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.evaluated + self.rejected
    }
}

#[derive(Debug, Serialize)]
struct BatchRow<'a> {
    row: usize,
    system: &'a str,
    label: &'a str,
    interpretation: &'a str,
    recommendation: &'a str,
    error: String,
}

/// Evaluate every CSV case in `reader` against `definition`, writing one result
/// row per case to `writer`.
///
/// The header must name exactly the definition's fields, each once, in any order. Rows
/// that fail parsing or validation are written with an empty label and the
/// error message, and the batch carries on. Framing and I/O failures abort.
pub fn evaluate_csv<R: Read, W: Write>(
    definition: &ClassificationDefinition,
    reader: R,
    writer: W,
) -> Result<BatchSummary, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let columns = resolve_columns(definition, &headers)?;

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(OUTPUT_COLUMNS)?;

    let system = definition.id().as_str();
    let mut summary = BatchSummary::default();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = index + 1;

        let outcome = parse_row(&columns, &record).and_then(|inputs| definition.evaluate(&inputs));
        match outcome {
            Ok(assessment) => {
                summary.evaluated += 1;
                csv_writer.serialize(BatchRow {
                    row,
                    system,
                    label: &assessment.label,
                    interpretation: &assessment.interpretation,
                    recommendation: &assessment.recommendation,
                    error: String::new(),
                })?;
            }
            Err(error) => {
                summary.rejected += 1;
                debug!(system, row, field = error.field(), error = %error, "batch row rejected");
                csv_writer.serialize(BatchRow {
                    row,
                    system,
                    label: "",
                    interpretation: "",
                    recommendation: "",
                    error: error.to_string(),
                })?;
            }
        }
    }

    csv_writer.flush()?;
    info!(
        system,
        evaluated = summary.evaluated,
        rejected = summary.rejected,
        "batch evaluation finished"
    );
    Ok(summary)
}

fn resolve_columns<'d>(
    definition: &'d ClassificationDefinition,
    headers: &csv::StringRecord,
) -> Result<Vec<&'d FieldSchema>, BatchError> {
    let mut columns: Vec<&'d FieldSchema> = Vec::with_capacity(headers.len());
    for header in headers.iter() {
        let field = definition
            .field(header)
            .ok_or_else(|| BatchError::UnknownColumn {
                system: definition.id().to_string(),
                column: header.to_string(),
            })?;
        if columns.iter().any(|seen| seen.name == field.name) {
            return Err(BatchError::DuplicateColumn {
                system: definition.id().to_string(),
                column: header.to_string(),
            });
        }
        columns.push(field);
    }

    if let Some(missing) = definition
        .fields()
        .iter()
        .find(|field| !headers.iter().any(|header| header == field.name))
    {
        return Err(BatchError::MissingColumn {
            system: definition.id().to_string(),
            column: missing.name.to_string(),
        });
    }

    Ok(columns)
}

fn parse_row(
    columns: &[&FieldSchema],
    record: &csv::StringRecord,
) -> Result<FieldInputs, ValidationError> {
    let mut inputs = FieldInputs::new();
    for (field, cell) in columns.iter().zip(record.iter()) {
        inputs.insert(field.name.to_string(), field.parse_text(cell)?);
    }
    Ok(inputs)
}
