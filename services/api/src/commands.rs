use crate::infra::{load_service, parse_assignment};
use clap::Args;
use radgrade::classification::{
    evaluate_csv, ClassificationService, EvaluationReport, EvaluationRequest, FieldInputs,
    SystemId,
};
use radgrade::error::AppError;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Only list the systems under this category
    #[arg(long)]
    pub(crate) category: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct FieldsArgs {
    /// Classification system identifier (e.g. `qanadli`)
    pub(crate) system: String,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Classification system identifier (e.g. `ctsi`)
    pub(crate) system: String,
    /// Field override as name=value; repeat for several fields. Multi-select values use ';'.
    #[arg(long = "set", value_parser = parse_assignment)]
    pub(crate) set: Vec<(String, String)>,
    /// Print the full report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Classification system identifier applied to every row
    pub(crate) system: String,
    /// CSV file whose header names the system's fields
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Where to write results (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let (_, service) = load_service()?;
    let catalog = service.catalog();

    let categories = match args.category {
        Some(category) => vec![category],
        None => catalog
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    for category in categories {
        let systems = catalog.systems_in(&category);
        println!("{category} ({} systems)", systems.len());
        for system in systems {
            println!("  {:<20} {}", system.id, system.title);
        }
    }

    Ok(())
}

pub(crate) fn run_fields(args: FieldsArgs) -> Result<(), AppError> {
    let (_, service) = load_service()?;
    let detail = service.describe(&SystemId(args.system))?;

    println!("{} [{}]", detail.title, detail.id);
    println!("{}", detail.description);
    for field in detail.fields {
        println!(
            "  {:<32} {} ({}; default {})",
            field.name,
            field.label,
            field.domain.describe(),
            field.default
        );
    }

    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let (_, service) = load_service()?;
    let id = SystemId(args.system);
    let inputs = parse_overrides(&service, &id, &args.set)?;

    let report = service.evaluate(
        &id,
        EvaluationRequest {
            inputs,
            use_defaults: true,
        },
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let (_, service) = load_service()?;
    let definition = service.catalog().lookup(&SystemId(args.system))?;

    let reader = BufReader::new(File::open(&args.input)?);
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let summary = evaluate_csv(definition, reader, writer)?;
    eprintln!(
        "{}: {} rows evaluated, {} rejected",
        definition.title(),
        summary.evaluated,
        summary.rejected
    );
    Ok(())
}

/// Turn textual `name=value` overrides into typed inputs for `id`.
pub(crate) fn parse_overrides(
    service: &ClassificationService,
    id: &SystemId,
    assignments: &[(String, String)],
) -> Result<FieldInputs, AppError> {
    let definition = service.catalog().lookup(id)?;
    let mut inputs = FieldInputs::new();

    for (name, raw) in assignments {
        let field = definition
            .field(name)
            .ok_or_else(|| AppError::Input(format!("{id} has no field '{name}'")))?;
        let value = field
            .parse_text(raw)
            .map_err(|err| AppError::Input(err.to_string()))?;
        inputs.insert(name.clone(), value);
    }

    Ok(inputs)
}

pub(crate) fn render_report(report: &EvaluationReport) {
    let assessment = &report.assessment;
    println!("{} [{}]", report.system.title, report.system.id);
    println!("  Result:         {}", assessment.label);
    println!("  Interpretation: {}", assessment.interpretation);
    println!("  Recommendation: {}", assessment.recommendation);

    if let Some(total) = assessment.total_points() {
        println!("  Points ({total}):");
        for component in &assessment.components {
            println!(
                "    {:>+3}  {:<30} {}",
                component.points, component.field, component.notes
            );
        }
    }

    println!("  Note: {}", report.disclaimer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use radgrade::classification::{Catalog, FieldValue};
    use radgrade::config::ReportingConfig;
    use std::sync::Arc;

    fn service() -> ClassificationService {
        ClassificationService::new(
            Arc::new(Catalog::standard().expect("built-in catalog builds")),
            ReportingConfig::default(),
        )
    }

    fn assignment(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn overrides_are_typed_by_field_domain() {
        let inputs = parse_overrides(
            &service(),
            &SystemId::from("ctsi"),
            &[
                assignment("balthazar_grade", "D"),
                assignment("necrosis_percent", "40"),
            ],
        )
        .expect("valid overrides");

        assert_eq!(inputs["balthazar_grade"], FieldValue::choice("D"));
        assert_eq!(inputs["necrosis_percent"], FieldValue::Decimal(40.0));
    }

    #[test]
    fn unknown_override_field_is_an_input_error() {
        let error = parse_overrides(
            &service(),
            &SystemId::from("ctsi"),
            &[assignment("size_cm", "4")],
        )
        .expect_err("ctsi has no size");
        assert!(matches!(error, AppError::Input(message) if message.contains("size_cm")));
    }

    #[test]
    fn out_of_domain_override_is_an_input_error() {
        let error = parse_overrides(
            &service(),
            &SystemId::from("qanadli"),
            &[assignment("partial_occlusions", "30")],
        )
        .expect_err("30 exceeds the domain");
        assert!(matches!(error, AppError::Input(_)));
    }

    #[test]
    fn unknown_system_is_reported() {
        let error = parse_overrides(&service(), &SystemId::from("nope"), &[])
            .expect_err("not registered");
        assert!(matches!(error, AppError::Catalog(_)));
    }
}
