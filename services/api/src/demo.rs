use crate::commands::render_report;
use crate::infra::load_service;
use chrono::Local;
use clap::Args;
use radgrade::classification::{EvaluationReport, EvaluationRequest, FieldInputs, FieldValue, SystemId};
use radgrade::error::AppError;
use serde::Serialize;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the scenario reports as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

struct Scenario {
    name: &'static str,
    system: &'static str,
    inputs: Vec<(&'static str, FieldValue)>,
}

#[derive(Serialize)]
struct ScenarioOutcome<'a> {
    scenario: &'a str,
    report: EvaluationReport,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Segmental pulmonary embolism",
            system: "qanadli",
            inputs: vec![
                ("partial_occlusions", FieldValue::Integer(3)),
                ("complete_occlusions", FieldValue::Integer(5)),
            ],
        },
        Scenario {
            name: "Thoracolumbar burst fracture",
            system: "tlics",
            inputs: vec![
                ("morphology", FieldValue::choice("Burst")),
                ("posterior_ligamentous_complex", FieldValue::choice("Disrupted")),
                ("neurologic_status", FieldValue::choice("Incomplete deficit")),
            ],
        },
        Scenario {
            name: "Arteriovenous malformation",
            system: "spetzler-martin",
            inputs: vec![
                ("nidus_size_cm", FieldValue::Decimal(4.0)),
                ("eloquent_cortex", FieldValue::choice("Yes")),
                ("deep_venous_drainage", FieldValue::choice("No")),
            ],
        },
        Scenario {
            name: "Irregular breast mass",
            system: "birads-features",
            inputs: vec![
                ("shape", FieldValue::choice("Irregular")),
                ("margin", FieldValue::choice("Not-circumscribed")),
                ("calcifications", FieldValue::choice("No")),
            ],
        },
        Scenario {
            name: "Necrotizing pancreatitis",
            system: "ctsi",
            inputs: vec![
                ("balthazar_grade", FieldValue::choice("D")),
                ("necrosis_percent", FieldValue::Decimal(40.0)),
            ],
        },
    ]
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let (_, service) = load_service()?;

    let mut outcomes = Vec::new();
    for scenario in scenarios() {
        let inputs: FieldInputs = scenario
            .inputs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        let report = service.evaluate(
            &SystemId::from(scenario.system),
            EvaluationRequest {
                inputs,
                use_defaults: false,
            },
        )?;
        outcomes.push(ScenarioOutcome {
            scenario: scenario.name,
            report,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    println!(
        "Radiologic classification demo ({})",
        Local::now().format("%Y-%m-%d %H:%M")
    );
    for outcome in &outcomes {
        println!("\n== {} ==", outcome.scenario);
        render_report(&outcome.report);
    }
    Ok(())
}
