use super::common::*;

use crate::classification::domain::{DomainError, FieldValue, SystemId};
use crate::classification::{EvaluationError, ValidationError};

#[test]
fn qanadli_scores_partial_and_complete_occlusions() {
    let assessment = qanadli(3, 5);

    assert_eq!(assessment.label, "13/40");
    assert!(assessment.interpretation.contains("moderate"));
    assert_eq!(assessment.total_points(), Some(13));
}

#[test]
fn qanadli_boundaries_are_monotonic() {
    assert_eq!(qanadli(0, 0).label, "0/40");
    assert!(qanadli(0, 0).interpretation.starts_with("none"));
    assert_eq!(qanadli(1, 0).label, "1/40");
    assert!(qanadli(1, 0).interpretation.starts_with("mild"));
    assert_eq!(qanadli(20, 0).label, "20/40");
    assert_eq!(qanadli(0, 20).label, "40/40");
    assert!(qanadli(0, 20).interpretation.starts_with("severe"));
}

#[test]
fn qanadli_band_cutoffs_resolve_upwards() {
    assert!(qanadli(10, 0).interpretation.starts_with("mild"));
    assert!(qanadli(11, 0).interpretation.starts_with("moderate"));
    assert!(qanadli(20, 0).interpretation.starts_with("moderate"));
    assert!(qanadli(1, 10).interpretation.starts_with("severe"));
}

#[test]
fn qanadli_caps_at_forty_and_records_the_adjustment() {
    let assessment = qanadli(20, 20);

    assert_eq!(assessment.label, "40/40");
    assert_eq!(assessment.total_points(), Some(40));
    let cap = assessment
        .components
        .iter()
        .find(|component| component.field == "segment_limit")
        .expect("cap recorded");
    assert_eq!(cap.points, -20);
}

#[test]
fn tlics_burst_with_disrupted_plc_and_incomplete_deficit_is_operative() {
    let assessment = assess(
        "tlics",
        &[
            ("morphology", choice("Burst")),
            ("posterior_ligamentous_complex", choice("Disrupted")),
            ("neurologic_status", choice("Incomplete deficit")),
        ],
    );

    assert_eq!(assessment.label, "7");
    assert!(assessment.recommendation.contains("surgical consultation"));
    assert_eq!(assessment.components.len(), 3);
}

#[test]
fn tlics_four_points_is_indeterminate() {
    let assessment = assess(
        "tlics",
        &[
            ("morphology", choice("Burst")),
            ("posterior_ligamentous_complex", choice("Indeterminate")),
            ("neurologic_status", choice("Intact")),
        ],
    );

    assert_eq!(assessment.label, "4");
    assert!(assessment.interpretation.contains("indeterminate"));
}

fn spetzler_martin(size: f64, eloquent: &str, deep_venous: &str) -> String {
    assess(
        "spetzler-martin",
        &[
            ("nidus_size_cm", FieldValue::Decimal(size)),
            ("eloquent_cortex", choice(eloquent)),
            ("deep_venous_drainage", choice(deep_venous)),
        ],
    )
    .label
}

#[test]
fn spetzler_martin_medium_eloquent_avm_is_grade_three() {
    assert_eq!(spetzler_martin(4.0, "Yes", "No"), "Grade III");
}

#[test]
fn spetzler_martin_scores_size_only_above_three_centimetres() {
    assert_eq!(spetzler_martin(2.9, "No", "No"), "Grade I");
    assert_eq!(spetzler_martin(3.0, "No", "No"), "Grade I");
    assert_eq!(spetzler_martin(3.1, "No", "No"), "Grade II");
}

#[test]
fn spetzler_martin_large_avm_tops_out_at_grade_four() {
    assert_eq!(spetzler_martin(7.0, "Yes", "Yes"), "Grade IV");
    assert_eq!(spetzler_martin(15.0, "Yes", "Yes"), "Grade IV");

    let assessment = assess(
        "spetzler-martin",
        &[
            ("nidus_size_cm", FieldValue::Decimal(7.0)),
            ("eloquent_cortex", choice("Yes")),
            ("deep_venous_drainage", choice("Yes")),
        ],
    );
    assert_eq!(assessment.total_points(), Some(4));
    assert!(assessment.interpretation.contains("High-grade"));
}

#[test]
fn spetzler_martin_accepts_integer_sizes() {
    let assessment = assess(
        "spetzler-martin",
        &[
            ("nidus_size_cm", FieldValue::Integer(4)),
            ("eloquent_cortex", choice("Yes")),
            ("deep_venous_drainage", choice("No")),
        ],
    );
    assert_eq!(assessment.label, "Grade III");
}

fn birads(shape: &str, margin: &str, calcifications: &str) -> String {
    assess(
        "birads-features",
        &[
            ("shape", choice(shape)),
            ("margin", choice(margin)),
            ("calcifications", choice(calcifications)),
        ],
    )
    .label
}

#[test]
fn birads_irregular_non_circumscribed_mass_is_category_four() {
    assert_eq!(birads("Irregular", "Not-circumscribed", "No"), "BI-RADS 4");
    assert_eq!(birads("Irregular", "Not-circumscribed", "Yes"), "BI-RADS 4");
}

#[test]
fn birads_single_indeterminate_feature_is_category_three() {
    assert_eq!(birads("Irregular", "Circumscribed", "No"), "BI-RADS 3");
    assert_eq!(birads("Oval", "Not-circumscribed", "No"), "BI-RADS 3");
    assert_eq!(birads("Round", "Circumscribed", "Yes"), "BI-RADS 3");
    assert_eq!(birads("Oval", "Circumscribed", "No"), "BI-RADS 2");
}

#[test]
fn ctsi_grade_d_with_forty_percent_necrosis_is_moderate() {
    let assessment = ctsi("D", 40.0);

    assert_eq!(assessment.label, "CTSI 5");
    assert!(assessment.interpretation.contains("moderate"));
}

#[test]
fn ctsi_necrosis_cutoffs_resolve_upwards() {
    assert_eq!(ctsi("A", 0.0).label, "CTSI 0");
    assert_eq!(ctsi("A", 32.9).label, "CTSI 1");
    assert_eq!(ctsi("A", 33.0).label, "CTSI 2");
    assert_eq!(ctsi("A", 49.9).label, "CTSI 2");
    assert_eq!(ctsi("A", 50.0).label, "CTSI 3");
    assert_eq!(ctsi("E", 100.0).label, "CTSI 7");
    assert!(ctsi("E", 100.0).interpretation.contains("severe"));
}

#[test]
fn lights_criteria_cutoffs_are_inclusive() {
    let run = |protein: f64, ldh: f64| {
        assess(
            "lights-criteria",
            &[
                ("protein_ratio", FieldValue::Decimal(protein)),
                ("ldh_ratio", FieldValue::Decimal(ldh)),
            ],
        )
        .label
    };

    assert_eq!(run(0.5, 0.1), "Exudate");
    assert_eq!(run(0.1, 0.6), "Exudate");
    assert_eq!(run(0.49, 0.59), "Transudate");
}

#[test]
fn hunt_hess_applies_most_severe_finding_first() {
    let run = |consciousness: &str, deficit: &str| {
        assess(
            "hunt-hess",
            &[
                ("consciousness", choice(consciousness)),
                ("headache", choice("None or mild")),
                ("nuchal_rigidity", FieldValue::Flag(false)),
                ("focal_deficit", choice(deficit)),
            ],
        )
        .label
    };

    assert_eq!(run("Deep coma", "None"), "Grade V");
    assert_eq!(run("Alert", "Moderate to severe hemiparesis"), "Grade IV");
    assert_eq!(run("Drowsy or confused", "Cranial nerve palsy"), "Grade III");
    assert_eq!(run("Alert", "Cranial nerve palsy"), "Grade II");
    assert_eq!(run("Alert", "None"), "Grade I");
}

#[test]
fn tnm_label_carries_components_and_stage_group() {
    let assessment = assess(
        "tnm-head-neck",
        &[
            ("t_stage", FieldValue::Integer(2)),
            ("n_stage", FieldValue::Integer(0)),
            ("m_stage", choice("0")),
        ],
    );
    assert_eq!(assessment.label, "T2 N0 M0 (Stage II)");
}

#[test]
fn lirads_requires_aphe_and_washout_for_lr4() {
    let run = |features: &[&str]| {
        assess(
            "li-rads",
            &[("features", FieldValue::selection(features.iter().copied()))],
        )
        .label
    };

    assert_eq!(run(&["Arterial Phase Hyperenhancement", "Washout"]), "LR-4");
    assert_eq!(run(&["Washout"]), "LR-3");
    assert_eq!(run(&[]), "LR-2");
}

#[test]
fn lookup_systems_return_the_row_for_the_selected_option() {
    let assessment = assess("bosniak", &[("category", choice("IIF"))]);
    assert_eq!(assessment.label, "Bosniak IIF");
    assert!(assessment.components.is_empty());
    assert_eq!(assessment.total_points(), None);
}

#[test]
fn evaluation_is_deterministic() {
    let first = ctsi("D", 40.0);
    let second = ctsi("D", 40.0);
    assert_eq!(first, second);
}

#[test]
fn unknown_option_is_rejected_without_assessment() {
    let error = evaluate("bosniak", &[("category", choice("V"))]).expect_err("V is not a Bosniak category");

    match error {
        EvaluationError::Validation(ValidationError::Domain(DomainError::UnknownOption {
            field,
            value,
        })) => {
            assert_eq!(field, "category");
            assert_eq!(value, "V");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn out_of_range_count_is_rejected() {
    let error = evaluate(
        "qanadli",
        &[
            ("partial_occlusions", FieldValue::Integer(21)),
            ("complete_occlusions", FieldValue::Integer(0)),
        ],
    )
    .expect_err("21 segments exceeds the domain");
    assert!(matches!(
        error,
        EvaluationError::Validation(ValidationError::Domain(DomainError::OutOfRange { .. }))
    ));
}

#[test]
fn non_finite_decimal_is_rejected() {
    let error = evaluate(
        "ctsi",
        &[
            ("balthazar_grade", choice("A")),
            ("necrosis_percent", FieldValue::Decimal(f64::NAN)),
        ],
    )
    .expect_err("NaN is outside every range");
    assert!(matches!(
        error,
        EvaluationError::Validation(ValidationError::Domain(DomainError::OutOfRange { .. }))
    ));
}

#[test]
fn wrong_value_kind_is_rejected() {
    let error = evaluate(
        "qanadli",
        &[
            ("partial_occlusions", choice("three")),
            ("complete_occlusions", FieldValue::Integer(0)),
        ],
    )
    .expect_err("counts are integers");
    match error {
        EvaluationError::Validation(ValidationError::Domain(DomainError::KindMismatch {
            field,
            expected,
            found,
        })) => {
            assert_eq!(field, "partial_occlusions");
            assert_eq!(expected, "bounded_int");
            assert_eq!(found, "choice");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_and_unexpected_fields_are_rejected() {
    let missing = evaluate("qanadli", &[("partial_occlusions", FieldValue::Integer(1))])
        .expect_err("complete count missing");
    assert_eq!(
        missing,
        EvaluationError::Validation(ValidationError::MissingField {
            field: "complete_occlusions".to_string()
        })
    );

    let unexpected = evaluate(
        "bosniak",
        &[("category", choice("I")), ("size_cm", FieldValue::Decimal(2.0))],
    )
    .expect_err("bosniak has no size field");
    assert_eq!(
        unexpected,
        EvaluationError::Validation(ValidationError::UnexpectedField {
            field: "size_cm".to_string()
        })
    );
}

#[test]
fn unknown_selection_member_is_rejected() {
    let error = evaluate(
        "pi-rads",
        &[("findings", FieldValue::selection(["Restricted diffusion", "Halo sign"]))],
    )
    .expect_err("unknown finding");
    assert_eq!(
        error,
        EvaluationError::Validation(ValidationError::Domain(DomainError::UnknownOption {
            field: "findings".to_string(),
            value: "Halo sign".to_string(),
        }))
    );
}

#[test]
fn defaults_are_in_domain_and_evaluate() {
    let definition = catalog()
        .lookup(&SystemId::from("lights-criteria"))
        .expect("registered");
    let assessment = definition
        .evaluate(&definition.default_inputs())
        .expect("defaults are valid");
    assert_eq!(assessment.label, "Exudate");
}

#[test]
fn text_inputs_parse_per_field_kind() {
    let definition = catalog()
        .lookup(&SystemId::from("hunt-hess"))
        .expect("registered");
    let rigidity = definition.field("nuchal_rigidity").expect("declared");
    assert_eq!(rigidity.parse_text(" yes ").expect("parses"), FieldValue::Flag(true));
    assert!(rigidity.parse_text("maybe").is_err());

    let lirads = catalog().lookup(&SystemId::from("li-rads")).expect("registered");
    let features = lirads.field("features").expect("declared");
    assert_eq!(
        features
            .parse_text("Washout; Capsule Appearance")
            .expect("parses"),
        FieldValue::selection(["Washout", "Capsule Appearance"])
    );

    let qanadli = catalog().lookup(&SystemId::from("qanadli")).expect("registered");
    let partial = qanadli.field("partial_occlusions").expect("declared");
    assert!(matches!(
        partial.parse_text("3.5"),
        Err(DomainError::Unparseable { .. })
    ));
}
