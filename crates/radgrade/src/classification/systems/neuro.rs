use super::super::domain::{Assessment, FieldSchema, ScoreComponent};
use super::super::evaluation::{
    band_for, roman, ClassificationDefinition, DefinitionError, FieldValues, LookupTable, Rule,
    ScoreBand, ValidationError,
};
use super::{lookup_system, NEURO};

const CONSCIOUSNESS: &[&str] = &["Alert", "Drowsy or confused", "Stupor", "Deep coma"];
const HEADACHE: &[&str] = &["None or mild", "Moderate to severe"];
const FOCAL_DEFICIT: &[&str] = &[
    "None",
    "Cranial nerve palsy",
    "Mild focal deficit",
    "Moderate to severe hemiparesis",
];

const HUNT_HESS_GRADES: [(&str, &str); 5] = [
    (
        "Asymptomatic or minimal headache with slight nuchal rigidity; lowest expected mortality.",
        "Early aneurysm securing and routine neurocritical care monitoring.",
    ),
    (
        "Moderate to severe headache or nuchal rigidity, no deficit beyond cranial nerve palsy.",
        "Early aneurysm securing; monitor for vasospasm and hydrocephalus.",
    ),
    (
        "Drowsiness, confusion, or mild focal deficit.",
        "Neurocritical care admission; early intervention with close vasospasm surveillance.",
    ),
    (
        "Stupor, moderate to severe hemiparesis, possible early decerebrate rigidity.",
        "Aggressive resuscitation; consider ventricular drainage before definitive treatment.",
    ),
    (
        "Deep coma, decerebrate rigidity, moribund appearance; highest expected mortality.",
        "Goals-of-care discussion; treatment individualised to response to resuscitation.",
    ),
];

/// Overlapping findings resolve in priority order, most severe first.
fn hunt_hess(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let consciousness = values.choice("consciousness")?;
    let headache = values.choice("headache")?;
    let nuchal_rigidity = values.flag("nuchal_rigidity")?;
    let deficit = values.choice("focal_deficit")?;

    let grade = if consciousness == "Deep coma" {
        5
    } else if consciousness == "Stupor" || deficit == "Moderate to severe hemiparesis" {
        4
    } else if consciousness == "Drowsy or confused" || deficit == "Mild focal deficit" {
        3
    } else if headache == "Moderate to severe" || nuchal_rigidity || deficit == "Cranial nerve palsy"
    {
        2
    } else {
        1
    };

    let (interpretation, recommendation) = HUNT_HESS_GRADES[grade - 1];
    Ok(Assessment::new(
        format!("Grade {}", roman(grade as i64)),
        interpretation,
        recommendation,
    ))
}

const SAH_THICKNESS: &[&str] = &[
    "None detected",
    "Diffuse thin (<1 mm)",
    "Localized clot or thick layer (>1 mm)",
];

fn fisher(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let thickness = values.choice("sah_thickness")?;
    let parenchymal = values.flag("intracerebral_or_intraventricular")?;

    let (grade, interpretation, recommendation) = if parenchymal {
        (
            4,
            "Intracerebral or intraventricular clot with diffuse or no subarachnoid blood.",
            "Monitor for hydrocephalus; consider external ventricular drain.",
        )
    } else if thickness == "Localized clot or thick layer (>1 mm)" {
        (
            3,
            "Localized clot or thick layer of subarachnoid blood; highest vasospasm risk.",
            "Daily transcranial Doppler and low threshold for CTA/DSA for vasospasm.",
        )
    } else if thickness == "Diffuse thin (<1 mm)" {
        (
            2,
            "Diffuse thin layer of subarachnoid blood.",
            "Routine vasospasm surveillance.",
        )
    } else {
        (
            1,
            "No subarachnoid blood detected on CT.",
            "Consider lumbar puncture if clinical suspicion persists.",
        )
    };

    Ok(Assessment::new(
        format!("Fisher Grade {grade}"),
        interpretation,
        recommendation,
    ))
}

const YES_NO: &[&str] = &["Yes", "No"];

const SPETZLER_MARTIN_SIZE_CUTOFF_CM: f64 = 3.0;

/// Base grade 1, plus one point each for a nidus over 3 cm, eloquent cortex,
/// and deep venous drainage (grades I to IV).
fn spetzler_martin(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let size = values.decimal("nidus_size_cm")?;
    let eloquent = values.choice("eloquent_cortex")? == "Yes";
    let deep = values.choice("deep_venous_drainage")? == "Yes";

    let large = size > SPETZLER_MARTIN_SIZE_CUTOFF_CM;
    let size_note = if large { "over 3 cm" } else { "3 cm or less" };

    let components = vec![
        ScoreComponent::new("base", 1, "base grade"),
        ScoreComponent::new(
            "nidus_size_cm",
            i32::from(large),
            format!("{size:.1} cm nidus, {size_note}"),
        ),
        ScoreComponent::new(
            "eloquent_cortex",
            i32::from(eloquent),
            if eloquent { "eloquent cortex involved" } else { "non-eloquent location" },
        ),
        ScoreComponent::new(
            "deep_venous_drainage",
            i32::from(deep),
            if deep { "deep venous drainage" } else { "superficial drainage only" },
        ),
    ];
    let grade: i32 = components.iter().map(|component| component.points).sum();

    let (interpretation, recommendation) = match grade {
        1 | 2 => (
            "Low-grade AVM with low surgical morbidity.",
            "Microsurgical resection is generally favoured.",
        ),
        3 => (
            "Intermediate-grade AVM; risk depends on the component features.",
            "Multidisciplinary review for surgery, radiosurgery, or embolization.",
        ),
        _ => (
            "High-grade AVM with high treatment morbidity.",
            "Conservative management or multimodal therapy after multidisciplinary review.",
        ),
    };

    Ok(Assessment::new(
        format!("Grade {}", roman(i64::from(grade))),
        interpretation,
        recommendation,
    )
    .with_components(components))
}

const TLICS_BANDS: &[ScoreBand] = &[
    ScoreBand {
        floor: 0,
        name: "nonoperative",
        interpretation: "Stable injury pattern.",
        recommendation: "Nonoperative management with bracing and follow-up imaging.",
    },
    ScoreBand {
        floor: 4,
        name: "indeterminate",
        interpretation: "Indeterminate stability.",
        recommendation: "Operative or nonoperative management per surgeon judgement.",
    },
    ScoreBand {
        floor: 5,
        name: "operative",
        interpretation: "Unstable injury pattern.",
        recommendation: "Operative management favoured; surgical consultation.",
    },
];

fn tlics(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let morphology = values.choice("morphology")?;
    let plc = values.choice("posterior_ligamentous_complex")?;
    let neuro = values.choice("neurologic_status")?;

    let morphology_points = match morphology {
        "Compression" => 1,
        "Burst" => 2,
        "Translation/Rotation" => 3,
        _ => 4,
    };
    let plc_points = match plc {
        "Intact" => 0,
        "Indeterminate" => 2,
        _ => 3,
    };
    let neuro_points = match neuro {
        "Intact" => 0,
        "Cauda equina syndrome" => 3,
        _ => 2,
    };

    let components = vec![
        ScoreComponent::new("morphology", morphology_points, morphology),
        ScoreComponent::new("posterior_ligamentous_complex", plc_points, plc),
        ScoreComponent::new("neurologic_status", neuro_points, neuro),
    ];
    let total = morphology_points + plc_points + neuro_points;
    let band = band_for(TLICS_BANDS, total);

    Ok(Assessment::new(
        total.to_string(),
        format!("{} ({})", band.interpretation, band.name),
        band.recommendation,
    )
    .with_components(components))
}

pub(super) fn definitions() -> Result<Vec<ClassificationDefinition>, DefinitionError> {
    Ok(vec![
        ClassificationDefinition::new(
            "hunt-hess",
            NEURO,
            "Hunt and Hess (SAH)",
            "Clinical grade of subarachnoid hemorrhage from level of consciousness, headache, meningism, and focal deficit.",
            vec![
                FieldSchema::first_of("consciousness", "Level of consciousness", CONSCIOUSNESS),
                FieldSchema::first_of("headache", "Headache severity", HEADACHE),
                FieldSchema::flag("nuchal_rigidity", "Nuchal rigidity", false),
                FieldSchema::first_of("focal_deficit", "Focal neurologic deficit", FOCAL_DEFICIT),
            ],
            Rule::Computed(hunt_hess),
        )?,
        ClassificationDefinition::new(
            "fisher",
            NEURO,
            "Fisher (SAH)",
            "Amount and distribution of subarachnoid blood on noncontrast head CT.",
            vec![
                FieldSchema::first_of("sah_thickness", "Subarachnoid blood", SAH_THICKNESS),
                FieldSchema::flag(
                    "intracerebral_or_intraventricular",
                    "Intracerebral or intraventricular blood",
                    false,
                ),
            ],
            Rule::Computed(fisher),
        )?,
        ClassificationDefinition::new(
            "spetzler-martin",
            NEURO,
            "Spetzler-Martin (AVMs)",
            "Surgical risk grade of intracranial AVMs from nidus size, eloquence, and venous drainage on DSA or MRI/MRA.",
            vec![
                FieldSchema::decimal("nidus_size_cm", "AVM nidus size (cm)", 0.0, 15.0, 2.0),
                FieldSchema::choice("eloquent_cortex", "Involvement of eloquent cortex?", YES_NO, "No"),
                FieldSchema::choice("deep_venous_drainage", "Deep venous drainage?", YES_NO, "No"),
            ],
            Rule::Computed(spetzler_martin),
        )?,
        lookup_system(
            "who-brain-tumor",
            NEURO,
            "WHO Brain Tumor Grades",
            "Imaging suggests grade through enhancement, necrosis, edema, mass effect, and diffusion restriction; histopathology is definitive.",
            "WHO tumor grade",
            LookupTable::new(
                "grade",
                &[
                    ("I", "WHO Grade I", "Circumscribed, slow-growing lesion, usually without enhancement or edema.", "Surgical resection is often curative; imaging surveillance."),
                    ("II", "WHO Grade II", "Infiltrative low-grade tumor, typically non-enhancing.", "Maximal safe resection and interval MRI surveillance."),
                    ("III", "WHO Grade III", "Anaplastic tumor; may show patchy enhancement and restricted diffusion.", "Resection followed by adjuvant radiotherapy and chemotherapy."),
                    ("IV", "WHO Grade IV", "Highly malignant; ring enhancement, necrosis, and extensive edema.", "Maximal resection with concurrent chemoradiation; perfusion MRI follow-up."),
                ],
            ),
        )?,
        lookup_system(
            "mrs",
            NEURO,
            "Modified Rankin Scale (mRS)",
            "Clinical outcome measure from 0 to 6, often correlated with infarct volume.",
            "mRS score",
            LookupTable::new(
                "score",
                &[
                    ("0", "mRS 0", "No symptoms.", "No specific follow-up beyond secondary prevention."),
                    ("1", "mRS 1", "No significant disability despite symptoms.", "Secondary prevention and routine follow-up."),
                    ("2", "mRS 2", "Slight disability; independent in daily activities.", "Outpatient rehabilitation as needed."),
                    ("3", "mRS 3", "Moderate disability; requires some help but walks unassisted.", "Structured rehabilitation program."),
                    ("4", "mRS 4", "Moderately severe disability; unable to walk or attend to bodily needs unassisted.", "Inpatient rehabilitation and caregiver support."),
                    ("5", "mRS 5", "Severe disability; bedridden and requires constant care.", "Long-term nursing care planning."),
                    ("6", "mRS 6", "Dead.", "None."),
                ],
            ),
        )?,
        lookup_system(
            "ao-spine",
            NEURO,
            "AO Spine (Vertebral Fractures)",
            "Traumatic vertebral injury by morphology, posterior element integrity, and neurologic involvement.",
            "AO fracture type",
            LookupTable::new(
                "type",
                &[
                    ("A", "AO Type A", "Compression injury of the vertebral body with intact tension band.", "Usually nonoperative unless significant kyphosis or neurologic deficit."),
                    ("B", "AO Type B", "Tension band injury (anterior or posterior).", "Surgical stabilisation is usually indicated."),
                    ("C", "AO Type C", "Translation or displacement injury in any direction.", "Unstable; urgent surgical stabilisation."),
                ],
            ),
        )?,
        ClassificationDefinition::new(
            "tlics",
            NEURO,
            "TLICS (Thoracolumbar Injury)",
            "Thoracolumbar Injury Classification and Severity Score from morphology, posterior ligamentous complex, and neurologic status.",
            vec![
                FieldSchema::first_of(
                    "morphology",
                    "Injury morphology",
                    &["Compression", "Burst", "Translation/Rotation", "Distraction"],
                ),
                FieldSchema::first_of(
                    "posterior_ligamentous_complex",
                    "Posterior ligamentous complex",
                    &["Intact", "Indeterminate", "Disrupted"],
                ),
                FieldSchema::first_of(
                    "neurologic_status",
                    "Neurologic status",
                    &[
                        "Intact",
                        "Nerve root involvement",
                        "Incomplete deficit",
                        "Complete deficit",
                        "Cauda equina syndrome",
                    ],
                ),
            ],
            Rule::Computed(tlics),
        )?,
        lookup_system(
            "modic",
            NEURO,
            "Modic (Vertebral Endplate Changes)",
            "MRI T1/T2 signal changes of the vertebral endplates.",
            "Modic type",
            LookupTable::new(
                "type",
                &[
                    ("Type I", "Modic Type I", "T1 hypointense, T2 hyperintense: edema and inflammation.", "Correlate with back pain; associated with active degeneration."),
                    ("Type II", "Modic Type II", "T1 and T2 hyperintense: fatty marrow replacement.", "Chronic, stable change; conservative management."),
                    ("Type III", "Modic Type III", "T1 and T2 hypointense: subchondral sclerosis.", "End-stage change; correlate with radiographs."),
                ],
            ),
        )?,
        lookup_system(
            "pfirrmann",
            NEURO,
            "Pfirrmann (Disc Degeneration)",
            "T2-weighted disc signal, height, and nucleus/annulus distinction; grades I to V indicate progressive degeneration.",
            "Pfirrmann grade",
            LookupTable::new(
                "grade",
                &[
                    ("I", "Pfirrmann Grade I", "Homogeneous bright disc with normal height.", "Normal disc."),
                    ("II", "Pfirrmann Grade II", "Inhomogeneous bright disc with horizontal bands; normal height.", "Mild change; no specific action."),
                    ("III", "Pfirrmann Grade III", "Intermediate signal, unclear nucleus/annulus distinction, slightly reduced height.", "Moderate degeneration; correlate clinically."),
                    ("IV", "Pfirrmann Grade IV", "Hypointense disc, lost nucleus/annulus distinction, moderately reduced height.", "Advanced degeneration; conservative or interventional pain management."),
                    ("V", "Pfirrmann Grade V", "Black disc with collapsed disc space.", "End-stage degeneration; surgical opinion if refractory symptoms."),
                ],
            ),
        )?,
    ])
}
